use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// Schedule rows arrive as an array of objects and render as one row per
/// month. Scenario envelopes render their scalar result fields as a
/// field/value table, with month series condensed to their endpoints.
pub fn print_table(value: &Value) {
    match value {
        Value::Array(arr) => print_rows(arr),
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_fields(result);
                print_envelope_extras(map);
            } else {
                print_fields(value);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", format_cell(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_cell).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_fields(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", format_cell(value));
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_cell(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_extras(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

/// Render a JSON value for a single table cell. Month series are condensed
/// to `first .. last (n entries)`; nested series objects likewise.
fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => condense_series(arr),
        Value::Object(map) => {
            // A SavingsSeries serializes as {"balances": [...]}
            if let Some(Value::Array(balances)) = map.get("balances") {
                condense_series(balances)
            } else {
                serde_json::to_string(value).unwrap_or_default()
            }
        }
    }
}

fn condense_series(arr: &[Value]) -> String {
    match arr {
        [] => "(empty)".to_string(),
        [only] => format_cell(only),
        [first, .., last] if arr.len() > 4 => format!(
            "{} .. {} ({} entries)",
            format_cell(first),
            format_cell(last),
            arr.len()
        ),
        _ => arr.iter().map(|v| format_cell(v)).collect::<Vec<_>>().join(", "),
    }
}
