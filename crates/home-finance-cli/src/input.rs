use serde::de::DeserializeOwned;
use std::io::{self, Read};
use std::path::Path;

/// Load a typed input from `--input <path>` if given, otherwise from piped
/// stdin JSON. Returns None when neither source is present, so the caller
/// falls back to individual flags.
pub fn typed<T: DeserializeOwned>(
    path: &Option<String>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(read_json_file(path)?));
    }
    if let Some(raw) = read_piped_stdin()? {
        return Ok(Some(serde_json::from_str(&raw)?));
    }
    Ok(None)
}

fn read_json_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    if !p.is_file() {
        return Err(format!("Input file not found: {path}").into());
    }
    let contents = std::fs::read_to_string(p)
        .map_err(|e| format!("Failed to read '{path}': {e}"))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{path}': {e}").into())
}

/// Read stdin only when data is actually piped in (stdin is not a TTY).
fn read_piped_stdin() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}
