use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5% p.a.). Never as percentages.
pub type Rate = Decimal;

/// Split of a single month's loan payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Total payment for the month.
    pub payment: Money,
    /// Portion reducing the outstanding balance.
    pub principal_portion: Money,
    /// Portion servicing the debt.
    pub interest_portion: Money,
    /// Outstanding balance after the payment.
    pub remaining_debt: Money,
}

/// One row of an amortization schedule. Row 0 is the initial state before
/// any payment: all flows zero, `remaining_debt` equal to the principal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 0-based month index.
    pub month: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_debt: Money,
    /// Running total of interest paid through this month.
    pub cumulative_interest: Money,
}

/// Full repayment schedule for a loan, one row per month plus the initial row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    /// Balance before any payment (row 0).
    pub fn initial_principal(&self) -> Money {
        self.rows.first().map(|r| r.remaining_debt).unwrap_or(Decimal::ZERO)
    }

    /// Balance after the last scheduled payment.
    pub fn final_debt(&self) -> Money {
        self.rows.last().map(|r| r.remaining_debt).unwrap_or(Decimal::ZERO)
    }

    /// Total interest paid over the full schedule.
    pub fn total_interest(&self) -> Money {
        self.rows
            .last()
            .map(|r| r.cumulative_interest)
            .unwrap_or(Decimal::ZERO)
    }

    /// Principal plus total interest.
    pub fn total_paid(&self) -> Money {
        self.initial_principal() + self.total_interest()
    }

    /// Number of payment months (excludes row 0).
    pub fn term_months(&self) -> u32 {
        self.rows.len().saturating_sub(1) as u32
    }

    /// Payments for months 1..=term, in order.
    pub fn monthly_payments(&self) -> Vec<Money> {
        self.rows.iter().skip(1).map(|r| r.payment).collect()
    }
}

/// Accumulated savings balances, one entry per month. Index 0 is always zero
/// (no contribution has been made yet); length is `12 * years + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSeries {
    pub balances: Vec<Money>,
}

impl SavingsSeries {
    pub fn final_balance(&self) -> Money {
        self.balances.last().copied().unwrap_or(Decimal::ZERO)
    }

    /// Number of contribution months covered (excludes the zero seed).
    pub fn months(&self) -> u32 {
        self.balances.len().saturating_sub(1) as u32
    }
}

/// Standard computation output envelope for scenario analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every scenario computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap scenario results with metadata.
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
