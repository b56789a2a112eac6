use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use home_finance_core::savings::{
    accumulate, level_contributions, level_rates, NegativeContributions,
};

use crate::input;

/// Arguments for savings accumulation
#[derive(Args)]
pub struct SavingsArgs {
    /// Level monthly contribution
    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Level annual return (e.g. 0.05 for 5%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Permit drawdown months (negative contributions)
    #[arg(long)]
    pub allow_negative: bool,

    /// Path to JSON input file with {contributions, annual_rates} for
    /// month-by-month contributions and year-by-year rates
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Deserialize)]
struct SavingsInput {
    contributions: Vec<Decimal>,
    annual_rates: Vec<Decimal>,
}

pub fn run_savings(args: SavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let savings_input: SavingsInput = match input::typed(&args.input)? {
        Some(parsed) => parsed,
        None => {
            let contribution = args
                .monthly_contribution
                .ok_or("--monthly-contribution is required (or provide --input)")?;
            let rate = args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?;
            let years = args
                .years
                .ok_or("--years is required (or provide --input)")?;
            SavingsInput {
                contributions: level_contributions(contribution, years),
                annual_rates: level_rates(rate, years),
            }
        }
    };

    let policy = if args.allow_negative {
        NegativeContributions::Allow
    } else {
        NegativeContributions::Reject
    };

    let series = accumulate(
        &savings_input.contributions,
        &savings_input.annual_rates,
        policy,
    )?;

    Ok(serde_json::json!({
        "final_balance": series.final_balance().to_string(),
        "months": series.months(),
        "balances": series.balances.iter().map(|b| b.to_string()).collect::<Vec<_>>(),
    }))
}
