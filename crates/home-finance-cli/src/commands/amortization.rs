use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use home_finance_core::amortization::{build_schedule, monthly_payment, summarize};
use home_finance_core::savings::level_rates;

use crate::input;

/// Arguments for a single-month payment split
#[derive(Args)]
pub struct PaymentArgs {
    /// Outstanding loan balance
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate (e.g. 0.026 for 2.6%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Months left on the original term
    #[arg(long)]
    pub months_remaining: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Deserialize)]
struct PaymentInput {
    principal: Decimal,
    annual_rate: Decimal,
    months_remaining: u32,
}

/// Arguments for a full amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Level annual interest rate applied to every year of the term
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file with {principal, annual_rates} for
    /// year-by-year variable rates
    #[arg(long)]
    pub input: Option<String>,

    /// Print cost totals instead of the full schedule
    #[arg(long)]
    pub summary: bool,
}

#[derive(Deserialize)]
struct ScheduleInput {
    principal: Decimal,
    annual_rates: Vec<Decimal>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment_input: PaymentInput = match input::typed(&args.input)? {
        Some(parsed) => parsed,
        None => PaymentInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?,
            months_remaining: args
                .months_remaining
                .ok_or("--months-remaining is required (or provide --input)")?,
        },
    };

    let split = monthly_payment(
        payment_input.principal,
        payment_input.annual_rate,
        payment_input.months_remaining,
    )?;
    Ok(serde_json::to_value(split)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = match input::typed(&args.input)? {
        Some(parsed) => parsed,
        None => {
            let rate = args
                .annual_rate
                .ok_or("--annual-rate is required (or provide --input)")?;
            let years = args
                .years
                .ok_or("--years is required (or provide --input)")?;
            ScheduleInput {
                principal: args
                    .principal
                    .ok_or("--principal is required (or provide --input)")?,
                annual_rates: level_rates(rate, years),
            }
        }
    };

    let schedule = build_schedule(schedule_input.principal, &schedule_input.annual_rates)?;

    if args.summary {
        Ok(serde_json::to_value(summarize(&schedule))?)
    } else {
        Ok(serde_json::to_value(schedule.rows)?)
    }
}
