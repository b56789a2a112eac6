use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use home_finance_core::scenarios::home_vs_rent::{self, HomeVsRentInput};
use home_finance_core::scenarios::mortgage_invest::{self, MortgageInvestInput};

use crate::input;

/// Arguments for the mortgage-vs-invest term comparison
#[derive(Args)]
pub struct MortgageInvestArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Monthly salary covering payment plus savings
    #[arg(long)]
    pub monthly_salary: Option<Decimal>,

    /// Annual return on invested savings
    #[arg(long)]
    pub invest_return: Option<Decimal>,

    /// Annual loan rate
    #[arg(long)]
    pub loan_rate: Option<Decimal>,

    /// Shorter candidate term in years
    #[arg(long)]
    pub short_term_years: Option<u32>,

    /// Longer candidate term in years
    #[arg(long)]
    pub long_term_years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the home-vs-rent comparison
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct HomeVsRentArgs {
    /// Loan term and comparison horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// House price, fully financed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual loan rate (HDB concessionary rate by default)
    #[arg(long, default_value = "0.026")]
    pub loan_rate: Decimal,

    /// Annual home appreciation rate
    #[arg(long)]
    pub home_appreciation_rate: Option<Decimal>,

    /// Rent for the first month
    #[arg(long)]
    pub initial_rent: Option<Decimal>,

    /// Annual rent inflation rate
    #[arg(long)]
    pub rent_inflation_rate: Option<Decimal>,

    /// Annual return on the renter's investments
    #[arg(long)]
    pub invest_return: Option<Decimal>,

    /// One-off purchase cost as a fraction of the principal
    #[arg(long, default_value = "0.15")]
    pub fixed_cost_fraction: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_mortgage_invest(args: MortgageInvestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario: MortgageInvestInput = match input::typed(&args.input)? {
        Some(parsed) => parsed,
        None => MortgageInvestInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            monthly_salary: args
                .monthly_salary
                .ok_or("--monthly-salary is required (or provide --input)")?,
            invest_return: args
                .invest_return
                .ok_or("--invest-return is required (or provide --input)")?,
            loan_rate: args
                .loan_rate
                .ok_or("--loan-rate is required (or provide --input)")?,
            short_term_years: args
                .short_term_years
                .ok_or("--short-term-years is required (or provide --input)")?,
            long_term_years: args
                .long_term_years
                .ok_or("--long-term-years is required (or provide --input)")?,
        },
    };

    let result = mortgage_invest::mortgage_invest(&scenario)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_home_vs_rent(args: HomeVsRentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario: HomeVsRentInput = match input::typed(&args.input)? {
        Some(parsed) => parsed,
        None => {
            let principal = args
                .principal
                .ok_or("--principal is required (or provide --input)")?;
            HomeVsRentInput {
                years: args.years.ok_or("--years is required (or provide --input)")?,
                principal,
                loan_rate: args.loan_rate,
                home_appreciation_rate: args
                    .home_appreciation_rate
                    .ok_or("--home-appreciation-rate is required (or provide --input)")?,
                // Default rent follows a 30-year price-to-rent ratio
                initial_rent: args
                    .initial_rent
                    .unwrap_or(principal / dec!(30) / dec!(12)),
                rent_inflation_rate: args
                    .rent_inflation_rate
                    .ok_or("--rent-inflation-rate is required (or provide --input)")?,
                invest_return: args
                    .invest_return
                    .ok_or("--invest-return is required (or provide --input)")?,
                fixed_cost_fraction: args.fixed_cost_fraction,
            }
        }
    };

    let result = home_vs_rent::home_vs_rent(&scenario)?;
    Ok(serde_json::to_value(result)?)
}
