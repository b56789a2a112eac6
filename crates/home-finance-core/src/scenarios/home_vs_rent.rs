//! Net worth from owning a home vs renting and investing the difference.
//!
//! Owning: the house appreciates monthly while the loan amortizes; net worth
//! is projected price minus the sunk fixed cost and the outstanding debt.
//! Renting: rent inflates monthly and the renter invests whatever a mortgage
//! payment would have cost above the rent actually paid. Drawdown months are
//! legal on the renting side, so the accumulator runs with
//! `NegativeContributions::Allow`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::build_schedule;
use crate::error::HomeFinanceError;
use crate::savings::{accumulate, level_rates, NegativeContributions};
use crate::types::{with_metadata, ComputationOutput, Money, Rate, SavingsSeries};
use crate::HomeFinanceResult;

/// Input parameters for the own-vs-rent comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeVsRentInput {
    /// Loan term and comparison horizon in years.
    pub years: u32,
    /// House price, fully financed as the loan principal.
    pub principal: Money,
    /// Annual loan rate.
    pub loan_rate: Rate,
    /// Annual home appreciation rate (may be negative).
    pub home_appreciation_rate: Rate,
    /// Rent for the first month.
    pub initial_rent: Money,
    /// Annual rent inflation rate (may be negative).
    pub rent_inflation_rate: Rate,
    /// Annual return on the renter's investments.
    pub invest_return: Rate,
    /// One-off purchase cost as a fraction of the principal.
    pub fixed_cost_fraction: Decimal,
}

/// Month-aligned series for both sides of the comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeVsRentOutput {
    /// Projected house price minus fixed cost and outstanding debt, months
    /// 0..=12*years.
    pub home_net_worth: Vec<Money>,
    /// Renter's invested savings, months 0..=12*years.
    pub rent_net_worth: SavingsSeries,
    /// Interest portion of each scheduled payment, months 1..=12*years.
    pub monthly_interest: Vec<Money>,
    /// Inflating rent stream, one entry per payment month.
    pub monthly_rent: Vec<Money>,
    /// Running totals of the two unrecoverable cost streams.
    pub cumulative_interest: Vec<Money>,
    pub cumulative_rent: Vec<Money>,
    /// First month at which owning pulls ahead of renting, if any.
    pub crossover_month: Option<u32>,
}

/// Compare net worth from buying a home against renting and investing,
/// over a `years`-long horizon.
pub fn home_vs_rent(
    input: &HomeVsRentInput,
) -> HomeFinanceResult<ComputationOutput<HomeVsRentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.years == 0 {
        return Err(HomeFinanceError::InvalidInput {
            field: "years".into(),
            reason: "must be > 0".into(),
        });
    }
    if input.initial_rent < Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "initial_rent".into(),
            reason: "must be >= 0".into(),
        });
    }

    if input.rent_inflation_rate > input.invest_return {
        warnings.push(
            "Rent inflation outpaces the investment return; renting erodes over long horizons"
                .into(),
        );
    }

    let schedule = build_schedule(input.principal, &level_rates(input.loan_rate, input.years))?;
    let months = schedule.term_months() as usize;
    let fixed_cost = input.fixed_cost_fraction * input.principal;

    // Projected house price and owner's net worth, month 0 included
    let price_growth = Decimal::ONE + input.home_appreciation_rate / dec!(12);
    let mut house_price = input.principal;
    let mut home_net_worth = Vec::with_capacity(months + 1);
    for row in &schedule.rows {
        home_net_worth.push(house_price - fixed_cost - row.remaining_debt);
        house_price *= price_growth;
    }

    // Inflating rent stream and the renter's monthly contribution
    let rent_growth = Decimal::ONE + input.rent_inflation_rate / dec!(12);
    let mut rent = input.initial_rent;
    let mut monthly_rent = Vec::with_capacity(months);
    let mut contributions = Vec::with_capacity(months);
    for payment in schedule.monthly_payments() {
        monthly_rent.push(rent);
        contributions.push(payment - rent);
        rent *= rent_growth;
    }

    let rent_net_worth = accumulate(
        &contributions,
        &level_rates(input.invest_return, input.years),
        NegativeContributions::Allow,
    )?;

    let monthly_interest: Vec<Money> = schedule
        .rows
        .iter()
        .skip(1)
        .map(|r| r.interest_portion)
        .collect();
    let cumulative_interest: Vec<Money> = schedule
        .rows
        .iter()
        .skip(1)
        .map(|r| r.cumulative_interest)
        .collect();

    let mut running_rent = Decimal::ZERO;
    let cumulative_rent: Vec<Money> = monthly_rent
        .iter()
        .map(|r| {
            running_rent += *r;
            running_rent
        })
        .collect();

    let crossover_month = home_net_worth
        .iter()
        .zip(&rent_net_worth.balances)
        .position(|(own, rented)| own >= rented)
        .map(|m| m as u32);

    let output = HomeVsRentOutput {
        home_net_worth,
        rent_net_worth,
        monthly_interest,
        monthly_rent,
        cumulative_interest,
        cumulative_rent,
        crossover_month,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Own-vs-rent net worth comparison (appreciating asset less debt vs invested rent savings)",
        &serde_json::json!({
            "years": input.years,
            "principal": input.principal.to_string(),
            "loan_rate": input.loan_rate.to_string(),
            "home_appreciation_rate": input.home_appreciation_rate.to_string(),
            "initial_rent": input.initial_rent.to_string(),
            "rent_inflation_rate": input.rent_inflation_rate.to_string(),
            "invest_return": input.invest_return.to_string(),
            "fixed_cost_fraction": input.fixed_cost_fraction.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
