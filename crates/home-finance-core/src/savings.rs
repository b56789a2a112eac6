//! Monthly-compounded savings accumulation.
//!
//! A contribution series is compounded under a per-year annual rate series:
//! each month the balance grows by `annual_rate / 12` and the month's
//! contribution is added. The source's scalar-or-sequence inputs are replaced
//! by the explicit broadcast constructors below.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::MONTHS_PER_YEAR;
use crate::error::HomeFinanceError;
use crate::types::{Money, Rate, SavingsSeries};
use crate::HomeFinanceResult;

/// Policy for contribution months where more is withdrawn than deposited.
///
/// A negative contribution models a month in which the saver draws the
/// account down (rent-vs-buy uses this when rent exceeds the hypothetical
/// mortgage payment). `Reject` treats any negative month as infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeContributions {
    Allow,
    Reject,
}

/// Broadcast a level monthly contribution over a whole-year horizon.
pub fn level_contributions(amount: Money, years: u32) -> Vec<Money> {
    vec![amount; (years * MONTHS_PER_YEAR) as usize]
}

/// Broadcast a level annual rate over a whole-year horizon.
pub fn level_rates(rate: Rate, years: u32) -> Vec<Rate> {
    vec![rate; years as usize]
}

/// Compound a monthly contribution series under a per-year rate series.
///
/// `contributions` must hold exactly 12 entries per rate year. The result
/// starts at zero and has `contributions.len() + 1` entries:
/// `balance[i] = balance[i-1] * (1 + rate_year/12) + contributions[i-1]`.
pub fn accumulate(
    contributions: &[Money],
    annual_rates: &[Rate],
    negative_contributions: NegativeContributions,
) -> HomeFinanceResult<SavingsSeries> {
    let expected = annual_rates.len() * MONTHS_PER_YEAR as usize;
    if contributions.len() != expected {
        return Err(HomeFinanceError::InvalidInput {
            field: "contributions".into(),
            reason: format!(
                "expected {} monthly entries for {} rate years, got {}",
                expected,
                annual_rates.len(),
                contributions.len()
            ),
        });
    }

    if negative_contributions == NegativeContributions::Reject {
        if let Some(month) = contributions.iter().position(|c| *c < Decimal::ZERO) {
            return Err(HomeFinanceError::InfeasibleScenario(format!(
                "contribution for month {} is negative ({})",
                month + 1,
                contributions[month]
            )));
        }
    }

    let mut balances = Vec::with_capacity(contributions.len() + 1);
    balances.push(Decimal::ZERO);

    let mut month = 0usize;
    for rate in annual_rates {
        let growth = Decimal::ONE + *rate / dec!(12);
        for _ in 0..MONTHS_PER_YEAR {
            let prev = *balances.last().expect("series is seeded with zero");
            balances.push(prev * growth + contributions[month]);
            month += 1;
        }
    }

    Ok(SavingsSeries { balances })
}
