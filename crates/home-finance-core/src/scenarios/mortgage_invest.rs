//! Short-vs-long repayment term comparison with leftover salary invested.
//!
//! Two schedules are built for the same loan, one per candidate term. Each
//! month the salary not consumed by the scheduled payment goes into savings;
//! once the short-term loan is paid off the full salary is saved. Both
//! savings series run over the long horizon so their endpoints compare.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{build_schedule, MONTHS_PER_YEAR};
use crate::error::HomeFinanceError;
use crate::savings::{accumulate, level_rates, NegativeContributions};
use crate::types::{with_metadata, ComputationOutput, Money, Rate, SavingsSeries};
use crate::HomeFinanceResult;

/// Input parameters for the term comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInvestInput {
    /// Loan principal.
    pub principal: Money,
    /// Monthly salary available for payment plus savings.
    pub monthly_salary: Money,
    /// Annual return on invested savings.
    pub invest_return: Rate,
    /// Annual loan rate, fixed over either term.
    pub loan_rate: Rate,
    /// Shorter candidate repayment term in years.
    pub short_term_years: u32,
    /// Longer candidate repayment term in years.
    pub long_term_years: u32,
}

/// Savings trajectories for both candidate terms, aligned by month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInvestOutput {
    pub short_term: SavingsSeries,
    pub long_term: SavingsSeries,
    pub short_term_final: Money,
    pub long_term_final: Money,
    /// `long_term_final - short_term_final`; positive when stretching the
    /// loan and investing the difference wins.
    pub long_term_advantage: Money,
}

/// Compare repaying over `short_term_years` vs `long_term_years` with the
/// salary remainder invested at `invest_return`.
pub fn mortgage_invest(
    input: &MortgageInvestInput,
) -> HomeFinanceResult<ComputationOutput<MortgageInvestOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.short_term_years == 0 {
        return Err(HomeFinanceError::InvalidInput {
            field: "short_term_years".into(),
            reason: "must be > 0".into(),
        });
    }
    if input.long_term_years < input.short_term_years {
        return Err(HomeFinanceError::InvalidInput {
            field: "long_term_years".into(),
            reason: "must be >= short_term_years".into(),
        });
    }
    if input.monthly_salary <= Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "monthly_salary".into(),
            reason: "must be > 0".into(),
        });
    }

    if input.invest_return < input.loan_rate {
        warnings.push(
            "Investment return is below the loan rate; the longer term cannot come out ahead"
                .into(),
        );
    }
    if input.short_term_years == input.long_term_years {
        warnings.push("Candidate terms are equal; the comparison is degenerate".into());
    }

    let short_contributions = term_contributions(input, input.short_term_years)?;
    let long_contributions = term_contributions(input, input.long_term_years)?;

    let savings_rates = level_rates(input.invest_return, input.long_term_years);
    let short_term = accumulate(
        &short_contributions,
        &savings_rates,
        NegativeContributions::Reject,
    )?;
    let long_term = accumulate(
        &long_contributions,
        &savings_rates,
        NegativeContributions::Reject,
    )?;

    let short_term_final = short_term.final_balance();
    let long_term_final = long_term.final_balance();

    let output = MortgageInvestOutput {
        short_term,
        long_term,
        short_term_final,
        long_term_final,
        long_term_advantage: long_term_final - short_term_final,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Mortgage term comparison (term-preserving amortization, salary remainder invested)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "monthly_salary": input.monthly_salary.to_string(),
            "invest_return": input.invest_return.to_string(),
            "loan_rate": input.loan_rate.to_string(),
            "short_term_years": input.short_term_years,
            "long_term_years": input.long_term_years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Monthly savings contributions for one candidate term, padded with the
/// full salary once the loan is repaid, out to the long horizon.
fn term_contributions(
    input: &MortgageInvestInput,
    term_years: u32,
) -> HomeFinanceResult<Vec<Money>> {
    let schedule = build_schedule(input.principal, &level_rates(input.loan_rate, term_years))?;

    let mut contributions = Vec::with_capacity(
        (input.long_term_years * MONTHS_PER_YEAR) as usize,
    );
    for (index, payment) in schedule.monthly_payments().into_iter().enumerate() {
        let leftover = input.monthly_salary - payment;
        if leftover < Decimal::ZERO {
            return Err(HomeFinanceError::InfeasibleScenario(format!(
                "scheduled payment {:.2} exceeds salary {:.2} in month {} of the {}-year term",
                payment,
                input.monthly_salary,
                index + 1,
                term_years
            )));
        }
        contributions.push(leftover);
    }

    let paid_off_months = (input.long_term_years - term_years) * MONTHS_PER_YEAR;
    contributions.extend(std::iter::repeat(input.monthly_salary).take(paid_off_months as usize));

    Ok(contributions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_input() -> MortgageInvestInput {
        MortgageInvestInput {
            principal: dec!(1000000),
            monthly_salary: dec!(7000),
            invest_return: dec!(0.05),
            loan_rate: dec!(0.026),
            short_term_years: 20,
            long_term_years: 30,
        }
    }

    #[test]
    fn test_series_span_the_long_horizon() {
        let result = mortgage_invest(&base_input()).unwrap().result;
        assert_eq!(result.short_term.balances.len(), 361);
        assert_eq!(result.long_term.balances.len(), 361);
    }

    #[test]
    fn test_higher_return_favors_long_term() {
        let mut input = base_input();
        input.invest_return = dec!(0.08);
        let result = mortgage_invest(&input).unwrap().result;
        assert!(result.long_term_advantage > Decimal::ZERO);
    }

    #[test]
    fn test_payment_exceeding_salary_is_infeasible() {
        let mut input = base_input();
        input.principal = dec!(600000);
        input.monthly_salary = dec!(1000);
        input.short_term_years = 5;
        input.long_term_years = 30;
        let err = mortgage_invest(&input);
        assert!(matches!(
            err,
            Err(HomeFinanceError::InfeasibleScenario(_))
        ));
    }

    #[test]
    fn test_zero_short_term_rejected() {
        let mut input = base_input();
        input.short_term_years = 0;
        assert!(mortgage_invest(&input).is_err());
    }

    #[test]
    fn test_long_shorter_than_short_rejected() {
        let mut input = base_input();
        input.long_term_years = 10;
        assert!(mortgage_invest(&input).is_err());
    }

    #[test]
    fn test_low_return_warning() {
        let mut input = base_input();
        input.invest_return = dec!(0.01);
        let output = mortgage_invest(&input).unwrap();
        assert!(!output.warnings.is_empty());
    }
}
