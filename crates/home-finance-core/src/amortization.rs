//! Loan amortization under fixed or time-varying annual rates.
//!
//! The payment is recomputed each month from the live balance and the months
//! left on the original term, so a rate change adjusts the payment while the
//! repayment horizon stays fixed (term-preserving, not payment-preserving).
//! All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeFinanceError;
use crate::types::{AmortizationSchedule, Money, PaymentBreakdown, Rate, ScheduleRow};
use crate::HomeFinanceResult;

/// Months per schedule year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Compute (1 + annual_rate/12)^months via iterative multiplication
/// (avoids Decimal::powd drift over multi-decade horizons).
pub(crate) fn compound_monthly(annual_rate: Rate, months: u32) -> Decimal {
    let factor = Decimal::ONE + annual_rate / dec!(12);
    let mut result = Decimal::ONE;
    for _ in 0..months {
        result *= factor;
    }
    result
}

/// Split one month's payment on an amortizing loan.
///
/// Standard annuity formula: with monthly rate `r = annual_rate / 12` and
/// growth factor `R = (1 + r)^months_remaining`, the payment is
/// `r * R / (R - 1) * principal`. A zero rate degenerates to straight-line
/// repayment `principal / months_remaining`.
pub fn monthly_payment(
    principal: Money,
    annual_rate: Rate,
    months_remaining: u32,
) -> HomeFinanceResult<PaymentBreakdown> {
    if months_remaining == 0 {
        return Err(HomeFinanceError::InvalidInput {
            field: "months_remaining".into(),
            reason: "must be > 0".into(),
        });
    }
    if principal < Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "principal".into(),
            reason: "must be >= 0".into(),
        });
    }
    if annual_rate < Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "annual_rate".into(),
            reason: "negative rates are not supported".into(),
        });
    }

    let monthly_rate = annual_rate / dec!(12);

    let payment = if monthly_rate.is_zero() {
        principal / Decimal::from(months_remaining)
    } else {
        let growth = compound_monthly(annual_rate, months_remaining);
        let denom = growth - Decimal::ONE;
        if denom.is_zero() {
            return Err(HomeFinanceError::DivisionByZero {
                context: "annuity factor".into(),
            });
        }
        monthly_rate * growth * principal / denom
    };

    let interest_portion = monthly_rate * principal;
    let principal_portion = payment - interest_portion;
    let remaining_debt = principal - principal_portion;

    Ok(PaymentBreakdown {
        payment,
        principal_portion,
        interest_portion,
        remaining_debt,
    })
}

/// Build the full monthly repayment schedule for a loan.
///
/// `annual_rates` carries one rate per year of the term; each applies to all
/// 12 months of that year. The term is `12 * annual_rates.len()` months and
/// the payment is recomputed monthly so the balance clears by end of term
/// even when rates vary year to year. An empty rate slice yields a schedule
/// containing only the initial row.
pub fn build_schedule(
    principal: Money,
    annual_rates: &[Rate],
) -> HomeFinanceResult<AmortizationSchedule> {
    if principal < Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "principal".into(),
            reason: "must be >= 0".into(),
        });
    }
    if let Some(bad) = annual_rates.iter().position(|r| *r < Decimal::ZERO) {
        return Err(HomeFinanceError::InvalidInput {
            field: "annual_rates".into(),
            reason: format!("negative rate at year {bad}"),
        });
    }

    let total_months = MONTHS_PER_YEAR * annual_rates.len() as u32;
    let mut rows = Vec::with_capacity(total_months as usize + 1);
    rows.push(ScheduleRow {
        month: 0,
        payment: Decimal::ZERO,
        principal_portion: Decimal::ZERO,
        interest_portion: Decimal::ZERO,
        remaining_debt: principal,
        cumulative_interest: Decimal::ZERO,
    });

    let mut month = 0u32;
    for rate in annual_rates {
        for _ in 0..MONTHS_PER_YEAR {
            let months_remaining = total_months - month;
            month += 1;

            let prev = *rows.last().expect("schedule always has an initial row");
            let split = monthly_payment(prev.remaining_debt, *rate, months_remaining)?;

            rows.push(ScheduleRow {
                month,
                payment: split.payment,
                principal_portion: split.principal_portion,
                interest_portion: split.interest_portion,
                remaining_debt: split.remaining_debt,
                cumulative_interest: prev.cumulative_interest + split.interest_portion,
            });
        }
    }

    Ok(AmortizationSchedule { rows })
}

/// Headline cost figures for a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_interest: Money,
    pub total_paid: Money,
    /// Interest as a share of total amount paid.
    pub interest_share: Decimal,
}

/// Summarize total interest, total paid and the interest share of a schedule.
pub fn summarize(schedule: &AmortizationSchedule) -> ScheduleSummary {
    let total_interest = schedule.total_interest();
    let total_paid = schedule.total_paid();
    let interest_share = if total_paid.is_zero() {
        Decimal::ZERO
    } else {
        total_interest / total_paid
    };
    ScheduleSummary {
        total_interest,
        total_paid,
        interest_share,
    }
}

/// Annual growth rate at which `principal` reaches `target` after `years`:
/// `(target / principal)^(1/years) - 1`. Used to express a loan's total cost
/// as the break-even appreciation rate of the underlying asset.
pub fn break_even_annual_return(
    principal: Money,
    target: Money,
    years: u32,
) -> HomeFinanceResult<Rate> {
    if principal <= Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "principal".into(),
            reason: "must be > 0".into(),
        });
    }
    if target <= Decimal::ZERO {
        return Err(HomeFinanceError::InvalidInput {
            field: "target".into(),
            reason: "must be > 0".into(),
        });
    }
    if years == 0 {
        return Err(HomeFinanceError::InvalidInput {
            field: "years".into(),
            reason: "must be > 0".into(),
        });
    }

    let exponent = Decimal::ONE / Decimal::from(years);
    Ok((target / principal).powd(exponent) - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_payment_known_loan() {
        // 10k over 12 months at 5.12% p.a.
        let split = monthly_payment(dec!(10000), dec!(0.0512), 12).unwrap();

        // Interest portion is exactly r * principal
        assert_eq!(split.interest_portion, dec!(10000) * dec!(0.0512) / dec!(12));
        // Payment lands between straight-line and straight-line plus full
        // first-month interest
        assert!(split.payment > dec!(856) && split.payment < dec!(858));
        // Identities, up to the last Decimal digit
        let identity = (split.principal_portion + split.interest_portion - split.payment).abs();
        assert!(identity < dec!(0.000000000000001));
        assert_eq!(split.remaining_debt, dec!(10000) - split.principal_portion);
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        let split = monthly_payment(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(split.payment, dec!(100));
        assert_eq!(split.interest_portion, Decimal::ZERO);
        assert_eq!(split.principal_portion, dec!(100));
        assert_eq!(split.remaining_debt, dec!(1100));
    }

    #[test]
    fn test_monthly_payment_final_month_clears_balance() {
        // With one month left the payment must retire the whole balance
        let split = monthly_payment(dec!(5000), dec!(0.04), 1).unwrap();
        assert_eq!(split.remaining_debt.round_dp(10), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_payment_rejects_zero_months() {
        assert!(monthly_payment(dec!(10000), dec!(0.05), 0).is_err());
    }

    #[test]
    fn test_monthly_payment_rejects_negative_rate() {
        assert!(monthly_payment(dec!(10000), dec!(-0.01), 12).is_err());
    }

    #[test]
    fn test_build_schedule_row_zero() {
        let schedule = build_schedule(dec!(100000), &[dec!(0.03)]).unwrap();
        let first = &schedule.rows[0];
        assert_eq!(first.month, 0);
        assert_eq!(first.payment, Decimal::ZERO);
        assert_eq!(first.remaining_debt, dec!(100000));
        assert_eq!(first.cumulative_interest, Decimal::ZERO);
    }

    #[test]
    fn test_build_schedule_empty_rates() {
        let schedule = build_schedule(dec!(100000), &[]).unwrap();
        assert_eq!(schedule.rows.len(), 1);
        assert_eq!(schedule.final_debt(), dec!(100000));
    }

    #[test]
    fn test_build_schedule_is_deterministic() {
        let rates = vec![dec!(0.02), dec!(0.03), dec!(0.025)];
        let a = build_schedule(dec!(250000), &rates).unwrap();
        let b = build_schedule(dec!(250000), &rates).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_schedule_rejects_negative_rate_year() {
        let rates = vec![dec!(0.02), dec!(-0.01)];
        assert!(build_schedule(dec!(250000), &rates).is_err());
    }

    #[test]
    fn test_summarize_totals() {
        let schedule = build_schedule(dec!(120000), &vec![dec!(0.03); 10]).unwrap();
        let summary = summarize(&schedule);
        // total paid = principal + total interest
        assert_eq!(
            summary.total_paid,
            dec!(120000) + summary.total_interest
        );
        assert!(summary.total_interest > Decimal::ZERO);
        assert!(summary.interest_share > Decimal::ZERO && summary.interest_share < Decimal::ONE);
    }

    #[test]
    fn test_break_even_round_trip() {
        // 1M growing to 2M over 10 years, then re-compounded
        let rate = break_even_annual_return(dec!(1000000), dec!(2000000), 10).unwrap();
        let mut value = dec!(1000000);
        for _ in 0..10 {
            value *= Decimal::ONE + rate;
        }
        assert!((value - dec!(2000000)).abs() < dec!(1));
    }

    #[test]
    fn test_compound_monthly_zero_rate() {
        assert_eq!(compound_monthly(Decimal::ZERO, 120), Decimal::ONE);
    }
}
