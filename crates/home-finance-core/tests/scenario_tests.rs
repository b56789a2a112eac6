#![cfg(feature = "scenarios")]

use home_finance_core::scenarios::home_vs_rent::{home_vs_rent, HomeVsRentInput};
use home_finance_core::scenarios::mortgage_invest::{mortgage_invest, MortgageInvestInput};
use home_finance_core::HomeFinanceError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Mortgage-vs-invest
// ===========================================================================

fn invest_input() -> MortgageInvestInput {
    MortgageInvestInput {
        principal: dec!(1000000),
        monthly_salary: dec!(7000),
        invest_return: dec!(0.05),
        loan_rate: dec!(0.026),
        short_term_years: 20,
        long_term_years: 40,
    }
}

#[test]
fn test_equal_terms_produce_identical_series() {
    // Degenerate comparison: both sides run the same 20-year loan
    let mut input = invest_input();
    input.invest_return = dec!(0.026);
    input.long_term_years = 20;

    let output = mortgage_invest(&input).unwrap();
    assert_eq!(output.result.short_term, output.result.long_term);
    assert_eq!(output.result.long_term_advantage, Decimal::ZERO);
    // Degenerate-terms warning is surfaced
    assert!(output.warnings.iter().any(|w| w.contains("equal")));
}

#[test]
fn test_equal_rates_are_term_indifferent() {
    // When the savings rate equals the loan rate the term does not matter:
    // the payment stream's future value is principal * (1+r/12)^N either way
    let mut input = invest_input();
    input.invest_return = dec!(0.026);

    let result = mortgage_invest(&input).unwrap().result;
    let diff = (result.short_term_final - result.long_term_final).abs();
    assert!(diff < dec!(0.01), "final balances differ by {diff}");
}

#[test]
fn test_higher_investment_return_rewards_the_longer_term() {
    let result = mortgage_invest(&invest_input()).unwrap().result;

    assert!(result.long_term_advantage > Decimal::ZERO);
    assert_eq!(result.long_term_final, result.long_term.final_balance());
    // Both series cover the 40-year horizon
    assert_eq!(result.short_term.balances.len(), 481);
    assert_eq!(result.long_term.balances.len(), 481);
}

#[test]
fn test_short_term_contributions_rise_after_payoff() {
    // After month 240 the short-term saver banks the full salary, so the
    // month-to-month increase must exceed the mortgage-period increase
    let result = mortgage_invest(&invest_input()).unwrap().result;
    let before = result.short_term.balances[240] - result.short_term.balances[239];
    let after = result.short_term.balances[242] - result.short_term.balances[241];
    assert!(after > before);
}

#[test]
fn test_unaffordable_term_is_infeasible() {
    let input = MortgageInvestInput {
        principal: dec!(600000),
        monthly_salary: dec!(1000),
        invest_return: dec!(0.05),
        loan_rate: dec!(0.026),
        short_term_years: 5,
        long_term_years: 30,
    };

    match mortgage_invest(&input) {
        Err(HomeFinanceError::InfeasibleScenario(msg)) => {
            assert!(msg.contains("exceeds salary"), "unexpected message: {msg}");
        }
        other => panic!("expected InfeasibleScenario, got {other:?}"),
    }
}

// ===========================================================================
// Home-vs-rent
// ===========================================================================

fn rent_input() -> HomeVsRentInput {
    // 1M home, rent at a 30-year price-to-rent ratio, 15% fixed cost
    HomeVsRentInput {
        years: 30,
        principal: dec!(1000000),
        loan_rate: dec!(0.026),
        home_appreciation_rate: dec!(0.03),
        initial_rent: dec!(2777.78),
        rent_inflation_rate: dec!(0.03),
        invest_return: dec!(0.05),
        fixed_cost_fraction: dec!(0.15),
    }
}

#[test]
fn test_owner_ends_with_the_appreciated_house() {
    let input = rent_input();
    let result = home_vs_rent(&input).unwrap().result;

    // Debt is cleared at term end, so the final net worth is the projected
    // price less the sunk fixed cost
    let growth = Decimal::ONE + dec!(0.03) / dec!(12);
    let mut price = dec!(1000000);
    for _ in 0..360 {
        price *= growth;
    }
    let expected = price - dec!(0.15) * dec!(1000000);
    let diff = (result.home_net_worth[360] - expected).abs();
    assert!(diff < dec!(0.01), "final home net worth off by {diff}");
}

#[test]
fn test_renter_is_ahead_at_the_start() {
    // The buyer starts underwater by the fixed cost; the crossover, when it
    // exists, is strictly after month 0
    let result = home_vs_rent(&rent_input()).unwrap().result;
    assert!(result.home_net_worth[0] < result.rent_net_worth.balances[0]);
    if let Some(month) = result.crossover_month {
        assert!(month > 0);
        let own = result.home_net_worth[month as usize];
        let rented = result.rent_net_worth.balances[month as usize];
        assert!(own >= rented);
    }
}

#[test]
fn test_cumulative_streams_are_running_totals() {
    let result = home_vs_rent(&rent_input()).unwrap().result;

    let mut interest = Decimal::ZERO;
    let mut rent = Decimal::ZERO;
    for month in 0..360usize {
        interest += result.monthly_interest[month];
        rent += result.monthly_rent[month];
        assert_eq!(result.cumulative_interest[month], interest);
        assert_eq!(result.cumulative_rent[month], rent);
    }
}

#[test]
fn test_interest_falls_while_rent_rises() {
    // Amortization shrinks the interest portion; inflation grows the rent,
    // so the streams move in opposite directions over the term
    let result = home_vs_rent(&rent_input()).unwrap().result;
    assert!(result.monthly_interest[359] < result.monthly_interest[0]);
    assert!(result.monthly_rent[359] > result.monthly_rent[0]);
}

#[test]
fn test_expensive_rent_allows_drawdown() {
    let mut input = rent_input();
    input.initial_rent = dec!(12000);
    let result = home_vs_rent(&input).unwrap().result;
    assert!(result.rent_net_worth.final_balance() < Decimal::ZERO);
}

#[test]
fn test_zero_year_horizon_rejected() {
    let mut input = rent_input();
    input.years = 0;
    assert!(matches!(
        home_vs_rent(&input),
        Err(HomeFinanceError::InvalidInput { .. })
    ));
}
