use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PaymentRequest {
    principal: Decimal,
    annual_rate: Decimal,
    months_remaining: u32,
}

#[napi]
pub fn amortize_month(input_json: String) -> NapiResult<String> {
    let request: PaymentRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let split = home_finance_core::amortization::monthly_payment(
        request.principal,
        request.annual_rate,
        request.months_remaining,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&split).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct ScheduleRequest {
    principal: Decimal,
    annual_rates: Vec<Decimal>,
}

#[napi]
pub fn amortize_schedule(input_json: String) -> NapiResult<String> {
    let request: ScheduleRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule =
        home_finance_core::amortization::build_schedule(request.principal, &request.annual_rates)
            .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Savings
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SavingsRequest {
    contributions: Vec<Decimal>,
    annual_rates: Vec<Decimal>,
    #[serde(default)]
    allow_negative: bool,
}

#[napi]
pub fn accumulate_savings(input_json: String) -> NapiResult<String> {
    let request: SavingsRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let policy = if request.allow_negative {
        home_finance_core::savings::NegativeContributions::Allow
    } else {
        home_finance_core::savings::NegativeContributions::Reject
    };
    let series = home_finance_core::savings::accumulate(
        &request.contributions,
        &request.annual_rates,
        policy,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&series).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[napi]
pub fn mortgage_invest(input_json: String) -> NapiResult<String> {
    let input: home_finance_core::scenarios::mortgage_invest::MortgageInvestInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = home_finance_core::scenarios::mortgage_invest::mortgage_invest(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn home_vs_rent(input_json: String) -> NapiResult<String> {
    let input: home_finance_core::scenarios::home_vs_rent::HomeVsRentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = home_finance_core::scenarios::home_vs_rent::home_vs_rent(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
