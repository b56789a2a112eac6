pub mod amortization;
pub mod savings;
pub mod scenarios;
