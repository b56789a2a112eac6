pub mod amortization;
pub mod error;
pub mod savings;
pub mod types;

#[cfg(feature = "scenarios")]
pub mod scenarios;

pub use error::HomeFinanceError;
pub use types::*;

/// Standard result type for all home-finance operations
pub type HomeFinanceResult<T> = Result<T, HomeFinanceError>;
