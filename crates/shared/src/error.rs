//! Money error types.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised while building money values, registering rates, or reducing expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// No exchange rate is registered for the currency pair.
    #[error("No exchange rate registered from {from} to {to}")]
    UnknownRate {
        /// Currency the amount is expressed in.
        from: Currency,
        /// Currency the amount should be converted to.
        to: Currency,
    },

    /// Exchange rates must be positive.
    #[error("Invalid exchange rate {rate} from {from} to {to}: rate must be positive")]
    InvalidRate {
        /// Currency the amount is expressed in.
        from: Currency,
        /// Currency the amount should be converted to.
        to: Currency,
        /// The rejected rate.
        rate: i64,
    },

    /// Currency code is empty or malformed.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    /// Integer amount overflowed during reduction.
    #[error("Amount overflow while reducing to {0}")]
    AmountOverflow(Currency),

    /// The lock guarding a shared rate table was poisoned by a panicking writer.
    #[error("Rate table lock poisoned")]
    LockPoisoned,
}

impl MoneyError {
    /// Returns a stable error code for callers that map errors to their own surface.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRate { .. } => "UNKNOWN_RATE",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::AmountOverflow(_) => "AMOUNT_OVERFLOW",
            Self::LockPoisoned => "LOCK_POISONED",
        }
    }
}
