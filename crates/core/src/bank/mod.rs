//! Exchange-rate oracle and reduction entry point.
//!
//! The [`Bank`] owns the only mutable state in the system: its rate table.
//! All recursive structure lives in the expression variants; the bank just
//! answers `rate(from, to)` and hands itself to `Expr::reduce`.

mod rates;
mod shared;

use moneta_shared::config::BankConfig;
use moneta_shared::{Currency, Money, MoneyError, MoneyResult};
use tracing::{debug, warn};

use crate::expression::Expr;

pub use rates::RateTable;
pub use shared::SharedBank;

/// Holds directional exchange rates and reduces expressions.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: RateTable,
}

impl Bank {
    /// Creates a bank with no registered rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bank from configured rates, validating every entry.
    pub fn from_config(config: &BankConfig) -> MoneyResult<Self> {
        let mut bank = Self::new();
        for entry in &config.rates {
            let from = Currency::new(&entry.from)?;
            let to = Currency::new(&entry.to)?;
            bank.add_rate(from, to, entry.rate)?;
        }
        debug!(rates = bank.len(), "bank loaded from configuration");
        Ok(bank)
    }

    /// Registers or overwrites the rate for `(from, to)`: 1 `to` = `rate` `from`.
    ///
    /// No inverse rate is derived. Identity pairs are validated but not stored,
    /// since `rate(X, X)` is always 1.
    pub fn add_rate(&mut self, from: Currency, to: Currency, rate: i64) -> MoneyResult<()> {
        if from == to {
            if rate <= 0 {
                return Err(MoneyError::InvalidRate { from, to, rate });
            }
            debug!(%from, rate, "ignoring identity rate");
            return Ok(());
        }

        if let Some(previous) = self.rates.insert(from, to, rate)? {
            debug!(%from, %to, previous, rate, "exchange rate replaced");
        } else {
            debug!(%from, %to, rate, "exchange rate registered");
        }
        Ok(())
    }

    /// Returns the rate for `(from, to)`.
    ///
    /// Identical currencies short-circuit to 1 without consulting the table.
    pub fn rate(&self, from: Currency, to: Currency) -> MoneyResult<i64> {
        if from == to {
            return Ok(1);
        }
        self.rates.get(from, to).ok_or_else(|| {
            warn!(%from, %to, "no exchange rate registered");
            MoneyError::UnknownRate { from, to }
        })
    }

    /// Returns true if a rate is registered for the exact pair.
    #[must_use]
    pub fn has_rate(&self, from: Currency, to: Currency) -> bool {
        self.rates.get(from, to).is_some()
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no pair is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates the registered `(from, to, rate)` entries.
    pub fn rates(&self) -> impl Iterator<Item = (Currency, Currency, i64)> + '_ {
        self.rates.iter()
    }

    /// Reduces `expression` to a single amount in `to`.
    pub fn reduce<E: Expr>(&self, expression: &E, to: Currency) -> MoneyResult<Money> {
        let result = expression.reduce(self, to);
        if let Ok(money) = &result {
            debug!(%money, "expression reduced");
        }
        result
    }
}
