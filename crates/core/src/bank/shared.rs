//! Thread-safe handle to one bank.

use std::sync::{Arc, RwLock};

use moneta_shared::{Currency, Money, MoneyError, MoneyResult};

use super::Bank;
use crate::expression::Expr;

/// Cloneable handle that serializes rate registration against lookups.
///
/// Writers take the lock exclusively. A reduction holds the read lock for its
/// whole duration, so it sees one consistent rate table.
#[derive(Debug, Clone, Default)]
pub struct SharedBank {
    inner: Arc<RwLock<Bank>>,
}

impl SharedBank {
    /// Wraps an existing bank.
    #[must_use]
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(RwLock::new(bank)),
        }
    }

    /// See [`Bank::add_rate`].
    pub fn add_rate(&self, from: Currency, to: Currency, rate: i64) -> MoneyResult<()> {
        self.inner
            .write()
            .map_err(|_| MoneyError::LockPoisoned)?
            .add_rate(from, to, rate)
    }

    /// See [`Bank::rate`].
    pub fn rate(&self, from: Currency, to: Currency) -> MoneyResult<i64> {
        self.inner
            .read()
            .map_err(|_| MoneyError::LockPoisoned)?
            .rate(from, to)
    }

    /// See [`Bank::reduce`].
    pub fn reduce<E: Expr>(&self, expression: &E, to: Currency) -> MoneyResult<Money> {
        self.inner
            .read()
            .map_err(|_| MoneyError::LockPoisoned)?
            .reduce(expression, to)
    }

    /// Copies the current rate table into a standalone bank.
    pub fn snapshot(&self) -> MoneyResult<Bank> {
        Ok(self
            .inner
            .read()
            .map_err(|_| MoneyError::LockPoisoned)?
            .clone())
    }
}

impl From<Bank> for SharedBank {
    fn from(bank: Bank) -> Self {
        Self::new(bank)
    }
}
