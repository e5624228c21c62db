//! Directional exchange-rate table.

use std::collections::BTreeMap;

use moneta_shared::{Currency, MoneyError, MoneyResult};

/// Maps an ordered `(from, to)` pair to a positive rate.
///
/// A rate `r` for `(from, to)` means 1 unit of `to` = `r` units of `from`.
/// Inverse rates are never derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<(Currency, Currency), i64>,
}

impl RateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a rate, returning the previous one.
    ///
    /// Rejects non-positive rates with [`MoneyError::InvalidRate`].
    pub fn insert(&mut self, from: Currency, to: Currency, rate: i64) -> MoneyResult<Option<i64>> {
        if rate <= 0 {
            return Err(MoneyError::InvalidRate { from, to, rate });
        }
        Ok(self.rates.insert((from, to), rate))
    }

    /// Looks up the registered rate for the exact pair.
    #[must_use]
    pub fn get(&self, from: Currency, to: Currency) -> Option<i64> {
        self.rates.get(&(from, to)).copied()
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

    /// Iterates `(from, to, rate)` in currency order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, Currency, i64)> + '_ {
        self.rates.iter().map(|(&(from, to), &rate)| (from, to, rate))
    }
}
