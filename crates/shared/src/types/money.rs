//! Money type with whole-unit amount and currency.
//!
//! Amounts are signed integers; fractional units are not modeled.

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

/// Represents a monetary amount with currency.
///
/// Two values are equal iff both amount and currency are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a Money instance from a raw currency code.
    pub fn parse(amount: i64, currency: &str) -> MoneyResult<Self> {
        Ok(Self::new(amount, Currency::new(currency)?))
    }

    /// US dollars.
    #[must_use]
    pub const fn dollar(amount: i64) -> Self {
        Self::new(amount, Currency::USD)
    }

    /// Swiss francs.
    #[must_use]
    pub const fn franc(amount: i64) -> Self {
        Self::new(amount, Currency::CHF)
    }

    /// Returns the amount in whole units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Multiplies the amount, keeping the currency.
    ///
    /// Fails with [`MoneyError::AmountOverflow`] when the product leaves the
    /// `i64` range.
    pub fn times(self, factor: i64) -> MoneyResult<Self> {
        match self.amount.checked_mul(factor) {
            Some(amount) => Ok(Self::new(amount, self.currency)),
            None => Err(MoneyError::AmountOverflow(self.currency)),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_money_new() {
        let money = Money::new(100, Currency::EUR);
        assert_eq!(money.amount(), 100);
        assert_eq!(money.currency(), Currency::EUR);
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(Money::dollar(1).currency().as_str(), "USD");
        assert_eq!(Money::franc(1).currency().as_str(), "CHF");
    }

    #[test]
    fn test_money_parse() {
        assert_eq!(Money::parse(7, "chf").unwrap(), Money::franc(7));
        assert_eq!(
            Money::parse(7, ""),
            Err(MoneyError::InvalidCurrency(String::new()))
        );
    }

    #[rstest]
    #[case(5, 2, 10)]
    #[case(5, 3, 15)]
    #[case(-4, 3, -12)]
    #[case(9, 0, 0)]
    fn test_money_times(#[case] amount: i64, #[case] factor: i64, #[case] expected: i64) {
        assert_eq!(Money::dollar(amount).times(factor), Ok(Money::dollar(expected)));
        assert_eq!(Money::franc(amount).times(factor), Ok(Money::franc(expected)));
    }

    #[rstest]
    #[case(i64::MAX, 2)]
    #[case(i64::MIN, 2)]
    #[case(i64::MIN, -1)]
    fn test_money_times_overflow(#[case] amount: i64, #[case] factor: i64) {
        assert_eq!(
            Money::franc(amount).times(factor),
            Err(MoneyError::AmountOverflow(Currency::CHF))
        );
    }

    #[test]
    fn test_money_equality() {
        assert_eq!(Money::dollar(5), Money::dollar(5));
        assert_ne!(Money::dollar(5), Money::dollar(6));
        assert_ne!(Money::franc(5), Money::dollar(5));
        assert_ne!(Money::dollar(5), Money::franc(5));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::dollar(5).to_string(), "5 USD");
        assert_eq!(Money::franc(-3).to_string(), "-3 CHF");
    }

    #[test]
    fn test_money_serde() {
        let json = serde_json::to_string(&Money::dollar(5)).unwrap();
        assert_eq!(json, r#"{"amount":5,"currency":"USD"}"#);

        let parsed: Money = serde_json::from_str(r#"{"amount":10,"currency":"chf"}"#).unwrap();
        assert_eq!(parsed, Money::franc(10));

        assert!(serde_json::from_str::<Money>(r#"{"amount":10,"currency":"C"}"#).is_err());
    }
}
