//! Property-based tests for expression reduction.
//!
//! - Scaling a leaf scales its amount
//! - Reduction of same-currency sums is plain addition
//! - Scaling distributes over sums before conversion
//! - Identity rate needs no table entry

use proptest::prelude::*;

use super::{Expr, Expression, Sum};
use crate::bank::Bank;
use moneta_shared::{Currency, Money, MoneyError};

/// Strategy to generate amounts well inside `i64` so sums cannot overflow.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate small multipliers.
fn factor() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

/// Strategy to generate positive rates.
fn rate() -> impl Strategy<Value = i64> {
    1i64..1_000i64
}

/// Strategy to generate a left-nested dollar sum of 1 to 16 leaves.
fn dollar_tree() -> impl Strategy<Value = (Expression, i64)> {
    prop::collection::vec(amount(), 1..16).prop_map(|amounts| {
        let total: i64 = amounts.iter().sum();
        let mut leaves = amounts.into_iter().map(Money::dollar);
        let first = leaves.next().map_or(Expression::Money(Money::dollar(0)), Expression::from);
        let tree = leaves.fold(first, |tree, leaf| tree.plus(leaf));
        (tree, total)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Scaling a leaf multiplies its amount and keeps its currency.
    #[test]
    fn prop_times_scales_amount(n in amount(), k in factor()) {
        prop_assert_eq!(Money::dollar(n).times(k), Ok(Money::dollar(n * k)));
        prop_assert_eq!(Money::franc(n).times(k), Ok(Money::franc(n * k)));
    }

    /// Equality discriminates currency even for equal amounts.
    #[test]
    fn prop_equality_discriminates_currency(n in amount()) {
        prop_assert_eq!(Money::dollar(n), Money::dollar(n));
        prop_assert_ne!(Money::dollar(n), Money::franc(n));
    }

    /// A same-currency tree reduces to the plain sum of its leaves.
    #[test]
    fn prop_same_currency_tree_is_addition((tree, total) in dollar_tree()) {
        let bank = Bank::new();
        prop_assert_eq!(bank.reduce(&tree, Currency::USD), Ok(Money::dollar(total)));
    }

    /// Identity rate holds whatever the table contains.
    #[test]
    fn prop_identity_rate(r in rate()) {
        let mut bank = Bank::new();
        bank.add_rate(Currency::CHF, Currency::USD, r).unwrap();
        bank.add_rate(Currency::USD, Currency::CHF, r).unwrap();
        prop_assert_eq!(bank.rate(Currency::USD, Currency::USD), Ok(1));
        prop_assert_eq!(bank.rate(Currency::CHF, Currency::CHF), Ok(1));
    }

    /// Conversion is integer division by the registered rate.
    #[test]
    fn prop_conversion_divides_by_rate(n in amount(), r in rate()) {
        let mut bank = Bank::new();
        bank.add_rate(Currency::CHF, Currency::USD, r).unwrap();
        prop_assert_eq!(
            bank.reduce(&Money::franc(n), Currency::USD),
            Ok(Money::dollar(n / r))
        );
    }

    /// Scaling a mixed sum happens before conversion, leaf by leaf.
    #[test]
    fn prop_times_distributes_before_conversion(
        dollars in amount(),
        francs in amount(),
        k in factor(),
        r in rate(),
    ) {
        let mut bank = Bank::new();
        bank.add_rate(Currency::CHF, Currency::USD, r).unwrap();
        let scaled = Sum::new(Money::dollar(dollars), Money::franc(francs)).times(k);
        let expected = dollars * k + (francs * k) / r;
        prop_assert_eq!(bank.reduce(&scaled, Currency::USD), Ok(Money::dollar(expected)));
    }

    /// Without a registered pair, any foreign leaf fails the reduction.
    #[test]
    fn prop_missing_rate_never_yields_value(dollars in amount(), francs in amount()) {
        let bank = Bank::new();
        let expression = Money::dollar(dollars).plus(Money::franc(francs));
        prop_assert_eq!(
            bank.reduce(&expression, Currency::USD),
            Err(MoneyError::UnknownRate { from: Currency::CHF, to: Currency::USD })
        );
    }
}
