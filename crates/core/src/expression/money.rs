//! `Money` as an expression leaf.

use moneta_shared::{Currency, Money, MoneyResult};

use super::{Expr, Expression};
use crate::bank::Bank;

impl Expr for Money {
    /// Converts with integer division: `amount / rate(currency, to)`.
    fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Money> {
        let rate = bank.rate(self.currency(), to)?;
        Ok(Money::new(self.amount() / rate, to))
    }

    /// An overflowing product becomes an [`Expression::Overflow`] leaf.
    fn times(self, factor: i64) -> Expression {
        Money::times(self, factor).map_or(
            Expression::Overflow(self.currency()),
            Expression::Money,
        )
    }
}
