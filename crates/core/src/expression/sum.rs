//! Deferred addition of two expressions.

use moneta_shared::{Currency, Money, MoneyError, MoneyResult};

use super::{Expr, Expression};
use crate::bank::Bank;

/// Composite node: `augend + addend`, kept unevaluated until reduction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sum {
    /// Left operand.
    pub augend: Expression,
    /// Right operand.
    pub addend: Expression,
}

impl Sum {
    /// Stores both operands as-is.
    #[must_use]
    pub fn new(augend: impl Into<Expression>, addend: impl Into<Expression>) -> Self {
        Self {
            augend: augend.into(),
            addend: addend.into(),
        }
    }
}

impl Expr for Sum {
    /// Reduces both operands to `to`, then adds the amounts.
    fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Money> {
        let augend = self.augend.reduce(bank, to)?;
        let addend = self.addend.reduce(bank, to)?;
        let amount = augend
            .amount()
            .checked_add(addend.amount())
            .ok_or(MoneyError::AmountOverflow(to))?;
        Ok(Money::new(amount, to))
    }

    fn times(self, factor: i64) -> Expression {
        Sum::new(self.augend.times(factor), self.addend.times(factor)).into()
    }
}
