//! Monetary expression trees.
//!
//! An [`Expression`] is either a [`Money`] leaf or a [`Sum`] of two
//! sub-expressions. A leaf scaled past the `i64` range is kept as an
//! [`Expression::Overflow`] marker so that reduction reports it. Trees are
//! built bottom-up with `plus` and `times` and are never mutated afterwards,
//! so they are always finite and acyclic.

mod money;
pub mod sum;

#[cfg(test)]
mod props;

use std::ops::{Add, Mul};

use moneta_shared::{Currency, Money, MoneyError, MoneyResult};

use crate::bank::Bank;

pub use sum::Sum;

/// Capability shared by every node of an expression tree.
pub trait Expr: Sized + Into<Expression> {
    /// Collapses this node into one amount in currency `to`.
    fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Money>;

    /// Deferred addition. Never simplifies, even for equal currencies.
    fn plus(self, addend: impl Into<Expression>) -> Expression {
        Expression::Sum(Box::new(Sum::new(self, addend)))
    }

    /// Scales every amount in the tree by `factor`.
    fn times(self, factor: i64) -> Expression;
}

/// A node of a monetary expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A single amount.
    Money(Money),
    /// Deferred addition of two sub-expressions.
    Sum(Box<Sum>),
    /// A leaf in the given currency whose amount overflowed during `times`.
    Overflow(Currency),
}

impl Expr for Expression {
    fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Money> {
        match self {
            Self::Money(money) => money.reduce(bank, to),
            Self::Sum(sum) => sum.reduce(bank, to),
            Self::Overflow(_) => Err(MoneyError::AmountOverflow(to)),
        }
    }

    fn times(self, factor: i64) -> Expression {
        match self {
            Self::Money(money) => Expr::times(money, factor),
            Self::Sum(sum) => Expr::times(*sum, factor),
            Self::Overflow(currency) => Self::Overflow(currency),
        }
    }
}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<Sum> for Expression {
    fn from(sum: Sum) -> Self {
        Self::Sum(Box::new(sum))
    }
}

impl<T: Into<Expression>> Add<T> for Expression {
    type Output = Self;

    fn add(self, addend: T) -> Self {
        self.plus(addend)
    }
}

impl Add<Expression> for Money {
    type Output = Expression;

    fn add(self, addend: Expression) -> Expression {
        self.plus(addend)
    }
}

impl Mul<i64> for Expression {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Expr::times(self, factor)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Money(money) => write!(f, "{money}"),
            Self::Sum(sum) => write!(f, "({} + {})", sum.augend, sum.addend),
            Self::Overflow(currency) => write!(f, "<overflow> {currency}"),
        }
    }
}
