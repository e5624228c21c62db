//! Core reduction logic for Moneta.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Clients build an expression tree out of [`Money`] leaves with `plus` and
//! `times`, then reduce it to a single [`Money`] in a target currency through
//! a [`Bank`] holding directional exchange rates.
//!
//! # Modules
//!
//! - `expression` - Expression tree (`Money` leaves and `Sum` nodes)
//! - `bank` - Rate table, reduction entry point and the thread-safe handle

pub mod bank;
pub mod expression;


pub use bank::{Bank, RateTable, SharedBank};
pub use expression::{Expr, Expression, Sum};
pub use moneta_shared::{Currency, Money, MoneyError, MoneyResult};
