//! CLI argument definitions using clap

use anyhow::{Context, bail};
use clap::Parser;

use moneta_core::{Currency, Expr, Expression, Money};

/// Sum money amounts and reduce them to one currency with the configured exchange rates
#[derive(Parser, Debug)]
#[command(name = "moneta")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Currency to reduce to (e.g. USD)
    pub target: Currency,

    /// Amounts to sum, as AMOUNT CURRENCY pairs (e.g. 5 USD 10 CHF)
    #[arg(
        required = true,
        num_args = 1..,
        allow_negative_numbers = true,
        value_name = "AMOUNT CURRENCY"
    )]
    pub terms: Vec<String>,
}

impl Args {
    /// Builds a left-nested sum from the amount/currency pairs.
    pub fn expression(&self) -> anyhow::Result<Expression> {
        if !self.terms.len().is_multiple_of(2) {
            bail!(
                "expected AMOUNT CURRENCY pairs, got {} values",
                self.terms.len()
            );
        }

        let mut leaves = self.terms.chunks_exact(2).map(|pair| -> anyhow::Result<Money> {
            let amount: i64 = pair[0]
                .parse()
                .with_context(|| format!("Invalid amount {:?}", pair[0]))?;
            Ok(Money::parse(amount, &pair[1])?)
        });

        let first: Money = leaves.next().context("no amounts given")??;
        leaves.try_fold(Expression::from(first), |tree, leaf| Ok(tree.plus(leaf?)))
    }
}
