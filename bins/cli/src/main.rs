//! Moneta command-line evaluator.
//!
//! Usage:
//!   moneta <TARGET> <AMOUNT> <CURRENCY> [<AMOUNT> <CURRENCY>...]
//!
//! Sums the given amounts and reduces them to `TARGET` with the exchange rates
//! from configuration (`config/default.toml`, `config/{RUN_MODE}.toml`,
//! `MONETA__*` environment variables).

mod args;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::Bank;
use moneta_shared::AppConfig;

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let bank = Bank::from_config(&config.bank).context("Invalid bank configuration")?;
    info!(rates = bank.len(), "Bank ready");

    let target = args.target;
    let expression = args.expression()?;
    info!(%expression, %target, "Reducing expression");

    let result = bank
        .reduce(&expression, target)
        .with_context(|| format!("Failed to reduce {expression} to {target}"))?;
    println!("{result}");

    Ok(())
}
