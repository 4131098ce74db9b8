mod currency;
mod db;
mod error;
mod import;
mod ledger;
mod models;
mod run;
mod validate;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use currency::{CurrencyCodes, StaticRates};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let data_dir = get_data_dir()?;
    let db = db::Database::open(&data_dir.join("ledgerbook.db"))?;

    // A rate table next to the db stands in for a live exchange-rate feed;
    // without one, cross-currency postings fail with ConversionUnavailable.
    let rates_path = data_dir.join("rates.json");
    let rates = if rates_path.exists() {
        StaticRates::from_file(&rates_path)?
    } else {
        StaticRates::new()
    };

    // The builtin code set always loads; a currencies.json dropped next to
    // the db widens it, and a broken file keeps the builtin set.
    let mut currencies = CurrencyCodes::builtin();
    let codes_path = data_dir.join("currencies.json");
    if codes_path.exists() {
        match std::fs::File::open(&codes_path) {
            Ok(file) => {
                if let Err(e) = currencies.refresh_from_reader(file) {
                    tracing::warn!(error = %e, "currency refresh failed, keeping previous set");
                }
            }
            Err(e) => tracing::warn!(error = %e, "could not open currencies.json"),
        }
    }

    let mut ledger = ledger::Ledger::new(db, Box::new(rates), currencies);
    run::as_cli(&args, &mut ledger)
}

fn get_data_dir() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ledgerbook", "Ledgerbook")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}
