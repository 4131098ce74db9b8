use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

use crate::db::{self, Database};
use crate::error::LedgerResult;
use crate::models::{Account, Transaction, TransactionKind};

/// One account in a seed document, with its transactions embedded. Seed
/// amounts are signed: negative means a debit of the magnitude, non-negative
/// a credit. Stored balances are taken as already-authoritative, so seeding
/// never runs the balance mutation engine.
#[derive(Debug, Deserialize)]
pub(crate) struct SeedAccount {
    pub name: String,
    pub balance: Decimal,
    pub currency: String,
    #[serde(default)]
    pub transactions: Vec<SeedTransaction>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeedTransaction {
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Best-effort startup seeding. A missing or malformed file is logged and
/// skipped rather than propagated; storage failures still propagate.
pub(crate) fn seed_from_file(db: &mut Database, path: &Path) -> LedgerResult<usize> {
    let accounts = match read_seed(path) {
        Ok(accounts) => accounts,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "skipping seed import");
            return Ok(0);
        }
    };
    seed_accounts(db, accounts)
}

/// Persists every account, then its transactions with the account linkage
/// resolved, in one unit of work. Returns the number of transactions written.
pub(crate) fn seed_accounts(
    db: &mut Database,
    accounts: Vec<SeedAccount>,
) -> LedgerResult<usize> {
    let tx = db.unit_of_work()?;
    let mut count = 0;

    for seed in accounts {
        let account = Account::new(seed.name, seed.balance, seed.currency);
        db::upsert_account(&tx, &account)?;

        for entry in seed.transactions {
            let (kind, amount) = if entry.amount < Decimal::ZERO {
                (TransactionKind::Debit, entry.amount.abs())
            } else {
                (TransactionKind::Credit, entry.amount)
            };
            let txn = Transaction::new(
                kind,
                account.name.clone(),
                entry.description,
                amount,
                entry.currency,
            );
            db::insert_transaction(&tx, &txn)?;
            count += 1;
        }
    }

    tx.commit()?;
    tracing::info!(count, "seed import finished");
    Ok(count)
}

fn read_seed(path: &Path) -> Result<Vec<SeedAccount>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open seed file: {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file)).context("Failed to parse seed file")
}

#[cfg(test)]
mod tests;
