mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Account, Transaction, TransactionKind};

/// Owns the SQLite connection. Row-level operations are free functions over
/// `&Connection` so the ledger services can compose several of them inside a
/// single `rusqlite::Transaction`; the methods on `Database` are convenience
/// wrappers for single-statement use.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    /// Start a unit of work. Everything executed against the returned
    /// transaction commits or rolls back as one.
    pub(crate) fn unit_of_work(&mut self) -> rusqlite::Result<rusqlite::Transaction<'_>> {
        self.conn.transaction()
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

// ── Accounts ──────────────────────────────────────────────

pub(crate) fn get_account(conn: &Connection, name: &str) -> rusqlite::Result<Option<Account>> {
    let result = conn.query_row(
        "SELECT name, balance, currency, created_at FROM accounts WHERE name = ?1",
        params![name],
        account_from_row,
    );
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) fn account_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM accounts WHERE name = ?1)",
        params![name],
        |row| row.get(0),
    )
}

pub(crate) fn list_accounts(conn: &Connection) -> rusqlite::Result<Vec<Account>> {
    let mut stmt =
        conn.prepare("SELECT name, balance, currency, created_at FROM accounts ORDER BY name")?;
    let rows = stmt.query_map([], account_from_row)?;
    rows.collect()
}

pub(crate) fn insert_account(conn: &Connection, account: &Account) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO accounts (name, balance, currency, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            account.name,
            account.balance.to_string(),
            account.currency,
            account.created_at,
        ],
    )?;
    Ok(())
}

/// Insert-or-replace keyed by name. Seeding uses this so a re-imported
/// account overwrites the stored one instead of failing on the primary key.
pub(crate) fn upsert_account(conn: &Connection, account: &Account) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO accounts (name, balance, currency, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(name) DO UPDATE SET balance = ?2, currency = ?3",
        params![
            account.name,
            account.balance.to_string(),
            account.currency,
            account.created_at,
        ],
    )?;
    Ok(())
}

/// Rewrites the mutable fields of an account row. The name is the identity
/// and never changes.
pub(crate) fn update_account(conn: &Connection, account: &Account) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE accounts SET balance = ?1, currency = ?2 WHERE name = ?3",
        params![
            account.balance.to_string(),
            account.currency,
            account.name,
        ],
    )?;
    Ok(())
}

/// Fails with a constraint violation while any transaction references the
/// account (enforced by the foreign key on transactions.account_name).
pub(crate) fn delete_account(conn: &Connection, name: &str) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM accounts WHERE name = ?1", params![name])?;
    Ok(())
}

pub(crate) fn delete_all_accounts(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM accounts", [])?;
    Ok(())
}

// ── Transactions ──────────────────────────────────────────

pub(crate) fn get_transaction(conn: &Connection, id: i64) -> rusqlite::Result<Option<Transaction>> {
    let result = conn.query_row(
        "SELECT id, kind, account_name, description, amount, currency, created_at
         FROM transactions WHERE id = ?1",
        params![id],
        transaction_from_row,
    );
    match result {
        Ok(t) => Ok(Some(t)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) fn list_transactions(conn: &Connection) -> rusqlite::Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, account_name, description, amount, currency, created_at
         FROM transactions ORDER BY id",
    )?;
    let rows = stmt.query_map([], transaction_from_row)?;
    rows.collect()
}

pub(crate) fn list_transactions_for_account(
    conn: &Connection,
    account_name: &str,
) -> rusqlite::Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, account_name, description, amount, currency, created_at
         FROM transactions WHERE account_name = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![account_name], transaction_from_row)?;
    rows.collect()
}

/// Inserts the row and returns the id SQLite assigned.
pub(crate) fn insert_transaction(conn: &Connection, txn: &Transaction) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO transactions (kind, account_name, description, amount, currency, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            txn.kind.as_str(),
            txn.account_name,
            txn.description,
            txn.amount.to_string(),
            txn.currency,
            txn.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub(crate) fn update_transaction(conn: &Connection, txn: &Transaction) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE transactions
         SET kind = ?1, account_name = ?2, description = ?3, amount = ?4, currency = ?5
         WHERE id = ?6",
        params![
            txn.kind.as_str(),
            txn.account_name,
            txn.description,
            txn.amount.to_string(),
            txn.currency,
            txn.id,
        ],
    )?;
    Ok(())
}

pub(crate) fn delete_transaction(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
    Ok(())
}

pub(crate) fn delete_all_transactions(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM transactions", [])?;
    Ok(())
}

// ── Row mapping ───────────────────────────────────────────

fn account_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
    let balance_str: String = row.get(1)?;
    Ok(Account {
        name: row.get(0)?,
        balance: Decimal::from_str(&balance_str).unwrap_or_default(),
        currency: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn transaction_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Transaction> {
    let kind_str: String = row.get(1)?;
    let kind = TransactionKind::parse(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown transaction kind: {kind_str}").into(),
        )
    })?;
    let amount_str: String = row.get(4)?;
    Ok(Transaction {
        id: Some(row.get(0)?),
        kind,
        account_name: row.get(2)?,
        description: row.get(3)?,
        amount: Decimal::from_str(&amount_str).unwrap_or_default(),
        currency: row.get(5)?,
        created_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests;
