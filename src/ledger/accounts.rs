use super::Ledger;
use crate::db;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;
use crate::validate;

impl Ledger {
    pub(crate) fn get_account(&self, name: &str) -> LedgerResult<Account> {
        db::get_account(self.db.conn(), name)?
            .ok_or_else(|| LedgerError::account_not_found(name))
    }

    pub(crate) fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        Ok(db::list_accounts(self.db.conn())?)
    }

    /// Stores the account exactly as supplied; the balance is not derived
    /// from anything at creation time.
    pub(crate) fn create_account(&mut self, account: Account) -> LedgerResult<Account> {
        validate::account(&account, &self.currencies)?;

        if db::account_exists(self.db.conn(), &account.name)? {
            return Err(LedgerError::AlreadyExists(account.name));
        }
        db::insert_account(self.db.conn(), &account)?;

        tracing::debug!(name = %account.name, "account created");
        Ok(account)
    }

    /// Replaces the balance and currency fields only; the name is the
    /// identity and any transaction linkage stays untouched.
    pub(crate) fn edit_account(&mut self, name: &str, updated: Account) -> LedgerResult<Account> {
        validate::account(&updated, &self.currencies)?;

        let mut existing = db::get_account(self.db.conn(), name)?
            .ok_or_else(|| LedgerError::account_not_found(name))?;
        existing.balance = updated.balance;
        existing.currency = updated.currency.to_uppercase();
        db::update_account(self.db.conn(), &existing)?;

        tracing::debug!(name, "account edited");
        Ok(existing)
    }

    pub(crate) fn delete_account(&mut self, name: &str) -> LedgerResult<()> {
        if !db::account_exists(self.db.conn(), name)? {
            return Err(LedgerError::account_not_found(name));
        }
        db::delete_account(self.db.conn(), name).map_err(map_referential)?;

        tracing::debug!(name, "account deleted");
        Ok(())
    }

    /// Deletes the whole account set in one unit of work: if any account is
    /// still referenced by a transaction, nothing is deleted.
    pub(crate) fn delete_all_accounts(&mut self) -> LedgerResult<()> {
        let tx = self.db.unit_of_work()?;
        db::delete_all_accounts(&tx).map_err(map_referential)?;
        tx.commit()?;

        tracing::debug!("all accounts deleted");
        Ok(())
    }
}

fn map_referential(e: rusqlite::Error) -> LedgerError {
    match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            LedgerError::CannotDelete
        }
        other => LedgerError::Db(other),
    }
}
