use super::{engine, Ledger};
use crate::db;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::validate;

impl Ledger {
    pub(crate) fn get_transaction(&self, id: i64) -> LedgerResult<Transaction> {
        db::get_transaction(self.db.conn(), id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id))
    }

    pub(crate) fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(db::list_transactions(self.db.conn())?)
    }

    pub(crate) fn transactions_for_account(&self, name: &str) -> LedgerResult<Vec<Transaction>> {
        Ok(db::list_transactions_for_account(self.db.conn(), name)?)
    }

    /// Posts the transaction's effect to its account and stores the row,
    /// both in one unit of work. Returns the transaction with its assigned id.
    pub(crate) fn create_transaction(&mut self, txn: Transaction) -> LedgerResult<Transaction> {
        validate::transaction(&txn, &self.currencies)?;

        let tx = self.db.unit_of_work()?;
        engine::apply_effect(&tx, self.rates.as_ref(), &txn, txn.kind)?;
        let id = db::insert_transaction(&tx, &txn)?;
        tx.commit()?;

        tracing::debug!(id, account = %txn.account_name, "transaction created");
        Ok(Transaction {
            id: Some(id),
            ..txn
        })
    }

    /// Fully reverses the prior posting, then posts the updated one. The
    /// reversal uses the existing transaction's account, amount, currency and
    /// kind, so it stays correct when the edit moves the transaction to a
    /// different account or currency.
    pub(crate) fn edit_transaction(
        &mut self,
        id: i64,
        updated: Transaction,
    ) -> LedgerResult<Transaction> {
        validate::transaction(&updated, &self.currencies)?;

        let tx = self.db.unit_of_work()?;
        let existing = db::get_transaction(&tx, id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id))?;

        engine::apply_effect(&tx, self.rates.as_ref(), &existing, existing.kind.opposite())?;
        engine::apply_effect(&tx, self.rates.as_ref(), &updated, updated.kind)?;

        let stored = Transaction {
            id: Some(id),
            created_at: existing.created_at,
            ..updated
        };
        db::update_transaction(&tx, &stored)?;
        tx.commit()?;

        tracing::debug!(id, "transaction edited");
        Ok(stored)
    }

    /// Reverses the posting, then removes the row, in one unit of work.
    pub(crate) fn delete_transaction(&mut self, id: i64) -> LedgerResult<()> {
        let tx = self.db.unit_of_work()?;
        let existing = db::get_transaction(&tx, id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id))?;

        engine::apply_effect(&tx, self.rates.as_ref(), &existing, existing.kind.opposite())?;
        db::delete_transaction(&tx, id)?;
        tx.commit()?;

        tracing::debug!(id, "transaction deleted");
        Ok(())
    }

    /// Reverses every stored posting, each against its own transaction's
    /// original kind, then removes all rows in the same unit of work.
    pub(crate) fn delete_all_transactions(&mut self) -> LedgerResult<usize> {
        let tx = self.db.unit_of_work()?;
        let all = db::list_transactions(&tx)?;
        for txn in &all {
            engine::apply_effect(&tx, self.rates.as_ref(), txn, txn.kind.opposite())?;
        }
        db::delete_all_transactions(&tx)?;
        tx.commit()?;

        tracing::debug!(count = all.len(), "all transactions deleted");
        Ok(all.len())
    }
}
