use rusqlite::Connection;

use crate::currency::RateSource;
use crate::db;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Transaction, TransactionKind};

/// Applies one signed effect to the owning account's stored balance and
/// persists the account on the caller's connection. Pass the transaction's
/// own kind to post its effect, the opposite kind to reverse a prior posting.
///
/// The amount is converted into the account's currency when the transaction
/// carries a different one. Nothing is written until the effective amount is
/// fully resolved: a missing account or rate leaves the balance untouched.
pub(super) fn apply_effect(
    conn: &Connection,
    rates: &dyn RateSource,
    txn: &Transaction,
    direction: TransactionKind,
) -> LedgerResult<Account> {
    let mut account = db::get_account(conn, &txn.account_name)?
        .ok_or_else(|| LedgerError::account_not_found(txn.account_name.as_str()))?;

    let effective = if txn.currency.eq_ignore_ascii_case(&account.currency) {
        txn.amount
    } else {
        let rate = rates.rate(&txn.currency, &account.currency).ok_or_else(|| {
            LedgerError::ConversionUnavailable {
                base: txn.currency.clone(),
                target: account.currency.clone(),
            }
        })?;
        txn.amount * rate
    };

    match direction {
        TransactionKind::Credit => account.balance += effective,
        TransactionKind::Debit => account.balance -= effective,
    }

    db::update_account(conn, &account)?;
    Ok(account)
}
