#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Account, Transaction, TransactionKind};
use rust_decimal_macros::dec;

fn sample_txn(account_name: &str, amount: rust_decimal::Decimal) -> Transaction {
    Transaction::new(
        TransactionKind::Credit,
        account_name.into(),
        "Groceries".into(),
        amount,
        "USD".into(),
    )
}

// ── Accounts ──────────────────────────────────────────────

#[test]
fn test_account_crud() {
    let db = Database::open_in_memory().unwrap();
    let account = Account::new("Checking".into(), dec!(100.00), "USD".into());
    insert_account(db.conn(), &account).unwrap();

    let fetched = get_account(db.conn(), "Checking").unwrap().unwrap();
    assert_eq!(fetched.name, "Checking");
    assert_eq!(fetched.balance, dec!(100.00));
    assert_eq!(fetched.currency, "USD");

    assert!(account_exists(db.conn(), "Checking").unwrap());
    assert!(!account_exists(db.conn(), "Savings").unwrap());
}

#[test]
fn test_account_not_found() {
    let db = Database::open_in_memory().unwrap();
    assert!(get_account(db.conn(), "Nope").unwrap().is_none());
}

#[test]
fn test_duplicate_account_name_rejected() {
    let db = Database::open_in_memory().unwrap();
    let account = Account::new("Checking".into(), dec!(0), "USD".into());
    insert_account(db.conn(), &account).unwrap();
    assert!(insert_account(db.conn(), &account).is_err());
}

#[test]
fn test_accounts_sorted_by_name() {
    let db = Database::open_in_memory().unwrap();
    for name in ["Zeta", "Alpha", "Mid"] {
        insert_account(
            db.conn(),
            &Account::new(name.into(), dec!(0), "USD".into()),
        )
        .unwrap();
    }
    let names: Vec<String> = list_accounts(db.conn())
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn test_update_account_keeps_name() {
    let db = Database::open_in_memory().unwrap();
    let mut account = Account::new("Checking".into(), dec!(10), "USD".into());
    insert_account(db.conn(), &account).unwrap();

    account.balance = dec!(42.50);
    account.currency = "EUR".into();
    update_account(db.conn(), &account).unwrap();

    let fetched = get_account(db.conn(), "Checking").unwrap().unwrap();
    assert_eq!(fetched.balance, dec!(42.50));
    assert_eq!(fetched.currency, "EUR");
}

// ── Referential integrity ─────────────────────────────────

#[test]
fn test_delete_referenced_account_violates_constraint() {
    let db = Database::open_in_memory().unwrap();
    let account = Account::new("Checking".into(), dec!(0), "USD".into());
    insert_account(db.conn(), &account).unwrap();
    insert_transaction(db.conn(), &sample_txn("Checking", dec!(5))).unwrap();

    let err = delete_account(db.conn(), "Checking").unwrap_err();
    assert!(matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    ));
}

#[test]
fn test_delete_unreferenced_account() {
    let db = Database::open_in_memory().unwrap();
    insert_account(
        db.conn(),
        &Account::new("Checking".into(), dec!(0), "USD".into()),
    )
    .unwrap();
    delete_account(db.conn(), "Checking").unwrap();
    assert!(!account_exists(db.conn(), "Checking").unwrap());
}

#[test]
fn test_transaction_requires_existing_account() {
    let db = Database::open_in_memory().unwrap();
    let err = insert_transaction(db.conn(), &sample_txn("Ghost", dec!(5))).unwrap_err();
    assert!(matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    ));
}

// ── Transactions ──────────────────────────────────────────

#[test]
fn test_transaction_crud() {
    let db = Database::open_in_memory().unwrap();
    insert_account(
        db.conn(),
        &Account::new("Checking".into(), dec!(0), "USD".into()),
    )
    .unwrap();

    let id = insert_transaction(db.conn(), &sample_txn("Checking", dec!(12.34))).unwrap();
    assert!(id > 0);

    let mut fetched = get_transaction(db.conn(), id).unwrap().unwrap();
    assert_eq!(fetched.kind, TransactionKind::Credit);
    assert_eq!(fetched.amount, dec!(12.34));
    assert_eq!(fetched.account_name, "Checking");

    fetched.kind = TransactionKind::Debit;
    fetched.description = "Refund".into();
    update_transaction(db.conn(), &fetched).unwrap();
    let updated = get_transaction(db.conn(), id).unwrap().unwrap();
    assert_eq!(updated.kind, TransactionKind::Debit);
    assert_eq!(updated.description, "Refund");

    delete_transaction(db.conn(), id).unwrap();
    assert!(get_transaction(db.conn(), id).unwrap().is_none());
}

#[test]
fn test_list_transactions_by_account() {
    let db = Database::open_in_memory().unwrap();
    for name in ["A", "B"] {
        insert_account(
            db.conn(),
            &Account::new(name.into(), dec!(0), "USD".into()),
        )
        .unwrap();
    }
    insert_transaction(db.conn(), &sample_txn("A", dec!(1))).unwrap();
    insert_transaction(db.conn(), &sample_txn("A", dec!(2))).unwrap();
    insert_transaction(db.conn(), &sample_txn("B", dec!(3))).unwrap();

    assert_eq!(list_transactions(db.conn()).unwrap().len(), 3);
    assert_eq!(
        list_transactions_for_account(db.conn(), "A").unwrap().len(),
        2
    );
    assert_eq!(
        list_transactions_for_account(db.conn(), "B").unwrap().len(),
        1
    );
}

#[test]
fn test_unit_of_work_rolls_back_on_drop() {
    let mut db = Database::open_in_memory().unwrap();
    insert_account(
        db.conn(),
        &Account::new("Checking".into(), dec!(0), "USD".into()),
    )
    .unwrap();

    {
        let tx = db.unit_of_work().unwrap();
        insert_transaction(&tx, &sample_txn("Checking", dec!(9))).unwrap();
        // dropped without commit
    }

    assert!(list_transactions(db.conn()).unwrap().is_empty());
}
