#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;
use std::io::Write;

fn seed(json: &str) -> Vec<SeedAccount> {
    serde_json::from_str(json).unwrap()
}

const SAMPLE: &str = r#"[
    {
        "name": "Account1",
        "balance": "100.00",
        "currency": "USD",
        "transactions": [
            {"description": "Paycheck", "amount": "2500.00", "currency": "USD"},
            {"description": "Groceries", "amount": "-42.50", "currency": "USD"}
        ]
    },
    {
        "name": "Account2",
        "balance": "0",
        "currency": "EUR"
    }
]"#;

#[test]
fn test_signed_amounts_map_to_kinds() {
    let mut db = Database::open_in_memory().unwrap();
    let count = seed_accounts(&mut db, seed(SAMPLE)).unwrap();
    assert_eq!(count, 2);

    let txns = db::list_transactions_for_account(db.conn(), "Account1").unwrap();
    assert_eq!(txns.len(), 2);

    let paycheck = txns.iter().find(|t| t.description == "Paycheck").unwrap();
    assert_eq!(paycheck.kind, TransactionKind::Credit);
    assert_eq!(paycheck.amount, dec!(2500.00));

    let groceries = txns.iter().find(|t| t.description == "Groceries").unwrap();
    assert_eq!(groceries.kind, TransactionKind::Debit);
    // Magnitude stored, direction carried by the kind
    assert_eq!(groceries.amount, dec!(42.50));
}

#[test]
fn test_imported_balances_are_authoritative() {
    let mut db = Database::open_in_memory().unwrap();
    seed_accounts(&mut db, seed(SAMPLE)).unwrap();

    // Balance stays exactly as imported, not recomputed from the embedded
    // transactions.
    let account = db::get_account(db.conn(), "Account1").unwrap().unwrap();
    assert_eq!(account.balance, dec!(100.00));
}

#[test]
fn test_account_without_transactions() {
    let mut db = Database::open_in_memory().unwrap();
    seed_accounts(&mut db, seed(SAMPLE)).unwrap();

    let account = db::get_account(db.conn(), "Account2").unwrap().unwrap();
    assert_eq!(account.currency, "EUR");
    assert!(db::list_transactions_for_account(db.conn(), "Account2")
        .unwrap()
        .is_empty());
}

#[test]
fn test_reimport_overwrites_account() {
    let mut db = Database::open_in_memory().unwrap();
    seed_accounts(&mut db, seed(r#"[{"name": "A", "balance": "10", "currency": "USD"}]"#))
        .unwrap();
    seed_accounts(&mut db, seed(r#"[{"name": "A", "balance": "99", "currency": "USD"}]"#))
        .unwrap();

    let account = db::get_account(db.conn(), "A").unwrap().unwrap();
    assert_eq!(account.balance, dec!(99));
}

#[test]
fn test_seed_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "{SAMPLE}").unwrap();

    let mut db = Database::open_in_memory().unwrap();
    assert_eq!(seed_from_file(&mut db, &path).unwrap(), 2);
    assert_eq!(db::list_accounts(db.conn()).unwrap().len(), 2);
}

#[test]
fn test_malformed_file_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "<xml?>").unwrap();

    let mut db = Database::open_in_memory().unwrap();
    assert_eq!(seed_from_file(&mut db, &path).unwrap(), 0);
    assert!(db::list_accounts(db.conn()).unwrap().is_empty());
}

#[test]
fn test_missing_file_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = Database::open_in_memory().unwrap();
    assert_eq!(
        seed_from_file(&mut db, &dir.path().join("absent.json")).unwrap(),
        0
    );
}
