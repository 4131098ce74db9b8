#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

#[test]
fn test_kind_opposite() {
    assert_eq!(TransactionKind::Credit.opposite(), TransactionKind::Debit);
    assert_eq!(TransactionKind::Debit.opposite(), TransactionKind::Credit);
    // Double reversal is the identity
    assert_eq!(
        TransactionKind::Credit.opposite().opposite(),
        TransactionKind::Credit
    );
}

#[test]
fn test_kind_round_trip() {
    for kind in [TransactionKind::Credit, TransactionKind::Debit] {
        assert_eq!(TransactionKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(TransactionKind::parse("credit"), Some(TransactionKind::Credit));
    assert_eq!(TransactionKind::parse("transfer"), None);
}

#[test]
fn test_account_uppercases_currency() {
    let account = Account::new("Checking".into(), dec!(100.00), "usd".into());
    assert_eq!(account.currency, "USD");
}

#[test]
fn test_transaction_uppercases_currency() {
    let txn = Transaction::new(
        TransactionKind::Credit,
        "Checking".into(),
        "Paycheck".into(),
        dec!(2500),
        "eur".into(),
    );
    assert_eq!(txn.currency, "EUR");
    assert!(txn.id.is_none());
}
