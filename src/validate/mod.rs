use rust_decimal::Decimal;

use crate::currency::CurrencyCodes;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Transaction};

pub(crate) const MAX_DESCRIPTION_LEN: usize = 30;

/// Field-level checks run before any mutation. Every violation is collected
/// and reported together rather than stopping at the first one.
pub(crate) fn account(account: &Account, codes: &CurrencyCodes) -> LedgerResult<()> {
    let mut violations = Vec::new();

    if account.name.trim().is_empty() {
        violations.push("Name cannot be blank.".to_string());
    }
    check_currency(&account.currency, codes, &mut violations);

    finish(violations)
}

pub(crate) fn transaction(txn: &Transaction, codes: &CurrencyCodes) -> LedgerResult<()> {
    let mut violations = Vec::new();

    if txn.account_name.trim().is_empty() {
        violations.push("Account cannot be blank.".to_string());
    }
    if txn.description.trim().is_empty() {
        violations.push("Description cannot be blank.".to_string());
    } else if txn.description.chars().count() > MAX_DESCRIPTION_LEN {
        violations.push(format!(
            "Description cannot be longer than {MAX_DESCRIPTION_LEN} characters."
        ));
    }
    if txn.amount <= Decimal::ZERO {
        violations.push("Amount must be positive.".to_string());
    }
    check_currency(&txn.currency, codes, &mut violations);

    finish(violations)
}

fn check_currency(code: &str, codes: &CurrencyCodes, violations: &mut Vec<String>) {
    if !codes.is_valid(code) {
        violations.push("Invalid currency code.".to_string());
    }
}

fn finish(violations: Vec<String>) -> LedgerResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(LedgerError::Validation(violations))
    }
}
