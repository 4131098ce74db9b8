mod account;
mod transaction;

pub(crate) use account::Account;
pub(crate) use transaction::{Transaction, TransactionKind};

#[cfg(test)]
mod tests;
