mod accounts;
mod engine;
mod transactions;

use crate::currency::{CurrencyCodes, RateSource};
use crate::db::Database;

/// The ledger service: account and transaction lifecycles over one database,
/// one rate source, and one reference set of currency codes. Every mutating
/// operation runs as a single unit of work, so balances and stored
/// transactions can never drift apart through a partial failure.
///
/// Operations are split across `accounts.rs` and `transactions.rs`; the
/// balance mutation itself lives in `engine.rs`.
pub(crate) struct Ledger {
    db: Database,
    rates: Box<dyn RateSource>,
    currencies: CurrencyCodes,
}

impl Ledger {
    pub(crate) fn new(db: Database, rates: Box<dyn RateSource>, currencies: CurrencyCodes) -> Self {
        Self {
            db,
            rates,
            currencies,
        }
    }

    pub(crate) fn db_mut(&mut self) -> &mut Database {
        &mut self.db
    }
}
