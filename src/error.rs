use thiserror::Error;

/// Domain failures surfaced to whatever sits in front of the ledger.
///
/// Every variant maps to a client-visible outcome: `NotFound` -> not found,
/// `AlreadyExists`/`CannotDelete` -> conflict, `Validation` -> bad request.
/// Storage errors pass through untyped.
#[derive(Error, Debug)]
pub(crate) enum LedgerError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Account with name {0} already exists.")]
    AlreadyExists(String),

    #[error("Account cannot be deleted since it has transactions associated with it.")]
    CannotDelete,

    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("No exchange rate available for {base} -> {target}.")]
    ConversionUnavailable { base: String, target: String },

    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl LedgerError {
    pub(crate) fn account_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Account",
            id: name.into(),
        }
    }

    pub(crate) fn transaction_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "Transaction",
            id: id.to_string(),
        }
    }
}

pub(crate) type LedgerResult<T> = Result<T, LedgerError>;
