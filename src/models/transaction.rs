use rust_decimal::Decimal;

/// Direction of a transaction's effect on its account balance.
/// The amount itself is always positive; direction lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// The kind that undoes a previously applied effect.
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Credit => Self::Debit,
            Self::Debit => Self::Credit,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CREDIT" => Some(Self::Credit),
            "DEBIT" => Some(Self::Debit),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub id: Option<i64>,
    pub kind: TransactionKind,
    /// Name of the owning account (foreign key).
    pub account_name: String,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: String,
}

impl Transaction {
    pub(crate) fn new(
        kind: TransactionKind,
        account_name: String,
        description: String,
        amount: Decimal,
        currency: String,
    ) -> Self {
        Self {
            id: None,
            kind,
            account_name,
            description,
            amount,
            currency: currency.to_uppercase(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
