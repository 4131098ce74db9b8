use rust_decimal::Decimal;

/// A single-currency account. The name is the identity; the stored balance
/// is the signed sum of every posted transaction's converted effect.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Account {
    pub name: String,
    pub balance: Decimal,
    pub currency: String,
    pub created_at: String,
}

impl Account {
    pub(crate) fn new(name: String, balance: Decimal, currency: String) -> Self {
        Self {
            name,
            balance,
            currency: currency.to_uppercase(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {} {}", self.name, self.balance, self.currency)
    }
}
