mod rates;

pub(crate) use rates::{RateSource, StaticRates};

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::io::Read;

/// Reference set of currency codes used to validate account and transaction
/// input. Starts from an embedded ISO-style list so validation never runs
/// against an empty set; a refresh from an external source replaces the set
/// wholesale, and a failed refresh leaves the previous set in place.
pub(crate) struct CurrencyCodes {
    codes: HashSet<String>,
}

/// Embedded fallback list. A refresh from a live source may widen it.
const BUILTIN_CODES: &[&str] = &[
    "AED", "ARS", "AUD", "BGN", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK", "DKK", "EGP",
    "EUR", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "ISK", "JPY", "KRW", "KWD", "MAD", "MXN",
    "MYR", "NGN", "NOK", "NZD", "PEN", "PHP", "PKR", "PLN", "QAR", "RON", "RSD", "SAR", "SEK",
    "SGD", "THB", "TRY", "TWD", "UAH", "USD", "UYU", "VND", "ZAR",
];

impl CurrencyCodes {
    pub(crate) fn builtin() -> Self {
        Self {
            codes: BUILTIN_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Replaces the set from a JSON document mapping lowercase codes to
    /// display names (`{"usd": "US Dollar", ...}`), the shape public currency
    /// APIs serve. On any read or parse failure the current set survives.
    pub(crate) fn refresh_from_reader(&mut self, reader: impl Read) -> Result<usize> {
        let parsed: HashMap<String, String> =
            serde_json::from_reader(reader).context("Failed to parse currency code list")?;
        self.codes = parsed.keys().map(|c| c.to_uppercase()).collect();
        Ok(self.codes.len())
    }

    pub(crate) fn is_valid(&self, code: &str) -> bool {
        self.codes.contains(&code.to_uppercase())
    }
}
