use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;

/// Exchange-rate lookup, one rate per ordered currency pair. `None` means the
/// pair is unknown or the source is unreachable; callers decide what that
/// costs them. Codes are matched case-insensitively.
pub(crate) trait RateSource {
    fn rate(&self, base: &str, target: &str) -> Option<Decimal>;
}

/// A fixed rate table, keyed by lowercase (base, target) pairs. Serves as the
/// in-process stand-in for a live rate API: load it from a JSON file shaped
/// like `{"eur": {"usd": 1.2}}` or build it up in code.
#[derive(Default)]
pub(crate) struct StaticRates {
    rates: HashMap<(String, String), Decimal>,
}

impl StaticRates {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_rate(mut self, base: &str, target: &str, rate: Decimal) -> Self {
        self.set(base, target, rate);
        self
    }

    pub(crate) fn set(&mut self, base: &str, target: &str, rate: Decimal) {
        self.rates
            .insert((base.to_lowercase(), target.to_lowercase()), rate);
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open rate table: {}", path.display()))?;
        let parsed: HashMap<String, HashMap<String, Decimal>> =
            serde_json::from_reader(file).context("Failed to parse rate table")?;

        let mut table = Self::new();
        for (base, targets) in parsed {
            for (target, rate) in targets {
                table.set(&base, &target, rate);
            }
        }
        Ok(table)
    }

    pub(crate) fn len(&self) -> usize {
        self.rates.len()
    }
}

impl RateSource for StaticRates {
    fn rate(&self, base: &str, target: &str) -> Option<Decimal> {
        self.rates
            .get(&(base.to_lowercase(), target.to_lowercase()))
            .copied()
    }
}
