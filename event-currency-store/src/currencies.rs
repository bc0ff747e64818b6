//! Built-in currency table.
//!
//! Stands in for the host platform's currency list. The rows mirror the
//! currencies the host shipped with; installs with a customised list can
//! extend the table at construction time.

use event_currency_types::{CurrencyCode, CurrencyInfo, CurrencyProvider};

const BUILTIN: &[(&str, &str, &str)] = &[
    ("AUD", "$", "Australian Dollar"),
    ("BRL", "R$", "Brazilian Real"),
    ("CAD", "$", "Canadian Dollar"),
    ("CHF", "CHF", "Swiss Franc"),
    ("CZK", "Kč", "Czech Koruna"),
    ("DKK", "kr", "Danish Krone"),
    ("EUR", "€", "Euro"),
    ("GBP", "£", "Pound Sterling"),
    ("HKD", "$", "Hong Kong Dollar"),
    ("HUF", "Ft", "Hungarian Forint"),
    ("ILS", "₪", "Israeli New Sheqel"),
    ("JPY", "¥", "Japanese Yen"),
    ("MXN", "$", "Mexican Peso"),
    ("NOK", "kr", "Norwegian Krone"),
    ("NZD", "$", "New Zealand Dollar"),
    ("PHP", "₱", "Philippine Peso"),
    ("PLN", "zł", "Polish Zloty"),
    ("SEK", "kr", "Swedish Krona"),
    ("SGD", "$", "Singapore Dollar"),
    ("THB", "฿", "Thai Baht"),
    ("TWD", "NT$", "Taiwan New Dollar"),
    ("USD", "$", "U.S. Dollar"),
];

/// In-process [`CurrencyProvider`] backed by a fixed list.
pub struct CurrencyTable {
    entries: Vec<CurrencyInfo>,
}

impl CurrencyTable {
    /// Table with the built-in currency list.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(code, symbol, name)| CurrencyInfo {
                // Static rows are known-valid three-letter codes.
                code: CurrencyCode::new(code).expect("builtin currency code"),
                symbol: (*symbol).to_string(),
                name: (*name).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Adds or replaces an entry, keeping display order stable.
    pub fn with_entry(mut self, info: CurrencyInfo) -> Self {
        match self.entries.iter_mut().find(|e| e.code == info.code) {
            Some(existing) => *existing = info,
            None => self.entries.push(info),
        }
        self
    }

    fn find(&self, code: &CurrencyCode) -> Option<&CurrencyInfo> {
        self.entries.iter().find(|e| &e.code == code)
    }
}

impl CurrencyProvider for CurrencyTable {
    fn symbol(&self, code: &CurrencyCode) -> Option<String> {
        self.find(code).map(|e| e.symbol.clone())
    }

    fn display_name(&self, code: &CurrencyCode) -> Option<String> {
        self.find(code).map(|e| e.name.clone())
    }

    fn list(&self) -> Vec<CurrencyInfo> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_symbols() {
        let table = CurrencyTable::builtin();
        let gbp = CurrencyCode::new("GBP").unwrap();
        assert_eq!(table.symbol(&gbp).as_deref(), Some("£"));
        assert_eq!(table.display_name(&gbp).as_deref(), Some("Pound Sterling"));
    }

    #[test]
    fn test_unknown_code_is_none() {
        let table = CurrencyTable::builtin();
        let xxx = CurrencyCode::new("XXX").unwrap();
        assert_eq!(table.symbol(&xxx), None);
    }

    #[test]
    fn test_with_entry_replaces_existing() {
        let usd = CurrencyCode::new("USD").unwrap();
        let table = CurrencyTable::builtin().with_entry(CurrencyInfo {
            code: usd.clone(),
            symbol: "US$".to_string(),
            name: "U.S. Dollar".to_string(),
        });
        assert_eq!(table.symbol(&usd).as_deref(), Some("US$"));
        assert_eq!(
            table.list().iter().filter(|e| e.code == usd).count(),
            1
        );
    }
}
