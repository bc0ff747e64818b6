//! Price formatting with symbol resolution.

use event_currency_types::{CurrencyCode, CurrencyProvider, SettingsProvider};

/// Formats prices using the site template, resolving currency symbols
/// through the currency port.
///
/// An absent or unresolvable currency code falls back to the site default
/// currency and its symbol; a default currency missing from the currency
/// list falls back to the code text itself.
pub struct PriceFormatter<'a, S: SettingsProvider, C: CurrencyProvider> {
    settings: &'a S,
    currencies: &'a C,
}

impl<'a, S: SettingsProvider, C: CurrencyProvider> PriceFormatter<'a, S, C> {
    pub fn new(settings: &'a S, currencies: &'a C) -> Self {
        Self {
            settings,
            currencies,
        }
    }

    /// Renders an amount in minor units in the given currency, or in the
    /// site default when `code` is `None`.
    pub fn format(&self, amount_minor: i64, code: Option<&CurrencyCode>) -> String {
        let symbol = match code {
            Some(code) => match self.currencies.symbol(code) {
                Some(symbol) => symbol,
                None => {
                    tracing::warn!(%code, "no symbol for currency; using site default");
                    self.default_symbol()
                }
            },
            None => self.default_symbol(),
        };
        self.settings.format_template().render(amount_minor, &symbol)
    }

    fn default_symbol(&self) -> String {
        let default = self.settings.default_currency();
        self.currencies
            .symbol(&default)
            .unwrap_or_else(|| default.to_string())
    }
}
