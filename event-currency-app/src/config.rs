//! Configuration loading from environment.

use std::env;

use event_currency_types::CurrencyCode;

/// Demo configuration.
pub struct Config {
    pub default_currency: CurrencyCode,
    pub multiple_bookings: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let default_currency = env::var("DEFAULT_CURRENCY")
            .unwrap_or_else(|_| "USD".to_string())
            .parse()?;

        let multiple_bookings = env::var("MULTIPLE_BOOKINGS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            default_currency,
            multiple_bookings,
        })
    }
}
