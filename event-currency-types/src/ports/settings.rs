//! Site settings port.

use crate::domain::{CurrencyCode, CurrencyFormatTemplate};

/// Option names used by the host's settings screen.
///
/// Preserved from existing installs so a compatibility adapter can map them
/// one-to-one onto the host's option table.
pub mod options {
    pub const DEFAULT_CURRENCY: &str = "dbem_bookings_currency";
    pub const CURRENCY_FORMAT: &str = "dbem_bookings_currency_format";
    pub const DECIMAL_POINT: &str = "dbem_bookings_currency_decimal_point";
    pub const THOUSANDS_SEP: &str = "dbem_bookings_currency_thousands_sep";
    pub const MULTIPLE_BOOKINGS: &str = "dbem_multiple_bookings";
}

/// Port for site-wide pricing settings. Read-only from this extension.
pub trait SettingsProvider: Send + Sync {
    /// The site default booking currency.
    fn default_currency(&self) -> CurrencyCode;

    /// The site-wide price format template.
    fn format_template(&self) -> CurrencyFormatTemplate;

    /// Whether multiple-bookings mode is enabled. When it is, per-event
    /// currency overrides are disabled entirely.
    fn multiple_bookings_enabled(&self) -> bool;
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for std::sync::Arc<T> {
    fn default_currency(&self) -> CurrencyCode {
        (**self).default_currency()
    }

    fn format_template(&self) -> CurrencyFormatTemplate {
        (**self).format_template()
    }

    fn multiple_bookings_enabled(&self) -> bool {
        (**self).multiple_bookings_enabled()
    }
}
