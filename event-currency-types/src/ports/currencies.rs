//! Currency list port.

use crate::domain::{CurrencyCode, CurrencyInfo};

/// Port onto the host's currency list: symbols and display names.
pub trait CurrencyProvider: Send + Sync {
    /// Display symbol for a code, if the host knows the currency.
    fn symbol(&self, code: &CurrencyCode) -> Option<String>;

    /// Human-readable name for a code.
    fn display_name(&self, code: &CurrencyCode) -> Option<String>;

    /// The full list, in the host's display order.
    fn list(&self) -> Vec<CurrencyInfo>;
}
