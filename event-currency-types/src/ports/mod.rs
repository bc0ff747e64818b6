//! Port traits (interfaces to the host platform and adapters).
//!
//! The service layer depends on these traits, not concrete implementations.
//! Every collaborator the original host platform supplied at runtime is a
//! trait here: the per-event metadata store, the booking system, site
//! settings, and the currency list.

mod bookings;
mod currencies;
mod metadata;
mod settings;

pub use bookings::BookingProvider;
pub use currencies::CurrencyProvider;
pub use metadata::{EventMetadataStore, EVENT_CURRENCY_KEY};
pub use settings::{options, SettingsProvider};
