//! Domain models for the currency override extension.

pub mod currency;
pub mod event;
pub mod format;

pub use currency::{CurrencyCode, CurrencyInfo};
pub use event::{BookingId, EventId, TicketId};
pub use format::CurrencyFormatTemplate;
