//! Typed extension points.
//!
//! The original host dispatched string-named hooks by broadcast; here every
//! extension point is a trait, and [`registry::HookRegistry`] invokes the
//! registered handlers in registration order. Handlers pass values through
//! unmodified whenever no override applies.

pub mod admin;
pub mod form;
pub mod gateway;
pub mod plugin;
pub mod pricing;
pub mod registry;

pub use admin::{BookingsTableCellRenderer, BookingsTableColumnsFilter, TableColumn};
pub use form::{CurrencyFieldOptions, EventFormCurrencyField, EventSavedHook, EventSubmission};
pub use gateway::{GatewayCurrencyResolver, PayPalChainedRequestFilter, PayPalVarsFilter};
pub use plugin::CurrencyPerEvent;
pub use pricing::{BookingSpacesFilter, FormattedPriceFilter, TicketPriceFilter};
pub use registry::HookRegistry;
