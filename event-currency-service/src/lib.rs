//! # Event Currency Service
//!
//! Application layer of the per-event currency override extension.
//!
//! ## Architecture
//!
//! - `service` - override lookup/persistence over the metadata store port
//! - `context` - per-operation propagation context carrying a resolved
//!   override from event-aware code to event-blind formatting code
//! - `format` - price formatting with symbol resolution and site-default
//!   fallback
//! - `hooks` - one typed trait per host extension point, a registry the
//!   host pipeline dispatches through, and this extension's handlers
//! - `notices` - degraded-mode admin notice when the booking system is
//!   absent
//!
//! The service is generic over the port traits, so stores and hosts are
//! injected at compile time.

pub mod context;
pub mod format;
pub mod hooks;
pub mod notices;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use context::PropagationContext;
pub use format::PriceFormatter;
pub use hooks::registry::HookRegistry;
pub use hooks::CurrencyPerEvent;
pub use notices::{AdminNotice, HostCapabilities};
pub use service::OverrideService;
