//! # Event Currency Types
//!
//! Domain types and port traits for the per-event currency override
//! extension. This crate has ZERO external IO dependencies - only data
//! structures, validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (identifiers, currency codes, templates)
//! - `ports/` - Trait definitions the host platform and adapters implement
//! - `error/` - Domain and store error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{BookingId, CurrencyCode, CurrencyFormatTemplate, CurrencyInfo, EventId, TicketId};
pub use error::{DomainError, StoreError};
pub use ports::{
    BookingProvider, CurrencyProvider, EventMetadataStore, SettingsProvider, EVENT_CURRENCY_KEY,
};
