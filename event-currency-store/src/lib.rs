//! # Event Currency Store
//!
//! Concrete adapters for the ports in `event-currency-types`:
//!
//! - `memory` - dashmap-backed metadata store, static settings, and an
//!   in-memory booking host (used by the demo binary and integration tests)
//! - `sqlite` - sqlx adapter persisting event metadata (behind the `sqlite`
//!   feature)
//! - `currencies` - the built-in currency table

pub mod currencies;
pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use currencies::CurrencyTable;
pub use memory::{MemoryHost, MemoryMetadataStore, StaticSettings};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteMetadataStore;
