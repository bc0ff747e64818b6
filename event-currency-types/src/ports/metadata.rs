//! Per-event metadata store port.
//!
//! The host keeps free-form string metadata per event. This extension
//! persists exactly one field through it.

use crate::domain::EventId;
use crate::error::StoreError;

/// Metadata key the override is stored under.
///
/// Kept byte-for-byte compatible with existing installs; do not rename.
pub const EVENT_CURRENCY_KEY: &str = "star_em_event_currency";

/// Port for the host's per-event key-value store.
///
/// Implementations must treat an unknown event as an empty read, never an
/// error. Write authorization (edit permission on the event) is the
/// caller's responsibility; adapters do not check it.
#[async_trait::async_trait]
pub trait EventMetadataStore: Send + Sync + 'static {
    /// Reads a metadata value. Unknown event or unset key yields `None`.
    async fn get(&self, event: EventId, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a metadata value, replacing any previous one for the key.
    async fn set(&self, event: EventId, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes a metadata value. Deleting an absent key is a no-op.
    async fn delete(&self, event: EventId, key: &str) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<T: EventMetadataStore + ?Sized> EventMetadataStore for std::sync::Arc<T> {
    async fn get(&self, event: EventId, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(event, key).await
    }

    async fn set(&self, event: EventId, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(event, key, value).await
    }

    async fn delete(&self, event: EventId, key: &str) -> Result<(), StoreError> {
        (**self).delete(event, key).await
    }
}
