//! Override service.
//!
//! Orchestrates override lookup and persistence through the metadata store
//! port. Contains no host or IO specifics - pure orchestration.

use event_currency_types::{
    CurrencyCode, EventId, EventMetadataStore, SettingsProvider, StoreError, EVENT_CURRENCY_KEY,
};

/// Service for reading and writing per-event currency overrides.
///
/// Generic over the metadata store and settings ports - adapters are
/// injected at compile time, and tests run against in-memory fakes.
pub struct OverrideService<M: EventMetadataStore, S: SettingsProvider> {
    meta: M,
    settings: S,
}

impl<M: EventMetadataStore, S: SettingsProvider> OverrideService<M, S> {
    pub fn new(meta: M, settings: S) -> Self {
        Self { meta, settings }
    }

    /// Returns a reference to the settings port.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// The override in effect for an event.
    ///
    /// `Ok(None)` when no override is stored, when the stored value is
    /// malformed (logged and ignored), or when multiple-bookings mode is
    /// active - the mode disables per-event overrides entirely and is
    /// checked before the store is consulted.
    pub async fn get_override(&self, event: EventId) -> Result<Option<CurrencyCode>, StoreError> {
        if self.settings.multiple_bookings_enabled() {
            return Ok(None);
        }
        self.stored_override(event).await
    }

    /// The stored override, ignoring the multiple-bookings mask.
    ///
    /// The event edit form shows the stored selection even while the mode
    /// keeps it from taking effect.
    pub async fn stored_override(
        &self,
        event: EventId,
    ) -> Result<Option<CurrencyCode>, StoreError> {
        let raw = self.meta.get(event, EVENT_CURRENCY_KEY).await?;
        Ok(raw.and_then(|value| match CurrencyCode::new(&value) {
            Ok(code) => Some(code),
            Err(_) => {
                tracing::warn!(%event, value, "ignoring malformed stored currency override");
                None
            }
        }))
    }

    /// The override in effect, swallowing store failures.
    ///
    /// Display and gateway paths must always fall back to the site default
    /// rather than fail a render, so store errors are logged and treated as
    /// "no override".
    pub async fn effective_override(&self, event: EventId) -> Option<CurrencyCode> {
        match self.get_override(event).await {
            Ok(code) => code,
            Err(err) => {
                tracing::warn!(%event, error = %err, "override lookup failed; using site default");
                None
            }
        }
    }

    /// Stores or clears the override for an event.
    ///
    /// `None` clears any stored value. The caller must already hold edit
    /// permission on the event; no authorization happens here.
    pub async fn set_override(
        &self,
        event: EventId,
        code: Option<&CurrencyCode>,
    ) -> Result<(), StoreError> {
        match code {
            Some(code) => self.meta.set(event, EVENT_CURRENCY_KEY, code.as_str()).await,
            None => self.meta.delete(event, EVENT_CURRENCY_KEY).await,
        }
    }
}
