//! Event edit form extension points.
//!
//! The form surface is data-only: the host renders the markup, this
//! extension supplies the currency selector's contents and persists the
//! submitted choice.

use std::sync::Arc;

use async_trait::async_trait;

use event_currency_types::{
    CurrencyCode, CurrencyInfo, CurrencyProvider, EventId, EventMetadataStore, SettingsProvider,
    StoreError,
};

use crate::service::OverrideService;

/// Contents of the currency selector on the event edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFieldOptions {
    /// The site default, shown as the "use default" choice.
    pub default: CurrencyInfo,
    /// All selectable currencies, in the host's display order.
    pub choices: Vec<CurrencyInfo>,
    /// The currently stored override, if any.
    pub selected: Option<CurrencyCode>,
}

/// Extension point: the event edit form is being assembled.
#[async_trait]
pub trait EventFormCurrencyField: Send + Sync {
    /// Selector contents for the event, or `None` when the field is
    /// suppressed (multiple-bookings mode disables per-event currencies).
    async fn currency_field(&self, event: EventId) -> Option<CurrencyFieldOptions>;
}

/// An event edit submission, as relayed by the host after its nonce and
/// capability checks passed.
#[derive(Debug, Clone)]
pub struct EventSubmission {
    pub event: EventId,
    /// Submitted currency selection. Missing or empty clears the override.
    pub currency: Option<String>,
    /// True when the host is saving a revision rather than the event itself.
    pub is_revision: bool,
}

/// Extension point: an authorized event edit was saved.
#[async_trait]
pub trait EventSavedHook: Send + Sync {
    async fn event_saved(&self, submission: &EventSubmission) -> Result<(), StoreError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Builds the currency selector contents.
pub struct CurrencyField<M, S, C>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    C: CurrencyProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
    pub(crate) currencies: Arc<C>,
}

#[async_trait]
impl<M, S, C> EventFormCurrencyField for CurrencyField<M, S, C>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    C: CurrencyProvider + 'static,
{
    async fn currency_field(&self, event: EventId) -> Option<CurrencyFieldOptions> {
        let settings = self.service.settings();
        if settings.multiple_bookings_enabled() {
            return None;
        }

        let default_code = settings.default_currency();
        let default = CurrencyInfo {
            symbol: self
                .currencies
                .symbol(&default_code)
                .unwrap_or_else(|| default_code.to_string()),
            name: self
                .currencies
                .display_name(&default_code)
                .unwrap_or_else(|| default_code.to_string()),
            code: default_code,
        };

        // The form shows the stored selection even when a store hiccup
        // would hide it from price display.
        let selected = match self.service.stored_override(event).await {
            Ok(selected) => selected,
            Err(err) => {
                tracing::warn!(%event, error = %err, "could not read stored override for form");
                None
            }
        };

        Some(CurrencyFieldOptions {
            default,
            choices: self.currencies.list(),
            selected,
        })
    }
}

/// Persists the submitted currency selection.
pub struct SaveSubmission<M, S>
where
    M: EventMetadataStore,
    S: SettingsProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
}

#[async_trait]
impl<M, S> EventSavedHook for SaveSubmission<M, S>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
{
    async fn event_saved(&self, submission: &EventSubmission) -> Result<(), StoreError> {
        if submission.is_revision {
            return Ok(());
        }

        match submission.currency.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => {
                let code = CurrencyCode::new(raw)?;
                self.service.set_override(submission.event, Some(&code)).await
            }
            None => self.service.set_override(submission.event, None).await,
        }
    }
}
