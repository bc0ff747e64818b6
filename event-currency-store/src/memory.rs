//! In-memory adapters.
//!
//! `MemoryMetadataStore` is a real adapter (small installs, tests, the demo
//! binary); `MemoryHost` simulates the host booking platform so the full
//! pipeline can run without one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use event_currency_types::{
    BookingId, BookingProvider, CurrencyCode, CurrencyFormatTemplate, CurrencyProvider, EventId,
    EventMetadataStore, SettingsProvider, StoreError, TicketId,
};

use crate::currencies::CurrencyTable;

// ─────────────────────────────────────────────────────────────────────────────
// Metadata store
// ─────────────────────────────────────────────────────────────────────────────

/// Dashmap-backed [`EventMetadataStore`].
#[derive(Default)]
pub struct MemoryMetadataStore {
    entries: DashMap<(EventId, String), String>,
}

impl MemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventMetadataStore for MemoryMetadataStore {
    async fn get(&self, event: EventId, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .get(&(event, key.to_string()))
            .map(|v| v.value().clone()))
    }

    async fn set(&self, event: EventId, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .insert((event, key.to_string()), value.to_string());
        Ok(())
    }

    async fn delete(&self, event: EventId, key: &str) -> Result<(), StoreError> {
        self.entries.remove(&(event, key.to_string()));
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed [`SettingsProvider`] with a runtime-togglable multiple-bookings
/// flag (the host flips it from its settings screen).
pub struct StaticSettings {
    default_currency: CurrencyCode,
    template: CurrencyFormatTemplate,
    multiple_bookings: AtomicBool,
}

impl StaticSettings {
    pub fn new(default_currency: CurrencyCode, template: CurrencyFormatTemplate) -> Self {
        Self {
            default_currency,
            template,
            multiple_bookings: AtomicBool::new(false),
        }
    }

    /// Enables or disables multiple-bookings mode.
    pub fn set_multiple_bookings(&self, enabled: bool) {
        self.multiple_bookings.store(enabled, Ordering::Relaxed);
    }
}

impl Default for StaticSettings {
    /// Site defaults as the host ships them: USD, `@#` template.
    fn default() -> Self {
        Self::new(
            CurrencyCode::new("USD").expect("default currency code"),
            CurrencyFormatTemplate::default(),
        )
    }
}

impl SettingsProvider for StaticSettings {
    fn default_currency(&self) -> CurrencyCode {
        self.default_currency.clone()
    }

    fn format_template(&self) -> CurrencyFormatTemplate {
        self.template.clone()
    }

    fn multiple_bookings_enabled(&self) -> bool {
        self.multiple_bookings.load(Ordering::Relaxed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Booking host
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory booking platform: tickets and bookings attached to events,
/// with host-side default-currency formatting for booking totals.
pub struct MemoryHost {
    settings: Arc<StaticSettings>,
    currencies: Arc<CurrencyTable>,
    tickets: DashMap<TicketId, EventId>,
    bookings: DashMap<BookingId, (EventId, i64)>,
}

impl MemoryHost {
    pub fn new(settings: Arc<StaticSettings>, currencies: Arc<CurrencyTable>) -> Self {
        Self {
            settings,
            currencies,
            tickets: DashMap::new(),
            bookings: DashMap::new(),
        }
    }

    /// Registers a ticket belonging to an event.
    pub fn add_ticket(&self, event: EventId) -> TicketId {
        let ticket = TicketId::new();
        self.tickets.insert(ticket, event);
        ticket
    }

    /// Registers a booking with a total in minor units.
    pub fn add_booking(&self, event: EventId, total_minor: i64) -> BookingId {
        let booking = BookingId::new();
        self.bookings.insert(booking, (event, total_minor));
        booking
    }
}

#[async_trait]
impl BookingProvider for MemoryHost {
    async fn event_for_ticket(&self, ticket: TicketId) -> Result<Option<EventId>, StoreError> {
        Ok(self.tickets.get(&ticket).map(|e| *e.value()))
    }

    async fn event_for_booking(&self, booking: BookingId) -> Result<Option<EventId>, StoreError> {
        Ok(self.bookings.get(&booking).map(|b| b.value().0))
    }

    async fn booking_total(&self, booking: BookingId) -> Result<i64, StoreError> {
        self.bookings
            .get(&booking)
            .map(|b| b.value().1)
            .ok_or_else(|| StoreError::Backend(format!("unknown booking {booking}")))
    }

    async fn booking_total_formatted(&self, booking: BookingId) -> Result<String, StoreError> {
        let total = self.booking_total(booking).await?;
        let default = self.settings.default_currency();
        let symbol = self
            .currencies
            .symbol(&default)
            .unwrap_or_else(|| default.to_string());
        Ok(self.settings.format_template().render(total, &symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_currency_types::EVENT_CURRENCY_KEY;

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let store = MemoryMetadataStore::new();
        let event = EventId::new();

        store.set(event, EVENT_CURRENCY_KEY, "GBP").await.unwrap();
        let value = store.get(event, EVENT_CURRENCY_KEY).await.unwrap();
        assert_eq!(value.as_deref(), Some("GBP"));
    }

    #[tokio::test]
    async fn test_unknown_event_reads_empty() {
        let store = MemoryMetadataStore::new();
        let value = store.get(EventId::new(), EVENT_CURRENCY_KEY).await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_delete_clears_value() {
        let store = MemoryMetadataStore::new();
        let event = EventId::new();

        store.set(event, EVENT_CURRENCY_KEY, "EUR").await.unwrap();
        store.delete(event, EVENT_CURRENCY_KEY).await.unwrap();
        assert_eq!(store.get(event, EVENT_CURRENCY_KEY).await.unwrap(), None);

        // Deleting again is a no-op, not an error.
        store.delete(event, EVENT_CURRENCY_KEY).await.unwrap();
    }

    #[tokio::test]
    async fn test_host_formats_totals_with_site_default() {
        let settings = Arc::new(StaticSettings::default());
        let currencies = Arc::new(CurrencyTable::builtin());
        let host = MemoryHost::new(settings, currencies);

        let event = EventId::new();
        let booking = host.add_booking(event, 1000);

        assert_eq!(
            host.booking_total_formatted(booking).await.unwrap(),
            "$10.00"
        );
        assert_eq!(
            host.event_for_booking(booking).await.unwrap(),
            Some(event)
        );
    }
}
