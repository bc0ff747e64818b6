//! OverrideService and PriceFormatter unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use event_currency_types::{
        CurrencyCode, CurrencyFormatTemplate, CurrencyInfo, CurrencyProvider, EventId,
        EventMetadataStore, SettingsProvider, StoreError, EVENT_CURRENCY_KEY,
    };

    use crate::context::PropagationContext;
    use crate::format::PriceFormatter;
    use crate::service::OverrideService;

    /// In-memory metadata store with read-failure injection.
    pub struct MockStore {
        entries: Mutex<HashMap<(EventId, String), String>>,
        fail_reads: AtomicBool,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail_reads: AtomicBool::new(false),
            }
        }

        pub fn fail_reads(&self) {
            self.fail_reads.store(true, Ordering::Relaxed);
        }
    }

    #[async_trait]
    impl EventMetadataStore for MockStore {
        async fn get(&self, event: EventId, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads.load(Ordering::Relaxed) {
                return Err(StoreError::Backend("injected read failure".into()));
            }
            Ok(self
                .entries
                .lock()
                .unwrap()
                .get(&(event, key.to_string()))
                .cloned())
        }

        async fn set(&self, event: EventId, key: &str, value: &str) -> Result<(), StoreError> {
            self.entries
                .lock()
                .unwrap()
                .insert((event, key.to_string()), value.to_string());
            Ok(())
        }

        async fn delete(&self, event: EventId, key: &str) -> Result<(), StoreError> {
            self.entries.lock().unwrap().remove(&(event, key.to_string()));
            Ok(())
        }
    }

    pub struct MockSettings {
        multiple_bookings: AtomicBool,
    }

    impl MockSettings {
        pub fn new() -> Self {
            Self {
                multiple_bookings: AtomicBool::new(false),
            }
        }

        pub fn enable_multiple_bookings(&self) {
            self.multiple_bookings.store(true, Ordering::Relaxed);
        }
    }

    impl SettingsProvider for MockSettings {
        fn default_currency(&self) -> CurrencyCode {
            CurrencyCode::new("USD").unwrap()
        }

        fn format_template(&self) -> CurrencyFormatTemplate {
            CurrencyFormatTemplate::default()
        }

        fn multiple_bookings_enabled(&self) -> bool {
            self.multiple_bookings.load(Ordering::Relaxed)
        }
    }

    pub struct MockCurrencies;

    impl CurrencyProvider for MockCurrencies {
        fn symbol(&self, code: &CurrencyCode) -> Option<String> {
            match code.as_str() {
                "USD" => Some("$".to_string()),
                "GBP" => Some("£".to_string()),
                "EUR" => Some("€".to_string()),
                _ => None,
            }
        }

        fn display_name(&self, code: &CurrencyCode) -> Option<String> {
            match code.as_str() {
                "USD" => Some("U.S. Dollar".to_string()),
                "GBP" => Some("Pound Sterling".to_string()),
                "EUR" => Some("Euro".to_string()),
                _ => None,
            }
        }

        fn list(&self) -> Vec<CurrencyInfo> {
            ["USD", "GBP", "EUR"]
                .into_iter()
                .map(|c| {
                    let code = CurrencyCode::new(c).unwrap();
                    CurrencyInfo {
                        symbol: self.symbol(&code).unwrap(),
                        name: self.display_name(&code).unwrap(),
                        code,
                    }
                })
                .collect()
        }
    }

    fn gbp() -> CurrencyCode {
        CurrencyCode::new("GBP").unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Override store behaviour
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let service = OverrideService::new(MockStore::new(), MockSettings::new());
        let event = EventId::new();

        service.set_override(event, Some(&gbp())).await.unwrap();
        assert_eq!(service.get_override(event).await.unwrap(), Some(gbp()));
    }

    #[tokio::test]
    async fn test_clearing_removes_override() {
        let service = OverrideService::new(MockStore::new(), MockSettings::new());
        let event = EventId::new();

        service.set_override(event, Some(&gbp())).await.unwrap();
        service.set_override(event, None).await.unwrap();
        assert_eq!(service.get_override(event).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_event_has_no_override() {
        let service = OverrideService::new(MockStore::new(), MockSettings::new());
        assert_eq!(service.get_override(EventId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_multiple_bookings_masks_stored_override() {
        let store = MockStore::new();
        let settings = MockSettings::new();
        settings.enable_multiple_bookings();
        let service = OverrideService::new(store, settings);
        let event = EventId::new();

        // Stored "EUR" but the mode is on: lookup must come back empty.
        service
            .set_override(event, Some(&CurrencyCode::new("EUR").unwrap()))
            .await
            .unwrap();
        assert_eq!(service.get_override(event).await.unwrap(), None);

        // The edit form still sees the stored value.
        assert_eq!(
            service.stored_override(event).await.unwrap(),
            Some(CurrencyCode::new("EUR").unwrap())
        );
    }

    #[tokio::test]
    async fn test_malformed_stored_value_reads_as_absent() {
        let store = MockStore::new();
        let event = EventId::new();
        store.set(event, EVENT_CURRENCY_KEY, "pounds").await.unwrap();

        let service = OverrideService::new(store, MockSettings::new());
        assert_eq!(service.get_override(event).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_effective_override_swallows_store_failure() {
        let store = MockStore::new();
        store.fail_reads();
        let service = OverrideService::new(store, MockSettings::new());

        assert_eq!(service.effective_override(EventId::new()).await, None);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Context round trip
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_resolve_then_consume_returns_stored_code() {
        let service = OverrideService::new(MockStore::new(), MockSettings::new());
        let event = EventId::new();
        service.set_override(event, Some(&gbp())).await.unwrap();

        let mut cx = PropagationContext::new();
        assert_eq!(cx.resolve_for_event(&service, event).await, Some(gbp()));
        assert_eq!(cx.consume(), Some(gbp()));
        cx.finish();
        assert!(cx.is_idle());
    }

    #[tokio::test]
    async fn test_resolve_without_override_leaves_context_empty() {
        let service = OverrideService::new(MockStore::new(), MockSettings::new());

        let mut cx = PropagationContext::new();
        assert_eq!(cx.resolve_for_event(&service, EventId::new()).await, None);
        assert_eq!(cx.consume(), None);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Price formatting
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_format_falls_back_to_site_default() {
        let settings = MockSettings::new();
        let formatter = PriceFormatter::new(&settings, &MockCurrencies);
        // Scenario: default "USD", no override, 10.00.
        assert_eq!(formatter.format(1000, None), "$10.00");
    }

    #[test]
    fn test_format_with_override_currency() {
        let settings = MockSettings::new();
        let formatter = PriceFormatter::new(&settings, &MockCurrencies);
        // Scenario: "GBP" override, template "@#", 1234.50.
        assert_eq!(formatter.format(123_450, Some(&gbp())), "£1,234.50");
    }

    #[test]
    fn test_format_unresolvable_code_uses_default_symbol() {
        let settings = MockSettings::new();
        let formatter = PriceFormatter::new(&settings, &MockCurrencies);
        let unknown = CurrencyCode::new("XXX").unwrap();
        assert_eq!(formatter.format(1000, Some(&unknown)), "$10.00");
    }
}
