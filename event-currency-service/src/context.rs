//! Per-operation propagation context.
//!
//! The host's formatted-price extension point receives only a bare amount -
//! the originating event or ticket is long gone by then. The override must
//! therefore be discovered earlier, while event context is still in hand,
//! and carried to the formatting point. The original carried it in an
//! unscoped process-wide variable; here it is a value the pipeline creates
//! fresh for each formatting/transaction operation and passes explicitly,
//! so one event's override cannot leak into another operation.
//!
//! State machine per operation:
//! `Idle -> Resolved(code) -> Consumed -> Idle`, or
//! `Idle -> Consumed -> Idle` when no override exists.

use event_currency_types::{CurrencyCode, EventId, EventMetadataStore, SettingsProvider};

use crate::service::OverrideService;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    Resolved(CurrencyCode),
    Consumed,
}

/// Carries a resolved override from event-aware code to event-blind code
/// within one logical operation.
#[derive(Debug, Default)]
pub struct PropagationContext {
    state: State,
}

impl PropagationContext {
    /// A fresh context in the `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the event's override and, if present, makes it the active
    /// code for the current operation. Returns the code that was resolved.
    ///
    /// Resolving an event with no override leaves the state untouched, so
    /// repeated resolutions for tickets of the same event are harmless.
    pub async fn resolve_for_event<M, S>(
        &mut self,
        service: &OverrideService<M, S>,
        event: EventId,
    ) -> Option<CurrencyCode>
    where
        M: EventMetadataStore,
        S: SettingsProvider,
    {
        let code = service.effective_override(event).await?;
        self.state = State::Resolved(code.clone());
        Some(code)
    }

    /// Takes the active code, if any.
    ///
    /// Returns `None` when nothing was resolved - callers fall back to the
    /// site default; this is not an error. A second consume within the same
    /// operation also yields `None`: one resolve pairs with at most one
    /// reformat.
    pub fn consume(&mut self) -> Option<CurrencyCode> {
        match std::mem::replace(&mut self.state, State::Consumed) {
            State::Resolved(code) => Some(code),
            State::Idle | State::Consumed => None,
        }
    }

    /// Returns the context to `Idle`. Must run before the same context is
    /// reused for an unrelated operation (e.g. the next table row).
    pub fn finish(&mut self) {
        self.state = State::Idle;
    }

    /// True when no operation is in flight.
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_without_resolve_is_empty() {
        let mut cx = PropagationContext::new();
        assert!(cx.is_idle());
        assert_eq!(cx.consume(), None);
        assert!(!cx.is_idle());
        cx.finish();
        assert!(cx.is_idle());
    }

    #[test]
    fn test_second_consume_is_empty() {
        let mut cx = PropagationContext::new();
        cx.state = State::Resolved(CurrencyCode::new("GBP").unwrap());
        assert_eq!(cx.consume().unwrap().as_str(), "GBP");
        assert_eq!(cx.consume(), None);
    }

    #[test]
    fn test_finish_discards_unconsumed_override() {
        let mut cx = PropagationContext::new();
        cx.state = State::Resolved(CurrencyCode::new("EUR").unwrap());
        cx.finish();
        assert_eq!(cx.consume(), None);
    }
}
