//! Payment gateway extension points.
//!
//! Gateways receive the booking, so event context is available here and the
//! override is resolved directly without the propagation context. Every
//! handler passes the payload through unchanged when no override applies
//! (including under multiple-bookings mode).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use event_currency_types::{
    BookingId, BookingProvider, CurrencyCode, EventMetadataStore, SettingsProvider,
};

use crate::service::OverrideService;

/// Variable name carrying the currency in a PayPal checkout vars map.
pub const PAYPAL_CURRENCY_VAR: &str = "currency_code";
/// Field group holding payment details in a PayPal Chained request body.
pub const PAYPAL_CHAINED_FIELDS: &str = "PayRequestFields";
/// Currency field within [`PAYPAL_CHAINED_FIELDS`].
pub const PAYPAL_CHAINED_CURRENCY: &str = "CurrencyCode";

/// Extension point: a gateway asks for the transaction currency as a bare
/// value (the Sage integration works this way).
#[async_trait]
pub trait GatewayCurrencyResolver: Send + Sync {
    async fn resolve_currency(&self, booking: BookingId, current: CurrencyCode) -> CurrencyCode;
}

/// Extension point: the PayPal checkout vars map is being built.
#[async_trait]
pub trait PayPalVarsFilter: Send + Sync {
    async fn filter_vars(
        &self,
        booking: BookingId,
        vars: HashMap<String, String>,
    ) -> HashMap<String, String>;
}

/// Extension point: the PayPal Chained payments request body is being built.
#[async_trait]
pub trait PayPalChainedRequestFilter: Send + Sync {
    async fn filter_request(&self, booking: BookingId, request: Value) -> Value;
}

// ─────────────────────────────────────────────────────────────────────────────
// Handler
// ─────────────────────────────────────────────────────────────────────────────

/// Rewrites gateway currency fields for bookings on overridden events.
pub struct GatewayOverrides<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    B: BookingProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
    pub(crate) bookings: Arc<B>,
}

impl<M, S, B> GatewayOverrides<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
{
    async fn override_for_booking(&self, booking: BookingId) -> Option<CurrencyCode> {
        let event = match self.bookings.event_for_booking(booking).await {
            Ok(event) => event?,
            Err(err) => {
                tracing::warn!(%booking, error = %err, "could not resolve booking's event");
                return None;
            }
        };
        self.service.effective_override(event).await
    }
}

#[async_trait]
impl<M, S, B> GatewayCurrencyResolver for GatewayOverrides<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
{
    async fn resolve_currency(&self, booking: BookingId, current: CurrencyCode) -> CurrencyCode {
        self.override_for_booking(booking).await.unwrap_or(current)
    }
}

#[async_trait]
impl<M, S, B> PayPalVarsFilter for GatewayOverrides<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
{
    async fn filter_vars(
        &self,
        booking: BookingId,
        mut vars: HashMap<String, String>,
    ) -> HashMap<String, String> {
        if let Some(code) = self.override_for_booking(booking).await {
            vars.insert(PAYPAL_CURRENCY_VAR.to_string(), code.to_string());
        }
        vars
    }
}

#[async_trait]
impl<M, S, B> PayPalChainedRequestFilter for GatewayOverrides<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
{
    async fn filter_request(&self, booking: BookingId, mut request: Value) -> Value {
        if let Some(code) = self.override_for_booking(booking).await {
            if let Value::Object(body) = &mut request {
                let fields = body
                    .entry(PAYPAL_CHAINED_FIELDS)
                    .or_insert_with(|| Value::Object(Default::default()));
                if let Value::Object(fields) = fields {
                    fields.insert(
                        PAYPAL_CHAINED_CURRENCY.to_string(),
                        Value::String(code.to_string()),
                    );
                }
            }
        }
        request
    }
}
