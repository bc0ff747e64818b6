//! Price display extension points.
//!
//! The first two points fire while ticket/booking context is still
//! available and only resolve the override into the propagation context;
//! the third fires later with a bare amount and consumes it.

use std::sync::Arc;

use async_trait::async_trait;

use event_currency_types::{
    BookingId, BookingProvider, CurrencyProvider, EventMetadataStore, SettingsProvider, TicketId,
};

use crate::context::PropagationContext;
use crate::format::PriceFormatter;
use crate::service::OverrideService;

/// Extension point: a ticket's list price is being retrieved.
#[async_trait]
pub trait TicketPriceFilter: Send + Sync {
    async fn filter_ticket_price(
        &self,
        cx: &mut PropagationContext,
        ticket: TicketId,
        price_minor: i64,
    ) -> i64;
}

/// Extension point: a ticket booking's spaces are being retrieved.
///
/// The original hooked this point because the booking price retrieval had
/// no usable hook; it keeps booking-summary paths (emails) covered, so it
/// is preserved here.
#[async_trait]
pub trait BookingSpacesFilter: Send + Sync {
    async fn filter_booking_spaces(
        &self,
        cx: &mut PropagationContext,
        booking: BookingId,
        spaces: u32,
    ) -> u32;
}

/// Extension point: the host has formatted a price with the site default
/// currency and offers the result for replacement.
#[async_trait]
pub trait FormattedPriceFilter: Send + Sync {
    async fn filter_formatted_price(
        &self,
        cx: &mut PropagationContext,
        preformatted: &str,
        amount_minor: i64,
    ) -> String;
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Resolves a ticket's event override into the context; the price itself
/// passes through untouched.
pub struct TicketPriceResolver<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    B: BookingProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
    pub(crate) bookings: Arc<B>,
}

#[async_trait]
impl<M, S, B> TicketPriceFilter for TicketPriceResolver<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
{
    async fn filter_ticket_price(
        &self,
        cx: &mut PropagationContext,
        ticket: TicketId,
        price_minor: i64,
    ) -> i64 {
        match self.bookings.event_for_ticket(ticket).await {
            Ok(Some(event)) => {
                cx.resolve_for_event(&self.service, event).await;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%ticket, error = %err, "could not resolve ticket's event");
            }
        }
        price_minor
    }
}

/// Resolves a booking's event override into the context; the spaces count
/// passes through untouched.
pub struct BookingSpacesResolver<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    B: BookingProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
    pub(crate) bookings: Arc<B>,
}

#[async_trait]
impl<M, S, B> BookingSpacesFilter for BookingSpacesResolver<M, S, B>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
{
    async fn filter_booking_spaces(
        &self,
        cx: &mut PropagationContext,
        booking: BookingId,
        spaces: u32,
    ) -> u32 {
        match self.bookings.event_for_booking(booking).await {
            Ok(Some(event)) => {
                cx.resolve_for_event(&self.service, event).await;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%booking, error = %err, "could not resolve booking's event");
            }
        }
        spaces
    }
}

/// Reformats the price with the override currency's symbol when one was
/// resolved earlier in the operation; otherwise returns the host's string
/// unchanged.
pub struct OverrideFormatter<M, S, C>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    C: CurrencyProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
    pub(crate) currencies: Arc<C>,
}

#[async_trait]
impl<M, S, C> FormattedPriceFilter for OverrideFormatter<M, S, C>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    C: CurrencyProvider + 'static,
{
    async fn filter_formatted_price(
        &self,
        cx: &mut PropagationContext,
        preformatted: &str,
        amount_minor: i64,
    ) -> String {
        match cx.consume() {
            Some(code) => PriceFormatter::new(self.service.settings(), self.currencies.as_ref())
                .format(amount_minor, Some(&code)),
            None => preformatted.to_string(),
        }
    }
}
