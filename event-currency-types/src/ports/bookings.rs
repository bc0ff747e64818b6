//! Booking system port.
//!
//! The event/booking/ticket model is owned by the host; this extension only
//! resolves identifiers to the owning event and reads booking totals.

use crate::domain::{BookingId, EventId, TicketId};
use crate::error::StoreError;

/// Port onto the host's event/booking/ticket provider.
#[async_trait::async_trait]
pub trait BookingProvider: Send + Sync {
    /// Resolves the event a ticket belongs to.
    async fn event_for_ticket(&self, ticket: TicketId) -> Result<Option<EventId>, StoreError>;

    /// Resolves the event a booking was made against.
    async fn event_for_booking(&self, booking: BookingId) -> Result<Option<EventId>, StoreError>;

    /// Total price of a booking in minor units (cents, pence).
    async fn booking_total(&self, booking: BookingId) -> Result<i64, StoreError>;

    /// Total price of a booking as formatted by the host with the site
    /// default currency. Used verbatim when no override applies.
    async fn booking_total_formatted(&self, booking: BookingId) -> Result<String, StoreError>;
}
