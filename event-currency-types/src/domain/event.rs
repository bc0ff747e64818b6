//! Identifiers for host-owned entities.
//!
//! Events, bookings, and tickets are owned by the host booking platform;
//! this extension only ever holds their identifiers and resolves them
//! through the [`BookingProvider`](crate::ports::BookingProvider) port.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! host_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

host_id! {
    /// Unique identifier for a host event. Overrides are keyed by this.
    EventId
}

host_id! {
    /// Unique identifier for a host booking.
    BookingId
}

host_id! {
    /// Unique identifier for a single ticket within an event.
    TicketId
}
