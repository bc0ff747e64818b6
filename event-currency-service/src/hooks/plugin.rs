//! Plugin wiring: builds the handlers and registers them.

use std::sync::Arc;

use event_currency_types::{
    BookingProvider, CurrencyProvider, EventMetadataStore, SettingsProvider,
};

use crate::hooks::admin::CurrencyColumn;
use crate::hooks::form::{CurrencyField, SaveSubmission};
use crate::hooks::gateway::GatewayOverrides;
use crate::hooks::pricing::{BookingSpacesResolver, OverrideFormatter, TicketPriceResolver};
use crate::hooks::registry::HookRegistry;
use crate::notices::{missing_host_notice, AdminNotice, HostCapabilities};
use crate::service::OverrideService;

/// The per-event currency override plugin.
///
/// Holds the service and the host-facing ports, and registers one handler
/// per extension point it extends.
pub struct CurrencyPerEvent<M, S, B, C>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    B: BookingProvider,
    C: CurrencyProvider,
{
    service: Arc<OverrideService<M, S>>,
    bookings: Arc<B>,
    currencies: Arc<C>,
}

impl<M, S, B, C> CurrencyPerEvent<M, S, B, C>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
    C: CurrencyProvider + 'static,
{
    pub fn new(
        service: Arc<OverrideService<M, S>>,
        bookings: Arc<B>,
        currencies: Arc<C>,
    ) -> Self {
        Self {
            service,
            bookings,
            currencies,
        }
    }

    /// Registers every handler against the registry.
    ///
    /// When the host reports the booking system absent, nothing is
    /// registered and the admin notice to display is returned - a degraded
    /// but safe state in which no handler ever runs.
    pub fn register(
        &self,
        registry: &mut HookRegistry,
        host: HostCapabilities,
    ) -> Option<AdminNotice> {
        if !host.booking_hooks_available {
            return Some(missing_host_notice());
        }

        registry.register_ticket_price(Box::new(TicketPriceResolver {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
        }));
        registry.register_booking_spaces(Box::new(BookingSpacesResolver {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
        }));
        registry.register_formatted_price(Box::new(OverrideFormatter {
            service: self.service.clone(),
            currencies: self.currencies.clone(),
        }));

        registry.register_table_columns(Box::new(CurrencyColumn {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
            currencies: self.currencies.clone(),
        }));
        registry.register_cell_renderer(Box::new(CurrencyColumn {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
            currencies: self.currencies.clone(),
        }));

        registry.register_form_field(Box::new(CurrencyField {
            service: self.service.clone(),
            currencies: self.currencies.clone(),
        }));
        registry.register_event_saved(Box::new(SaveSubmission {
            service: self.service.clone(),
        }));

        // One shared handler type covers the three gateway integrations.
        registry.register_gateway_currency(Box::new(GatewayOverrides {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
        }));
        registry.register_paypal_vars(Box::new(GatewayOverrides {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
        }));
        registry.register_paypal_chained(Box::new(GatewayOverrides {
            service: self.service.clone(),
            bookings: self.bookings.clone(),
        }));

        None
    }
}
