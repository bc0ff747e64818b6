//! Explicit extension-point registry.
//!
//! Replaces the host's string-named hook broadcast: handlers register
//! against typed extension points, and the host pipeline dispatches through
//! the registry in registration order.

use std::collections::HashMap;

use serde_json::Value;

use event_currency_types::{BookingId, CurrencyCode, EventId, StoreError, TicketId};

use crate::context::PropagationContext;
use crate::hooks::admin::{BookingsTableCellRenderer, BookingsTableColumnsFilter, TableColumn};
use crate::hooks::form::{
    CurrencyFieldOptions, EventFormCurrencyField, EventSavedHook, EventSubmission,
};
use crate::hooks::gateway::{
    GatewayCurrencyResolver, PayPalChainedRequestFilter, PayPalVarsFilter,
};
use crate::hooks::pricing::{BookingSpacesFilter, FormattedPriceFilter, TicketPriceFilter};

/// Registry of extension-point handlers, dispatched in registration order.
#[derive(Default)]
pub struct HookRegistry {
    ticket_price: Vec<Box<dyn TicketPriceFilter>>,
    booking_spaces: Vec<Box<dyn BookingSpacesFilter>>,
    formatted_price: Vec<Box<dyn FormattedPriceFilter>>,
    table_columns: Vec<Box<dyn BookingsTableColumnsFilter>>,
    cell_renderers: Vec<Box<dyn BookingsTableCellRenderer>>,
    form_fields: Vec<Box<dyn EventFormCurrencyField>>,
    event_saved: Vec<Box<dyn EventSavedHook>>,
    gateway_currency: Vec<Box<dyn GatewayCurrencyResolver>>,
    paypal_vars: Vec<Box<dyn PayPalVarsFilter>>,
    paypal_chained: Vec<Box<dyn PayPalChainedRequestFilter>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn register_ticket_price(&mut self, handler: Box<dyn TicketPriceFilter>) {
        self.ticket_price.push(handler);
    }

    pub fn register_booking_spaces(&mut self, handler: Box<dyn BookingSpacesFilter>) {
        self.booking_spaces.push(handler);
    }

    pub fn register_formatted_price(&mut self, handler: Box<dyn FormattedPriceFilter>) {
        self.formatted_price.push(handler);
    }

    pub fn register_table_columns(&mut self, handler: Box<dyn BookingsTableColumnsFilter>) {
        self.table_columns.push(handler);
    }

    pub fn register_cell_renderer(&mut self, handler: Box<dyn BookingsTableCellRenderer>) {
        self.cell_renderers.push(handler);
    }

    pub fn register_form_field(&mut self, handler: Box<dyn EventFormCurrencyField>) {
        self.form_fields.push(handler);
    }

    pub fn register_event_saved(&mut self, handler: Box<dyn EventSavedHook>) {
        self.event_saved.push(handler);
    }

    pub fn register_gateway_currency(&mut self, handler: Box<dyn GatewayCurrencyResolver>) {
        self.gateway_currency.push(handler);
    }

    pub fn register_paypal_vars(&mut self, handler: Box<dyn PayPalVarsFilter>) {
        self.paypal_vars.push(handler);
    }

    pub fn register_paypal_chained(&mut self, handler: Box<dyn PayPalChainedRequestFilter>) {
        self.paypal_chained.push(handler);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch (called by the host pipeline)
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn ticket_price(
        &self,
        cx: &mut PropagationContext,
        ticket: TicketId,
        mut price_minor: i64,
    ) -> i64 {
        for handler in &self.ticket_price {
            price_minor = handler.filter_ticket_price(cx, ticket, price_minor).await;
        }
        price_minor
    }

    pub async fn booking_spaces(
        &self,
        cx: &mut PropagationContext,
        booking: BookingId,
        mut spaces: u32,
    ) -> u32 {
        for handler in &self.booking_spaces {
            spaces = handler.filter_booking_spaces(cx, booking, spaces).await;
        }
        spaces
    }

    pub async fn formatted_price(
        &self,
        cx: &mut PropagationContext,
        mut formatted: String,
        amount_minor: i64,
    ) -> String {
        for handler in &self.formatted_price {
            formatted = handler
                .filter_formatted_price(cx, &formatted, amount_minor)
                .await;
        }
        formatted
    }

    pub async fn table_columns_template(&self, mut cols: Vec<TableColumn>) -> Vec<TableColumn> {
        for handler in &self.table_columns {
            cols = handler.filter_columns_template(cols).await;
        }
        cols
    }

    pub async fn table_active_columns(&self, mut cols: Vec<String>) -> Vec<String> {
        for handler in &self.table_columns {
            cols = handler.filter_active_columns(cols).await;
        }
        cols
    }

    /// Renders a table cell through every renderer registered for the
    /// column. Columns with no renderer keep the host's value.
    pub async fn table_cell(&self, column: &str, booking: BookingId, current: String) -> String {
        let mut value = current;
        for renderer in &self.cell_renderers {
            if renderer.column_id() == column {
                value = renderer.render_cell(booking, &value).await;
            }
        }
        value
    }

    /// Selector contents for the event edit form; the last handler to
    /// supply contents wins.
    pub async fn event_form_currency_field(&self, event: EventId) -> Option<CurrencyFieldOptions> {
        let mut field = None;
        for handler in &self.form_fields {
            if let Some(options) = handler.currency_field(event).await {
                field = Some(options);
            }
        }
        field
    }

    pub async fn event_saved(&self, submission: &EventSubmission) -> Result<(), StoreError> {
        for handler in &self.event_saved {
            handler.event_saved(submission).await?;
        }
        Ok(())
    }

    pub async fn gateway_currency(
        &self,
        booking: BookingId,
        mut currency: CurrencyCode,
    ) -> CurrencyCode {
        for handler in &self.gateway_currency {
            currency = handler.resolve_currency(booking, currency).await;
        }
        currency
    }

    pub async fn paypal_vars(
        &self,
        booking: BookingId,
        mut vars: HashMap<String, String>,
    ) -> HashMap<String, String> {
        for handler in &self.paypal_vars {
            vars = handler.filter_vars(booking, vars).await;
        }
        vars
    }

    pub async fn paypal_chained_request(&self, booking: BookingId, mut request: Value) -> Value {
        for handler in &self.paypal_chained {
            request = handler.filter_request(booking, request).await;
        }
        request
    }
}
