//! Admin booking-table extension points.
//!
//! The stock total column formats every row with the site default currency.
//! This extension swaps it for a currency-aware column so a table listing
//! bookings across events shows each row in its own event's currency.

use std::sync::Arc;

use async_trait::async_trait;

use event_currency_types::{
    BookingId, BookingProvider, CurrencyProvider, EventMetadataStore, SettingsProvider,
};

use crate::format::PriceFormatter;
use crate::service::OverrideService;

/// Column id of the host's stock total column.
pub const PRICE_COLUMN: &str = "booking_price";
/// Column id of the currency-aware replacement column.
pub const CURRENCY_PRICE_COLUMN: &str = "booking_currency_price";
/// Column id of the actions column, kept last in the table.
pub const ACTIONS_COLUMN: &str = "actions";

/// A column definition in the admin booking table template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub id: String,
    pub label: String,
}

impl TableColumn {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Extension point: the admin booking-table column set is being built.
#[async_trait]
pub trait BookingsTableColumnsFilter: Send + Sync {
    /// Adjusts the available column definitions.
    async fn filter_columns_template(&self, cols: Vec<TableColumn>) -> Vec<TableColumn>;

    /// Adjusts the column ids active for a concrete table render.
    async fn filter_active_columns(&self, cols: Vec<String>) -> Vec<String>;
}

/// Extension point: a cell of a registered column is being rendered.
#[async_trait]
pub trait BookingsTableCellRenderer: Send + Sync {
    /// The column this renderer produces cells for.
    fn column_id(&self) -> &'static str;

    /// Renders the cell for one booking. `current` is whatever earlier
    /// renderers (or the host) produced.
    async fn render_cell(&self, booking: BookingId, current: &str) -> String;
}

// ─────────────────────────────────────────────────────────────────────────────
// Handler
// ─────────────────────────────────────────────────────────────────────────────

/// Installs and renders the currency-aware total column.
pub struct CurrencyColumn<M, S, B, C>
where
    M: EventMetadataStore,
    S: SettingsProvider,
    B: BookingProvider,
    C: CurrencyProvider,
{
    pub(crate) service: Arc<OverrideService<M, S>>,
    pub(crate) bookings: Arc<B>,
    pub(crate) currencies: Arc<C>,
}

impl<M, S, B, C> CurrencyColumn<M, S, B, C>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
    C: CurrencyProvider + 'static,
{
    async fn override_total(&self, booking: BookingId) -> Option<String> {
        let event = self.bookings.event_for_booking(booking).await.ok().flatten()?;
        let code = self.service.effective_override(event).await?;
        match self.bookings.booking_total(booking).await {
            Ok(total) => Some(
                PriceFormatter::new(self.service.settings(), self.currencies.as_ref())
                    .format(total, Some(&code)),
            ),
            Err(err) => {
                tracing::warn!(%booking, error = %err, "could not read booking total");
                None
            }
        }
    }
}

#[async_trait]
impl<M, S, B, C> BookingsTableColumnsFilter for CurrencyColumn<M, S, B, C>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
    C: CurrencyProvider + 'static,
{
    async fn filter_columns_template(&self, cols: Vec<TableColumn>) -> Vec<TableColumn> {
        let mut cols: Vec<TableColumn> =
            cols.into_iter().filter(|c| c.id != PRICE_COLUMN).collect();
        cols.push(TableColumn::new(CURRENCY_PRICE_COLUMN, "Total"));
        cols
    }

    async fn filter_active_columns(&self, mut cols: Vec<String>) -> Vec<String> {
        if !cols.iter().any(|c| c == CURRENCY_PRICE_COLUMN) {
            cols.push(CURRENCY_PRICE_COLUMN.to_string());
        }
        // Keep actions as the rightmost column.
        if let Some(pos) = cols.iter().position(|c| c == ACTIONS_COLUMN) {
            let actions = cols.remove(pos);
            cols.push(actions);
        }
        cols
    }
}

#[async_trait]
impl<M, S, B, C> BookingsTableCellRenderer for CurrencyColumn<M, S, B, C>
where
    M: EventMetadataStore,
    S: SettingsProvider + 'static,
    B: BookingProvider + 'static,
    C: CurrencyProvider + 'static,
{
    fn column_id(&self) -> &'static str {
        CURRENCY_PRICE_COLUMN
    }

    async fn render_cell(&self, booking: BookingId, current: &str) -> String {
        if let Some(formatted) = self.override_total(booking).await {
            return formatted;
        }
        // No override (or a degraded lookup): the host's default-currency
        // formatting stands.
        match self.bookings.booking_total_formatted(booking).await {
            Ok(formatted) => formatted,
            Err(err) => {
                tracing::warn!(%booking, error = %err, "could not format booking total");
                current.to_string()
            }
        }
    }
}
