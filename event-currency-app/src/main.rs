//! # Event Currency Demo
//!
//! Wires the extension against the in-memory adapters and drives the same
//! pipeline a host platform would: registration, a price render, an admin
//! booking table, and a PayPal checkout payload.

mod config;

use std::collections::HashMap;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_currency_service::hooks::admin::{ACTIONS_COLUMN, CURRENCY_PRICE_COLUMN, PRICE_COLUMN, TableColumn};
use event_currency_service::hooks::form::EventSubmission;
use event_currency_service::hooks::gateway::{PAYPAL_CHAINED_CURRENCY, PAYPAL_CHAINED_FIELDS, PAYPAL_CURRENCY_VAR};
use event_currency_service::{
    CurrencyPerEvent, HookRegistry, HostCapabilities, OverrideService, PropagationContext,
};
use event_currency_store::{CurrencyTable, MemoryHost, MemoryMetadataStore, StaticSettings};
use event_currency_types::{
    CurrencyFormatTemplate, CurrencyProvider, EventId, SettingsProvider, TicketId,
};

type Service = OverrideService<MemoryMetadataStore, Arc<StaticSettings>>;

struct Demo {
    settings: Arc<StaticSettings>,
    currencies: Arc<CurrencyTable>,
    registry: HookRegistry,
}

impl Demo {
    /// One price render operation, as the host runs it: retrieve the price,
    /// format with the site default, offer the result for replacement.
    async fn render_ticket_price(&self, ticket: TicketId, amount_minor: i64) -> String {
        let mut cx = PropagationContext::new();
        let price = self.registry.ticket_price(&mut cx, ticket, amount_minor).await;

        let default = self.settings.default_currency();
        let symbol = self
            .currencies
            .symbol(&default)
            .unwrap_or_else(|| default.to_string());
        let host_formatted = self.settings.format_template().render(price, &symbol);

        let out = self.registry.formatted_price(&mut cx, host_formatted, price).await;
        cx.finish();
        out
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,event_currency_app=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(default = %config.default_currency, "starting event currency demo");

    // Wire the adapters and register the plugin.
    let settings = Arc::new(StaticSettings::new(
        config.default_currency,
        CurrencyFormatTemplate::default(),
    ));
    settings.set_multiple_bookings(config.multiple_bookings);
    let currencies = Arc::new(CurrencyTable::builtin());
    let host = Arc::new(MemoryHost::new(settings.clone(), currencies.clone()));
    let service: Arc<Service> = Arc::new(OverrideService::new(
        MemoryMetadataStore::new(),
        settings.clone(),
    ));

    let mut registry = HookRegistry::new();
    let plugin = CurrencyPerEvent::new(service.clone(), host.clone(), currencies.clone());
    if let Some(notice) = plugin.register(
        &mut registry,
        HostCapabilities {
            booking_hooks_available: true,
        },
    ) {
        tracing::error!(message = %notice.message, "host missing; nothing to demo");
        return Ok(());
    }

    let demo = Demo {
        settings,
        currencies,
        registry,
    };

    // Two events: a London workshop priced in GBP, a webinar on the site
    // default. The override lands through the same save path the event
    // editor uses.
    let workshop = EventId::new();
    let webinar = EventId::new();
    demo.registry
        .event_saved(&EventSubmission {
            event: workshop,
            currency: Some("GBP".to_string()),
            is_revision: false,
        })
        .await?;

    let workshop_ticket = host.add_ticket(workshop);
    let webinar_ticket = host.add_ticket(webinar);
    tracing::info!(
        workshop = %demo.render_ticket_price(workshop_ticket, 4500).await,
        webinar = %demo.render_ticket_price(webinar_ticket, 1500).await,
        "ticket prices"
    );

    // Admin booking table across both events.
    let cols = demo
        .registry
        .table_columns_template(vec![
            TableColumn::new("booking_date", "Date"),
            TableColumn::new(PRICE_COLUMN, "Total"),
        ])
        .await;
    let active = demo
        .registry
        .table_active_columns(vec!["booking_date".to_string(), ACTIONS_COLUMN.to_string()])
        .await;
    tracing::info!(?cols, ?active, "admin booking table layout");

    for (label, booking) in [
        ("workshop", host.add_booking(workshop, 9000)),
        ("webinar", host.add_booking(webinar, 3000)),
    ] {
        let cell = demo
            .registry
            .table_cell(CURRENCY_PRICE_COLUMN, booking, String::new())
            .await;
        tracing::info!(booking = label, total = %cell, "table row");
    }

    // PayPal checkout for a workshop booking.
    let checkout = host.add_booking(workshop, 4500);
    let mut vars = HashMap::new();
    vars.insert(PAYPAL_CURRENCY_VAR.to_string(), "USD".to_string());
    vars.insert("amount".to_string(), "45.00".to_string());
    let vars = demo.registry.paypal_vars(checkout, vars).await;
    tracing::info!(?vars, "paypal vars");

    let request = serde_json::json!({
        "actionType": "PAY",
        PAYPAL_CHAINED_FIELDS: { PAYPAL_CHAINED_CURRENCY: "USD" },
    });
    let request = demo.registry.paypal_chained_request(checkout, request).await;
    tracing::info!(request = %request, "paypal chained request");

    Ok(())
}
