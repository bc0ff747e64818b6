//! Event Currency CLI
//!
//! Admin command-line tool for inspecting and editing per-event currency
//! overrides in a SQLite store. Writes assume the operator is authorized to
//! edit the events in question.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use event_currency_store::SqliteMetadataStore;
use event_currency_types::{CurrencyCode, EventId, EventMetadataStore, EVENT_CURRENCY_KEY};

#[derive(Parser)]
#[command(name = "event-currency")]
#[command(author, version, about = "Per-event currency override admin tool", long_about = None)]
struct Cli {
    /// SQLite database URL holding the event metadata
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://event-currency.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the override stored for an event
    Get {
        /// Event ID (UUID)
        event: String,
    },
    /// Store an override for an event
    Set {
        /// Event ID (UUID)
        event: String,
        /// Currency code (e.g. GBP)
        currency: String,
    },
    /// Clear an event's override
    Clear {
        /// Event ID (UUID)
        event: String,
    },
    /// List every event with a stored override
    List,
}

fn parse_event_id(raw: &str) -> Result<EventId> {
    EventId::from_str(raw).with_context(|| format!("invalid event id: {raw}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let store = SqliteMetadataStore::new(&cli.database_url).await?;

    match cli.command {
        Commands::Get { event } => {
            let event = parse_event_id(&event)?;
            match store.get(event, EVENT_CURRENCY_KEY).await? {
                Some(code) => println!("{code}"),
                None => println!("(site default)"),
            }
        }

        Commands::Set { event, currency } => {
            let event = parse_event_id(&event)?;
            let code = CurrencyCode::new(&currency)
                .with_context(|| format!("invalid currency code: {currency}"))?;
            store.set(event, EVENT_CURRENCY_KEY, code.as_str()).await?;
            println!("✓ {event} -> {code}");
        }

        Commands::Clear { event } => {
            let event = parse_event_id(&event)?;
            store.delete(event, EVENT_CURRENCY_KEY).await?;
            println!("✓ {event} -> (site default)");
        }

        Commands::List => {
            let overrides = store.list_overrides().await?;
            if overrides.is_empty() {
                println!("no overrides stored");
            }
            for (event, code) in overrides {
                println!("{event}  {code}");
            }
        }
    }

    Ok(())
}
