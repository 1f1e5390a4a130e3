use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Settings;
use core_types::Metric;
use datastore::Store;
use tracing_subscriber::EnvFilter;

/// The main entry point for the MarketLens analytics application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let settings = configuration::load_settings(&cli.config)?;
    tracing::info!(config = %cli.config.display(), "Configuration loaded.");
    let store = Store::load(&settings.data.markets_file, &settings.data.properties_file)?;

    match cli.command {
        Commands::Serve => handle_serve(settings, store).await,
        Commands::Markets => handle_markets(&store),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Read-only analytics API comparing commercial real-estate assets against
/// market benchmarks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve,
    /// Print a summary table of the loaded markets.
    Markets,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(settings: Settings, store: Store) -> anyhow::Result<()> {
    web_server::run_server(settings.server.addr(), store).await
}

fn handle_markets(store: &Store) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Market", "City", "State", "Type", "Snapshots", "Latest", "Rent MoM", "Properties",
    ]);

    for market in store.markets() {
        let latest = market.performance.last();
        let rent_trend = latest
            .and_then(|snapshot| {
                let previous = store.previous_snapshot(market.market_id, snapshot);
                analytics::trend(snapshot, previous)
                    .into_iter()
                    .find(|t| t.metric == Metric::RentPerSqft)
            })
            .map(|t| format!("{} {}%", t.direction, t.change_pct))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            market.market_id.to_string(),
            market.market_name.clone(),
            market.city.clone(),
            market.state.clone(),
            market.market_type.clone(),
            market.performance.len().to_string(),
            latest
                .map(|snapshot| snapshot.date.to_string())
                .unwrap_or_else(|| "-".to_string()),
            rent_trend,
            store.properties_in_market(market.market_id).len().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
