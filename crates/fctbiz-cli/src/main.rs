mod search;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use fctbiz_core::LatLng;
use fctbiz_places::GooglePlacesClient;
use fctbiz_search::SearchOrchestrator;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fctbiz-cli")]
#[command(about = "Search businesses in FCT, Abuja from the command line")]
struct Cli {
    /// Print raw JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search by area or landmark plus a business category.
    Search {
        /// Area, landmark, or business term (e.g. "Gwarinpa").
        #[arg(long)]
        keyword: String,
        /// Provider category, e.g. `restaurant`, `bank`, `lodging`.
        #[arg(long = "type")]
        category: String,
        /// Continue a previous search.
        #[arg(long)]
        page_token: Option<String>,
        #[arg(long, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
        /// Follow continuation tokens until the last page.
        #[arg(long)]
        all_pages: bool,
    },
    /// Free-text search within the region.
    Text {
        query: String,
        #[arg(long)]
        page_token: Option<String>,
        /// Search radius in meters (defaults to the region radius).
        #[arg(long)]
        radius: Option<u32>,
    },
    /// Show details for one business.
    Details { place_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("fctbiz-cli: use --help to list commands");
        return Ok(());
    };

    let config = fctbiz_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = GooglePlacesClient::with_base_url(
        &config.google_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.google_base_url,
    )?;
    let orchestrator = SearchOrchestrator::new(Arc::new(client), config.region.clone());

    match command {
        Commands::Search {
            keyword,
            category,
            page_token,
            lat,
            lng,
            all_pages,
        } => {
            let request = fctbiz_search::SearchRequest {
                keyword,
                category,
                page_token,
                location: lat.zip(lng).map(|(lat, lng)| LatLng::new(lat, lng)),
                should_execute: true,
            };
            search::run_search(&orchestrator, request, all_pages, cli.json).await
        }
        Commands::Text {
            query,
            page_token,
            radius,
        } => {
            let request = fctbiz_search::TextSearchRequest {
                query,
                page_token,
                location: None,
                radius_meters: radius,
            };
            search::run_text(&orchestrator, &request, cli.json).await
        }
        Commands::Details { place_id } => {
            search::run_details(&orchestrator, &place_id, cli.json).await
        }
    }
}

#[cfg(test)]
mod tests;
