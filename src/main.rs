mod app;
mod errors;
mod external;
mod holdings;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::external::google_finance::GoogleFinanceProvider;
use crate::external::yahoo::YahooQuoteProvider;
use crate::services::enrichment_service::Enricher;
use crate::services::quote_cache::QuoteCache;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(logging::LoggingConfig::from_env())?;

    let holdings = holdings::load_holdings();
    tracing::info!("📊 Loaded {} holdings from the static portfolio source", holdings.len());

    let cache = Arc::new(QuoteCache::new());
    let enricher = Arc::new(Enricher::new(
        Arc::new(YahooQuoteProvider::new()),
        Arc::new(GoogleFinanceProvider::new()),
        cache,
    ));

    let state = AppState {
        holdings: Arc::new(holdings),
        enricher,
    };
    let app = app::create_app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Equitydash backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
