//! PubScout web server.
//!
//! Run with: cargo run -p pubscout-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pubscout_ingestion::sources::pubmed::PubMedClient;
use pubscout_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api_key = std::env::var("PUBMED_API_KEY").ok();
    if api_key.is_some() {
        info!("Using configured PubMed API key");
    }
    let source = PubMedClient::new(api_key)?;

    let state = AppState::new(Arc::new(source));
    let app = pubscout_web::router::build_router(state);

    let addr: SocketAddr = std::env::var("PUBSCOUT_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
        .parse()?;
    info!("PubScout listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
