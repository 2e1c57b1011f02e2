//! Newsdesk gateway server
//!
//! HTTP server that proxies the Naver and Google News upstreams and serves
//! ranked keyword search over both.

mod routes;
mod upstream;

use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use newsdesk_services::SearchService;
use newsdesk_sources::MediaCatalog;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::upstream::{NaverCredentials, UpstreamClient};

/// Port the server binds when `SERVER_PORT` is not set
const DEFAULT_PORT: u16 = 3000;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub search: Arc<SearchService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,newsdesk_gateway=debug")),
        )
        .init();

    info!("Starting newsdesk gateway");

    // Credentials are required; the process refuses to start without them
    let credentials = NaverCredentials::from_env()?;
    let upstream = Arc::new(UpstreamClient::new(credentials));

    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // The normalizers fetch through this server's own passthrough
    // endpoints, the same path browser clients use
    let gateway_url =
        std::env::var("GATEWAY_URL").unwrap_or_else(|_| format!("http://127.0.0.1:{}", port));
    info!("Normalizers will fetch through: {}", gateway_url);

    let search = Arc::new(SearchService::new(&gateway_url, MediaCatalog::new()));

    let state = AppState { upstream, search };

    // Configure CORS for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .merge(routes::gateway_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
