//! PostMaster MZ - Application Entry Point
//!
//! This is the main entry point for the PostMaster MZ server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postmaster::{
    ai::GeminiClient,
    config::CONFIG,
    constants::API_BASE_PATH,
    handlers,
    middleware::logging_middleware,
    services::{SessionService, sync_service},
    state::AppState,
    store::FileStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PostMaster MZ server...");

    // Open the blob store
    tracing::info!(data_dir = %CONFIG.storage.data_dir.display(), "Opening blob store...");
    let store = Arc::new(FileStore::open(CONFIG.storage.data_dir.clone()).await?);

    // Initialize the generation backend
    let generator = Arc::new(GeminiClient::new(&CONFIG.gemini));

    // Create application state
    let state = AppState::new(store, generator, CONFIG.clone());

    // Restore a persisted session, if any
    SessionService::restore(&state).await?;

    // Spawn the background loops
    tokio::spawn(sync_service::run_sync_loop(state.clone()));
    tokio::spawn(sync_service::run_schedule_checker(state.clone()));

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
