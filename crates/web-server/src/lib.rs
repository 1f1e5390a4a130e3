use axum::{routing::get, Router};
use datastore::Store;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The store is loaded once before serving begins and never mutated, so a
/// plain shared reference is all the synchronization the handlers need.
pub struct AppState {
    pub store: Store,
}

/// Builds the application router. Split out from `run_server` so tests can
/// drive the router directly without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/markets/:market_id", get(handlers::get_market_overview))
        .route(
            "/api/markets/:market_id/properties",
            get(handlers::get_market_properties),
        )
        .route(
            "/api/properties/:property_id/market-performance",
            get(handlers::get_property_market_performance),
        )
        .with_state(state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
///
/// Tracing is expected to be initialized by the caller (the CLI binary)
/// before this is invoked.
pub async fn run_server(addr: SocketAddr, store: Store) -> anyhow::Result<()> {
    let state = Arc::new(AppState { store });
    let app = app(state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
