//! Dicefall API server entry point.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dicefall_api::config::Config;
use dicefall_api::error::AppError;
use dicefall_api::routes;
use dicefall_api::state::AppState;
use dicefall_core::clock::SystemClock;
use dicefall_core::entropy::OsSaltSource;
use dicefall_core::store::RollLogStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting dicefall API server");

    let config = Config::from_env()?;

    // Build application state.
    let app_state = AppState::new(
        Arc::new(RollLogStore::new()),
        Arc::new(SystemClock),
        Arc::new(Mutex::new(OsSaltSource)),
        config.store_rolls,
        config.admin_token.clone(),
    );

    // Build router. Unmatched paths fall through to the static directory,
    // served with the same cache-defeating headers the API uses.
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .service(ServeDir::new(&config.static_dir));

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::roll::router())
        .nest("/admin", routes::admin::router())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allow_origin)?)
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from the configured origin; `*` allows any origin.
fn cors_layer(allow_origin: &str) -> Result<CorsLayer, AppError> {
    if allow_origin == "*" {
        return Ok(CorsLayer::new().allow_origin(Any));
    }
    let origin = allow_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::Config(format!("ALLOW_ORIGIN is not a valid origin: {e}")))?;
    Ok(CorsLayer::new().allow_origin(origin))
}
