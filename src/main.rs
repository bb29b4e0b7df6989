//! HTTP shell for the extraction engine
//!
//! Thin routing layer: `GET /extract?url=…` runs one extraction and
//! returns the metadata record as JSON, `GET /health` reports liveness.
//! All configuration comes from the environment.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use product_parser::fetcher::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use product_parser::{extract, Fetcher, ProductMetadata};

#[derive(Clone)]
struct AppState {
    fetcher: Arc<Fetcher>,
}

#[derive(Deserialize)]
struct ExtractParams {
    url: Option<String>,
}

async fn extract_handler(
    State(state): State<AppState>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<ProductMetadata>, (StatusCode, String)> {
    let url = params
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or((
            StatusCode::BAD_REQUEST,
            "missing url query parameter".to_string(),
        ))?;

    // Never an HTTP error past this point: load and extraction failures
    // are encoded in the record itself.
    Ok(Json(extract(&state.fetcher, &url).await))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let timeout_secs: u64 = env_or("FETCH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
    let user_agent =
        std::env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    let port: u16 = env_or("PORT", 3000);

    let fetcher = Arc::new(Fetcher::with_settings(
        Duration::from_secs(timeout_secs),
        user_agent,
    ));

    let app = Router::new()
        .route("/extract", get(extract_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { fetcher });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    info!(%addr, timeout_secs, "product parser listening");

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
