//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::TimeZone;
use http_body_util::BodyExt;
use tower::ServiceExt;

use dicefall_core::clock::Clock;
use dicefall_core::entropy::{OsSaltSource, SaltSource};
use dicefall_core::store::RollLogStore;
use dicefall_test_support::FixedClock;

use dicefall_api::routes;
use dicefall_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock(chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
}

/// Build the full app router with real OS entropy and a fixed clock. Uses
/// the same route structure as `main.rs` (minus the static fallback).
pub fn build_app(store_rolls: bool, admin_token: Option<&str>) -> Router {
    build_app_with_salts(store_rolls, admin_token, OsSaltSource)
}

/// Build the full app router with a custom salt source for tests that need
/// deterministic or failing entropy.
pub fn build_app_with_salts<S>(store_rolls: bool, admin_token: Option<&str>, salts: S) -> Router
where
    S: SaltSource + 'static,
{
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(fixed_clock());
    let app_state = AppState::new(
        Arc::new(RollLogStore::new()),
        clock,
        Arc::new(Mutex::new(salts)),
        store_rolls,
        admin_token.map(str::to_owned),
    );

    Router::new()
        .merge(routes::health::router())
        .merge(routes::roll::router())
        .nest("/admin", routes::admin::router())
        .with_state(app_state)
}

/// Send a GET request with extra headers and return status, response
/// headers, and the JSON body.
pub async fn get_json(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let response_headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, response_headers, json)
}
