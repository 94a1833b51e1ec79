//! The roll endpoint.

use std::sync::PoisonError;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use dicefall_core::roll::generate_roll;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for GET /roll.
#[derive(Debug, Deserialize)]
pub struct RollQuery {
    /// Optional caller-supplied client identifier.
    pub client_id: Option<String>,
}

/// Response body for GET /roll.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    /// The die outcome, in `[1, 6]`.
    pub number: u8,
    /// Fixed marker distinguishing server rolls from client-side ones.
    pub info: &'static str,
    /// Unix timestamp (seconds) of the roll.
    pub ts: i64,
}

/// Cache-defeating headers for the roll response.
const NO_CACHE_HEADERS: [(&str, &str); 4] = [
    (
        "cache-control",
        "no-store, no-cache, must-revalidate, proxy-revalidate",
    ),
    ("pragma", "no-cache"),
    ("expires", "0"),
    ("surrogate-control", "no-store"),
];

/// Resolves the client identifier: query parameter, then `x-client-id`
/// header, then `"anonymous"`. Empty values count as absent and fall
/// through.
fn resolve_client_id(query: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(id) = query.filter(|id| !id.is_empty()) {
        return id.to_owned();
    }
    if let Some(id) = headers
        .get("x-client-id")
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.is_empty())
    {
        return id.to_owned();
    }
    "anonymous".to_owned()
}

/// GET /roll
#[instrument(skip_all)]
async fn roll(
    State(state): State<AppState>,
    Query(query): Query<RollQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let client_id = resolve_client_id(query.client_id.as_deref(), &headers);

    let record = {
        // A salt source has no invariants a panic could break; recover
        // from poisoning rather than failing every later roll.
        let mut salts = state
            .salts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        generate_roll(&client_id, state.clock.as_ref(), &mut *salts)?
    };

    if state.store_rolls {
        state.store.record(&client_id, record.clone());
    }

    info!(%client_id, number = record.number, "handled roll");

    let body = Json(RollResponse {
        number: record.number,
        info: "server-roll",
        ts: record.ts,
    });
    Ok((NO_CACHE_HEADERS, body).into_response())
}

/// Returns the roll router.
pub fn router() -> Router<AppState> {
    Router::new().route("/roll", get(roll))
}
