//! Admin inspection endpoint for the roll log.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use dicefall_core::auth::authorize;
use dicefall_core::roll::RollRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for GET /admin/rolls.
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    /// Fallback admin token when the header is absent.
    pub token: Option<String>,
}

/// Response body for GET /admin/rolls.
#[derive(Debug, Serialize)]
pub struct StoredRollsResponse {
    /// Every client's retained rolls, in chronological order.
    pub stored: HashMap<String, Vec<RollRecord>>,
}

/// Extracts the supplied admin token: `x-admin-token` header, then the
/// `token` query parameter, then empty (which always fails authorization).
fn supplied_token(headers: &HeaderMap, query: AdminQuery) -> String {
    headers
        .get("x-admin-token")
        .and_then(|v| v.to_str().ok())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .or(query.token)
        .unwrap_or_default()
}

/// GET /rolls (nested under /admin)
#[instrument(skip_all)]
async fn list_rolls(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
    headers: HeaderMap,
) -> Result<Json<StoredRollsResponse>, ApiError> {
    let supplied = supplied_token(&headers, query);
    let configured = state.admin_token.as_deref().unwrap_or("");

    if !authorize(&supplied, configured) {
        return Err(ApiError::Unauthorized);
    }

    let stored = state.store.snapshot();
    info!(clients = stored.len(), "handled roll log inspection");

    Ok(Json(StoredRollsResponse { stored }))
}

/// Returns the admin router.
pub fn router() -> Router<AppState> {
    Router::new().route("/rolls", get(list_rolls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-admin-token", HeaderValue::from_str(token).unwrap());
        headers
    }

    #[test]
    fn test_header_token_wins_over_query() {
        let headers = headers_with_token("from-header");
        let query = AdminQuery {
            token: Some("from-query".to_string()),
        };
        assert_eq!(supplied_token(&headers, query), "from-header");
    }

    #[test]
    fn test_query_token_used_when_header_absent() {
        let query = AdminQuery {
            token: Some("from-query".to_string()),
        };
        assert_eq!(supplied_token(&HeaderMap::new(), query), "from-query");
    }

    #[test]
    fn test_empty_header_falls_through_to_query() {
        let headers = headers_with_token("");
        let query = AdminQuery {
            token: Some("from-query".to_string()),
        };
        assert_eq!(supplied_token(&headers, query), "from-query");
    }

    #[test]
    fn test_defaults_to_empty() {
        let query = AdminQuery { token: None };
        assert_eq!(supplied_token(&HeaderMap::new(), query), "");
    }
}
