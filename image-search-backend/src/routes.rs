//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::AppState;
use image_search_shared::{SearchRequest, SearchResultItem};

/// `POST /search` - run a vector query against the configured index.
///
/// The body must be JSON; anything else is answered with 415. Omitted
/// fields fall back to the wildcard query and the default result count.
/// Ranking order comes straight from the service.
pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<SearchResultItem>>, (StatusCode, Json<Value>)> {
    let Json(request) = body.map_err(|rejection| {
        debug!(error = %rejection, "Rejected non-JSON search request");
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(json!({"error": "request must be json"})),
        )
    })?;

    let results = state
        .search
        .vector_search(&request.search, request.size)
        .await
        .map_err(|e| {
            error!(error = %e, "Vector search failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "search request failed"})),
            )
        })?;

    Ok(Json(results))
}
