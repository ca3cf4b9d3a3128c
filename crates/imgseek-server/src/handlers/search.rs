//! `POST /search`

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{State, post};
use tracing::{debug, warn};

use crate::constants::EMPTY_QUERY_MESSAGE;
use crate::models::{ErrorResponse, SearchHit, SearchRequest, SearchResponse};
use crate::state::{ApiError, SearchState, api_error};

/// Rank indexed images against a text query
///
/// The index is loaded on the first request. `top_k` defaults to
/// `search.default_top_k` and is clamped to `search.max_top_k`.
#[post("/search", data = "<request>")]
pub async fn search(
    state: &State<SearchState>,
    request: Result<Json<SearchRequest>, json::Error<'_>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = request
        .map_err(|e| {
            debug!(error = %e, "Rejected search body");
            (
                Status::BadRequest,
                Json(ErrorResponse::new(format!("Invalid request body: {}", e))),
            )
        })?
        .into_inner();

    if request.query.trim().is_empty() {
        return Err((
            Status::BadRequest,
            Json(ErrorResponse::new(EMPTY_QUERY_MESSAGE)),
        ));
    }

    let top_k = state.limits.effective_top_k(request.top_k);
    let results = state
        .search
        .search(&request.query, top_k)
        .await
        .map_err(|e| {
            warn!(query = %request.query, error = %e, "Search failed");
            api_error(&e)
        })?;

    Ok(Json(SearchResponse {
        query: request.query,
        results: results.into_iter().map(SearchHit::from).collect(),
    }))
}
