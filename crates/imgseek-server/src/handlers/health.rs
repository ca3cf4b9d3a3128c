//! `GET /health`

use rocket::serde::json::Json;
use rocket::{State, get};
use tracing::debug;

use crate::constants::HEALTH_STATUS_OK;
use crate::models::HealthResponse;
use crate::state::SearchState;

/// Report whether the index is resident, without loading it
#[get("/health")]
pub fn health(state: &State<SearchState>) -> Json<HealthResponse> {
    let index_loaded = state.search.is_loaded();
    debug!(index_loaded, "Health check");
    Json(HealthResponse {
        status: HEALTH_STATUS_OK.to_string(),
        index_loaded,
        indexed_images: state.search.indexed_count(),
    })
}
