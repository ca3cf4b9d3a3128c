//! Shared Rocket state

use imgseek_application::ports::services::SearchServiceInterface;
use imgseek_domain::error::Error;
use imgseek_infrastructure::config::SearchConfig;
use rocket::http::Status;
use rocket::serde::json::Json;
use std::sync::Arc;

use crate::constants::INDEX_MISSING_MESSAGE;
use crate::models::ErrorResponse;

/// State managed by Rocket: the search service and the `top_k` limits
#[derive(Clone)]
pub struct SearchState {
    /// Owns the resident index
    pub search: Arc<dyn SearchServiceInterface>,
    /// Default and maximum result counts
    pub limits: SearchConfig,
}

impl SearchState {
    /// Create state around a search service
    pub fn new(search: Arc<dyn SearchServiceInterface>, limits: SearchConfig) -> Self {
        Self { search, limits }
    }
}

/// Error half of every JSON handler result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Map a domain error onto an HTTP status and JSON body
pub fn api_error(error: &Error) -> ApiError {
    let (status, message) = if error.is_invalid_argument() {
        (Status::BadRequest, error.to_string())
    } else if error.is_not_found() {
        (Status::NotFound, INDEX_MISSING_MESSAGE.to_string())
    } else if error.is_empty_index() {
        (Status::NotFound, error.to_string())
    } else {
        (Status::InternalServerError, error.to_string())
    };
    (status, Json(ErrorResponse::new(message)))
}
