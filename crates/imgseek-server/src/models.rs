//! Request and response bodies of the JSON API

use imgseek_domain::value_objects::SearchResult;
use serde::{Deserialize, Serialize};

/// `POST /search` request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    #[serde(default)]
    pub query: String,
    /// Number of results; the configured default when absent
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// One ranked image in a search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    /// Path exactly as stored in the index
    pub path: String,
    /// Cosine similarity in [-1, 1]
    pub score: f32,
    /// Final path component, for display
    pub filename: String,
}

impl From<SearchResult> for SearchHit {
    fn from(result: SearchResult) -> Self {
        let filename = result.filename();
        Self {
            path: result.path,
            score: result.score,
            filename,
        }
    }
}

/// `POST /search` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as received
    pub query: String,
    /// Hits in descending score order
    pub results: Vec<SearchHit>,
}

/// `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub index_loaded: bool,
    pub indexed_images: Option<usize>,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
