//! Server-specific constants

/// Status reported by `GET /health`
pub const HEALTH_STATUS_OK: &str = "ok";

/// Message returned when no index artifact exists yet
pub const INDEX_MISSING_MESSAGE: &str =
    "Index file not found. Please run `imgseek build` first";

/// Message returned for an empty or whitespace-only query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";
