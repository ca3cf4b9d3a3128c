//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{EmbeddingConfig, IndexConfig, LoggingConfig, SearchConfig, ServerConfig};

/// Main application configuration
///
/// Every section has defaults, so an empty TOML file (or none at all) is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Image folder and index artifact locations
    #[serde(default)]
    pub index: IndexConfig,

    /// Result count limits
    #[serde(default)]
    pub search: SearchConfig,

    /// Embedding provider selection
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
