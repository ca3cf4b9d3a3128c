//! Embedding provider configuration

use crate::constants::{DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_PROVIDER};
use imgseek_application::ports::registry::EmbeddingProviderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Embedding provider selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name (`fastembed`, `null`)
    pub provider: String,

    /// Model key understood by the provider
    pub model: String,

    /// Model download cache; the provider picks a default when unset
    pub cache_dir: Option<PathBuf>,

    /// Print model download progress
    pub show_download_progress: bool,

    /// Vector length for providers where it is configurable
    pub dimensions: Option<usize>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            cache_dir: None,
            show_download_progress: true,
            dimensions: None,
        }
    }
}

impl From<&EmbeddingConfig> for EmbeddingProviderConfig {
    fn from(config: &EmbeddingConfig) -> Self {
        let mut provider = EmbeddingProviderConfig::new(&config.provider)
            .with_model(&config.model)
            .with_download_progress(config.show_download_progress);
        if let Some(dir) = &config.cache_dir {
            provider = provider.with_cache_dir(dir);
        }
        if let Some(dimensions) = config.dimensions {
            provider = provider.with_dimensions(dimensions);
        }
        provider
    }
}
