//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No model download - always works offline.

use async_trait::async_trait;
use std::path::Path;

use imgseek_domain::error::{Error, Result};
use imgseek_domain::ports::providers::EmbeddingProvider;
use imgseek_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_MODEL_NAME};

/// Null embedding provider for testing
///
/// Images are embedded from a hash of their file bytes and queries from a
/// hash of their text, so identical inputs always give identical unit
/// vectors. An empty or unreadable image file fails like a corrupt image
/// would with a real model.
///
/// # Example
///
/// ```rust
/// use imgseek_providers::embedding::NullEmbeddingProvider;
/// use imgseek_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 512);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing vectors of `dimensions` values (at least 1)
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vector_for(&self, bytes: &[u8]) -> Result<Embedding> {
        let mut state = seahash::hash(bytes);
        let vector = (0..self.dimensions)
            .map(|_| {
                state = splitmix64(state);
                // top 24 bits mapped to [-1, 1)
                ((state >> 40) as f32 / (1u64 << 23) as f32) - 1.0
            })
            .collect();
        Embedding::normalized(vector, NULL_MODEL_NAME)
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_image(&self, path: &Path) -> Result<Embedding> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Error::embedding(format!("cannot read image {}: {}", path.display(), e))
        })?;
        if bytes.is_empty() {
            return Err(Error::embedding(format!(
                "image {} is empty",
                path.display()
            )));
        }
        self.vector_for(&bytes)
    }

    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        self.vector_for(text.as_bytes())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }

    fn model_name(&self) -> &str {
        NULL_MODEL_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use imgseek_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use imgseek_domain::ports::providers::EmbeddingProvider as EmbeddingProviderPort;

/// Factory function for creating null provider instances.
fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProviderPort>, String> {
    let provider = config
        .dimensions
        .map_or_else(NullEmbeddingProvider::new, NullEmbeddingProvider::with_dimensions);
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
