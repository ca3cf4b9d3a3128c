use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Vision-Language Embedding Interface
///
/// Defines the contract for models that map both images and free text into
/// one shared vector space. Image and text embeddings from the same provider
/// have the same dimensionality and are unit length, so their dot product is
/// a cosine similarity.
///
/// A failure on a single image (unreadable file, unsupported format) is
/// returned as an embedding error for that image only. Callers decide
/// whether it is fatal.
///
/// # Example
///
/// ```ignore
/// use imgseek_domain::ports::providers::EmbeddingProvider;
///
/// let image = provider.embed_image(Path::new("images/car.jpg")).await?;
/// let query = provider.embed_text("a red car").await?;
/// let score = image.similarity(&query);
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed the image stored at `path`
    async fn embed_image(&self, path: &Path) -> Result<Embedding>;

    /// Embed a free-text query
    async fn embed_text(&self, text: &str) -> Result<Embedding>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "fastembed", "null")
    fn provider_name(&self) -> &str;

    /// Name of the model recorded in built indexes
    fn model_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed_text("health check").await?;
        Ok(())
    }
}
