//! Search Service Use Case
//!
//! Application service for text-to-image search. Owns the resident index:
//! it is read from the index store on first use and kept for the life of
//! the service.

use crate::ports::services::SearchServiceInterface;
use imgseek_domain::entities::ImageIndex;
use imgseek_domain::error::{Error, Result};
use imgseek_domain::ports::providers::{EmbeddingProvider, IndexStore};
use imgseek_domain::value_objects::SearchResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Search service implementation - lazy index loading and query ranking
pub struct SearchServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    index_store: Arc<dyn IndexStore>,
    index_path: PathBuf,
    index: OnceCell<Arc<ImageIndex>>,
}

impl SearchServiceImpl {
    /// Create new search service with injected dependencies
    ///
    /// Nothing is read from disk until the first search.
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        index_store: Arc<dyn IndexStore>,
        index_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            embedding_provider,
            index_store,
            index_path: index_path.into(),
            index: OnceCell::new(),
        }
    }

    /// Create a search service around an index that is already in memory
    pub fn with_index(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        index_store: Arc<dyn IndexStore>,
        index_path: impl Into<PathBuf>,
        index: Arc<ImageIndex>,
    ) -> Self {
        Self {
            embedding_provider,
            index_store,
            index_path: index_path.into(),
            index: OnceCell::new_with(Some(index)),
        }
    }

    /// Location of the index artifact
    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Rank `index` against `query` without touching the resident index
    pub async fn search_index(
        &self,
        index: &ImageIndex,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        let query = validate_query(query, top_k)?;
        if index.is_empty() {
            return Err(Error::EmptyIndex);
        }

        let embedding = self.embedding_provider.embed_text(query).await?;
        let results = index.rank(&embedding, top_k)?;
        debug!(query, top_k, returned = results.len(), "Search complete");
        Ok(results)
    }

    async fn read_index(&self) -> Result<Arc<ImageIndex>> {
        info!(index_path = %self.index_path.display(), "Loading image index");
        let index = self.index_store.load(&self.index_path).await?;

        if !index.is_empty() && index.model() != self.embedding_provider.model_name() {
            warn!(
                index_model = index.model(),
                provider_model = self.embedding_provider.model_name(),
                "Index was built with a different model"
            );
        }

        info!(
            images = index.len(),
            dimensions = index.dimensions(),
            "Image index loaded"
        );
        Ok(Arc::new(index))
    }
}

/// Trim the query and check the request shape
fn validate_query(query: &str, top_k: usize) -> Result<&str> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::invalid_argument("query must not be empty"));
    }
    if top_k == 0 {
        return Err(Error::invalid_argument("top_k must be at least 1"));
    }
    Ok(query)
}

#[async_trait::async_trait]
impl SearchServiceInterface for SearchServiceImpl {
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        validate_query(query, top_k)?;
        let index = self.load_index().await?;
        self.search_index(&index, query, top_k).await
    }

    async fn load_index(&self) -> Result<Arc<ImageIndex>> {
        self.index
            .get_or_try_init(|| self.read_index())
            .await
            .cloned()
    }

    fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    fn indexed_count(&self) -> Option<usize> {
        self.index.get().map(|index| index.len())
    }

    async fn contains_path(&self, path: &str) -> Result<bool> {
        let index = self.load_index().await?;
        Ok(index.contains_path(path))
    }
}
