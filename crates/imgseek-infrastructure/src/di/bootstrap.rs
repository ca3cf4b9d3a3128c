//! DI Container Bootstrap
//!
//! Provides the composition root: configuration in, ready-to-use services out.
//!
//! ```text
//! AppConfig → linkme registry → Arc<dyn EmbeddingProvider> ┐
//!                               BinaryIndexStore           ├→ IndexingService / SearchService
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default()).await?;
//! let result = context
//!     .indexing_service()
//!     .build_index(&folder, &index_path)
//!     .await?;
//! ```

use crate::config::AppConfig;
use imgseek_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
use imgseek_application::ports::services::{IndexingServiceInterface, SearchServiceInterface};
use imgseek_application::use_cases::{IndexingServiceImpl, SearchServiceImpl};
use imgseek_domain::error::{Error, Result};
use imgseek_domain::ports::providers::{EmbeddingProvider, IndexStore};
use imgseek_providers::index_store::BinaryIndexStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Application context holding configuration and resolved providers
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    embedding_provider: Arc<dyn EmbeddingProvider>,
    index_store: Arc<dyn IndexStore>,
}

impl AppContext {
    /// Assemble a context from already constructed providers
    pub fn with_providers(
        config: AppConfig,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        index_store: Arc<dyn IndexStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            embedding_provider,
            index_store,
        }
    }

    /// Embedding provider selected by configuration
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding_provider)
    }

    /// Index store used for the artifact
    pub fn index_store(&self) -> Arc<dyn IndexStore> {
        Arc::clone(&self.index_store)
    }

    /// Indexing service wired to this context's providers
    pub fn indexing_service(&self) -> Arc<dyn IndexingServiceInterface> {
        Arc::new(IndexingServiceImpl::new(
            self.embedding_provider(),
            self.index_store(),
        ))
    }

    /// Search service reading the index at `index_path`, or the configured
    /// path when `None`
    pub fn search_service(&self, index_path: Option<PathBuf>) -> Arc<dyn SearchServiceInterface> {
        let index_path = index_path.unwrap_or_else(|| self.config.index.index_path.clone());
        Arc::new(SearchServiceImpl::new(
            self.embedding_provider(),
            self.index_store(),
            index_path,
        ))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("embedding_provider", &self.embedding_provider.provider_name())
            .field("index_store", &self.index_store.store_name())
            .finish()
    }
}

/// Initialize the application context from configuration
///
/// Resolves the configured embedding provider through the registry. For
/// `fastembed` this loads (and on first run downloads) the CLIP models, so
/// resolution runs on the blocking pool.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let provider_config = EmbeddingProviderConfig::from(&config.embedding);

    info!(
        provider = %provider_config.provider,
        model = ?provider_config.model,
        "Resolving embedding provider"
    );

    let embedding_provider =
        tokio::task::spawn_blocking(move || resolve_embedding_provider(&provider_config))
            .await
            .map_err(|e| Error::internal(format!("Provider initialization task failed: {e}")))?
            .map_err(|e| {
                Error::configuration(format!("Failed to resolve embedding provider: {}", e))
            })?;
    let index_store: Arc<dyn IndexStore> = Arc::new(BinaryIndexStore::new());

    info!(
        provider = embedding_provider.provider_name(),
        model = embedding_provider.model_name(),
        dimensions = embedding_provider.dimensions(),
        store = index_store.store_name(),
        "Application context initialized"
    );

    Ok(AppContext::with_providers(
        config,
        embedding_provider,
        index_store,
    ))
}
