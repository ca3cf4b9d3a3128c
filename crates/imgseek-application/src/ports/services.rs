//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.
//! The server and the CLI depend on these traits, never on the concrete
//! use case types.

use async_trait::async_trait;
use imgseek_domain::entities::ImageIndex;
use imgseek_domain::error::Result;
use imgseek_domain::value_objects::SearchResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// Indexing Service Interface
// ============================================================================

/// Indexing Service Interface
///
/// Defines the contract for building an image index from a folder.
#[async_trait]
pub trait IndexingServiceInterface: Send + Sync {
    /// Embed every supported image under `image_folder` and write the index
    /// to `index_path`, replacing any previous artifact
    async fn build_index(&self, image_folder: &Path, index_path: &Path) -> Result<IndexingResult>;
}

/// Result of an index build
#[derive(Debug, Clone)]
pub struct IndexingResult {
    /// Number of files with a supported image extension
    pub images_found: usize,
    /// Number of images written to the index
    pub images_indexed: usize,
    /// Number of images that could not be indexed
    pub images_skipped: usize,
    /// Any errors encountered (non-fatal)
    pub errors: Vec<String>,
    /// Where the index was written
    pub index_path: PathBuf,
}

// ============================================================================
// Search Service Interface
// ============================================================================

/// Search Service Interface
///
/// Owns the serving-side index lifecycle: the index is loaded from disk on
/// first use and then stays resident.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Rank indexed images against a free-text query
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>>;

    /// Load the index if it is not resident yet and return it
    async fn load_index(&self) -> Result<Arc<ImageIndex>>;

    /// Whether the index has been loaded
    fn is_loaded(&self) -> bool;

    /// Number of indexed images, if the index is loaded
    fn indexed_count(&self) -> Option<usize>;

    /// Whether `path` is one of the indexed image paths
    async fn contains_path(&self, path: &str) -> Result<bool>;
}
