//! Indexing Service Use Case
//!
//! Application service for building an image index.
//! Orchestrates file discovery, image embedding and index persistence.

use crate::ports::services::{IndexingResult, IndexingServiceInterface};
use imgseek_domain::constants::{INDEXING_PROGRESS_INTERVAL, SUPPORTED_IMAGE_EXTENSIONS};
use imgseek_domain::entities::{IndexBuilder, normalize_path};
use imgseek_domain::error::{Error, Result};
use imgseek_domain::ports::providers::{EmbeddingProvider, IndexStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Accumulator for indexing progress and errors
struct IndexingProgress {
    images_found: usize,
    images_indexed: usize,
    images_skipped: usize,
    errors: Vec<String>,
}

impl IndexingProgress {
    fn new() -> Self {
        Self {
            images_found: 0,
            images_indexed: 0,
            images_skipped: 0,
            errors: Vec::new(),
        }
    }

    fn record_error(&mut self, context: &str, path: &Path, error: impl std::fmt::Display) {
        self.errors
            .push(format!("{} {}: {}", context, path.display(), error));
    }

    fn record_skip(&mut self, context: &str, path: &Path, error: impl std::fmt::Display) {
        warn!(path = %path.display(), error = %error, "{}", context);
        self.record_error(context, path, error);
        self.images_skipped += 1;
    }

    fn into_result(self, index_path: &Path) -> IndexingResult {
        IndexingResult {
            images_found: self.images_found,
            images_indexed: self.images_indexed,
            images_skipped: self.images_skipped,
            errors: self.errors,
            index_path: index_path.to_path_buf(),
        }
    }
}

/// Files discovered under the image folder
struct Discovery {
    images: Vec<PathBuf>,
    errors: Vec<String>,
}

/// Indexing service implementation - orchestrates discovery, embedding and persistence
pub struct IndexingServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    index_store: Arc<dyn IndexStore>,
}

impl IndexingServiceImpl {
    /// Create new indexing service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        index_store: Arc<dyn IndexStore>,
    ) -> Self {
        Self {
            embedding_provider,
            index_store,
        }
    }

    /// Walk the folder recursively, in file-name order, collecting image files
    fn discover_images(root: &Path) -> Discovery {
        let mut images = Vec::new();
        let mut errors = Vec::new();

        let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    errors.push(format!("Failed to read entry {}: {}", path.display(), e));
                    continue;
                }
            };

            if entry.file_type().is_file() && Self::is_supported_image(entry.path()) {
                images.push(entry.into_path());
            }
        }

        Discovery { images, errors }
    }

    /// Check if file has a supported image extension (case-insensitive)
    pub fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

#[async_trait::async_trait]
impl IndexingServiceInterface for IndexingServiceImpl {
    async fn build_index(&self, image_folder: &Path, index_path: &Path) -> Result<IndexingResult> {
        match tokio::fs::metadata(image_folder).await {
            Ok(meta) if meta.is_dir() => {}
            _ => {
                return Err(Error::not_found(format!(
                    "image folder {}",
                    image_folder.display()
                )));
            }
        }

        info!(
            folder = %image_folder.display(),
            provider = self.embedding_provider.provider_name(),
            model = self.embedding_provider.model_name(),
            "Building image index"
        );

        let root = image_folder.to_path_buf();
        let discovery = tokio::task::spawn_blocking(move || Self::discover_images(&root))
            .await
            .map_err(|e| Error::internal(format!("Image discovery task failed: {e}")))?;

        let mut progress = IndexingProgress::new();
        progress.errors = discovery.errors;
        progress.images_found = discovery.images.len();
        let total = discovery.images.len();
        info!(total, "Discovered image files");

        let mut builder = IndexBuilder::new(self.embedding_provider.model_name());

        for (processed, image_path) in discovery.images.iter().enumerate() {
            let Some(path_str) = image_path.to_str().map(normalize_path) else {
                progress.record_skip(
                    "Skipping non-UTF-8 path",
                    image_path,
                    "path is not valid UTF-8",
                );
                continue;
            };

            match self.embedding_provider.embed_image(image_path).await {
                Ok(embedding) => match builder.push(path_str.as_str(), &embedding) {
                    Ok(()) => {
                        progress.images_indexed += 1;
                        debug!(path = %path_str, "Indexed image");
                    }
                    Err(e) => progress.record_skip("Failed to index", image_path, e),
                },
                Err(e) => progress.record_skip("Failed to embed", image_path, e),
            }

            if (processed + 1) % INDEXING_PROGRESS_INTERVAL == 0 {
                info!(processed = processed + 1, total, "Indexing progress");
            }
        }

        if builder.is_empty() {
            warn!(
                folder = %image_folder.display(),
                "No images were indexed; writing an empty index"
            );
        }

        let index = builder.finish();
        self.index_store.save(&index, index_path).await?;

        info!(
            indexed = progress.images_indexed,
            skipped = progress.images_skipped,
            index_path = %index_path.display(),
            "Index build complete"
        );

        Ok(progress.into_result(index_path))
    }
}
