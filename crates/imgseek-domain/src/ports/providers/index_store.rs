use async_trait::async_trait;
use std::path::Path;

use crate::entities::ImageIndex;
use crate::error::Result;

/// Index Persistence Interface
///
/// Persists a whole [`ImageIndex`] as one artifact and reads it back.
/// There is no partial update: `save` replaces whatever was at the path.
///
/// # Errors
///
/// - `load` on a missing artifact returns `Error::NotFound`
/// - `load` on anything that cannot be decoded into a well-shaped index
///   returns `Error::CorruptIndex`
#[async_trait]
pub trait IndexStore: Send + Sync {
    /// Write `index` to `path`, creating parent directories as needed
    async fn save(&self, index: &ImageIndex, path: &Path) -> Result<()>;

    /// Read the index stored at `path`
    async fn load(&self, path: &Path) -> Result<ImageIndex>;

    /// Get the name/identifier of this store implementation
    fn store_name(&self) -> &str;
}
