//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in imgseek-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// CLIP ViT-B/32 embedding dimension (shared by the image and text towers)
pub const EMBEDDING_DIMENSION_CLIP: usize = 512;

/// Null embedding provider dimension (matches CLIP so indexes are interchangeable in tests)
pub const EMBEDDING_DIMENSION_NULL: usize = 512;

/// Model key of the default CLIP pair
pub const CLIP_MODEL_DEFAULT: &str = "clip-vit-b32";

/// Model name recorded by the null provider
pub const NULL_MODEL_NAME: &str = "null-hash";

/// Capacity of the FastEmbed actor request channel
pub const FASTEMBED_CHANNEL_CAPACITY: usize = 100;

/// Subdirectory of the user cache dir holding downloaded models
pub const MODEL_CACHE_SUBDIR: &str = "imgseek/models";

// ============================================================================
// INDEX STORE CONSTANTS
// ============================================================================

/// Magic bytes at the start of every binary index artifact
pub const INDEX_MAGIC: &[u8; 4] = b"IMGX";

/// Current binary index format version
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Suffix of the sibling file an index is written to before the final rename
pub const INDEX_TEMP_SUFFIX: &str = ".tmp";
