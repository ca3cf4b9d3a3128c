//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `imgseek_infrastructure::constants`.

// ============================================================================
// INDEXING DOMAIN CONSTANTS
// ============================================================================

/// Image file extensions picked up by an index build (compared lowercase)
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp"];

/// Log a progress line after this many files have been processed
pub const INDEXING_PROGRESS_INTERVAL: usize = 10;

/// Default folder scanned by an index build
pub const DEFAULT_IMAGE_FOLDER: &str = "images";

/// Default location of the persisted index artifact
pub const DEFAULT_INDEX_PATH: &str = "image_index.pkl";

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Number of results returned by the command line search
pub const DEFAULT_CLI_TOP_K: usize = 5;

/// Number of results returned by the HTTP search endpoint
pub const DEFAULT_HTTP_TOP_K: usize = 10;

/// Tolerance used when checking that an embedding has unit length
pub const UNIT_NORM_TOLERANCE: f32 = 1e-5;
