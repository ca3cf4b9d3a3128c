//! Embedding Provider Implementations
//!
//! Maps images and text queries into one shared vector space.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | FastEmbedClipProvider | Local ML | Complete (optional) |
//!
//! ## Provider Selection Guide
//!
//! - **Default**: `FastEmbedClipProvider` runs CLIP locally through ONNX
//!   (requires the `embedding-fastembed` feature)
//! - **Development/Testing**: `NullEmbeddingProvider` gives deterministic
//!   vectors without downloading any model

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod null;

// Re-export for convenience
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedClipProvider;
pub use null::NullEmbeddingProvider;
