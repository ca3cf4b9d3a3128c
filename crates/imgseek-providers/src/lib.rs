//! # imgseek - Provider Implementations
//!
//! This crate contains the user-selectable implementations of the ports
//! defined in `imgseek-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | FastEmbed CLIP, Null |
//! | Index persistence | `IndexStore` | Binary |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! imgseek-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Without `embedding-fastembed` only the null provider is registered,
//! which keeps test builds free of the ONNX runtime.

// Re-export imgseek-domain types commonly used with providers
pub use imgseek_domain::error::{Error, Result};
pub use imgseek_domain::ports::providers::{EmbeddingProvider, IndexStore};

/// Provider-specific constants
pub mod constants;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` for image and text embedding backends.
pub mod embedding;

/// Index store implementations
///
/// Implements `IndexStore` for persisted index formats.
pub mod index_store;
