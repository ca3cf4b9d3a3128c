//! External Provider Ports
//!
//! Ports for the external collaborators the domain depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Image and text embedding in a shared space |
//! | IndexStore | Persistence of a whole image index |

/// Embedding provider port
pub mod embedding;
/// Index store port
pub mod index_store;

pub use embedding::EmbeddingProvider;
pub use index_store::IndexStore;
