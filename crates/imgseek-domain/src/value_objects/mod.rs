//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Unit-length vector for an image or a text query |
//! | [`SearchResult`] | Ranked result from an image search |

/// Semantic embedding value objects
pub mod embedding;
/// Search-related value objects
pub mod search;

// Re-export commonly used value objects
pub use embedding::{Embedding, dot, l2_norm};
pub use search::SearchResult;
