//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ImageIndex`] | Immutable matrix of image embeddings with parallel paths |
//! | [`IndexBuilder`] | Accumulates embeddings in encounter order |

/// Image index entity and its builder
pub mod image_index;

pub use image_index::{ImageIndex, IndexBuilder, normalize_path};
