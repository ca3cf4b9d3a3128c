//! Domain Layer - imgseek
//!
//! Core types for semantic image search: embeddings, the flat image index
//! and its ranking, and the ports implemented by outer layers.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Owns the error type shared by every crate
//! - Defines the [`ImageIndex`](entities::ImageIndex) entity and ranking
//! - Declares provider ports (embedding, index persistence)
//! - Has no dependencies on infrastructure or external frameworks

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{ImageIndex, IndexBuilder};
pub use error::{Error, Result};
pub use value_objects::{Embedding, SearchResult};
