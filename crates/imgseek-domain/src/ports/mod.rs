//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! The domain declares the traits; the providers crate implements them.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, IndexStore};
