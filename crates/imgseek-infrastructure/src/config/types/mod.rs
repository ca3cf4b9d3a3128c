//! Configuration types module

pub mod app;
pub mod embedding;
pub mod logging;
pub mod search;
pub mod server;

// Re-export main types
pub use app::*;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
pub use search::{IndexConfig, SearchConfig};
pub use server::ServerConfig;
