//! # imgseek
//!
//! Text-to-image search over a local folder. Every image is embedded once
//! with CLIP into a flat index; a free-text query is embedded into the same
//! space and images are ranked by cosine similarity.
//!
//! ## Example
//!
//! ```ignore
//! use imgseek::infrastructure::{ConfigLoader, init_app};
//!
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config).await?;
//! let results = context.search_service(None).search("a red car", 5).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - index entity, embeddings, ports and the error type
//! - `application` - indexing and search use cases, provider registry
//! - `infrastructure` - configuration, logging and the composition root
//! - `server` - Rocket HTTP layer
//! - [`cli`] - the `imgseek` command line

pub mod cli;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use imgseek_domain::*;
}

/// Application layer - use cases and the provider registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use imgseek_application::*;
}

/// Server layer - HTTP routes and the Rocket application
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use imgseek_server::*;
}

/// Infrastructure layer - config, logging and DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use imgseek_infrastructure::*;
}

pub use imgseek_domain::{Error, Result};
