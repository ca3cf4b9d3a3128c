//! Application Port Interfaces
//!
//! - **registry/** - linkme registries for provider auto-registration
//! - **services** - interfaces implemented by the use cases

/// Provider registries
pub mod registry;
/// Application service interfaces
pub mod services;

pub use imgseek_domain::ports::providers;
pub use services::{IndexingResult, IndexingServiceInterface, SearchServiceInterface};
