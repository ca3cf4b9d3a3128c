//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | figment configuration: defaults, TOML file, environment |
//! | [`constants`] | Centralized configuration constants |
//! | [`di`] | Composition root resolving providers from configuration |
//! | [`error_ext`] | Context helpers converting foreign errors to domain errors |
//! | [`logging`] | Structured logging with tracing |

// Force linkme registration of all providers from imgseek-providers
extern crate imgseek_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
