//! Configuration management
//!
//! Layered figment configuration: compiled defaults, then a TOML file, then
//! `IMGSEEK__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
