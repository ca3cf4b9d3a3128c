//! Dependency injection
//!
//! Composition root wiring configuration to provider instances and services.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
