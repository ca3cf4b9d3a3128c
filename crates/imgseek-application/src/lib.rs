//! Application Layer - imgseek
//!
//! Use cases for semantic image search, orchestrating the domain entities
//! and the provider ports.
//!
//! ## Use Cases
//!
//! - Index building: walk an image folder, embed every image, persist the index
//! - Search: load the index once, embed a text query, rank images
//!
//! ## Ports
//!
//! - `ports::services::*`: service interfaces consumed by the server and CLI
//! - `ports::registry::*`: linkme registry that providers submit themselves to
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `imgseek-domain`: for entities, value objects and provider ports
//! - Pure Rust libraries for async, traversal and logging

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
