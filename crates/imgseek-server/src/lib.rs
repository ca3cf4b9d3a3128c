//! # imgseek Server
//!
//! HTTP layer for imgseek: a static search page and a small JSON API over
//! the search service.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use imgseek_server::{ImageSearchServer, SearchState};
//!
//! let context = imgseek_infrastructure::init_app(config).await?;
//! let state = SearchState::new(context.search_service(None), context.config.search.clone());
//! ImageSearchServer::new(context.config.server.clone(), state).start().await?;
//! ```
//!
//! The index is not read at startup; the first search (or image request)
//! loads it and every later request reuses it.

pub mod constants;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;

pub use server::{ImageSearchServer, rocket};
pub use state::SearchState;
