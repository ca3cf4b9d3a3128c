//! Application Use Cases
//!
//! | Use Case | Interface |
//! |----------|-----------|
//! | [`IndexingServiceImpl`] | [`IndexingServiceInterface`](crate::ports::IndexingServiceInterface) |
//! | [`SearchServiceImpl`] | [`SearchServiceInterface`](crate::ports::SearchServiceInterface) |

pub mod indexing_service;
pub mod search_service;

pub use indexing_service::IndexingServiceImpl;
pub use search_service::SearchServiceImpl;
