//! Route handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/` | GET | Search page |
//! | `/search` | POST | Rank indexed images against a text query |
//! | `/image/<path..>` | GET | Bytes of an indexed image |
//! | `/health` | GET | Index status |

pub mod health;
pub mod image;
pub mod search;
pub mod web;
