//! Index Store Implementations
//!
//! | Store | Format |
//! |-------|--------|
//! | BinaryIndexStore | Self-describing little-endian artifact with checksum |

pub mod binary;

pub use binary::BinaryIndexStore;
