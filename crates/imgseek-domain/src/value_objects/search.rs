//! Search-Related Value Objects
//!
//! Value objects representing ranked image search results.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Value Object: Ranked Search Result
///
/// A single image matched by a text query. Results are returned in
/// descending score order; the position in that list is the rank.
///
/// ## Business Rules
///
/// - Score is the cosine similarity of query and image, in `[-1, 1]`
/// - Path is exactly the string recorded in the index
///
/// ## Example
///
/// ```rust
/// use imgseek_domain::value_objects::SearchResult;
///
/// let result = SearchResult {
///     path: "images/holiday/beach.jpg".to_string(),
///     score: 0.31,
/// };
/// assert_eq!(result.filename(), "beach.jpg");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Path of the indexed image file
    pub path: String,
    /// Cosine similarity between the query and the image
    pub score: f32,
}

impl SearchResult {
    /// Final component of the image path
    pub fn filename(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map_or_else(|| self.path.clone(), |name| name.to_string_lossy().into_owned())
    }
}
