//! Image Index Entity
//!
//! The flat vector index over a folder of images: a row-major matrix of unit
//! embeddings plus the parallel list of source paths.

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::value_objects::{Embedding, SearchResult, dot};

/// Lexically normalise an image path: `.` components and repeated
/// separators are dropped, `..` is kept as written.
pub fn normalize_path(path: &str) -> String {
    Path::new(path)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

/// Entity: Image Index
///
/// Position `i` pairs row `i` of the matrix with `paths[i]`. The shape is
/// checked whenever an index is assembled, so a value of this type always
/// satisfies:
///
/// - number of rows == number of paths
/// - every row has exactly `dimensions` values
/// - `dimensions > 0` whenever the index is non-empty
///
/// An index is immutable once built. A rebuild replaces it wholesale.
///
/// ## Example
///
/// ```rust
/// use imgseek_domain::entities::IndexBuilder;
/// use imgseek_domain::value_objects::Embedding;
///
/// let mut builder = IndexBuilder::new("clip-vit-b32");
/// builder
///     .push("a.jpg", &Embedding::normalized(vec![1.0, 0.0], "clip-vit-b32").unwrap())
///     .unwrap();
/// let index = builder.finish();
///
/// let query = Embedding::normalized(vec![1.0, 0.0], "clip-vit-b32").unwrap();
/// let results = index.rank(&query, 5).unwrap();
/// assert_eq!(results[0].path, "a.jpg");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageIndex {
    model: String,
    dimensions: usize,
    vectors: Vec<f32>,
    paths: Vec<String>,
}

impl ImageIndex {
    /// An index with no images
    pub fn empty(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            dimensions: 0,
            vectors: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Assemble an index from its raw parts, checking the shape invariants
    ///
    /// Used by index stores when decoding an artifact, so a violation is
    /// reported as [`Error::CorruptIndex`].
    pub fn from_parts(
        model: impl Into<String>,
        dimensions: usize,
        vectors: Vec<f32>,
        paths: Vec<String>,
    ) -> Result<Self> {
        if paths.is_empty() {
            if !vectors.is_empty() {
                return Err(Error::corrupt_index(format!(
                    "{} vector values but no paths",
                    vectors.len()
                )));
            }
            return Ok(Self {
                model: model.into(),
                dimensions,
                vectors,
                paths,
            });
        }

        if dimensions == 0 {
            return Err(Error::corrupt_index(
                "non-empty index declares zero dimensions",
            ));
        }

        let expected = paths.len().checked_mul(dimensions).ok_or_else(|| {
            Error::corrupt_index("index shape overflows the addressable size")
        })?;
        if vectors.len() != expected {
            return Err(Error::corrupt_index(format!(
                "expected {} vector values for {} paths of {} dimensions, found {}",
                expected,
                paths.len(),
                dimensions,
                vectors.len()
            )));
        }

        Ok(Self {
            model: model.into(),
            dimensions,
            vectors,
            paths,
        })
    }

    /// Name of the model that produced the vectors
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Dimensionality of every row (0 for an index that was never filled)
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of indexed images
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the index holds no images
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Indexed paths in position order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// The whole row-major matrix
    pub fn vectors(&self) -> &[f32] {
        &self.vectors
    }

    /// Row at `position`
    pub fn vector(&self, position: usize) -> Option<&[f32]> {
        if position >= self.len() {
            return None;
        }
        let start = position * self.dimensions;
        self.vectors.get(start..start + self.dimensions)
    }

    /// Whether `path` is one of the indexed paths
    ///
    /// Both sides are compared after [`normalize_path`], so `./a.jpg` and
    /// `a.jpg` name the same entry.
    pub fn contains_path(&self, path: &str) -> bool {
        let wanted = normalize_path(path);
        self.paths.iter().any(|p| normalize_path(p) == wanted)
    }

    /// Iterate over `(path, row)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> + '_ {
        self.paths
            .iter()
            .map(String::as_str)
            .zip(self.vectors.chunks_exact(self.dimensions.max(1)))
    }

    /// Rank every image against a query embedding and keep the best `k`
    ///
    /// Scores are dot products clamped to `[-1, 1]`. The sort is stable, so
    /// equal scores keep position order. NaN scores sort last.
    pub fn rank(&self, query: &Embedding, k: usize) -> Result<Vec<SearchResult>> {
        if k == 0 {
            return Err(Error::invalid_argument("top_k must be at least 1"));
        }
        if self.is_empty() {
            return Err(Error::EmptyIndex);
        }
        if query.dimensions != self.dimensions {
            return Err(Error::embedding(format!(
                "query has {} dimensions but the index has {}",
                query.dimensions, self.dimensions
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .chunks_exact(self.dimensions)
            .map(|row| dot(row, &query.vector).clamp(-1.0, 1.0))
            .enumerate()
            .collect();
        scored.sort_by(|a, b| descending(a.1, b.1));

        Ok(scored
            .into_iter()
            .take(k.min(self.len()))
            .map(|(position, score)| SearchResult {
                path: self.paths[position].clone(),
                score,
            })
            .collect())
    }
}

fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// Accumulates embeddings in encounter order and produces an [`ImageIndex`]
///
/// The first pushed embedding fixes the dimensionality. A later embedding
/// with a different length is rejected without touching the builder.
#[derive(Debug)]
pub struct IndexBuilder {
    model: String,
    dimensions: Option<usize>,
    vectors: Vec<f32>,
    paths: Vec<String>,
}

impl IndexBuilder {
    /// Create a builder for vectors produced by `model`
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            dimensions: None,
            vectors: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Append one image
    pub fn push(&mut self, path: impl Into<String>, embedding: &Embedding) -> Result<()> {
        if embedding.vector.is_empty() || embedding.vector.len() != embedding.dimensions {
            return Err(Error::embedding(format!(
                "malformed embedding: {} values for {} declared dimensions",
                embedding.vector.len(),
                embedding.dimensions
            )));
        }
        match self.dimensions {
            Some(dims) if dims != embedding.dimensions => {
                return Err(Error::embedding(format!(
                    "dimension mismatch: expected {}, got {}",
                    dims, embedding.dimensions
                )));
            }
            Some(_) => {}
            None => self.dimensions = Some(embedding.dimensions),
        }

        self.vectors.extend_from_slice(&embedding.vector);
        self.paths.push(path.into());
        Ok(())
    }

    /// Number of images pushed so far
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether nothing has been pushed
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Freeze the builder into an index
    pub fn finish(self) -> ImageIndex {
        ImageIndex {
            model: self.model,
            dimensions: self.dimensions.unwrap_or(0),
            vectors: self.vectors,
            paths: self.paths,
        }
    }
}
