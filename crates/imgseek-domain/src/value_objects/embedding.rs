//! Semantic Embedding Value Objects
//!
//! Value objects representing image and text embeddings that live in the
//! same vector space, so a text query can be compared against images.

use serde::{Deserialize, Serialize};

use crate::constants::UNIT_NORM_TOLERANCE;
use crate::error::{Error, Result};

/// Value Object: Semantic Embedding
///
/// A vector embedding of an image or a text query. Everything that enters
/// the index or the ranking loop is unit length, so the dot product of two
/// embeddings is their cosine similarity.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - `dimensions` equals `vector.len()`
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use imgseek_domain::value_objects::Embedding;
///
/// let embedding = Embedding::normalized(vec![3.0, 4.0], "clip-vit-b32").unwrap();
/// assert_eq!(embedding.dimensions, 2);
/// assert!((embedding.vector[0] - 0.6).abs() < 1e-6);
/// assert!(embedding.is_unit_length());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding from a raw model output, scaling it to unit length
    ///
    /// Fails when the vector is empty, contains non-finite values or has a
    /// zero norm, since none of those can be normalised.
    pub fn normalized(vector: Vec<f32>, model: impl Into<String>) -> Result<Self> {
        if vector.is_empty() {
            return Err(Error::embedding("model returned an empty vector"));
        }
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(Error::embedding("model returned non-finite values"));
        }

        let norm = l2_norm(&vector);
        if norm == 0.0 {
            return Err(Error::embedding("model returned a zero vector"));
        }

        let vector: Vec<f32> = vector.into_iter().map(|v| v / norm).collect();
        let dimensions = vector.len();
        Ok(Self {
            vector,
            model: model.into(),
            dimensions,
        })
    }

    /// L2 norm of the vector
    pub fn norm(&self) -> f32 {
        l2_norm(&self.vector)
    }

    /// Whether the vector has unit length within [`UNIT_NORM_TOLERANCE`]
    pub fn is_unit_length(&self) -> bool {
        (self.norm() - 1.0).abs() <= UNIT_NORM_TOLERANCE
    }

    /// Cosine similarity with another unit-length embedding
    ///
    /// Returns `None` when the dimensionalities differ.
    pub fn similarity(&self, other: &Self) -> Option<f32> {
        (self.dimensions == other.dimensions).then(|| dot(&self.vector, &other.vector))
    }
}

/// Dot product of two equally sized slices
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// L2 norm of a slice
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
