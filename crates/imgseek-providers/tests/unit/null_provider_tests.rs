//! Tests for the null embedding provider

use imgseek_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
use imgseek_domain::Error;
use imgseek_domain::ports::providers::EmbeddingProvider;
use imgseek_providers::embedding::NullEmbeddingProvider;
use tempfile::TempDir;

#[tokio::test]
async fn test_image_embeddings_are_deterministic_and_unit() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.jpg");
    let b = dir.path().join("b.jpg");
    std::fs::write(&a, b"first image").unwrap();
    std::fs::write(&b, b"second image").unwrap();

    let provider = NullEmbeddingProvider::new();
    let first = provider.embed_image(&a).await.unwrap();
    let again = provider.embed_image(&a).await.unwrap();
    let other = provider.embed_image(&b).await.unwrap();

    assert_eq!(first, again);
    assert_ne!(first.vector, other.vector);
    assert_eq!(first.dimensions, provider.dimensions());
    assert!(first.is_unit_length());
    assert!(other.is_unit_length());
}

#[tokio::test]
async fn test_same_bytes_same_vector_regardless_of_name() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("copy-of-a.png");
    std::fs::write(&a, b"identical").unwrap();
    std::fs::write(&b, b"identical").unwrap();

    let provider = NullEmbeddingProvider::new();
    assert_eq!(
        provider.embed_image(&a).await.unwrap().vector,
        provider.embed_image(&b).await.unwrap().vector
    );
}

#[tokio::test]
async fn test_text_and_image_share_dimensions() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("x.gif");
    std::fs::write(&image, b"GIF89a").unwrap();

    let provider = NullEmbeddingProvider::with_dimensions(64);
    let image = provider.embed_image(&image).await.unwrap();
    let text = provider.embed_text("a red car").await.unwrap();

    assert_eq!(image.dimensions, 64);
    assert_eq!(text.dimensions, 64);
    assert!(text.is_unit_length());
    assert!(image.similarity(&text).is_some());
}

#[tokio::test]
async fn test_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty.jpg");
    std::fs::write(&empty, b"").unwrap();

    let result = NullEmbeddingProvider::new().embed_image(&empty).await;
    assert!(matches!(result, Err(Error::Embedding { .. })));
}

#[tokio::test]
async fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = NullEmbeddingProvider::new()
        .embed_image(&dir.path().join("missing.jpg"))
        .await;
    assert!(matches!(result, Err(Error::Embedding { .. })));
}

#[tokio::test]
async fn test_health_check() {
    NullEmbeddingProvider::new().health_check().await.unwrap();
}

#[test]
fn test_registered_under_null() {
    let config = EmbeddingProviderConfig::new("null").with_dimensions(8);
    let provider = resolve_embedding_provider(&config).unwrap();

    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.model_name(), "null-hash");
    assert_eq!(provider.dimensions(), 8);
}
