//! Composition root tests using the registered null provider

use imgseek_application::ports::registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry};
use imgseek_application::ports::services::{IndexingServiceInterface, SearchServiceInterface};
use imgseek_domain::ports::providers::{EmbeddingProvider, IndexStore};
use imgseek_infrastructure::config::ConfigBuilder;
use imgseek_infrastructure::di::init_app;
use imgseek_providers::embedding::NullEmbeddingProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// Provider whose factory blocks like a model load
#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static SLOW_START_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "slow-start",
    description: "Null provider with a blocking 200ms startup",
    factory: |_config| {
        std::thread::sleep(Duration::from_millis(200));
        Ok(Arc::new(NullEmbeddingProvider::with_dimensions(4)))
    },
};

fn null_config() -> imgseek_infrastructure::AppConfig {
    ConfigBuilder::new()
        .with_embedding("null", "null-hash")
        .with_embedding_dimensions(8)
        .build()
}

#[tokio::test]
async fn test_init_app_resolves_null_provider() {
    let context = init_app(null_config()).await.expect("Failed to init app");

    let provider = context.embedding_provider();
    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 8);
    assert_eq!(context.index_store().store_name(), "binary");
}

#[tokio::test]
async fn test_init_app_rejects_unknown_provider() {
    let config = ConfigBuilder::new()
        .with_embedding("does-not-exist", "x")
        .build();

    let err = init_app(config).await.unwrap_err();

    assert!(err.to_string().contains("does-not-exist"), "{err}");
}

#[tokio::test]
async fn test_build_then_search_through_context() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).expect("Failed to create images dir");
    std::fs::write(images.join("a.jpg"), b"first image").expect("write");
    std::fs::write(images.join("b.png"), b"second image").expect("write");
    let index_path = dir.path().join("image_index.pkl");

    let context = init_app(null_config()).await.expect("Failed to init app");
    let result = context
        .indexing_service()
        .build_index(&images, &index_path)
        .await
        .expect("Failed to build index");
    assert_eq!(result.images_indexed, 2);

    let search = context.search_service(Some(index_path));
    assert!(!search.is_loaded());
    let results = search.search("anything", 5).await.expect("Search failed");

    assert_eq!(results.len(), 2);
    assert!(results[0].score >= results[1].score);
    assert_eq!(search.indexed_count(), Some(2));
}

#[tokio::test]
async fn test_search_service_defaults_to_configured_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let index_path = dir.path().join("missing.idx");
    let mut config = null_config();
    config.index.index_path = index_path;

    let context = init_app(config).await.expect("Failed to init app");
    let err = context
        .search_service(None)
        .search("cat", 3)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test(flavor = "current_thread")]
async fn test_provider_startup_does_not_block_the_runtime() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let ticker = {
        let ticks = Arc::clone(&ticks);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(10));
            loop {
                interval.tick().await;
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        })
    };

    let config = ConfigBuilder::new().with_embedding("slow-start", "null-hash").build();
    let context = init_app(config).await.expect("Failed to init app");
    let observed = ticks.load(Ordering::SeqCst);
    ticker.abort();

    assert_eq!(context.embedding_provider().dimensions(), 4);
    assert!(observed >= 2, "runtime stalled during provider startup ({observed} ticks)");
}
