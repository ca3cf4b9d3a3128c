//! Configuration type tests

use imgseek_application::ports::registry::EmbeddingProviderConfig;
use imgseek_infrastructure::config::{AppConfig, ConfigBuilder, SearchConfig};
use std::path::PathBuf;

#[test]
fn test_default_config_values() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 6006);
    assert_eq!(config.server.address(), "0.0.0.0:6006");
    assert_eq!(config.index.image_folder, PathBuf::from("images"));
    assert_eq!(config.index.index_path, PathBuf::from("image_index.pkl"));
    assert_eq!(config.search.default_top_k, 10);
    assert_eq!(config.search.cli_top_k, 5);
    assert_eq!(config.search.max_top_k, 100);
    assert_eq!(config.embedding.provider, "fastembed");
    assert_eq!(config.embedding.model, "clip-vit-b32");
    assert!(config.embedding.show_download_progress);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn test_effective_top_k() {
    let search = SearchConfig::default();

    assert_eq!(search.effective_top_k(None), 10);
    assert_eq!(search.effective_top_k(Some(3)), 3);
    assert_eq!(search.effective_top_k(Some(5000)), 100);
}

#[test]
fn test_embedding_config_converts_to_provider_config() {
    let mut config = AppConfig::default();
    config.embedding.provider = "null".to_string();
    config.embedding.cache_dir = Some(PathBuf::from("/tmp/models"));
    config.embedding.dimensions = Some(64);
    config.embedding.show_download_progress = false;

    let provider = EmbeddingProviderConfig::from(&config.embedding);

    assert_eq!(provider.provider, "null");
    assert_eq!(provider.model.as_deref(), Some("clip-vit-b32"));
    assert_eq!(provider.cache_dir, Some(PathBuf::from("/tmp/models")));
    assert_eq!(provider.dimensions, Some(64));
    assert!(!provider.show_download_progress);
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_server("127.0.0.1", 8080)
        .with_image_folder("photos")
        .with_index_path("data/photos.idx")
        .with_embedding("null", "null-hash")
        .with_embedding_dimensions(16)
        .with_log_level("debug")
        .build();

    assert_eq!(config.server.address(), "127.0.0.1:8080");
    assert_eq!(config.index.image_folder, PathBuf::from("photos"));
    assert_eq!(config.index.index_path, PathBuf::from("data/photos.idx"));
    assert_eq!(config.embedding.provider, "null");
    assert_eq!(config.embedding.model, "null-hash");
    assert_eq!(config.embedding.dimensions, Some(16));
    assert_eq!(config.logging.level, "debug");
}
