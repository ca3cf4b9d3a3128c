//! Unit tests for the provider port default methods

use async_trait::async_trait;
use imgseek_domain::ports::EmbeddingProvider;
use imgseek_domain::{Embedding, Error, Result};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingProvider {
    text_calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl EmbeddingProvider for CountingProvider {
    async fn embed_image(&self, _path: &Path) -> Result<Embedding> {
        Err(Error::embedding("not used"))
    }

    async fn embed_text(&self, _text: &str) -> Result<Embedding> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::embedding("model unavailable"));
        }
        Embedding::normalized(vec![1.0, 0.0], "counting")
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn provider_name(&self) -> &str {
        "counting"
    }

    fn model_name(&self) -> &str {
        "counting"
    }
}

#[tokio::test]
async fn test_default_health_check_embeds_text() {
    let provider = CountingProvider {
        text_calls: AtomicUsize::new(0),
        fail: false,
    };

    provider.health_check().await.unwrap();
    assert_eq!(provider.text_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_default_health_check_propagates_failure() {
    let provider = CountingProvider {
        text_calls: AtomicUsize::new(0),
        fail: true,
    };

    let result = provider.health_check().await;
    assert!(matches!(result, Err(Error::Embedding { .. })));
}
