//! FastEmbed CLIP Embedding Provider
//!
//! Implements the EmbeddingProvider port with fastembed's CLIP image and text
//! towers. Inference runs locally through ONNX without external API calls.

use async_trait::async_trait;
use fastembed::{
    EmbeddingModel, ImageEmbedding, ImageEmbeddingModel, ImageInitOptions, TextEmbedding,
    TextInitOptions,
};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use imgseek_domain::error::{Error, Result};
use imgseek_domain::ports::providers::EmbeddingProvider;
use imgseek_domain::value_objects::Embedding;

use crate::constants::{
    CLIP_MODEL_DEFAULT, EMBEDDING_DIMENSION_CLIP, FASTEMBED_CHANNEL_CAPACITY, MODEL_CACHE_SUBDIR,
};

/// Messages for the FastEmbed actor
enum ClipMessage {
    EmbedImage {
        path: PathBuf,
        tx: oneshot::Sender<Result<Embedding>>,
    },
    EmbedText {
        text: String,
        tx: oneshot::Sender<Result<Embedding>>,
    },
}

/// Options used to build the CLIP model pair
#[derive(Debug, Clone)]
pub struct ClipOptions {
    /// Model key; only `clip-vit-b32` is supported
    pub model: String,
    /// Where downloaded model files are cached
    pub cache_dir: Option<PathBuf>,
    /// Whether to print model download progress
    pub show_download_progress: bool,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            model: CLIP_MODEL_DEFAULT.to_string(),
            cache_dir: None,
            show_download_progress: true,
        }
    }
}

/// FastEmbed CLIP provider using Actor pattern
///
/// The ONNX sessions need exclusive access, so both towers are owned by a
/// single actor thread that serves requests from a channel. Handles are
/// cheap to clone and share the same actor.
///
/// ## Example
///
/// ```rust,no_run
/// use imgseek_providers::embedding::FastEmbedClipProvider;
///
/// let provider = FastEmbedClipProvider::new().expect("Failed to initialize");
/// // provider is now ready to embed images and queries locally
/// ```
#[derive(Clone)]
pub struct FastEmbedClipProvider {
    sender: mpsc::Sender<ClipMessage>,
    model_name: String,
}

impl FastEmbedClipProvider {
    /// Create a new provider with the default CLIP ViT-B/32 pair
    pub fn new() -> Result<Self> {
        Self::with_options(ClipOptions::default())
    }

    /// Create a new provider with custom options
    pub fn with_options(options: ClipOptions) -> Result<Self> {
        let image_model = image_model_for(&options.model)?;
        let model_name = options.model.to_lowercase();
        let cache_dir = options.cache_dir.clone().or_else(default_cache_dir);

        info!(
            model = %model_name,
            cache_dir = ?cache_dir,
            "Loading CLIP models"
        );

        let mut image_options = ImageInitOptions::new(image_model)
            .with_show_download_progress(options.show_download_progress);
        let mut text_options = TextInitOptions::new(EmbeddingModel::ClipVitB32)
            .with_show_download_progress(options.show_download_progress);
        if let Some(dir) = cache_dir {
            image_options = image_options.with_cache_dir(dir.clone());
            text_options = text_options.with_cache_dir(dir);
        }

        let image = ImageEmbedding::try_new(image_options).map_err(|e| {
            Error::embedding(format!("Failed to initialize CLIP image model: {}", e))
        })?;
        let text = TextEmbedding::try_new(text_options).map_err(|e| {
            Error::embedding(format!("Failed to initialize CLIP text model: {}", e))
        })?;

        let (tx, rx) = mpsc::channel(FASTEMBED_CHANNEL_CAPACITY);
        let mut actor = ClipActor::new(rx, image, text, model_name.clone());
        std::thread::Builder::new()
            .name("fastembed-clip".to_string())
            .spawn(move || actor.run())
            .map_err(|e| Error::io_with_source("Failed to spawn CLIP actor thread", e))?;

        Ok(Self {
            sender: tx,
            model_name,
        })
    }

    async fn request(
        &self,
        message: ClipMessage,
        rx: oneshot::Receiver<Result<Embedding>>,
    ) -> Result<Embedding> {
        self.sender
            .send(message)
            .await
            .map_err(|_| Error::embedding("CLIP actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::embedding("CLIP actor closed")))
    }
}

/// Map a configured model key to the image tower
///
/// The text tower is always CLIP ViT-B/32, so only image towers trained
/// against it produce vectors in the same space.
pub fn image_model_for(key: &str) -> Result<ImageEmbeddingModel> {
    match key.to_lowercase().as_str() {
        CLIP_MODEL_DEFAULT => Ok(ImageEmbeddingModel::ClipVitB32),
        other => Err(Error::configuration(format!(
            "Unsupported CLIP model '{}': only {} has an image tower aligned with the text tower",
            other, CLIP_MODEL_DEFAULT
        ))),
    }
}

fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(MODEL_CACHE_SUBDIR))
}

#[async_trait]
impl EmbeddingProvider for FastEmbedClipProvider {
    async fn embed_image(&self, path: &Path) -> Result<Embedding> {
        let (tx, rx) = oneshot::channel();
        self.request(
            ClipMessage::EmbedImage {
                path: path.to_path_buf(),
                tx,
            },
            rx,
        )
        .await
    }

    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        let (tx, rx) = oneshot::channel();
        self.request(
            ClipMessage::EmbedText {
                text: text.to_string(),
                tx,
            },
            rx,
        )
        .await
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_CLIP
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Internal actor that owns both ONNX sessions
struct ClipActor {
    receiver: mpsc::Receiver<ClipMessage>,
    image: ImageEmbedding,
    text: TextEmbedding,
    model_name: String,
}

impl ClipActor {
    fn new(
        receiver: mpsc::Receiver<ClipMessage>,
        image: ImageEmbedding,
        text: TextEmbedding,
        model_name: String,
    ) -> Self {
        Self {
            receiver,
            image,
            text,
            model_name,
        }
    }

    fn run(&mut self) {
        while let Some(msg) = self.receiver.blocking_recv() {
            match msg {
                ClipMessage::EmbedImage { path, tx } => {
                    let result = self.embed_image(&path);
                    let _ = tx.send(result);
                }
                ClipMessage::EmbedText { text, tx } => {
                    let result = self.embed_text(&text);
                    let _ = tx.send(result);
                }
            }
        }
        debug!("CLIP actor stopped");
    }

    fn embed_image(&mut self, path: &Path) -> Result<Embedding> {
        let output = self.image.embed(vec![path], None).map_err(|e| {
            Error::embedding(format!(
                "CLIP image embedding failed for {}: {}",
                path.display(),
                e
            ))
        })?;
        self.first_normalized(output)
    }

    fn embed_text(&mut self, text: &str) -> Result<Embedding> {
        let output = self
            .text
            .embed(vec![text], None)
            .map_err(|e| Error::embedding(format!("CLIP text embedding failed: {}", e)))?;
        self.first_normalized(output)
    }

    fn first_normalized(&self, output: Vec<Vec<f32>>) -> Result<Embedding> {
        let vector = output
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))?;
        Embedding::normalized(vector, self.model_name.clone())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use imgseek_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use imgseek_domain::ports::providers::EmbeddingProvider as EmbeddingProviderPort;

/// Factory function for creating FastEmbed CLIP provider instances.
fn fastembed_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProviderPort>, String> {
    let options = ClipOptions {
        model: config
            .model
            .clone()
            .unwrap_or_else(|| CLIP_MODEL_DEFAULT.to_string()),
        cache_dir: config.cache_dir.clone(),
        show_download_progress: config.show_download_progress,
    };

    let provider = FastEmbedClipProvider::with_options(options)
        .map_err(|e| format!("Failed to create FastEmbed provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static FASTEMBED_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "fastembed",
    description: "FastEmbed local CLIP provider (clip-vit-b32)",
    factory: fastembed_factory,
};
