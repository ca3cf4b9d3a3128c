//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = fastembed" → CLIP provider   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in imgseek-providers)
//!
//! ```ignore
//! use imgseek_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "null",
//!     description: "Deterministic offline provider",
//!     factory: |config| Ok(Arc::new(NullEmbeddingProvider::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in imgseek-infrastructure)
//!
//! ```ignore
//! use imgseek_application::ports::registry::resolve_embedding_provider;
//!
//! let config = EmbeddingProviderConfig::new("fastembed").with_model("clip-vit-b32");
//! let provider = resolve_embedding_provider(&config)?;
//! ```

pub mod embedding;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
