//! Index location and search limit configuration

use crate::constants::DEFAULT_MAX_TOP_K;
use imgseek_domain::constants::{
    DEFAULT_CLI_TOP_K, DEFAULT_HTTP_TOP_K, DEFAULT_IMAGE_FOLDER, DEFAULT_INDEX_PATH,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where images are read from and where the index artifact lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndexConfig {
    /// Root folder scanned by `build`
    pub image_folder: PathBuf,

    /// Index artifact written by `build` and read by `search`/`serve`
    pub index_path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            image_folder: PathBuf::from(DEFAULT_IMAGE_FOLDER),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
        }
    }
}

/// Result count limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// `top_k` used by HTTP requests that omit it
    pub default_top_k: usize,

    /// `top_k` used by the `search` subcommand when `--top-k` is absent
    pub cli_top_k: usize,

    /// HTTP requests asking for more results are clamped to this
    pub max_top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: DEFAULT_HTTP_TOP_K,
            cli_top_k: DEFAULT_CLI_TOP_K,
            max_top_k: DEFAULT_MAX_TOP_K,
        }
    }
}

impl SearchConfig {
    /// Resolve the requested result count against the configured limits
    pub fn effective_top_k(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_top_k).min(self.max_top_k)
    }
}
