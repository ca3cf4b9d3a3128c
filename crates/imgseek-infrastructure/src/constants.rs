//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration overrides
/// (`IMGSEEK__SERVER__PORT=8080`)
pub const CONFIG_ENV_PREFIX: &str = "IMGSEEK";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "imgseek.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "imgseek";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 6006;

/// Upper bound applied to `top_k` in HTTP search requests
pub const DEFAULT_MAX_TOP_K: usize = 100;

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";

/// Model key used when none is configured
pub const DEFAULT_EMBEDDING_MODEL: &str = "clip-vit-b32";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive that overrides the level
pub const LOG_ENV_FILTER_VAR: &str = "IMGSEEK_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "imgseek";
