// Configuration management module
// Layered resolution: defaults, optional config.toml, environment overrides

pub mod settings;

pub use settings::{Config, ConfigError, EmbeddingConfig, IndexConfig};

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    Config::config_dir()
}
