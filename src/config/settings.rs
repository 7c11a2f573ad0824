
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub seed_path: PathBuf,
}

/// Connection settings for the Ollama-compatible embedding server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub model: String,
}

/// Connection settings for the Qdrant index service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub collection: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedding: EmbeddingConfig::default(),
            index: IndexConfig::default(),
            seed_path: PathBuf::from("seed.json"),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 11434,
            model: "paraphrase-multilingual:latest".to_string(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 6333,
            collection: "i18n_embeddings".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found or could not be created")]
    DirectoryError,
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
    #[error("Invalid port: {0} (must be between 1 and 65535)")]
    InvalidPort(u16),
    #[error("Invalid protocol: {0} (must be 'http' or 'https')")]
    InvalidProtocol(String),
    #[error("Invalid model name: {0} (cannot be empty)")]
    InvalidModel(String),
    #[error("Invalid collection name: {0} (cannot be empty)")]
    InvalidCollection(String),
    #[error("Invalid seed path (cannot be empty)")]
    InvalidSeedPath,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Config {
    /// Load the resolved configuration: defaults, then config.toml if present,
    /// then environment overrides.
    #[inline]
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    #[inline]
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    #[inline]
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("glossary-index"))
            .ok_or(ConfigError::DirectoryError)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = env::var("OLLAMA_URL") {
            self.embedding.set_endpoint(&value)?;
        }
        if let Ok(value) = env::var("MODEL_NAME") {
            self.embedding.model = value;
        }
        if let Ok(value) = env::var("QDRANT_URL") {
            self.index.set_endpoint(&value)?;
        }
        if let Ok(value) = env::var("QDRANT_COLLECTION") {
            self.index.collection = value;
        }
        if let Ok(value) = env::var("SEED_PATH") {
            self.seed_path = PathBuf::from(value);
        }
        Ok(())
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.embedding.validate()?;
        self.index.validate()?;

        if self.seed_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidSeedPath);
        }

        Ok(())
    }
}

fn parse_endpoint(value: &str) -> Result<(String, String, u16), ConfigError> {
    let url = Url::parse(value).map_err(|_| ConfigError::InvalidUrl(value.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| ConfigError::InvalidUrl(value.to_string()))?
        .to_string();
    let port = url
        .port_or_known_default()
        .ok_or_else(|| ConfigError::InvalidUrl(value.to_string()))?;
    Ok((url.scheme().to_string(), host, port))
}

fn validate_endpoint(protocol: &str, host: &str, port: u16) -> Result<(), ConfigError> {
    if protocol != "http" && protocol != "https" {
        return Err(ConfigError::InvalidProtocol(protocol.to_string()));
    }

    if port == 0 {
        return Err(ConfigError::InvalidPort(port));
    }

    let url_str = format!("{}://{}:{}", protocol, host, port);
    Url::parse(&url_str).map_err(|_| ConfigError::InvalidUrl(url_str))?;

    Ok(())
}

impl EmbeddingConfig {
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.protocol, &self.host, self.port)?;

        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidModel(self.model.clone()));
        }

        Ok(())
    }

    #[inline]
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url_str = format!("{}://{}:{}", self.protocol, self.host, self.port);
        Url::parse(&url_str).map_err(|_| ConfigError::InvalidUrl(url_str))
    }

    /// Replace protocol/host/port from a full base URL such as `http://localhost:11434`.
    #[inline]
    pub fn set_endpoint(&mut self, value: &str) -> Result<(), ConfigError> {
        let (protocol, host, port) = parse_endpoint(value)?;
        validate_endpoint(&protocol, &host, port)?;
        self.protocol = protocol;
        self.host = host;
        self.port = port;
        Ok(())
    }
}

impl IndexConfig {
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.protocol, &self.host, self.port)?;

        if self.collection.trim().is_empty() {
            return Err(ConfigError::InvalidCollection(self.collection.clone()));
        }

        Ok(())
    }

    #[inline]
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url_str = format!("{}://{}:{}", self.protocol, self.host, self.port);
        Url::parse(&url_str).map_err(|_| ConfigError::InvalidUrl(url_str))
    }

    /// Replace protocol/host/port from a full base URL such as `http://localhost:6333`.
    #[inline]
    pub fn set_endpoint(&mut self, value: &str) -> Result<(), ConfigError> {
        let (protocol, host, port) = parse_endpoint(value)?;
        validate_endpoint(&protocol, &host, port)?;
        self.protocol = protocol;
        self.host = host;
        self.port = port;
        Ok(())
    }
}
