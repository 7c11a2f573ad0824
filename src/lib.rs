use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed seed input: {0}")]
    MalformedInput(String),

    #[error("Seed record at index {0} is missing required field `lsid`")]
    MissingLsid(usize),

    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Index service error: {0}")]
    IndexService(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<config::ConfigError> for GlossaryError {
    #[inline]
    fn from(error: config::ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}

pub mod commands;
pub mod config;
pub mod embeddings;
pub mod index;
pub mod pipeline;
pub mod seed;
