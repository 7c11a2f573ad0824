
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::{GlossaryError, Result};

const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Client for a multilingual sentence-embedding model served by an
/// Ollama-compatible server.
///
/// The server owns the model weights; this client owns a verified handle to
/// them for the duration of one run. [`OllamaClient::health_check`] is the
/// per-run "model load" step and must succeed before any embedding work.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: Url,
    model: String,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ModelInfo {
    pub name: String,
}

impl OllamaClient {
    #[inline]
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.embedding.endpoint_url()?;

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)))
            .build()
            .into();

        Ok(Self {
            base_url,
            model: config.embedding.model.clone(),
            agent,
        })
    }

    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        self
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Verify the embedding server is reachable and serves the configured
    /// model. Performed once per run; either failure is fatal.
    #[inline]
    pub fn health_check(&self) -> Result<()> {
        debug!("Performing health check for {} at {}", self.model, self.base_url);

        let models = self.list_models()?;

        if !models.iter().any(|m| m.name == self.model) {
            let available: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
            warn!(
                "Model {} not found. Available models: {:?}",
                self.model, available
            );
            return Err(GlossaryError::ModelUnavailable(format!(
                "model '{}' is not served at {}; available models: {:?}",
                self.model, self.base_url, available
            )));
        }

        info!(
            "Health check passed for embedding server at {} with model {}",
            self.base_url, self.model
        );
        Ok(())
    }

    /// List the models the server currently has available.
    #[inline]
    pub fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = self.base_url.join("/api/tags").map_err(|error| {
            GlossaryError::ModelUnavailable(format!("failed to build models URL: {}", error))
        })?;

        debug!("Fetching available models from {}", url);

        let response_text = self
            .agent
            .get(url.as_str())
            .call()
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|error| {
                GlossaryError::ModelUnavailable(format!(
                    "embedding server at {} is unreachable: {}",
                    self.base_url, error
                ))
            })?;

        let models_response: ModelsResponse =
            serde_json::from_str(&response_text).map_err(|error| {
                GlossaryError::ModelUnavailable(format!(
                    "failed to parse models response: {}",
                    error
                ))
            })?;

        debug!("Found {} models", models_response.models.len());
        Ok(models_response.models)
    }

    /// Embed the full ordered batch of canonical texts.
    ///
    /// Issues one request for the whole batch and L2-normalizes each returned
    /// vector, so dot-product similarity equals cosine similarity downstream.
    /// The result preserves input order and length.
    #[inline]
    pub fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Generating embeddings for {} texts", texts.len());

        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        let url = self.base_url.join("/api/embed").map_err(|error| {
            GlossaryError::Embedding(format!("failed to build embedding URL: {}", error))
        })?;

        let request_json = serde_json::to_string(&request).map_err(|error| {
            GlossaryError::Embedding(format!("failed to serialize embedding request: {}", error))
        })?;

        let response_text = self
            .agent
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .send(&request_json)
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|error| match error {
                ureq::Error::StatusCode(status) => GlossaryError::Embedding(format!(
                    "embedding server returned HTTP {}",
                    status
                )),
                other => GlossaryError::Embedding(format!("embedding request failed: {}", other)),
            })?;

        let embed_response: EmbedResponse =
            serde_json::from_str(&response_text).map_err(|error| {
                GlossaryError::Embedding(format!("failed to parse embedding response: {}", error))
            })?;

        if embed_response.embeddings.len() != texts.len() {
            return Err(GlossaryError::Embedding(format!(
                "mismatch between request and response counts: {} vs {}",
                texts.len(),
                embed_response.embeddings.len()
            )));
        }

        let mut vectors = embed_response.embeddings;
        for vector in &mut vectors {
            l2_normalize(vector);
        }

        debug!(
            "Generated {} embeddings with {} dimensions",
            vectors.len(),
            vectors.first().map_or(0, Vec::len)
        );
        Ok(vectors)
    }
}

/// Scale a vector to unit Euclidean norm. Vectors with a vanishing norm are
/// left untouched rather than divided by ~0.
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
