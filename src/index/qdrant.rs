#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::seed::SeedRecord;
use crate::{GlossaryError, Result};

// The upsert waits for durable acknowledgment, so the write can take a while
// for large batches.
const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// The unit persisted to the index service: positional id, embedding vector,
/// and the original record data as payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPoint {
    pub id: u64,
    pub vector: Vec<f32>,
    pub payload: PointPayload,
}

/// Payload stored alongside each vector and returned with search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPayload {
    pub lsid: String,
    pub translations: BTreeMap<String, String>,
}

/// Assemble index points from records and their vectors.
///
/// Ids are positional: a contiguous 1-based run over seed order. Reordering
/// or inserting records mid-file therefore reassigns ids to different content
/// and can leave stale points behind under old ids.
#[inline]
pub fn build_points(records: &[SeedRecord], vectors: Vec<Vec<f32>>) -> Result<Vec<IndexPoint>> {
    if records.len() != vectors.len() {
        return Err(GlossaryError::Embedding(format!(
            "mismatch between records and vectors: {} vs {}",
            records.len(),
            vectors.len()
        )));
    }

    let points = records
        .iter()
        .zip(vectors)
        .enumerate()
        .map(|(position, (record, vector))| IndexPoint {
            id: position as u64 + 1,
            vector,
            payload: PointPayload {
                lsid: record.lsid.clone(),
                translations: record.translations.clone(),
            },
        })
        .collect();

    Ok(points)
}

/// Client for the Qdrant REST API, scoped to one target collection.
#[derive(Debug, Clone)]
pub struct QdrantClient {
    base_url: Url,
    collection: String,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    points: &'a [IndexPoint],
}

// Lenient ack shape: only logged, success is decided by the HTTP status.
#[derive(Debug, Deserialize)]
struct UpsertAck {
    status: Option<serde_json::Value>,
    result: Option<UpsertResult>,
}

#[derive(Debug, Deserialize)]
struct UpsertResult {
    operation_id: Option<u64>,
    status: Option<String>,
}

impl QdrantClient {
    #[inline]
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.index.endpoint_url()?;

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)))
            .build()
            .into();

        Ok(Self {
            base_url,
            collection: config.index.collection.clone(),
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
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Upsert the full point batch into the target collection with one
    /// request, waiting for synchronous acknowledgment.
    ///
    /// All-or-nothing: any transport failure, timeout, or non-success status
    /// fails the whole batch with [`GlossaryError::IndexService`]. On success
    /// the written points are durable and queryable, and the count is
    /// returned.
    #[inline]
    pub fn upsert_points(&self, points: &[IndexPoint]) -> Result<usize> {
        let mut url = self
            .base_url
            .join(&format!("/collections/{}/points", self.collection))
            .map_err(|error| {
                GlossaryError::IndexService(format!("failed to build upsert URL: {}", error))
            })?;
        url.set_query(Some("wait=true"));

        let request = UpsertRequest { points };
        let request_json = serde_json::to_string(&request).map_err(|error| {
            GlossaryError::IndexService(format!("failed to serialize upsert request: {}", error))
        })?;

        debug!(
            "Upserting {} points into collection {} at {}",
            points.len(),
            self.collection,
            url
        );

        let response_text = self
            .agent
            .put(url.as_str())
            .header("Content-Type", "application/json")
            .send(&request_json)
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|error| match error {
                ureq::Error::StatusCode(status) => GlossaryError::IndexService(format!(
                    "index service returned HTTP {}",
                    status
                )),
                other => {
                    GlossaryError::IndexService(format!("upsert request failed: {}", other))
                }
            })?;

        if let Ok(ack) = serde_json::from_str::<UpsertAck>(&response_text) {
            debug!(
                "Upsert acknowledged: status {:?}, operation {:?}",
                ack.status,
                ack.result.as_ref().and_then(|r| r.operation_id)
            );
            if let Some(status) = ack.result.and_then(|r| r.status) {
                debug!("Upsert operation status: {}", status);
            }
        }

        info!(
            "Upserted {} points into collection {}",
            points.len(),
            self.collection
        );
        Ok(points.len())
    }
}
