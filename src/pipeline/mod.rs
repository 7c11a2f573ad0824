// Pipeline module
// One indexing run: loader, composer, embedding generator, upsert client
// wired strictly linearly

use tracing::{debug, info};

use crate::Result;
use crate::config::Config;
use crate::embeddings::OllamaClient;
use crate::index::{QdrantClient, build_points};
use crate::seed::{canonical_text, count_duplicate_lsids, load_seed_file};

/// A single batch indexing run over one seed file.
///
/// Configuration and both service clients are explicit inputs scoped to the
/// run; nothing outlives it except the points written to the index service.
/// There is no retry and no partial-success path: the first failure at any
/// stage fails the run.
pub struct Pipeline {
    config: Config,
    embedding_client: OllamaClient,
    index_client: QdrantClient,
}

/// Counts reported by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    pub records_loaded: usize,
    pub duplicate_lsids: usize,
    pub points_upserted: usize,
}

impl Pipeline {
    /// Build a pipeline for one run.
    ///
    /// Verifies the embedding model once, up front; an unreachable server or
    /// unavailable model fails construction before any seed data is read.
    #[inline]
    pub fn new(config: Config) -> Result<Self> {
        let embedding_client = OllamaClient::new(&config)?;
        embedding_client.health_check()?;

        let index_client = QdrantClient::new(&config)?;

        Ok(Self {
            config,
            embedding_client,
            index_client,
        })
    }

    /// Execute the run: load, compose, embed, upsert.
    #[inline]
    pub fn run(&self) -> Result<PipelineStats> {
        let records = load_seed_file(&self.config.seed_path)?;
        let duplicate_lsids = count_duplicate_lsids(&records);

        let texts: Vec<String> = records.iter().map(canonical_text).collect();
        debug!("Composed {} canonical texts", texts.len());

        let vectors = self.embedding_client.embed_batch(&texts)?;
        info!(
            "Embedded {} texts with model {}",
            vectors.len(),
            self.embedding_client.model()
        );

        let points = build_points(&records, vectors)?;
        let points_upserted = self.index_client.upsert_points(&points)?;

        Ok(PipelineStats {
            records_loaded: records.len(),
            duplicate_lsids,
            points_upserted,
        })
    }
}
