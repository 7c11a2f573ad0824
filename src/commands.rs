use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::Result;
use crate::config::{Config, get_config_dir};
use crate::pipeline::Pipeline;

/// CLI overrides for a single run. Each takes precedence over the resolved
/// configuration.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub seed: Option<PathBuf>,
    pub collection: Option<String>,
    pub model: Option<String>,
}

/// Execute one indexing run and report the count of points written.
#[inline]
pub fn run_index(options: RunOptions) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(seed) = options.seed {
        config.seed_path = seed;
    }
    if let Some(collection) = options.collection {
        config.index.collection = collection;
    }
    if let Some(model) = options.model {
        config.embedding.model = model;
    }
    config.validate()?;

    info!(
        "Indexing {} into collection {}",
        config.seed_path.display(),
        config.index.collection
    );

    let pipeline = Pipeline::new(config)?;
    let stats = pipeline.run()?;

    if stats.duplicate_lsids > 0 {
        println!(
            "Warning: {} duplicate lsid occurrence(s) in the seed file",
            stats.duplicate_lsids
        );
    }
    println!("Upserted: {}", stats.points_upserted);

    Ok(())
}

/// Print the resolved configuration.
#[inline]
pub fn show_config() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let config_dir = get_config_dir()?;

    println!("Configuration directory: {}", config_dir.display());
    println!();
    println!("Embedding server:");
    println!(
        "  endpoint: {}://{}:{}",
        config.embedding.protocol, config.embedding.host, config.embedding.port
    );
    println!("  model: {}", config.embedding.model);
    println!("Index service:");
    println!(
        "  endpoint: {}://{}:{}",
        config.index.protocol, config.index.host, config.index.port
    );
    println!("  collection: {}", config.index.collection);
    println!("Seed file: {}", config.seed_path.display());

    Ok(())
}
