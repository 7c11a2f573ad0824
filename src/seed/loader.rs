
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{GlossaryError, Result};

/// One glossary entry from the seed file.
///
/// `lsid` is the stable key the entry is referenced by; `translations` maps
/// language codes to translated strings and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub lsid: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

// Lenient shape for the first parse pass, so a record without `lsid` surfaces
// as MissingLsid rather than a generic deserialization failure.
#[derive(Debug, Deserialize)]
struct RawSeedRecord {
    lsid: Option<String>,
    #[serde(default)]
    translations: BTreeMap<String, String>,
}

/// Load the seed file as an ordered sequence of records.
///
/// Declaration order is preserved exactly; it determines point id assignment
/// downstream.
#[inline]
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedRecord>> {
    debug!("Loading glossary seed from {}", path.display());

    let content = fs::read_to_string(path).map_err(|error| {
        GlossaryError::MalformedInput(format!(
            "failed to read seed file {}: {}",
            path.display(),
            error
        ))
    })?;

    let raw_records: Vec<RawSeedRecord> = serde_json::from_str(&content).map_err(|error| {
        GlossaryError::MalformedInput(format!(
            "seed file {} is not a JSON array of glossary records: {}",
            path.display(),
            error
        ))
    })?;

    let mut records = Vec::with_capacity(raw_records.len());
    for (index, raw) in raw_records.into_iter().enumerate() {
        let Some(lsid) = raw.lsid else {
            return Err(GlossaryError::MissingLsid(index));
        };
        records.push(SeedRecord {
            lsid,
            translations: raw.translations,
        });
    }

    info!(
        "Loaded {} seed records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Report duplicate `lsid`s across the seed file.
///
/// Duplicates are permitted: each occurrence is indexed under its own
/// positional id with identical payload semantics. Returns the number of
/// duplicate occurrences found.
#[inline]
pub fn count_duplicate_lsids(records: &[SeedRecord]) -> usize {
    let mut seen = HashSet::new();
    let mut duplicates = 0;

    for record in records {
        if !seen.insert(record.lsid.as_str()) {
            warn!(
                "Duplicate lsid `{}` in seed file; every occurrence is indexed under a distinct id",
                record.lsid
            );
            duplicates += 1;
        }
    }

    duplicates
}
