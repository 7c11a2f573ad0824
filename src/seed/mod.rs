// Glossary seed handling: file loading and canonical text composition

pub mod canonical;
pub mod loader;

pub use canonical::{EMBED_LANGUAGES, canonical_text};
pub use loader::{SeedRecord, count_duplicate_lsids, load_seed_file};
