//! Canonical text composition.
//!
//! Renders one [`SeedRecord`] into the single string fed to the embedding
//! model. The rendering is pure and stable across runs: the same record
//! always produces the same string, and therefore the same vector.

#[cfg(test)]
mod tests;

use itertools::Itertools;

use super::SeedRecord;

/// Language codes that participate in the canonical text, in fixed order.
pub const EMBED_LANGUAGES: [&str; 5] = ["fr", "en", "de", "it", "es"];

const LSID_DELIMITER: &str = " :: ";
const LANGUAGE_DELIMITER: &str = " | ";

/// Compose the canonical embedding input for a record.
///
/// The `lsid` comes first, then each language slot in [`EMBED_LANGUAGES`]
/// order. A missing translation renders as an empty segment so the slot
/// positions stay aligned across records.
#[inline]
pub fn canonical_text(record: &SeedRecord) -> String {
    let translations = EMBED_LANGUAGES
        .iter()
        .map(|lang| record.translations.get(*lang).map_or("", String::as_str))
        .join(LANGUAGE_DELIMITER);

    format!("{}{}{}", record.lsid, LSID_DELIMITER, translations)
}
