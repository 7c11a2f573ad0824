use super::*;
use std::collections::BTreeMap;

fn record(lsid: &str, translations: &[(&str, &str)]) -> SeedRecord {
    SeedRecord {
        lsid: lsid.to_string(),
        translations: translations
            .iter()
            .map(|(lang, text)| (lang.to_string(), text.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn fixed_language_order_with_missing_entries() {
    let record = record("GREETING_HELLO", &[("fr", "Bonjour"), ("en", "Hello")]);

    assert_eq!(
        canonical_text(&record),
        "GREETING_HELLO :: Bonjour | Hello |  |  | "
    );
}

#[test]
fn all_languages_present() {
    let record = record(
        "GREETING_HELLO",
        &[
            ("fr", "Bonjour"),
            ("en", "Hello"),
            ("de", "Hallo"),
            ("it", "Ciao"),
            ("es", "Hola"),
        ],
    );

    assert_eq!(
        canonical_text(&record),
        "GREETING_HELLO :: Bonjour | Hello | Hallo | Ciao | Hola"
    );
}

#[test]
fn empty_translations_render_empty_segments() {
    let record = record("BARE", &[]);

    assert_eq!(canonical_text(&record), "BARE ::  |  |  |  | ");
}

#[test]
fn languages_outside_the_fixed_set_are_ignored() {
    let record = record("X", &[("pt", "Olá"), ("en", "Hello")]);

    assert_eq!(canonical_text(&record), "X ::  | Hello |  |  | ");
}

#[test]
fn composition_is_deterministic() {
    let record = record("GREETING_BYE", &[("en", "Bye"), ("de", "Tschüss")]);

    assert_eq!(canonical_text(&record), canonical_text(&record));
}
