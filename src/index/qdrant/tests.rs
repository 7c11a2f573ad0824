use super::*;
use serde_json::json;

fn record(lsid: &str, translations: &[(&str, &str)]) -> SeedRecord {
    SeedRecord {
        lsid: lsid.to_string(),
        translations: translations
            .iter()
            .map(|(lang, text)| (lang.to_string(), text.to_string()))
            .collect(),
    }
}

#[test]
fn ids_are_a_contiguous_one_based_run_over_input_order() {
    let records = vec![record("A", &[]), record("B", &[]), record("C", &[])];
    let vectors = vec![vec![1.0], vec![2.0], vec![3.0]];

    let points = build_points(&records, vectors).expect("should build points");

    assert_eq!(points.len(), 3);
    assert_eq!(
        points.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(points[0].payload.lsid, "A");
    assert_eq!(points[2].payload.lsid, "C");
    assert_eq!(points[1].vector, vec![2.0]);
}

#[test]
fn payload_carries_record_data_unmodified() {
    let records = vec![record(
        "GREETING_HELLO",
        &[("fr", "Bonjour"), ("en", "Hello"), ("pt", "Olá")],
    )];

    let points = build_points(&records, vec![vec![0.5, 0.5]]).expect("should build points");

    assert_eq!(points[0].payload.lsid, records[0].lsid);
    assert_eq!(points[0].payload.translations, records[0].translations);
}

#[test]
fn vector_count_mismatch_is_fatal() {
    let records = vec![record("A", &[]), record("B", &[])];

    let error = build_points(&records, vec![vec![1.0]]).expect_err("should reject mismatch");

    assert!(matches!(error, GlossaryError::Embedding(_)));
}

#[test]
fn empty_batch_builds_no_points() {
    let points = build_points(&[], Vec::new()).expect("should build empty batch");
    assert!(points.is_empty());
}

#[test]
fn point_wire_format() {
    let records = vec![record("GREETING_BYE", &[("en", "Bye")])];
    let points = build_points(&records, vec![vec![0.0, 1.0]]).expect("should build points");

    let value = serde_json::to_value(&points[0]).expect("should serialize point");

    assert_eq!(
        value,
        json!({
            "id": 1,
            "vector": [0.0, 1.0],
            "payload": {
                "lsid": "GREETING_BYE",
                "translations": {"en": "Bye"}
            }
        })
    );
}

#[test]
fn client_configuration() {
    let mut config = Config::default();
    config.index.host = "test-host".to_string();
    config.index.port = 7333;
    config.index.collection = "glossary_v1".to_string();

    let client = QdrantClient::new(&config).expect("should create client");

    assert_eq!(client.collection(), "glossary_v1");
    assert_eq!(client.base_url.host_str(), Some("test-host"));
    assert_eq!(client.base_url.port(), Some(7333));
}
