//! JSON ingest tests.
//!
//! Collections are usually built from a query result serialized as a JSON
//! array. Bad records must fail with their position.

use card_collections::cards::{CardCollection, NoteKind};
use card_collections::collection::{parse_records, CollectionError};
use card_collections::reviews::{Review, ReviewCollection};
use card_collections::version::SemanticVersion;

const CARDS: &str = r#"[
    { "number": 1, "version": "1.0.0", "playtesting": "1.0.0", "name": "Strider" },
    { "number": 1, "version": "1.1.0", "playtesting": "1.0.0",
      "note": { "type": "updated", "display": "Cost 4 -> 3" }, "name": "Strider" },
    { "number": 2, "version": "0.3.0", "name": "Shadowfax", "traits": ["Mount"], "artist": null }
]"#;

#[test]
fn test_card_collection_from_json() {
    let collection = CardCollection::from_json_str(CARDS).unwrap();

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.group_count(), 2);

    let strider = collection.get(1).unwrap();
    assert_eq!(strider.latest().version, SemanticVersion::new(1, 1, 0));
    assert_eq!(strider.playtesting().unwrap().version, SemanticVersion::RELEASE);

    let draft = strider.draft().unwrap();
    assert_eq!(draft.note.as_ref().map(|n| n.kind), Some(NoteKind::Updated));
    assert_eq!(
        draft.note.as_ref().and_then(|n| n.text.as_deref()),
        Some("Cost 4 -> 3")
    );

    let shadowfax = collection.get(2).unwrap();
    assert_eq!(shadowfax.draft().unwrap().get_text("name"), Some("Shadowfax"));
}

#[test]
fn test_review_collection_from_json() {
    let collection = ReviewCollection::from_json_str(
        r#"[
            { "number": 1, "version": "1.0.0", "userId": "gimli", "rating": 3 },
            { "number": 1, "version": "1.0.0", "userId": "legolas", "rating": 5 }
        ]"#,
    )
    .unwrap();

    let group = collection.get(1).unwrap();
    assert_eq!(group.latest().reviewer.as_deref(), Some("gimli"));
    assert_eq!(group.latest_ties().count(), 2);
}

#[test]
fn test_invalid_version_reports_index() {
    let err = CardCollection::from_json_str(
        r#"[
            { "number": 1, "version": "1.0.0" },
            { "number": 1, "version": "1.0" }
        ]"#,
    )
    .unwrap_err();

    match err {
        CollectionError::Record { index, source } => {
            assert_eq!(index, 1);
            assert!(source.to_string().contains("invalid version"));
        }
        other => panic!("expected record error, got {other}"),
    }
}

#[test]
fn test_missing_number_reports_index() {
    let err = parse_records::<Review>(r#"[{ "version": "1.0.0" }]"#).unwrap_err();

    assert!(matches!(err, CollectionError::Record { index: 0, .. }));
    assert!(err.to_string().contains("number"));
}

#[test]
fn test_not_an_array() {
    let err = CardCollection::from_json_str(r#"{ "number": 1 }"#).unwrap_err();
    assert!(matches!(err, CollectionError::Json(_)));
}

#[test]
fn test_empty_array() {
    let collection = CardCollection::from_json_str("[]").unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.latest().len(), 0);
}
