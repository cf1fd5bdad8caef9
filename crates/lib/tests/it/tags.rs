//! Tests for tag values and the per-post tag map.

use corkboard::sequence::IndexedSequence;
use corkboard::tags::{CONNECTS_TO, TagData, TagError, TagKind, TagValue, Tags};

// ===== TAG VALUE CONSTRUCTION =====

#[test]
fn test_kind_follows_constructor() {
    assert_eq!(TagValue::from(5).kind(), TagKind::Int);
    assert_eq!(TagValue::from(5.5).kind(), TagKind::Float);
    assert_eq!(TagValue::from(true).kind(), TagKind::Bool);
    assert_eq!(TagValue::from("words").kind(), TagKind::Text);
    assert_eq!(TagValue::from(String::from("owned")).kind(), TagKind::Text);
}

#[test]
fn test_default_is_integer_zero() {
    let value = TagValue::default();
    assert!(value.is_int());
    assert_eq!(value.as_int(), Ok(0));
    assert_eq!(value.label(), "0");
}

#[test]
fn test_kind_indexes_and_names() {
    let kinds = [TagKind::Int, TagKind::Float, TagKind::Bool, TagKind::Text];
    for (i, kind) in kinds.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
        assert_eq!(TagKind::try_from(i), Ok(kind));
    }
    assert_eq!(TagValue::from(true).pretty_type(), "Boolean");
    assert_eq!(TagValue::from("a").pretty_type(), "String");
    assert_eq!(TagKind::Float.name(), "float");
}

#[test]
fn test_labels() {
    assert_eq!(TagValue::from(-12).to_string(), "-12");
    assert_eq!(TagValue::from(2.5).to_string(), "2.5");
    assert_eq!(TagValue::from(false).to_string(), "false");
    assert_eq!(TagValue::from("text").to_string(), "text");
}

// ===== COERCION FROM TEXT =====

#[test]
fn test_parse_respects_hint() {
    let int = TagValue::parse("42", TagKind::Int).unwrap();
    assert_eq!(int.data(), &TagData::Int(42));

    let float = TagValue::parse("42", TagKind::Float).unwrap();
    assert_eq!(float.data(), &TagData::Float(42.0));

    let text = TagValue::parse("42", TagKind::Text).unwrap();
    assert_eq!(text.as_str(), Ok("42"));
}

#[test]
fn test_parse_fractional_text_under_int_hint() {
    let value = TagValue::parse("5.5", TagKind::Int).unwrap();
    assert!(value.is_float());
    assert_eq!(value, 5.5);
}

#[test]
fn test_parse_boolean_literals_win() {
    for hint in [TagKind::Int, TagKind::Float, TagKind::Bool, TagKind::Text] {
        assert_eq!(TagValue::parse("true", hint).unwrap(), TagValue::from(true));
        assert_eq!(TagValue::parse("false", hint).unwrap(), TagValue::from(false));
    }
}

#[test]
fn test_parse_failures() {
    let err = TagValue::parse("abc", TagKind::Int).unwrap_err();
    assert!(err.is_construction_error());
    assert_eq!(err.to_string(), "Could not parse string into int Tag.");

    let err = TagValue::parse("yes", TagKind::Bool).unwrap_err();
    assert_eq!(err.to_string(), "Could not parse string into boolean Tag.");

    assert!(TagValue::parse("inf", TagKind::Float).is_err());
    assert!(TagValue::parse("NaN", TagKind::Float).is_err());
}

#[test]
fn test_parse_with_invalid_hint() {
    let err = TagValue::parse_with_hint("1", 4).unwrap_err();
    assert_eq!(err, TagError::InvalidHint { hint: 4 });
    assert_eq!(err.to_string(), "A Tag cannot be initialized with index 4.");

    let value = TagValue::parse_with_hint("1", 1).unwrap();
    assert!(value.is_float());
}

// ===== TYPED ACCESS =====

#[test]
fn test_typed_accessors_reject_other_kinds() {
    let value = TagValue::from("text");
    let err = value.as_int().unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err,
        TagError::WrongType {
            expected: "int",
            actual: "string"
        }
    );
    assert!(TagValue::from(1).as_float().is_err());
    assert!(TagValue::from(1.0).as_bool().is_err());
}

// ===== EQUALITY =====

#[test]
fn test_equality_is_kind_strict() {
    assert_ne!(TagValue::from(5), TagValue::from(5.0));
    assert_ne!(TagValue::from("5"), TagValue::from(5));
    assert_eq!(TagValue::from(5), TagValue::from(5i64));
}

#[test]
fn test_raw_comparisons_cross_numeric_kinds() {
    assert!(TagValue::from(5) == 5.0);
    assert!(TagValue::from(5.0) == 5);
    assert!(5 == TagValue::from(5));
    assert!(TagValue::from(true) == true);
    assert!(TagValue::from("a") == "a");
    assert!("a" == TagValue::from("a"));
    assert!(TagValue::from(1) != true);
    assert!(TagValue::from("1") != 1);
}

// ===== TAG MAP =====

#[test]
fn test_push_creates_keys_in_order() {
    let mut tags = Tags::new();
    tags.push("random", 5);
    tags.push("random", 7.5);
    tags.push("mood", "calm");

    let random = tags.get("random").unwrap();
    assert_eq!(random.len(), 2);
    assert_eq!(random[1], 5);
    assert_eq!(random[2], 7.5);
    assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["mood", "random"]);
    assert_eq!(tags.len(), 2);
}

#[test]
fn test_read_only_access_does_not_create() {
    let tags = Tags::new();
    let err = tags.get("missing").unwrap_err();
    assert_eq!(err.key(), Some("missing"));
    assert_eq!(
        err.to_string(),
        "'missing' is not a valid key nor can it be created on a read-only view"
    );
    assert!(tags.is_empty());
}

#[test]
fn test_remove_last_value_deletes_key() {
    let mut tags = Tags::new();
    tags.push("x", 1);

    assert!(tags.remove_from_key("x", &TagValue::from(1)));
    assert!(!tags.has_tag("x"));
    assert!(tags.get("x").is_err());
}

#[test]
fn test_remove_from_key_matches_kind() {
    let mut tags = Tags::new();
    tags.push("x", 1);
    tags.push("x", 2);

    assert!(!tags.remove_from_key("x", &TagValue::from(1.0)));
    assert!(!tags.remove_from_key("y", &TagValue::from(1)));
    assert!(tags.remove_from_key("x", &TagValue::from(1)));
    assert_eq!(tags.get("x").unwrap().len(), 1);
    assert_eq!(tags.get("x").unwrap()[1], 2);
}

#[test]
fn test_remove_index_from_key() {
    let mut tags = Tags::new();
    tags.push("list", "a");
    tags.push("list", "b");

    assert_eq!(tags.remove_index_from_key("nothing", 0), Ok(false));
    assert_eq!(
        tags.remove_index_from_key("list", 2),
        Err(TagError::EntryIndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(tags.remove_index_from_key("list", 0), Ok(true));
    assert_eq!(tags.get("list").unwrap()[1], "b");
    assert_eq!(tags.remove_index_from_key("list", 0), Ok(true));
    assert!(!tags.has_tag("list"));
}

#[test]
fn test_erase_key() {
    let mut tags = Tags::new();
    tags.push("gone", false);
    assert!(tags.erase("gone"));
    assert!(!tags.erase("gone"));
}

#[test]
fn test_has_connection() {
    let mut tags = Tags::new();
    assert!(!tags.has_connection());

    tags.entry_mut(CONNECTS_TO);
    assert!(!tags.has_connection());

    tags.push(CONNECTS_TO, 3);
    assert!(tags.has_connection());
}

#[test]
fn test_integer_and_float_tags_differ() {
    let ints: Tags = [("n", IndexedSequence::from(vec![TagValue::from(5)]))]
        .into_iter()
        .collect();
    let floats: Tags = [("n", IndexedSequence::from(vec![TagValue::from(5.0)]))]
        .into_iter()
        .collect();
    assert_ne!(ints, floats);
}
