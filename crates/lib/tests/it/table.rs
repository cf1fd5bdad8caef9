//! Tests for the table-literal codec and the JSON form of tables.

use corkboard::table::{self, Table, TableError, TableValue};

const SAMPLE_BOARD: &str = r#"{
  -- ID = 1
  {
    tags = {
      connects_to = { 2 },
      falsehood = true,
      random = { 5, 7, 8, 50.5 },
    },
    content = { "Nothing at all.", "Testing content." },
  },
  { content = "Playing around with testing." },
  --[[ a long
       comment ]]
  { content = [[Does not mean anything.]], display_pos = { 10, -2.5 } },
}"#;

fn sample() -> Table {
    table::from_str(SAMPLE_BOARD).expect("Failed to read sample table")
}

// ===== READING =====

#[test]
fn test_read_nested_sample() {
    let table = sample();
    assert_eq!(table.len(), 3);

    let first = table.index(1).and_then(TableValue::as_table).unwrap();
    let tags = first.get("tags").and_then(TableValue::as_table).unwrap();
    let random = tags.get("random").and_then(TableValue::as_table).unwrap();
    assert_eq!(random.items().len(), 4);
    assert_eq!(random.index(4), Some(&TableValue::Float(50.5)));
    assert_eq!(tags.get("falsehood"), Some(&TableValue::Bool(true)));

    let third = table.index(3).and_then(TableValue::as_table).unwrap();
    assert_eq!(
        third.get("content").and_then(TableValue::as_text),
        Some("Does not mean anything.")
    );
    let pos = third.get("display_pos").and_then(TableValue::as_table).unwrap();
    assert_eq!(pos.index(2).and_then(TableValue::as_number), Some(-2.5));
}

#[test]
fn test_read_with_return_prefix() {
    let with_return = table::from_str(&format!("return {SAMPLE_BOARD}")).unwrap();
    assert_eq!(with_return, sample());
}

#[test]
fn test_read_rejects_non_table_input() {
    for text in ["", "42", "\"text\"", "{ 1, 2", "{ a = }", "{ 1 } trailing"] {
        let err = table::from_str(text).unwrap_err();
        assert!(err.is_syntax_error(), "expected a syntax error for {text:?}");
    }
}

#[test]
fn test_syntax_error_message() {
    let err = table::from_str("{ = }").unwrap_err();
    assert!(err.to_string().starts_with("Could not deserialize table at byte 2"));
}

// ===== WRITING =====

#[test]
fn test_written_text_reads_back() {
    let table = sample();
    let text = table::to_string_pretty(&table).unwrap();
    assert_eq!(table::from_str(&text).unwrap(), table);
}

#[test]
fn test_float_kind_survives_round_trip() {
    let table = Table::from_items([TableValue::Float(3.0), TableValue::Int(3)]);
    let back = table::from_str(&table::to_string_pretty(&table).unwrap()).unwrap();
    assert_eq!(back.index(1), Some(&TableValue::Float(3.0)));
    assert_eq!(back.index(2), Some(&TableValue::Int(3)));
}

#[test]
fn test_extreme_integers_round_trip() {
    let table = Table::from_items([i64::MIN, i64::MAX, 0]);
    let back = table::from_str(&table::to_string_pretty(&table).unwrap()).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_infinite_float_is_rejected() {
    let table = Table::new().with("x", f64::INFINITY);
    let err = table::to_string_pretty(&table).unwrap_err();
    assert_eq!(err, TableError::NonFiniteNumber { path: "x".into() });
}

// ===== JSON =====

#[test]
fn test_json_round_trip() {
    let table = sample();
    let json = serde_json::to_string_pretty(&table).unwrap();
    let back: Table = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_json_shape_of_board_table() {
    let table = Table::new().with(
        "posts",
        Table::from_items([Table::new().with("content", Table::from_items(["a"]))]),
    );
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json, serde_json::json!({ "posts": [ { "content": ["a"] } ] }));
}

// ===== BUILDING =====

#[test]
fn test_builder_and_mutation() {
    let mut table: Table = ["a", "b"].into_iter().collect();
    table.push(3);
    table.set("flag", false);
    assert_eq!(table.len(), 3);
    assert_eq!(table.fields().len(), 1);

    if let Some(TableValue::Bool(flag)) = table.get_mut("flag") {
        *flag = true;
    }
    assert_eq!(table.remove("flag"), Some(TableValue::Bool(true)));
    assert!(table.get("flag").is_none());
    assert!(!table.is_empty());
    assert!(Table::new().is_empty());
}
