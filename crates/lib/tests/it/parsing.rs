//! Tests for converting between tables and boards through BoardParser.

use corkboard::Board;
use corkboard::board::{BoardColors, Connection, Rgb};
use corkboard::parsing::{BoardParser, ParseError, strategies};
use corkboard::post::{Post, PostContent};
use corkboard::table::{self, Table, TableValue};
use corkboard::tags::{CONNECTS_TO, Tags};

use crate::helpers::*;

const SAMPLE_BOARD: &str = r#"{
  posts = {
    { -- ID = 1
      tags = {
        connects_to = { 2 },
        falsehood = true,
        truth = { false },
        maybe = { false, true },
        random = { 5, 7, 8, 50.5 },
      },
      content = { "Nothing at all.", "Testing content." },
    },
    { -- ID = 2
      tags = { connects_to = 3 },
      content = { "Getting your bearings." },
    },
    { -- ID = 3
      tags = { connects_to = 5, sometext = "Random text.", on_top = true },
      content = "Playing around with testing.",
    },
    { -- ID = 4
      content = { "Does not mean anything." },
    },
    { -- ID = 5
      tags = { connects_to = { 2, 4 } },
      content = { "Getting your bearings." },
    },
  },
  connections = { { 1, 2 }, { 2, 3 }, { 3, 5 }, { 5, 2 }, { 5, 4 } },
}"#;

/// A board exercising every serialised field
fn setup_rich_board() -> Board {
    let mut board = setup_board(3);

    let mut tags = Tags::new();
    tags.push("count", 3);
    tags.push("ratio", 0.25);
    tags.push("done", false);
    tags.push("note", "a \"quoted\" note\nover two lines");
    tags.push(CONNECTS_TO, 3);

    let first = board.get_mut(1).unwrap();
    first.tags = tags;
    first.display_pos.x = 120.5;
    first.display_pos.y = -40.0;
    first.color = Some(Rgb::from_channels([200, 10, 0]));
    first.content.push_back(PostContent::text("second unit"));

    board.options.colors.background = Rgb::from_channels([1, 2, 3]);
    board.connect(1, 3).unwrap();
    board.connect(3, 2).unwrap();
    board
}

// ===== DESERIALIZATION =====

#[test]
fn test_parse_minimal_board() {
    let board = parse_board(r#"{posts={{content={"a","b"}, tags={x={1,2}}}}}"#);

    assert_eq!(board.len(), 1);
    let post = &board[1];
    assert_eq!(post.idx(), 1);
    assert_eq!(post.content.len(), 2);
    assert_eq!(post.content[1], "a");
    assert_eq!(post.content[2], "b");

    let x = post.tags.get("x").unwrap();
    assert_eq!(x.len(), 2);
    assert!(x[1].is_int() && x[1] == 1);
    assert!(x[2].is_int() && x[2] == 2);
    assert!(board.connections.is_empty());
    assert_eq!(board.options.colors, BoardColors::default());
}

#[test]
fn test_parse_sample_board() {
    let board = parse_board(SAMPLE_BOARD);

    assert_eq!(board.len(), 5);
    assert_indexes_valid(&board);
    assert_eq!(board[3].content[1], "Playing around with testing.");

    let first = &board[1].tags;
    assert_eq!(first.len(), 5);
    assert!(first.has_connection());
    assert_eq!(first.get("maybe").unwrap().len(), 2);
    let random = first.get("random").unwrap();
    assert!(random[3].is_int());
    assert!(random[4].is_float());
    assert_eq!(random[4], 50.5);

    assert_eq!(board[3].tags.get("sometext").unwrap()[1], "Random text.");
    assert!(!board[4].tags.has_connection());
    assert_connections(&board, &[(1, 2), (2, 3), (3, 5), (5, 2), (5, 4)]);
}

#[test]
fn test_missing_posts() {
    let err = BoardParser::new().parse_str("{ connections = {} }").unwrap_err();
    assert!(err.is_parsing_error());
    assert_eq!(err.module(), "parsing");
    assert_eq!(err.to_string(), "The file does not have a Posts table.");

    let err = BoardParser::new().parse_str("{ posts = 3 }").unwrap_err();
    assert_eq!(err.to_string(), "The file does not have a Posts table.");
}

#[test]
fn test_unreadable_text() {
    let err = BoardParser::new().parse_str("{ posts = { ").unwrap_err();
    assert!(err.is_syntax_error());
    assert_eq!(err.module(), "table");
}

#[test]
fn test_invalid_post_entries() {
    let parser = BoardParser::new();

    let err = parser.parse_str(r#"{ posts = { "text" } }"#).unwrap_err();
    assert_eq!(err.to_string(), "Post 1 is not a table.");

    let err = parser.parse_str(r#"{ posts = { { tags = {} } } }"#).unwrap_err();
    assert_eq!(err.to_string(), "Post has no valid 'content' field.");
}

#[test]
fn test_invalid_tag_is_reported_with_key() {
    let err = BoardParser::new()
        .parse_str(r#"{ posts = { { content = "a", tags = { broken = { { 1 } } } } } }"#)
        .unwrap_err();
    assert!(err.is_tag_error());
    assert_eq!(err.to_string(), "Cannot parse 'broken' key: Unknown tag type.");
}

#[test]
fn test_integral_numbers_become_integer_tags() {
    let board = parse_board(r#"{ posts = { { content = "a", tags = { n = 4.0 } } } }"#);
    let n = &board[1].tags.get("n").unwrap()[1];
    assert!(n.is_int());
    assert_eq!(n.as_int(), Ok(4));
}

#[test]
fn test_partial_board_config_keeps_defaults() {
    let board = parse_board(
        r#"{ posts = {}, board_config = { bg_color = { 0, 0, 0 }, unknown = true } }"#,
    );
    let colors = board.options.colors;
    assert_eq!(colors.background.to_channels(), [0, 0, 0]);
    assert_eq!(colors.post, BoardColors::default().post);
}

#[test]
fn test_invalid_colors() {
    let parser = BoardParser::new();

    let err = parser
        .parse_str(r#"{ posts = {}, board_config = { text_color = { 1, 2, 3.5 } } }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        corkboard::Error::Parse(ParseError::InvalidBoardColor { ref key }) if key == "text_color"
    ));

    let err = parser
        .parse_str(r#"{ posts = { { content = "a", color = { -1, 0, 0 } } } }"#)
        .unwrap_err();
    assert_eq!(err.to_string(), "Post color is not valid.");
}

#[test]
fn test_connections_are_kept_verbatim() {
    let board = parse_board(r#"{ posts = { { content = "a" } }, connections = { { 1, 7 } } }"#);
    assert_eq!(board.connections[1], Connection::new(1, 7));

    let err = BoardParser::new()
        .parse_str(r#"{ posts = {}, connections = { { 1 } } }"#)
        .unwrap_err();
    assert_eq!(err.to_string(), "Connection 1 is not a valid pair of post indexes.");
}

#[test]
fn test_empty_posts_table() {
    let board = parse_board("return { posts = {} }");
    assert!(board.is_empty());
}

// ===== SERIALIZATION =====

#[test]
fn test_serialized_shape() {
    let mut board = setup_board(1);
    board.create_post_back("second");
    let table = strategies::board_to_table(&board).unwrap();

    let posts = table.get("posts").and_then(TableValue::as_table).unwrap();
    assert_eq!(posts.len(), 2);
    let first = posts.index(1).and_then(TableValue::as_table).unwrap();
    assert!(first.get("tags").is_none());
    assert!(first.get("color").is_none());
    assert_eq!(
        first.get("display_pos"),
        Some(&TableValue::Table(Table::from_items([0.0f32, 0.0])))
    );

    let config = table.get("board_config").and_then(TableValue::as_table).unwrap();
    assert_eq!(config.fields().len(), BoardColors::KEYS.len());
    assert_eq!(
        config.get("post_color"),
        Some(&TableValue::Table(Table::from_items([35u8, 53, 114])))
    );

    let connections = table.get("connections").and_then(TableValue::as_table).unwrap();
    assert!(connections.is_empty());
}

#[test]
fn test_image_content_cannot_be_saved() {
    let mut board = Board::new();
    board.push_back(Post::from_contents([PostContent::image("cat.png", "A cat")]));

    let err = BoardParser::new().to_string_pretty(&board).unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.to_string(), "Cannot serialize Image content.");
}

// ===== ROUND TRIP =====

#[test]
fn test_round_trip_rich_board() {
    let parser = BoardParser::new();
    let board = setup_rich_board();

    let text = parser.to_string_pretty(&board).unwrap();
    let back = parser.parse_str(&text).unwrap();

    assert_eq!(back, board);
    assert_indexes_valid(&back);
}

#[test]
fn test_round_trip_parsed_sample() {
    let parser = BoardParser::new();
    let board = parse_board(SAMPLE_BOARD);

    let text = parser.to_string_pretty(&board).unwrap();
    assert_eq!(parser.parse_str(&text).unwrap(), board);

    let table = parser.board_to_table(&board).unwrap();
    let json = serde_json::to_string(&table).unwrap();
    let from_json: Table = serde_json::from_str(&json).unwrap();
    assert_eq!(parser.table_to_board(&from_json).unwrap(), board);
}

#[test]
fn test_round_trip_after_edits() {
    let parser = BoardParser::new();
    let mut board = parse_board(SAMPLE_BOARD);
    board.move_to_last_index(2).unwrap();
    board.erase(board.cursor(1).unwrap()).unwrap();

    let back = parser.parse_str(&parser.to_string_pretty(&board).unwrap()).unwrap();
    assert_eq!(back, board);
    assert_eq!(back.connections, board.connections);
}

// ===== CUSTOM STRATEGIES =====

#[test]
fn test_custom_strategies() {
    fn titles_only(table: &Table) -> Result<Board, ParseError> {
        let mut board = Board::new();
        for title in table.items().iter().filter_map(TableValue::as_text) {
            board.create_post_back(title);
        }
        Ok(board)
    }

    fn titles_out(board: &Board) -> Result<Table, ParseError> {
        Ok(board.iter().map(|post| post.title().to_string()).collect())
    }

    let parser = BoardParser::with_strategies(titles_only, titles_out);
    let board = parser.parse_str(r#"{ "one", "two" }"#).unwrap();
    assert_titles(&board, &["one", "two"]);

    let text = parser.to_string_pretty(&board).unwrap();
    assert_eq!(table::from_str(&text).unwrap(), Table::from_items(["one", "two"]));
}
