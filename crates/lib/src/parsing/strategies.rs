//! Default conversions between [`Table`]s and [`Board`]s.
//!
//! The table layout is:
//!
//! ```text
//! {
//!   posts = {
//!     { content = {"text", ...}, tags = {key = {...}}, display_pos = {x, y}, color = {r, g, b} },
//!     ...
//!   },
//!   board_config = { bg_color = {r, g, b}, post_color = ..., ... },
//!   connections = { {from, to}, ... },
//! }
//! ```
//!
//! Post Idx values are assigned in read order; any Idx-like field in the
//! source is ignored.

use tracing::debug;

use super::errors::ParseError;
use crate::board::{Board, BoardColors, Connection, Rgb};
use crate::post::{DisplayPos, Post, PostContent};
use crate::sequence::IndexedSequence;
use crate::table::{Table, TableValue};
use crate::tags::{TagData, TagEntryList, TagValue, Tags};

/// Builds a board from its table form
pub fn table_to_board(table: &Table) -> Result<Board, ParseError> {
    let posts = table
        .get("posts")
        .and_then(TableValue::as_table)
        .ok_or(ParseError::MissingPosts)?;

    let mut board = Board::new();
    for (i, entry) in posts.items().iter().enumerate() {
        let entry = entry
            .as_table()
            .ok_or(ParseError::InvalidPost { index: i + 1 })?;
        board.push_back(table_to_post(entry)?);
    }

    if let Some(config) = table.get("board_config") {
        board.options.colors = board_colors(config)?;
    }

    if let Some(connections) = table.get("connections") {
        let connections = connections
            .as_table()
            .ok_or(ParseError::InvalidConnection { index: 0 })?;
        for (i, pair) in connections.items().iter().enumerate() {
            // Kept verbatim; endpoints are not checked against the post count.
            let connection =
                connection(pair).ok_or(ParseError::InvalidConnection { index: i + 1 })?;
            board.connections.push_back(connection);
        }
    }

    debug!(
        posts = board.len(),
        connections = board.connections.len(),
        "Parsed board from table"
    );
    Ok(board)
}

/// Builds an unowned post from one entry of the `posts` sequence
pub fn table_to_post(table: &Table) -> Result<Post, ParseError> {
    let content = match table.get("content") {
        Some(TableValue::Text(text)) => vec![PostContent::Text(text.clone())],
        Some(TableValue::Table(units)) => units
            .items()
            .iter()
            .map(|unit| {
                unit.as_text()
                    .map(PostContent::from)
                    .ok_or(ParseError::InvalidContent)
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(ParseError::InvalidContent),
    };
    let mut post = Post::from_contents(content);

    if let Some(tags) = table.get("tags") {
        post.tags = tags_from_value(tags)?;
    }

    if let Some(color) = table.get("color") {
        post.color = Some(rgb(color).ok_or(ParseError::InvalidColor)?);
    }

    post.display_pos = display_pos(table.get("display_pos"))?;
    Ok(post)
}

/// Table form of a post's content units.
///
/// Only text units have a table form.
pub fn post_content_to_table(content: &IndexedSequence<PostContent>) -> Result<Table, ParseError> {
    content
        .iter()
        .map(|unit| match unit {
            PostContent::Text(text) => Ok(TableValue::Text(text.clone())),
            other => Err(ParseError::UnserializableContent {
                content_type: other.pretty_type(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Table::from_items)
}

/// Table form of a board
pub fn board_to_table(board: &Board) -> Result<Table, ParseError> {
    let mut posts = Table::new();
    for post in board {
        posts.push(post_to_table(post)?);
    }

    let mut config = Table::new();
    for key in BoardColors::KEYS {
        if let Some(color) = board.options.colors.get(key) {
            config.set(key, channels_table(color));
        }
    }

    let connections: Table = board
        .connections
        .iter()
        .map(|c| Table::from_items([c.from, c.to]))
        .collect();

    debug!(
        posts = board.len(),
        connections = board.connections.len(),
        "Converted board to table"
    );
    Ok(Table::new()
        .with("posts", posts)
        .with("board_config", config)
        .with("connections", connections))
}

fn post_to_table(post: &Post) -> Result<Table, ParseError> {
    let mut table = Table::new().with("content", post_content_to_table(&post.content)?);

    if !post.tags.is_empty() {
        let mut tags = Table::new();
        for (key, values) in post.tags.iter() {
            let values: Table = values.iter().map(tag_to_table_value).collect();
            tags.set(key, values);
        }
        table.set("tags", tags);
    }

    table.set(
        "display_pos",
        Table::from_items([post.display_pos.x, post.display_pos.y]),
    );

    if let Some(color) = post.color {
        table.set("color", channels_table(color));
    }
    Ok(table)
}

fn tags_from_value(value: &TableValue) -> Result<Tags, ParseError> {
    let table = value.as_table().ok_or_else(|| ParseError::InvalidTag {
        key: "tags".to_string(),
        reason: format!("expected a table, found a {}", value.type_name()),
    })?;
    if !table.items().is_empty() {
        return Err(ParseError::InvalidTag {
            key: "1".to_string(),
            reason: "tag keys must be strings".to_string(),
        });
    }

    let mut tags = Tags::new();
    for (key, value) in table.fields() {
        let values = tag_values(value).map_err(|e| ParseError::InvalidTag {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        tags.insert(key.as_str(), values);
    }
    Ok(tags)
}

/// A single scalar or a sequence of scalars
fn tag_values(value: &TableValue) -> Result<TagEntryList, ParseError> {
    let values = match value {
        TableValue::Table(list) => list
            .items()
            .iter()
            .map(tag_value)
            .collect::<Result<Vec<_>, _>>()?,
        scalar => vec![tag_value(scalar)?],
    };
    Ok(IndexedSequence::from_vec(values, false))
}

/// The tag kind follows the table value's kind; integral floats become
/// integers.
fn tag_value(value: &TableValue) -> Result<TagValue, ParseError> {
    let data = match value {
        TableValue::Bool(b) => TagData::Bool(*b),
        TableValue::Text(s) => TagData::Text(s.clone()),
        TableValue::Int(n) => TagData::Int(*n),
        TableValue::Float(f) if f.fract() == 0.0 && is_i64_range(*f) => TagData::Int(*f as i64),
        TableValue::Float(f) => TagData::Float(*f),
        TableValue::Table(_) => return Err(ParseError::UnknownTagType),
    };
    Ok(TagValue::new(data))
}

fn tag_to_table_value(value: &TagValue) -> TableValue {
    match value.data() {
        TagData::Int(n) => TableValue::Int(*n),
        TagData::Float(f) => TableValue::Float(*f),
        TagData::Bool(b) => TableValue::Bool(*b),
        TagData::Text(s) => TableValue::Text(s.clone()),
    }
}

fn is_i64_range(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Wrong-size or non-table positions fall back to (0, 0).
fn display_pos(value: Option<&TableValue>) -> Result<DisplayPos, ParseError> {
    let Some(pos) = value.and_then(TableValue::as_table) else {
        return Ok(DisplayPos::default());
    };
    let [x, y] = pos.items() else {
        return Ok(DisplayPos::default());
    };
    match (x.as_number(), y.as_number()) {
        (Some(x), Some(y)) => Ok(DisplayPos::new(x as f32, y as f32)),
        _ => Err(ParseError::InvalidDisplayPos),
    }
}

fn board_colors(value: &TableValue) -> Result<BoardColors, ParseError> {
    let config = value
        .as_table()
        .ok_or_else(|| ParseError::InvalidBoardColor {
            key: "board_config".to_string(),
        })?;
    let mut colors = BoardColors::default();
    for key in BoardColors::KEYS {
        let Some(value) = config.get(key) else {
            continue;
        };
        let parsed = rgb(value).ok_or_else(|| ParseError::InvalidBoardColor {
            key: key.to_string(),
        })?;
        if let Some(slot) = colors.get_mut(key) {
            *slot = parsed;
        }
    }
    Ok(colors)
}

/// Exactly three integral channels in 0..=255
fn rgb(value: &TableValue) -> Option<Rgb> {
    let [r, g, b] = value.as_table()?.items() else {
        return None;
    };
    Some(Rgb::from_channels([channel(r)?, channel(g)?, channel(b)?]))
}

fn channel(value: &TableValue) -> Option<u8> {
    match value {
        TableValue::Int(n) => u8::try_from(*n).ok(),
        TableValue::Float(f) if f.fract() == 0.0 && (0.0..=255.0).contains(f) => Some(*f as u8),
        _ => None,
    }
}

fn channels_table(color: Rgb) -> Table {
    Table::from_items(color.to_channels())
}

fn connection(value: &TableValue) -> Option<Connection> {
    let [from, to] = value.as_table()?.items() else {
        return None;
    };
    let from = usize::try_from(from.as_int()?).ok()?;
    let to = usize::try_from(to.as_int()?).ok()?;
    Some(Connection::new(from, to))
}
