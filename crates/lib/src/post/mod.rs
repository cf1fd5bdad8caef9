//! Posts: the entities placed on a board.
//!
//! A [`Post`] carries ordered content, a [`Tags`] map, a display position
//! and an optional colour override. Its `idx` is assigned by the owning
//! [`Board`](crate::board::Board) and always equals its 1-based position
//! there; a post with `idx() == 0` is not owned by any board.

use crate::board::colors::Rgb;
use crate::sequence::IndexedSequence;
use crate::tags::Tags;

pub mod content;

pub use content::{ContentType, PostContent};

/// Position of a post on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayPos {
    pub x: f32,
    pub y: f32,
}

impl DisplayPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A note on the board.
#[derive(Debug, Clone)]
pub struct Post {
    /// Content units, 1-based. Never empty for posts built by this crate.
    pub content: IndexedSequence<PostContent>,
    pub tags: Tags,
    pub display_pos: DisplayPos,
    /// Colour override; `None` uses the board's post colour
    pub color: Option<Rgb>,
    idx: usize,
}

impl Post {
    /// Creates an unowned post with a single text unit
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_contents([PostContent::Text(text.into())])
    }

    /// Creates an unowned post from content units.
    ///
    /// An empty iterator yields a single empty text unit.
    pub fn from_contents(contents: impl IntoIterator<Item = PostContent>) -> Self {
        let mut content: IndexedSequence<PostContent> = contents.into_iter().collect();
        if content.is_empty() {
            content.push_back(PostContent::default());
        }
        Self {
            content,
            tags: Tags::new(),
            display_pos: DisplayPos::default(),
            color: None,
            idx: 0,
        }
    }

    /// Builder-style tags
    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Builder-style display position
    pub fn with_display_pos(mut self, x: f32, y: f32) -> Self {
        self.display_pos = DisplayPos::new(x, y);
        self
    }

    /// Builder-style colour override
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// 1-based position in the owning board, 0 when unowned
    pub fn idx(&self) -> usize {
        self.idx
    }

    pub(crate) fn set_idx(&mut self, idx: usize) {
        self.idx = idx;
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    /// The first text unit, or "" if there is none
    pub fn title(&self) -> &str {
        self.content
            .iter()
            .find_map(PostContent::as_text)
            .unwrap_or_default()
    }
}

impl Default for Post {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// Idx is board bookkeeping, not part of a post's value.
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
            && self.tags == other.tags
            && self.display_pos == other.display_pos
            && self.color == other.color
    }
}
