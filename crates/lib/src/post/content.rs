//! Renderable units inside a post.

use std::fmt;

/// Discriminant of a [`PostContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Image,
}

impl ContentType {
    pub fn pretty_name(self) -> &'static str {
        match self {
            ContentType::Text => "Text",
            ContentType::Image => "Image",
        }
    }
}

/// One unit of post content: a text block or a reference to an image.
#[derive(Debug, Clone, PartialEq)]
pub enum PostContent {
    Text(String),
    Image { path: String, caption: String },
}

impl PostContent {
    pub fn text(text: impl Into<String>) -> Self {
        PostContent::Text(text.into())
    }

    pub fn image(path: impl Into<String>, caption: impl Into<String>) -> Self {
        PostContent::Image {
            path: path.into(),
            caption: caption.into(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            PostContent::Text(_) => ContentType::Text,
            PostContent::Image { .. } => ContentType::Image,
        }
    }

    /// "Text" or "Image"
    pub fn pretty_type(&self) -> &'static str {
        self.content_type().pretty_name()
    }

    pub fn is_text(&self) -> bool {
        matches!(self, PostContent::Text(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, PostContent::Image { .. })
    }

    /// The text, if this is a text unit
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PostContent::Text(s) => Some(s),
            PostContent::Image { .. } => None,
        }
    }

    /// Mutable text, if this is a text unit
    pub fn as_text_mut(&mut self) -> Option<&mut String> {
        match self {
            PostContent::Text(s) => Some(s),
            PostContent::Image { .. } => None,
        }
    }

    /// Path and caption, if this is an image unit
    pub fn as_image(&self) -> Option<(&str, &str)> {
        match self {
            PostContent::Image { path, caption } => Some((path, caption)),
            PostContent::Text(_) => None,
        }
    }
}

impl Default for PostContent {
    fn default() -> Self {
        PostContent::Text(String::new())
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostContent::Text(s) => f.write_str(s),
            PostContent::Image { path, caption } if caption.is_empty() => {
                write!(f, "[image: {path}]")
            }
            PostContent::Image { path, caption } => write!(f, "[image: {path}] {caption}"),
        }
    }
}

impl From<String> for PostContent {
    fn from(text: String) -> Self {
        PostContent::Text(text)
    }
}

impl From<&str> for PostContent {
    fn from(text: &str) -> Self {
        PostContent::Text(text.to_string())
    }
}

impl PartialEq<str> for PostContent {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for PostContent {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<(&str, &str)> for PostContent {
    fn eq(&self, other: &(&str, &str)) -> bool {
        self.as_image() == Some(*other)
    }
}
