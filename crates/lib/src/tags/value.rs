//! Scalar values stored under post tags.
//!
//! A [`TagValue`] is one of four closed kinds (integer, float, boolean,
//! string). The kind is fixed when the value is built, and a display label
//! is computed at the same time.
//!
//! # Equality
//!
//! Two `TagValue`s are equal only when they hold the same kind and the same
//! payload, so `Int(5) != Float(5.0)`. Comparing against raw numbers is
//! looser: `TagValue::from(5) == 5.0` and `TagValue::from(5.0) == 5` both
//! hold.
//!
//! ```
//! use corkboard::tags::{TagKind, TagValue};
//!
//! let five = TagValue::from(5);
//! assert!(five == 5);
//! assert!(five == 5.0);
//! assert_ne!(five, TagValue::from(5.0));
//!
//! let parsed = TagValue::parse("6", TagKind::Float).unwrap();
//! assert!(parsed.is_float());
//! ```

use std::fmt;

use super::errors::TagError;

/// The closed set of tag kinds.
///
/// The discriminants are the type hints understood by
/// [`TagValue::parse_with_hint`]: 0 = int, 1 = float, 2 = bool, 3 = string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Int = 0,
    Float = 1,
    Bool = 2,
    Text = 3,
}

impl TagKind {
    /// Numeric hint for this kind
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Int => "int",
            TagKind::Float => "float",
            TagKind::Bool => "boolean",
            TagKind::Text => "string",
        }
    }

    /// Human-facing name
    pub fn pretty_name(self) -> &'static str {
        match self {
            TagKind::Int => "Integer",
            TagKind::Float => "Float",
            TagKind::Bool => "Boolean",
            TagKind::Text => "String",
        }
    }
}

impl TryFrom<usize> for TagKind {
    type Error = TagError;

    fn try_from(hint: usize) -> Result<Self, Self::Error> {
        match hint {
            0 => Ok(TagKind::Int),
            1 => Ok(TagKind::Float),
            2 => Ok(TagKind::Bool),
            3 => Ok(TagKind::Text),
            _ => Err(TagError::InvalidHint { hint }),
        }
    }
}

/// Payload of a [`TagValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum TagData {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl TagData {
    /// Kind of this payload
    pub fn kind(&self) -> TagKind {
        match self {
            TagData::Int(_) => TagKind::Int,
            TagData::Float(_) => TagKind::Float,
            TagData::Bool(_) => TagKind::Bool,
            TagData::Text(_) => TagKind::Text,
        }
    }

    fn label(&self) -> String {
        match self {
            TagData::Int(n) => n.to_string(),
            TagData::Float(f) => f.to_string(),
            TagData::Bool(b) => b.to_string(),
            TagData::Text(s) => s.clone(),
        }
    }
}

/// An immutable tag value with a precomputed display label.
#[derive(Debug, Clone)]
pub struct TagValue {
    data: TagData,
    label: String,
}

impl TagValue {
    /// Builds a value from its payload
    pub fn new(data: TagData) -> Self {
        let label = data.label();
        Self { data, label }
    }

    /// Coerces `text` into a value of the hinted kind.
    ///
    /// The literal texts `"true"` and `"false"` always become booleans. Under
    /// an int or float hint the text must be numeric; an int hint on text
    /// with a fractional part still yields a float. A bool hint on anything
    /// but `"true"`/`"false"` fails.
    pub fn parse(text: &str, hint: TagKind) -> Result<Self, TagError> {
        let data = match text {
            "true" => TagData::Bool(true),
            "false" => TagData::Bool(false),
            _ => match hint {
                TagKind::Bool => {
                    return Err(TagError::Coercion {
                        expected: hint.name(),
                        text: text.to_string(),
                    });
                }
                TagKind::Text => TagData::Text(text.to_string()),
                TagKind::Int | TagKind::Float => numeric_from_text(text, hint)?,
            },
        };
        Ok(Self::new(data))
    }

    /// [`parse`](Self::parse) with a raw numeric hint (0..=3)
    pub fn parse_with_hint(text: &str, hint: usize) -> Result<Self, TagError> {
        Self::parse(text, TagKind::try_from(hint)?)
    }

    /// The stored payload
    pub fn data(&self) -> &TagData {
        &self.data
    }

    /// Kind of the stored payload
    pub fn kind(&self) -> TagKind {
        self.data.kind()
    }

    /// Numeric kind index (0 = int, 1 = float, 2 = bool, 3 = string)
    pub fn index(&self) -> usize {
        self.kind().index()
    }

    /// Display label computed at construction
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Human-facing kind name
    pub fn pretty_type(&self) -> &'static str {
        self.kind().pretty_name()
    }

    pub fn is_int(&self) -> bool {
        matches!(self.data, TagData::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self.data, TagData::Float(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.data, TagData::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.data, TagData::Text(_))
    }

    /// The integer payload, or [`TagError::WrongType`]
    pub fn as_int(&self) -> Result<i64, TagError> {
        match self.data {
            TagData::Int(n) => Ok(n),
            _ => Err(self.wrong_type(TagKind::Int)),
        }
    }

    /// The float payload, or [`TagError::WrongType`]
    pub fn as_float(&self) -> Result<f64, TagError> {
        match self.data {
            TagData::Float(f) => Ok(f),
            _ => Err(self.wrong_type(TagKind::Float)),
        }
    }

    /// The boolean payload, or [`TagError::WrongType`]
    pub fn as_bool(&self) -> Result<bool, TagError> {
        match self.data {
            TagData::Bool(b) => Ok(b),
            _ => Err(self.wrong_type(TagKind::Bool)),
        }
    }

    /// The string payload, or [`TagError::WrongType`]
    pub fn as_str(&self) -> Result<&str, TagError> {
        match &self.data {
            TagData::Text(s) => Ok(s),
            _ => Err(self.wrong_type(TagKind::Text)),
        }
    }

    fn wrong_type(&self, expected: TagKind) -> TagError {
        TagError::WrongType {
            expected: expected.name(),
            actual: self.kind().name(),
        }
    }
}

fn numeric_from_text(text: &str, hint: TagKind) -> Result<TagData, TagError> {
    let coercion = || TagError::Coercion {
        expected: hint.name(),
        text: text.to_string(),
    };
    let trimmed = text.trim();
    if hint == TagKind::Int
        && let Ok(n) = trimmed.parse::<i64>()
    {
        return Ok(TagData::Int(n));
    }
    let value = trimmed.parse::<f64>().map_err(|_| coercion())?;
    if !value.is_finite() {
        return Err(coercion());
    }
    if hint == TagKind::Float || value.fract() != 0.0 {
        Ok(TagData::Float(value))
    } else {
        Ok(TagData::Int(value as i64))
    }
}

impl Default for TagValue {
    fn default() -> Self {
        Self::new(TagData::Int(0))
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl PartialEq for TagValue {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<TagData> for TagValue {
    fn from(data: TagData) -> Self {
        Self::new(data)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        Self::new(TagData::Int(value))
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::new(TagData::Int(value as i64))
    }
}

impl From<usize> for TagValue {
    fn from(value: usize) -> Self {
        Self::new(TagData::Int(value as i64))
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        Self::new(TagData::Float(value))
    }
}

impl From<f32> for TagValue {
    fn from(value: f32) -> Self {
        Self::new(TagData::Float(value as f64))
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::new(TagData::Bool(value))
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::new(TagData::Text(value))
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::new(TagData::Text(value.to_string()))
    }
}

// Raw-argument comparisons. Integers and floats compare by numeric value.
impl PartialEq<i64> for TagValue {
    fn eq(&self, other: &i64) -> bool {
        match self.data {
            TagData::Int(n) => n == *other,
            TagData::Float(f) => f == *other as f64,
            _ => false,
        }
    }
}

impl PartialEq<i32> for TagValue {
    fn eq(&self, other: &i32) -> bool {
        *self == *other as i64
    }
}

impl PartialEq<usize> for TagValue {
    fn eq(&self, other: &usize) -> bool {
        *self == *other as i64
    }
}

impl PartialEq<f64> for TagValue {
    fn eq(&self, other: &f64) -> bool {
        match self.data {
            TagData::Float(f) => f == *other,
            TagData::Int(n) => n as f64 == *other,
            _ => false,
        }
    }
}

impl PartialEq<f32> for TagValue {
    fn eq(&self, other: &f32) -> bool {
        *self == *other as f64
    }
}

impl PartialEq<bool> for TagValue {
    fn eq(&self, other: &bool) -> bool {
        matches!(self.data, TagData::Bool(b) if b == *other)
    }
}

impl PartialEq<str> for TagValue {
    fn eq(&self, other: &str) -> bool {
        matches!(&self.data, TagData::Text(s) if s == other)
    }
}

impl PartialEq<&str> for TagValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for TagValue {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<TagValue> for i64 {
    fn eq(&self, other: &TagValue) -> bool {
        other == self
    }
}

impl PartialEq<TagValue> for i32 {
    fn eq(&self, other: &TagValue) -> bool {
        other == self
    }
}

impl PartialEq<TagValue> for f64 {
    fn eq(&self, other: &TagValue) -> bool {
        other == self
    }
}

impl PartialEq<TagValue> for bool {
    fn eq(&self, other: &TagValue) -> bool {
        other == self
    }
}

impl PartialEq<TagValue> for &str {
    fn eq(&self, other: &TagValue) -> bool {
        other == *self
    }
}
