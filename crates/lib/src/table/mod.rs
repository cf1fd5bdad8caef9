//! Structured tables: the format-agnostic form of a board file.
//!
//! A [`Table`] has a positional part (1-based, contiguous) and a set of
//! string-keyed fields, holding [`TableValue`]s of five kinds: booleans,
//! integers, floats, text and nested tables. It sits between the board model
//! and the persisted text:
//!
//! ```text
//! text <-> Table <-> Board
//! ```
//!
//! [`from_str`] and [`to_string_pretty`] convert between tables and the
//! table-literal text format. Tables also implement serde, serialising as a
//! sequence when they have no fields and as a map otherwise, which is how
//! they are stored as JSON.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod errors;
pub mod reader;
pub mod writer;

pub use errors::TableError;
pub use reader::from_str;
pub use writer::to_string_pretty;

/// A value stored in a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Table(Table),
}

impl TableValue {
    /// Name of the value's kind, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            TableValue::Bool(_) => "boolean",
            TableValue::Int(_) => "integer",
            TableValue::Float(_) => "float",
            TableValue::Text(_) => "string",
            TableValue::Table(_) => "table",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TableValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TableValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TableValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Either numeric kind as a float
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TableValue::Int(n) => Some(*n as f64),
            TableValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TableValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            TableValue::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            TableValue::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, TableValue::Int(_) | TableValue::Float(_))
    }
}

impl From<bool> for TableValue {
    fn from(value: bool) -> Self {
        TableValue::Bool(value)
    }
}

impl From<i64> for TableValue {
    fn from(value: i64) -> Self {
        TableValue::Int(value)
    }
}

impl From<i32> for TableValue {
    fn from(value: i32) -> Self {
        TableValue::Int(value.into())
    }
}

impl From<u8> for TableValue {
    fn from(value: u8) -> Self {
        TableValue::Int(value.into())
    }
}

impl From<usize> for TableValue {
    fn from(value: usize) -> Self {
        TableValue::Int(value as i64)
    }
}

impl From<f64> for TableValue {
    fn from(value: f64) -> Self {
        TableValue::Float(value)
    }
}

impl From<f32> for TableValue {
    fn from(value: f32) -> Self {
        TableValue::Float(value.into())
    }
}

impl From<String> for TableValue {
    fn from(value: String) -> Self {
        TableValue::Text(value)
    }
}

impl From<&str> for TableValue {
    fn from(value: &str) -> Self {
        TableValue::Text(value.to_string())
    }
}

impl From<Table> for TableValue {
    fn from(value: Table) -> Self {
        TableValue::Table(value)
    }
}

/// A table with a positional part and string-keyed fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    items: Vec<TableValue>,
    fields: BTreeMap<String, TableValue>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a purely positional table
    pub fn from_items<V: Into<TableValue>>(items: impl IntoIterator<Item = V>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            fields: BTreeMap::new(),
        }
    }

    /// Length of the positional part
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are neither positional entries nor fields
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.fields.is_empty()
    }

    /// Field `key`
    pub fn get(&self, key: &str) -> Option<&TableValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TableValue> {
        self.fields.get_mut(key)
    }

    /// Positional entry at 1-based `index`
    pub fn index(&self, index: usize) -> Option<&TableValue> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Sets field `key`, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<TableValue>) -> Option<TableValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TableValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes field `key`
    pub fn remove(&mut self, key: &str) -> Option<TableValue> {
        self.fields.remove(key)
    }

    /// Appends a positional entry
    pub fn push(&mut self, value: impl Into<TableValue>) {
        self.items.push(value.into());
    }

    /// Positional entries, 0-based
    pub fn items(&self) -> &[TableValue] {
        &self.items
    }

    /// Fields, ordered by key
    pub fn fields(&self) -> &BTreeMap<String, TableValue> {
        &self.fields
    }
}

impl<V: Into<TableValue>> FromIterator<V> for Table {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

// Positional-only tables serialise as sequences. Anything with fields
// becomes a map whose positional entries are keyed "1", "2", ... Field keys
// that would read back as positions, or that start with the escape
// character, get one escape character prepended.
const FIELD_ESCAPE: char = '\\';

/// `Some(n)` if `key` is the canonical decimal form of a position
fn positional_key(key: &str) -> Option<usize> {
    if key.is_empty() || key.starts_with('0') || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

fn escape_field_key(key: &str) -> Cow<'_, str> {
    if key.starts_with(FIELD_ESCAPE) || positional_key(key).is_some() {
        Cow::Owned(format!("{FIELD_ESCAPE}{key}"))
    } else {
        Cow::Borrowed(key)
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.fields.is_empty() {
            let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
            for item in &self.items {
                seq.serialize_element(item)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.items.len() + self.fields.len()))?;
            for (i, item) in self.items.iter().enumerate() {
                map.serialize_entry(&(i + 1).to_string(), item)?;
            }
            for (key, value) in &self.fields {
                map.serialize_entry(escape_field_key(key).as_ref(), value)?;
            }
            map.end()
        }
    }
}

impl Serialize for TableValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TableValue::Bool(b) => serializer.serialize_bool(*b),
            TableValue::Int(n) => serializer.serialize_i64(*n),
            TableValue::Float(f) => serializer.serialize_f64(*f),
            TableValue::Text(s) => serializer.serialize_str(s),
            TableValue::Table(t) => t.serialize(serializer),
        }
    }
}

struct TableValueVisitor;

impl<'de> Visitor<'de> for TableValueVisitor {
    type Value = TableValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, number, string, sequence or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(TableValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(TableValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(TableValue::Int)
            .map_err(|_| E::custom(format!("integer {v} does not fit in 64 signed bits")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(TableValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(TableValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(TableValue::Text(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<TableValue>()? {
            items.push(item);
        }
        Ok(TableValue::Table(Table {
            items,
            fields: BTreeMap::new(),
        }))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = BTreeMap::new();
        let mut positional = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, TableValue>()? {
            if let Some(unescaped) = key.strip_prefix(FIELD_ESCAPE) {
                fields.insert(unescaped.to_string(), value);
            } else if let Some(n) = positional_key(&key) {
                positional.insert(n, value);
            } else {
                fields.insert(key, value);
            }
        }
        // Contiguous keys from "1" are the positional part; stray numeric
        // keys from other writers stay fields.
        let mut items = Vec::new();
        while let Some(item) = positional.remove(&(items.len() + 1)) {
            items.push(item);
        }
        for (n, value) in positional {
            fields.entry(n.to_string()).or_insert(value);
        }
        Ok(TableValue::Table(Table { items, fields }))
    }
}

impl<'de> Deserialize<'de> for TableValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TableValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match TableValue::deserialize(deserializer)? {
            TableValue::Table(table) => Ok(table),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_name()),
                &"a sequence or map",
            )),
        }
    }
}
