//! Per-post attribute map.
//!
//! [`Tags`] maps a string key to an ordered [`TagEntryList`] of
//! [`TagValue`]s. Mutable access through [`Tags::entry_mut`] creates a
//! missing key; read-only access through [`Tags::get`] reports
//! [`TagError::KeyNotFound`] instead of creating state.
//!
//! Removing the last value under a key removes the key itself, so a key
//! that was emptied by removal never lingers.
//!
//! The `connects_to` key holds, by convention, the Idx values of posts this
//! post points at. See [`Tags::has_connection`].

use std::collections::BTreeMap;

use tracing::trace;

use crate::sequence::IndexedSequence;

pub mod errors;
pub mod value;

pub use errors::TagError;
pub use value::{TagData, TagKind, TagValue};

/// Key holding outgoing connection targets.
pub const CONNECTS_TO: &str = "connects_to";

/// Ordered values stored under one key.
pub type TagEntryList = IndexedSequence<TagValue>;

/// Mapping from tag key to its entry list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tags {
    entries: BTreeMap<String, TagEntryList>,
}

impl Tags {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry list under `key`, without creating it
    pub fn get(&self, key: &str) -> Result<&TagEntryList, TagError> {
        self.entries.get(key).ok_or_else(|| TagError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Entry list under `key`, created empty if absent
    pub fn entry_mut(&mut self, key: impl Into<String>) -> &mut TagEntryList {
        self.entries
            .entry(key.into())
            .or_insert_with(IndexedSequence::fixed)
    }

    /// Appends `value` to the list under `key`
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        self.entry_mut(key).push_back(value.into());
    }

    /// Replaces the list under `key`; an empty list removes the key
    pub fn insert(&mut self, key: impl Into<String>, values: TagEntryList) {
        let key = key.into();
        if values.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, values);
        }
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes `key`, returning whether it was present
    pub fn erase(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Removes the first entry under `key` equal to `value`.
    ///
    /// Returns whether anything was removed. The key is dropped once its list
    /// is empty.
    pub fn remove_from_key(&mut self, key: &str, value: &TagValue) -> bool {
        let Some(list) = self.entries.get_mut(key) else {
            return false;
        };
        let Some(pos) = list.iter().position(|entry| entry == value) else {
            return false;
        };
        let removed = list.remove(pos + 1).is_ok();
        self.drop_if_empty(key);
        removed
    }

    /// Removes the entry at 0-based `index` under `key`.
    ///
    /// Returns `Ok(false)` if the key does not exist, and
    /// [`TagError::EntryIndexOutOfRange`] if `index` is outside the list.
    pub fn remove_index_from_key(&mut self, key: &str, index: usize) -> Result<bool, TagError> {
        let Some(list) = self.entries.get_mut(key) else {
            return Ok(false);
        };
        let len = list.len();
        if index >= len {
            return Err(TagError::EntryIndexOutOfRange { index, len });
        }
        let removed = list.remove(index + 1).is_ok();
        self.drop_if_empty(key);
        Ok(removed)
    }

    /// True if `connects_to` exists and holds at least one value
    pub fn has_connection(&self) -> bool {
        self.entries
            .get(CONNECTS_TO)
            .is_some_and(|list| !list.is_empty())
    }

    /// Iterator over keys and their lists, ordered by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagEntryList)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys, ordered
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn drop_if_empty(&mut self, key: &str) {
        if self.entries.get(key).is_some_and(|list| list.is_empty()) {
            trace!(key, "Dropping emptied tag key");
            self.entries.remove(key);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, TagEntryList)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, TagEntryList)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = (&'a String, &'a TagEntryList);
    type IntoIter = std::collections::btree_map::Iter<'a, String, TagEntryList>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
