//! 1-based positional container.
//!
//! [`IndexedSequence`] wraps a `Vec` and exposes it through 1-based indexes,
//! the addressing convention of the board file format. Position `len() + 1`
//! is the end (append) position; index 0 never exists.
//!
//! A sequence is either *auto-growing* or *fixed*. Mutable access through
//! [`IndexedSequence::at`] past the end of an auto-growing sequence grows it
//! with default values; a fixed sequence reports
//! [`SequenceError::IndexOutOfRange`] instead.
//!
//! ```
//! use corkboard::sequence::IndexedSequence;
//!
//! let mut seq: IndexedSequence<String> = IndexedSequence::new();
//! *seq.at(3).unwrap() = "third".to_string();
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq[1], "");
//! assert!(seq.get(0).is_err());
//! ```

use std::ops::{Index, IndexMut};

pub mod errors;

pub use errors::SequenceError;

/// A position inside an [`IndexedSequence`].
///
/// Cursors are plain 1-based positions. The end position of a sequence of
/// length `n` is `n + 1`. Like iterators over a `Vec`, a cursor at or after a
/// mutation point no longer refers to the same element once the sequence has
/// been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// The 1-based position this cursor points at
    pub fn index(self) -> usize {
        self.0
    }

    /// The cursor one position further along
    pub fn next(self) -> Cursor {
        Cursor(self.0 + 1)
    }

    /// The cursor one position back, if there is one
    pub fn prev(self) -> Option<Cursor> {
        (self.0 > 1).then(|| Cursor(self.0 - 1))
    }

    pub(crate) fn new(index: usize) -> Self {
        Cursor(index)
    }
}

/// Ordered container addressed with 1-based indexes.
#[derive(Debug, Clone)]
pub struct IndexedSequence<T> {
    items: Vec<T>,
    auto_grow: bool,
}

impl<T> IndexedSequence<T> {
    /// Creates an empty auto-growing sequence
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            auto_grow: true,
        }
    }

    /// Creates an empty sequence that never grows on access
    pub fn fixed() -> Self {
        Self {
            items: Vec::new(),
            auto_grow: false,
        }
    }

    /// Creates a sequence from existing elements
    pub fn from_vec(items: Vec<T>, auto_grow: bool) -> Self {
        Self { items, auto_grow }
    }

    /// Returns true if mutable access past the end grows the sequence
    pub fn auto_grow(&self) -> bool {
        self.auto_grow
    }

    /// Changes the growth policy
    pub fn set_auto_grow(&mut self, auto_grow: bool) {
        self.auto_grow = auto_grow;
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at 1-based position `index`
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        match index {
            0 => Err(SequenceError::IndexOutOfRange { index }),
            _ => self
                .items
                .get(index - 1)
                .ok_or(SequenceError::IndexOutOfRange { index }),
        }
    }

    /// Mutable element at 1-based position `index`, never growing
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        match index {
            0 => Err(SequenceError::IndexOutOfRange { index }),
            _ => self
                .items
                .get_mut(index - 1)
                .ok_or(SequenceError::IndexOutOfRange { index }),
        }
    }

    /// First element, if any
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last element, if any
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    /// Cursor to the first element (equal to [`end`](Self::end) when empty)
    pub fn begin(&self) -> Cursor {
        Cursor(1)
    }

    /// Cursor to the append position, `len() + 1`
    pub fn end(&self) -> Cursor {
        Cursor(self.items.len() + 1)
    }

    /// Converts a 1-based index into a cursor.
    ///
    /// `len() + 1` yields the end cursor, so on an empty sequence index 1 is
    /// valid. Index 0 and anything past the end position fail.
    pub fn cursor(&self, index: usize) -> Result<Cursor, SequenceError> {
        if index == self.items.len() + 1 {
            return Ok(self.end());
        }
        if index == 0 || index > self.items.len() {
            return Err(SequenceError::IndexOutOfRange { index });
        }
        Ok(Cursor(index))
    }

    /// Inserts `value` before `pos`, returning the cursor of the new element.
    ///
    /// Inserting at [`end`](Self::end) appends.
    pub fn insert(&mut self, pos: Cursor, value: T) -> Result<Cursor, SequenceError> {
        let index = pos.index();
        if index == 0 || index > self.items.len() + 1 {
            return Err(SequenceError::IndexOutOfRange { index });
        }
        self.items.insert(index - 1, value);
        Ok(pos)
    }

    /// Removes the element at `pos`, returning it together with the cursor
    /// of the element that followed it.
    pub fn erase(&mut self, pos: Cursor) -> Result<(Cursor, T), SequenceError> {
        let index = pos.index();
        if index == self.items.len() + 1 {
            return Err(SequenceError::EndPosition { index });
        }
        if index == 0 || index > self.items.len() {
            return Err(SequenceError::IndexOutOfRange { index });
        }
        let removed = self.items.remove(index - 1);
        Ok((pos, removed))
    }

    /// Removes and returns the element at 1-based `index`
    pub fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        if index == 0 || index > self.items.len() {
            return Err(SequenceError::IndexOutOfRange { index });
        }
        Ok(self.items.remove(index - 1))
    }

    /// Appends an element
    pub fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes the last element, if any
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Keeps only the elements matching the predicate
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(f);
    }

    /// Iterator over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable iterator over the elements in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// The elements as a 0-based slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning the backing vector
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Default> IndexedSequence<T> {
    /// Mutable element at 1-based position `index`.
    ///
    /// On an auto-growing sequence an index past the end grows the sequence
    /// to exactly `index` elements, filling the gap with default values.
    pub fn at(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        if index == 0 {
            return Err(SequenceError::IndexOutOfRange { index });
        }
        if index > self.items.len() {
            if !self.auto_grow {
                return Err(SequenceError::IndexOutOfRange { index });
            }
            self.items.resize_with(index, T::default);
        }
        Ok(&mut self.items[index - 1])
    }

    /// Resizes to `len` elements, filling with default values
    pub fn resize(&mut self, len: usize) {
        self.items.resize_with(len, T::default);
    }
}

impl<T: Clone> IndexedSequence<T> {
    /// Overwrites every element with a copy of `value`
    pub fn assign_all(&mut self, value: &T) {
        self.items.fill(value.clone());
    }
}

impl<T> Default for IndexedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality ignores the growth policy.
impl<T: PartialEq> PartialEq for IndexedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Index<usize> for IndexedSequence<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is 0 or greater than `len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for IndexedSequence<T> {
    /// # Panics
    /// Panics if `index` is 0 or greater than `len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> From<Vec<T>> for IndexedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items, true)
    }
}

impl<T> FromIterator<T> for IndexedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), true)
    }
}

impl<T> IntoIterator for IndexedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IndexedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut IndexedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
