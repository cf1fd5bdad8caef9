//! The board: an ordered post container with referential integrity.
//!
//! A [`Board`] owns its posts and a list of [`Connection`]s between them.
//! Posts are identified by their 1-based position (their Idx), and the board
//! keeps two invariants across every mutation:
//!
//! - the post at position `i` has `idx() == i`
//! - every connection endpoint is the Idx of a post on the board
//!
//! Insertion and erasure renumber the posts after the mutation point and
//! rewrite connections through a change map (old Idx to new Idx). Erasing a
//! post drops the connections that touched it; moving a post to the end
//! repoints them instead.
//!
//! ```
//! use corkboard::board::{Board, Connection};
//!
//! let mut board = Board::new();
//! for text in ["a", "b", "c"] {
//!     board.create_post_back(text);
//! }
//! board.connect(1, 3).unwrap();
//!
//! board.erase(board.cursor(2).unwrap()).unwrap();
//! assert_eq!(board.len(), 2);
//! assert_eq!(board[2].idx(), 2);
//! assert_eq!(board.connections[1], Connection::new(1, 2));
//! ```

use std::collections::HashMap;
use std::ops::Index;

use tracing::trace;

use crate::post::Post;
use crate::sequence::{Cursor, IndexedSequence};

pub mod colors;
pub mod errors;

pub use colors::{BoardColors, Rgb};
pub use errors::BoardError;

/// A directed edge between two posts, by Idx.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
}

impl Connection {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Board-wide presentation options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoardOptions {
    pub colors: BoardColors,
}

/// Old Idx to new Idx. A new Idx of 0 marks a deleted post.
type ChangeMap = HashMap<usize, usize>;

/// Ordered post container.
///
/// Equality compares posts (ignoring Idx bookkeeping), connections and
/// options.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    posts: IndexedSequence<Post>,
    /// Edges between posts. Endpoints are kept in sync with post Idx values
    /// by every board mutation.
    pub connections: IndexedSequence<Connection>,
    pub options: BoardOptions,
}

impl Board {
    /// Creates an empty board with default options
    pub fn new() -> Self {
        Self {
            posts: IndexedSequence::fixed(),
            connections: IndexedSequence::fixed(),
            options: BoardOptions::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The posts in position order
    pub fn posts(&self) -> &IndexedSequence<Post> {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    /// Post with Idx `idx`
    pub fn get(&self, idx: usize) -> Result<&Post, BoardError> {
        self.posts.get(idx).map_err(|_| self.invalid(idx))
    }

    /// Mutable post with Idx `idx`
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut Post, BoardError> {
        let len = self.posts.len();
        self.posts
            .get_mut(idx)
            .map_err(|_| BoardError::InvalidPosition { index: idx, len })
    }

    pub fn begin(&self) -> Cursor {
        self.posts.begin()
    }

    pub fn end(&self) -> Cursor {
        self.posts.end()
    }

    /// Cursor for Idx `idx`; `len() + 1` yields [`end`](Self::end)
    pub fn cursor(&self, idx: usize) -> Result<Cursor, BoardError> {
        self.posts.cursor(idx).map_err(|_| self.invalid(idx))
    }

    /// Inserts `post` before `pos` and renumbers everything after it.
    ///
    /// Returns the cursor of the inserted post.
    pub fn insert(&mut self, pos: Cursor, mut post: Post) -> Result<Cursor, BoardError> {
        let index = pos.index();
        if index == 0 || index > self.posts.len() + 1 {
            return Err(self.invalid(index));
        }
        let len = self.posts.len();
        post.set_idx(index);
        self.posts
            .insert(pos, post)
            .map_err(|_| BoardError::InvalidPosition { index, len })?;
        self.propagate(index + 1, None);
        trace!(index, len = self.posts.len(), "Inserted post");
        Ok(pos)
    }

    /// Creates a post holding `text` before `pos`
    pub fn create_post(&mut self, pos: Cursor, text: impl Into<String>) -> Result<Cursor, BoardError> {
        self.insert(pos, Post::new(text))
    }

    /// Appends a post holding `text`, returning its cursor
    pub fn create_post_back(&mut self, text: impl Into<String>) -> Cursor {
        self.push_back(Post::new(text))
    }

    /// Appends `post`, returning its cursor
    pub fn push_back(&mut self, mut post: Post) -> Cursor {
        let cursor = self.posts.end();
        post.set_idx(cursor.index());
        self.posts.push_back(post);
        cursor
    }

    /// Removes the post at `pos`.
    ///
    /// Connections touching the removed post are deleted; the rest are
    /// renumbered. Returns the cursor of the following post together with
    /// the removed post.
    pub fn erase(&mut self, pos: Cursor) -> Result<(Cursor, Post), BoardError> {
        let index = pos.index();
        if index == self.posts.len() + 1 {
            return Err(BoardError::EndPosition { operation: "erase" });
        }
        let len = self.posts.len();
        let (next, mut removed) = self
            .posts
            .erase(pos)
            .map_err(|_| BoardError::InvalidPosition { index, len })?;
        let removed_idx = removed.idx();
        removed.set_idx(0);
        self.propagate(index, Some(removed_idx));
        trace!(index, len = self.posts.len(), "Erased post");
        Ok((next, removed))
    }

    /// Moves the post at `pos` to the end of the board.
    ///
    /// Connections involving the moved post follow it to its new Idx; the
    /// posts after `pos` shift down by one. Returns the cursor of the moved
    /// post.
    pub fn move_to_last(&mut self, pos: Cursor) -> Result<Cursor, BoardError> {
        let index = pos.index();
        let len = self.posts.len();
        if index == len + 1 {
            return Err(BoardError::EndPosition { operation: "move" });
        }
        let copy = self
            .posts
            .get(index)
            .map_err(|_| BoardError::InvalidPosition { index, len })?
            .clone();

        let new_idx = self.push_back(copy).index();
        self.reconcile(&ChangeMap::from([(index, new_idx)]));
        self.erase(pos)?;

        trace!(from = index, to = len, "Moved post to last position");
        Ok(Cursor::new(self.posts.len()))
    }

    /// [`move_to_last`](Self::move_to_last) addressed by Idx
    pub fn move_to_last_index(&mut self, idx: usize) -> Result<Cursor, BoardError> {
        let cursor = self.cursor(idx)?;
        self.move_to_last(cursor)
    }

    /// Removes the last post; a no-op on an empty board
    pub fn pop_back(&mut self) -> Option<Post> {
        let last = self.posts.len();
        if last == 0 {
            return None;
        }
        self.erase(Cursor::new(last)).ok().map(|(_, post)| post)
    }

    /// Grows with empty posts or shrinks from the back to `len` posts
    pub fn resize(&mut self, len: usize) {
        while self.posts.len() < len {
            self.create_post_back(String::new());
        }
        while self.posts.len() > len {
            self.pop_back();
        }
    }

    /// Removes every post and connection
    pub fn clear(&mut self) {
        self.posts.clear();
        self.connections.clear();
    }

    /// Adds a connection between two existing posts
    pub fn connect(&mut self, from: usize, to: usize) -> Result<(), BoardError> {
        for idx in [from, to] {
            if idx == 0 || idx > self.posts.len() {
                return Err(self.invalid(idx));
            }
        }
        self.connections.push_back(Connection::new(from, to));
        Ok(())
    }

    /// Connections leaving the post with Idx `idx`
    pub fn connections_from(&self, idx: usize) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.from == idx)
    }

    /// Renumbers the posts from position `start` onwards so their Idx matches
    /// their position, then rewrites connections to match. `removed` is the
    /// Idx of an erased post, whose connections are dropped.
    fn propagate(&mut self, start: usize, removed: Option<usize>) {
        let mut changes = ChangeMap::new();
        if let Some(removed) = removed {
            changes.insert(removed, 0);
        }
        for (offset, post) in self.posts.iter_mut().enumerate().skip(start.saturating_sub(1)) {
            let new_idx = offset + 1;
            if post.idx() != new_idx {
                changes.insert(post.idx(), new_idx);
                post.set_idx(new_idx);
            }
        }
        if !changes.is_empty() {
            self.reconcile(&changes);
        }
    }

    /// Applies `changes` to every connection endpoint, once, and deletes the
    /// connections whose endpoint maps to 0.
    fn reconcile(&mut self, changes: &ChangeMap) {
        let before = self.connections.len();
        for connection in self.connections.iter_mut() {
            if let Some(&to) = changes.get(&connection.to) {
                connection.to = to;
            }
            if let Some(&from) = changes.get(&connection.from) {
                connection.from = from;
            }
        }
        self.connections.retain(|c| c.from != 0 && c.to != 0);
        trace!(
            changed = changes.len(),
            dropped = before - self.connections.len(),
            "Reconciled connections"
        );
    }

    fn invalid(&self, index: usize) -> BoardError {
        BoardError::InvalidPosition {
            index,
            len: self.posts.len(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = Post;

    /// # Panics
    /// Panics if no post has Idx `idx`.
    fn index(&self, idx: usize) -> &Post {
        &self.posts[idx]
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
