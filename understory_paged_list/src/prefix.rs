// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contiguous prefix of items fetched so far.

use alloc::vec::Vec;

/// Items `[0, len)` of a logically unbounded sequence.
///
/// The prefix only ever grows by whole pages appended at the end, and only
/// ever shrinks by being cleared entirely. It never holds a sparse set.
#[derive(Clone, Debug)]
pub struct LoadedPrefix<T> {
    items: Vec<T>,
}

impl<T> Default for LoadedPrefix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadedPrefix<T> {
    /// Creates an empty prefix.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of loaded items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `index` is inside the prefix.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Returns the item at `index`, if loaded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All loaded items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends one page and returns how many items it contained.
    pub fn append_page(&mut self, page: Vec<T>) -> usize {
        let appended = page.len();
        if self.items.is_empty() {
            // Adopt the page's allocation for the first page.
            self.items = page;
        } else {
            self.items.extend(page);
        }
        appended
    }

    /// Drops every loaded item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
