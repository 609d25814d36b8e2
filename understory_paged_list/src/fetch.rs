// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page requests and their outcomes.

use alloc::vec::Vec;

/// Handle for one outstanding "load the next page" request.
///
/// Tickets are only minted by [`PagedList`](crate::PagedList) and must be
/// handed back exactly once, to either
/// [`complete_page`](crate::PagedList::complete_page) or
/// [`fail_page`](crate::PagedList::fail_page).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    epoch: u64,
    sequence: u64,
    offset: usize,
    page_size: usize,
}

impl FetchTicket {
    pub(crate) fn new(epoch: u64, sequence: u64, offset: usize, page_size: usize) -> Self {
        Self {
            epoch,
            sequence,
            offset,
            page_size,
        }
    }

    /// The list epoch the request was issued in.
    ///
    /// Completions from an older epoch are discarded.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Monotonic request number, unique per list.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Index of the first item the page should contain.
    ///
    /// This equals the loaded count when the request was issued.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of items the list would like the page to hold.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One page of items delivered by a data source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// Items following the loaded prefix, in order.
    pub items: Vec<T>,
    /// Whether the source has more items after this page.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// Creates the final page of a sequence.
    #[must_use]
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, false)
    }
}

/// What happened when a ticket was settled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    /// The page was appended to the loaded prefix.
    Applied {
        /// Items in the page.
        appended: usize,
        /// Loaded count after appending.
        loaded: usize,
    },
    /// The fetch failed; loaded items were left untouched and the next
    /// render may retry.
    Failed,
    /// The ticket no longer matches the list's outstanding request (the
    /// filter changed in the meantime, or it was already settled), so its
    /// result was dropped.
    Discarded,
}

impl Completion {
    /// Returns `true` if the page was appended.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
