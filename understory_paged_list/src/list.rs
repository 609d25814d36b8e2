// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paged list controller.

use core::ops::Range;

use crate::config::{ConfigError, ListConfig, is_positive};
use crate::range::{IndexRange, buffer_range, compute_visible_range, sanitize_offset};
use crate::{Completion, FetchTicket, ListEvent, LoadedPrefix, NoopReporter, Page, Reporter};

/// Windowed view over an incrementally fetched sequence of items.
///
/// `PagedList` owns the loaded prefix of items, the scroll offset, and the
/// fetch state for one list view. See the [crate docs](crate) for the overall
/// host protocol.
///
/// Invariants:
/// - Items are always `[0, loaded_count)`; pages are appended in request order.
/// - At most one [`FetchTicket`] is outstanding. While one is, no render pass
///   issues another.
/// - A ticket minted before the last [`on_filter_change`](Self::on_filter_change)
///   never affects the list when it settles.
#[derive(Debug)]
pub struct PagedList<T, R = NoopReporter> {
    config: ListConfig,
    items: LoadedPrefix<T>,
    has_next_page: bool,
    in_flight: Option<FetchTicket>,
    epoch: u64,
    next_sequence: u64,
    scroll_offset: f64,
    reporter: R,
}

impl<T, R: Reporter> PagedList<T, R> {
    /// Creates an empty list.
    ///
    /// The sequence is assumed to have items until the data source says
    /// otherwise, so the first render pass requests the first page.
    pub fn new(config: ListConfig, reporter: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            items: LoadedPrefix::new(),
            has_next_page: true,
            in_flight: None,
            epoch: 0,
            next_sequence: 0,
            scroll_offset: 0.0,
            reporter,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Returns the reporter.
    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Returns the reporter mutably.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Number of loaded items.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.items.len()
    }

    /// The loaded prefix.
    #[must_use]
    pub fn prefix(&self) -> &LoadedPrefix<T> {
        &self.items
    }

    /// All loaded items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns the item at `index`, if loaded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns `true` if a real row (rather than a placeholder) can be
    /// rendered at `index`.
    #[must_use]
    pub fn is_item_loaded(&self, index: usize) -> bool {
        self.items.contains(index)
    }

    /// Whether the data source has more items after the loaded prefix.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Overrides whether the data source has more items.
    ///
    /// Page completions update this automatically; hosts whose data source
    /// exposes the flag separately can mirror it here.
    pub fn set_has_next_page(&mut self, has_next_page: bool) {
        self.has_next_page = has_next_page;
    }

    /// Returns `true` while a page request is outstanding.
    #[must_use]
    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The outstanding page request, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    /// Current epoch; bumped by every [`on_filter_change`](Self::on_filter_change).
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of mountable slots: loaded items plus the trailing loading
    /// placeholder while more data exists.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.items.len() + usize::from(self.has_next_page)
    }

    /// Total height of all slots.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.offset_of(self.slot_count())
    }

    /// Largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_height() - self.config.viewport_height).max(0.0)
    }

    /// Top edge of the row at `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.config.item_height
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset, clamped to `[0, max_scroll_offset]`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = sanitize_offset(offset).min(self.max_scroll_offset());
    }

    /// Scrolls so that the row at `index` is aligned with the top of the
    /// viewport, as far as the content allows.
    pub fn scroll_to_index(&mut self, index: usize) {
        let last = self.slot_count().saturating_sub(1);
        self.set_scroll_offset(self.offset_of(index.min(last)));
    }

    /// Resizes the viewport.
    ///
    /// The scroll offset is clamped again afterwards. On error the list is
    /// unchanged.
    pub fn set_viewport_height(&mut self, height: f64) -> Result<(), ConfigError> {
        if !is_positive(height) {
            return Err(ConfigError::ViewportHeight(height));
        }
        self.config.viewport_height = height;
        self.set_scroll_offset(self.scroll_offset);
        Ok(())
    }

    /// Loaded rows intersecting the viewport at `scroll_offset`.
    ///
    /// Returns `None` when nothing is loaded. This has no side effects.
    #[must_use]
    pub fn visible_range(&self, scroll_offset: f64) -> Option<IndexRange> {
        compute_visible_range(
            scroll_offset,
            self.config.item_height,
            self.config.viewport_height,
            self.items.len(),
        )
    }

    /// Loaded rows intersecting the viewport at the current scroll offset.
    #[must_use]
    pub fn current_visible_range(&self) -> Option<IndexRange> {
        self.visible_range(self.scroll_offset)
    }

    /// Slots to mount for `visible`: the range widened by the overscan and
    /// clamped to [`slot_count`](Self::slot_count).
    #[must_use]
    pub fn rendered_range(&self, visible: IndexRange) -> Option<IndexRange> {
        buffer_range(visible, self.config.overscan, self.slot_count())
    }

    /// Rows to mount for `visible`, in index order.
    ///
    /// Indices past the loaded prefix yield [`Row::Placeholder`].
    #[must_use]
    pub fn rows(&self, visible: IndexRange) -> Rows<'_, T> {
        let indices = match self.rendered_range(visible) {
            Some(range) => range.start..range.stop + 1,
            None => 0..0,
        };
        Rows {
            items: self.items.as_slice(),
            indices,
        }
    }

    /// Entry point for every render pass.
    ///
    /// `visible` is the range of slots the renderer found inside the
    /// viewport. If the buffered range reaches within
    /// [`prefetch_threshold`](ListConfig::prefetch_threshold) items of the
    /// end of the loaded prefix, more data exists, and no request is already
    /// outstanding, a new request is recorded and its ticket returned. The
    /// host must fetch the page and settle the ticket.
    pub fn on_items_rendered(&mut self, visible: IndexRange) -> Option<FetchTicket> {
        if !self.has_next_page || self.in_flight.is_some() {
            return None;
        }
        let loaded = self.items.len();
        let buffer = self.rendered_range(visible)?;
        if buffer.stop.saturating_add(self.config.prefetch_threshold) < loaded {
            return None;
        }
        Some(self.issue_fetch())
    }

    /// Scrolls to `offset` and runs a render pass for the resulting range.
    ///
    /// When nothing is loaded yet, the placeholder slot is treated as visible
    /// so that the first page gets requested.
    pub fn on_scroll(&mut self, offset: f64) -> Option<FetchTicket> {
        self.set_scroll_offset(offset);
        let visible = match self.current_visible_range() {
            Some(visible) => visible,
            None if self.has_next_page => IndexRange::single(self.items.len()),
            None => return None,
        };
        self.on_items_rendered(visible)
    }

    /// Settles `ticket` with a page delivered by the data source.
    ///
    /// The page is appended only if `ticket` is the outstanding request of
    /// the current epoch; otherwise it is dropped and reported as stale.
    pub fn complete_page(&mut self, ticket: FetchTicket, page: Page<T>) -> Completion {
        if !self.settle(ticket) {
            return Completion::Discarded;
        }
        let appended = self.items.append_page(page.items);
        let loaded = self.items.len();
        self.has_next_page = page.has_more;
        self.reporter.report(&ListEvent::PageApplied {
            ticket,
            appended,
            loaded,
            has_more: page.has_more,
        });
        Completion::Applied { appended, loaded }
    }

    /// Settles `ticket` with a data source error.
    ///
    /// Loaded items are left untouched and nothing is retried here: the next
    /// render pass that meets the prefetch condition issues a fresh request.
    /// The error is handed to the reporter.
    pub fn fail_page(&mut self, ticket: FetchTicket, error: &dyn core::error::Error) -> Completion {
        if !self.settle(ticket) {
            return Completion::Discarded;
        }
        self.reporter.report(&ListEvent::FetchFailed { ticket, error });
        Completion::Failed
    }

    /// Resets the list for new filter or search criteria.
    ///
    /// Loaded items are dropped, the scroll offset returns to zero, and any
    /// outstanding request is forgotten: its ticket will be discarded when it
    /// settles.
    pub fn on_filter_change(&mut self) {
        self.items.clear();
        self.in_flight = None;
        self.has_next_page = true;
        self.scroll_offset = 0.0;
        self.epoch = self.epoch.wrapping_add(1);
        self.reporter.report(&ListEvent::Reset { epoch: self.epoch });
    }

    fn issue_fetch(&mut self) -> FetchTicket {
        let ticket = FetchTicket::new(
            self.epoch,
            self.next_sequence,
            self.items.len(),
            self.config.page_size,
        );
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.in_flight = Some(ticket);
        self.reporter.report(&ListEvent::FetchStarted(ticket));
        ticket
    }

    /// Clears the outstanding request if it is `ticket`.
    fn settle(&mut self, ticket: FetchTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            self.reporter.report(&ListEvent::StaleCompletion(ticket));
            false
        }
    }
}

/// One slot to mount, as yielded by [`PagedList::rows`].
#[derive(Debug)]
pub enum Row<'a, T> {
    /// A loaded item.
    Item {
        /// Position in the sequence.
        index: usize,
        /// The item.
        item: &'a T,
    },
    /// A slot whose item is not loaded yet.
    Placeholder {
        /// Position in the sequence.
        index: usize,
    },
}

impl<T> Row<'_, T> {
    /// Position of the slot in the sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        match *self {
            Self::Item { index, .. } | Self::Placeholder { index } => index,
        }
    }

    /// Returns `true` for placeholder slots.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Iterator returned by [`PagedList::rows`].
#[derive(Debug)]
pub struct Rows<'a, T> {
    items: &'a [T],
    indices: Range<usize>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = Row<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(match self.items.get(index) {
            Some(item) => Row::Item { index, item },
            None => Row::Placeholder { index },
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}
