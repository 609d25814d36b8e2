// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_paged_list --heading-base-level=0

//! Understory Paged List: windowed rendering over an incrementally fetched list.
//!
//! This crate provides a small, renderer-agnostic controller for lists whose
//! items arrive page by page from some external data source (a database
//! query, an HTTP API, a search index). It decides:
//!
//! - which indices must be mounted for a given scroll position, including an
//!   overscan buffer on each side and a trailing "loading" placeholder slot
//!   while more data exists, and
//! - when the next page must be requested, so that data arrives before the
//!   user reaches the end of what is loaded.
//!
//! The core concepts are:
//!
//! - [`ListConfig`]: uniform row height, viewport height, overscan, prefetch
//!   threshold, and a page size hint. Validated once at construction.
//! - [`PagedList`]: the controller. It owns the [`LoadedPrefix`] of items,
//!   the scroll offset, and the fetch state.
//! - [`FetchTicket`]: returned by [`PagedList::on_items_rendered`] when a
//!   page must be fetched. The host performs the fetch and settles the ticket
//!   with [`PagedList::complete_page`] or [`PagedList::fail_page`].
//! - [`Reporter`]: a capability passed at construction that receives
//!   [`ListEvent`]s (fetch started, page applied, fetch failed, stale
//!   completion discarded, reset).
//!
//! At most one ticket is outstanding at a time, no matter how many render
//! passes happen while it is pending. Every ticket carries the list's epoch;
//! [`PagedList::on_filter_change`] bumps the epoch, so a page that resolves
//! after the filter changed is discarded instead of being appended to the
//! new sequence.
//!
//! This crate deliberately does **not** perform I/O or know about widgets.
//! Host frameworks are responsible for:
//!
//! - Calling [`PagedList::on_items_rendered`] (or [`PagedList::on_scroll`])
//!   after every scroll or resize driven render pass.
//! - Running the fetch described by a returned [`FetchTicket`] and settling
//!   it. Hosts with an async data source can use [`PageSource`] and
//!   [`render_and_fetch`] instead.
//! - Instantiating a row or a placeholder for every entry yielded by
//!   [`PagedList::rows`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_paged_list::{Completion, IndexRange, ListConfig, NoopReporter, Page, PagedList};
//!
//! // Rows are 80 logical pixels tall inside a 600 pixel viewport.
//! let config = ListConfig::new(80.0, 600.0);
//! let mut list = PagedList::<u32>::new(config, NoopReporter).unwrap();
//!
//! // Nothing is loaded yet: the first render asks for the first page.
//! let ticket = list.on_items_rendered(IndexRange::new(0, 7)).unwrap();
//! assert!(list.is_fetching_next_page());
//!
//! // A second render while the fetch is pending does not issue another one.
//! assert!(list.on_items_rendered(IndexRange::new(0, 7)).is_none());
//!
//! // The host delivers the page.
//! let outcome = list.complete_page(ticket, Page::new((0..20).collect(), true));
//! assert_eq!(outcome, Completion::Applied { appended: 20, loaded: 20 });
//! assert!(list.is_item_loaded(19));
//! assert!(!list.is_item_loaded(20));
//! ```
//!
//! All heights and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels). This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod driver;
mod fetch;
mod list;
mod prefix;
mod range;
mod report;

pub use config::{ConfigError, ListConfig};
pub use driver::{PageSource, render_and_fetch};
pub use fetch::{Completion, FetchTicket, Page};
pub use list::{PagedList, Row, Rows};
pub use prefix::LoadedPrefix;
pub use range::{IndexRange, buffer_range, compute_visible_range};
#[cfg(feature = "tracing")]
pub use report::TracingReporter;
pub use report::{ListEvent, NoopReporter, Reporter};
