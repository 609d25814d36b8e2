// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-channel reporting of fetch lifecycle events.

use crate::FetchTicket;

/// Something noteworthy that happened inside a [`PagedList`](crate::PagedList).
#[derive(Copy, Clone, Debug)]
pub enum ListEvent<'a> {
    /// A page request was issued.
    FetchStarted(FetchTicket),
    /// A page was appended to the loaded prefix.
    PageApplied {
        /// The settled request.
        ticket: FetchTicket,
        /// Items in the page.
        appended: usize,
        /// Loaded count after appending.
        loaded: usize,
        /// Whether the source reported more items.
        has_more: bool,
    },
    /// A page request failed. Loaded items are kept; the next render may retry.
    FetchFailed {
        /// The settled request.
        ticket: FetchTicket,
        /// The error reported by the data source.
        error: &'a dyn core::error::Error,
    },
    /// A completion arrived for a request that is no longer outstanding and
    /// was dropped.
    StaleCompletion(FetchTicket),
    /// The list was reset for new filter criteria.
    Reset {
        /// The epoch now in effect.
        epoch: u64,
    },
}

/// Receives [`ListEvent`]s from a [`PagedList`](crate::PagedList).
///
/// A reporter is handed to the list at construction. It is the only way
/// fetch failures surface: they are never returned as errors from the
/// rendering path.
///
/// Any `FnMut(&ListEvent<'_>)` closure is a reporter.
pub trait Reporter {
    /// Handles one event.
    fn report(&mut self, event: &ListEvent<'_>);
}

impl<F> Reporter for F
where
    F: FnMut(&ListEvent<'_>),
{
    fn report(&mut self, event: &ListEvent<'_>) {
        self(event);
    }
}

/// A reporter that ignores every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _event: &ListEvent<'_>) {}
}

/// A reporter that logs events through [`tracing`].
///
/// Failures are logged at `WARN`, everything else at `DEBUG`.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingReporter;

#[cfg(feature = "tracing")]
impl Reporter for TracingReporter {
    fn report(&mut self, event: &ListEvent<'_>) {
        match *event {
            ListEvent::FetchStarted(ticket) => {
                tracing::debug!(
                    epoch = ticket.epoch(),
                    offset = ticket.offset(),
                    page_size = ticket.page_size(),
                    "next page requested"
                );
            }
            ListEvent::PageApplied {
                ticket,
                appended,
                loaded,
                has_more,
            } => {
                tracing::debug!(
                    epoch = ticket.epoch(),
                    offset = ticket.offset(),
                    appended,
                    loaded,
                    has_more,
                    "page applied"
                );
            }
            ListEvent::FetchFailed { ticket, error } => {
                tracing::warn!(
                    epoch = ticket.epoch(),
                    offset = ticket.offset(),
                    error = %error,
                    "page fetch failed"
                );
            }
            ListEvent::StaleCompletion(ticket) => {
                tracing::debug!(
                    epoch = ticket.epoch(),
                    offset = ticket.offset(),
                    "stale page completion discarded"
                );
            }
            ListEvent::Reset { epoch } => {
                tracing::debug!(epoch, "list reset");
            }
        }
    }
}
