// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for data sources that fetch pages asynchronously.
//!
//! [`PagedList`] itself never suspends: it hands out [`FetchTicket`]s and
//! expects them to be settled later. When the data source is an async
//! function, [`render_and_fetch`] does the plumbing. It runs one render pass,
//! and if that issues a request, awaits the source and settles the ticket.
//!
//! The list lives in a [`RefCell`] that is only borrowed around the
//! synchronous steps, so other render passes (scroll events, filter changes)
//! can use it while a fetch is pending. The in-flight guard keeps those
//! passes from issuing a second request, and the epoch check drops the page
//! if the filter changed before it arrived.

use core::cell::RefCell;
use core::future::Future;

use crate::{Completion, FetchTicket, IndexRange, Page, PagedList, Reporter};

/// A data source that delivers pages asynchronously.
pub trait PageSource {
    /// Item type of the sequence.
    type Item;
    /// Error produced when a page cannot be fetched.
    type Error: core::error::Error;

    /// Fetches the page described by `ticket`.
    ///
    /// The page should start at [`FetchTicket::offset`] and hold about
    /// [`FetchTicket::page_size`] items.
    fn fetch_page(
        &self,
        ticket: FetchTicket,
    ) -> impl Future<Output = Result<Page<Self::Item>, Self::Error>>;
}

/// Runs a render pass for `visible` and, if it requests a page, fetches and
/// settles it.
///
/// Returns `None` when no request was issued, otherwise how the request was
/// settled. Fetch errors are handed to the list's [`Reporter`] and come back
/// as [`Completion::Failed`]; they are never returned as errors.
///
/// If the filter changed while the fetch was pending, the result comes back
/// as [`Completion::Discarded`]. A stale error is dropped without a
/// [`ListEvent::FetchFailed`](crate::ListEvent::FetchFailed) report; the
/// reporter only sees [`ListEvent::StaleCompletion`](crate::ListEvent::StaleCompletion).
///
/// # Panics
///
/// Panics if `list` is already mutably borrowed when a synchronous step runs,
/// which can only happen if the caller holds a borrow across an `.await` of
/// this future.
pub async fn render_and_fetch<S, R>(
    list: &RefCell<PagedList<S::Item, R>>,
    source: &S,
    visible: IndexRange,
) -> Option<Completion>
where
    S: PageSource,
    R: Reporter,
{
    let ticket = list.borrow_mut().on_items_rendered(visible)?;
    let result = source.fetch_page(ticket).await;
    let mut list = list.borrow_mut();
    Some(match result {
        Ok(page) => list.complete_page(ticket, page),
        Err(error) => list.fail_page(ticket, &error),
    })
}

#[cfg(test)]
mod tests {
    use super::{PageSource, render_and_fetch};
    use crate::{Completion, FetchTicket, IndexRange, ListConfig, NoopReporter, Page, PagedList};
    use core::cell::RefCell;
    use core::convert::Infallible;

    /// Serves consecutive integers, 20 per page, up to `len`.
    struct Counter {
        len: u32,
    }

    impl PageSource for Counter {
        type Item = u32;
        type Error = Infallible;

        async fn fetch_page(&self, ticket: FetchTicket) -> Result<Page<u32>, Infallible> {
            let start = u32::try_from(ticket.offset()).unwrap();
            let size = u32::try_from(ticket.page_size()).unwrap();
            let end = (start + size).min(self.len);
            Ok(Page::new((start..end).collect(), end < self.len))
        }
    }

    #[test]
    fn pages_through_a_finite_source() {
        let list = RefCell::new(
            PagedList::new(ListConfig::new(80.0, 600.0), NoopReporter).unwrap(),
        );
        let source = Counter { len: 45 };

        let first = pollster::block_on(render_and_fetch(&list, &source, IndexRange::new(0, 7)));
        assert_eq!(first, Some(Completion::Applied { appended: 20, loaded: 20 }));

        // Near the end of what is loaded: fetch the second page.
        let second = pollster::block_on(render_and_fetch(&list, &source, IndexRange::new(12, 19)));
        assert_eq!(second, Some(Completion::Applied { appended: 20, loaded: 40 }));

        let third = pollster::block_on(render_and_fetch(&list, &source, IndexRange::new(32, 39)));
        assert_eq!(third, Some(Completion::Applied { appended: 5, loaded: 45 }));

        // Exhausted: no further requests.
        let done = pollster::block_on(render_and_fetch(&list, &source, IndexRange::new(37, 44)));
        assert_eq!(done, None);

        let list = list.into_inner();
        assert!(!list.has_next_page());
        assert_eq!(list.items(), (0..45).collect::<alloc::vec::Vec<_>>().as_slice());
    }
}
