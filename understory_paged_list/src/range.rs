// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index ranges and the windowing math behind them.

use core::ops::RangeInclusive;

/// An inclusive range of item indices, `start..=stop`.
///
/// Ranges built with [`new`](Self::new) or [`single`](Self::single) hold at
/// least one index; "no range" is expressed as `Option<IndexRange>`. A range
/// written out by hand with `start > stop` is empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    /// First index in the range.
    pub start: usize,
    /// Last index in the range (inclusive).
    pub stop: usize,
}

impl IndexRange {
    /// Creates a range covering `start..=stop`.
    ///
    /// The bounds are normalized so that `start <= stop`.
    #[must_use]
    pub fn new(start: usize, stop: usize) -> Self {
        if start <= stop {
            Self { start, stop }
        } else {
            Self {
                start: stop,
                stop: start,
            }
        }
    }

    /// Creates a range covering a single index.
    #[must_use]
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            stop: index,
        }
    }

    /// Number of indices in the range.
    ///
    /// Saturates at `usize::MAX` for the full `0..=usize::MAX` range.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.stop - self.start).saturating_add(1)
        }
    }

    /// Returns `true` if `start > stop`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.stop
    }

    /// Returns `true` if `index` lies inside the range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.stop
    }

    /// Iterates over the indices in the range.
    #[must_use]
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.start..=self.stop
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes which loaded rows intersect the viewport at `scroll_offset`.
///
/// - `start = floor(scroll_offset / item_height)`
/// - `stop = floor((scroll_offset + viewport_height) / item_height)`
///
/// Both bounds are clamped to `0..loaded_count`. Returns `None` when nothing
/// is loaded. Negative or non-finite scroll offsets are treated as `0`.
///
/// `item_height` and `viewport_height` are expected to have passed
/// [`ListConfig::validate`](crate::ListConfig::validate).
#[must_use]
pub fn compute_visible_range(
    scroll_offset: f64,
    item_height: f64,
    viewport_height: f64,
    loaded_count: usize,
) -> Option<IndexRange> {
    let last = loaded_count.checked_sub(1)?;
    let offset = sanitize_offset(scroll_offset);
    let start = floor_index(offset / item_height).min(last);
    let stop = floor_index((offset + viewport_height) / item_height).min(last);
    Some(IndexRange::new(start, stop))
}

/// Expands `visible` by `overscan` rows on each side, clamped to the
/// `slot_count` mountable slots.
///
/// `slot_count` is the loaded count plus one when a trailing loading
/// placeholder is shown. Returns `None` when there are no slots at all.
#[must_use]
pub fn buffer_range(visible: IndexRange, overscan: usize, slot_count: usize) -> Option<IndexRange> {
    let last = slot_count.checked_sub(1)?;
    let stop = visible.stop.saturating_add(overscan).min(last);
    let start = visible.start.saturating_sub(overscan).min(stop);
    Some(IndexRange { start, stop })
}

pub(crate) fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() && offset > 0.0 {
        offset
    } else {
        0.0
    }
}

/// Callers only pass non-negative values, for which truncation is the floor.
fn floor_index(value: f64) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float-to-int `as` saturates; the result is clamped to the loaded range right after"
    )]
    {
        value as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{IndexRange, buffer_range, compute_visible_range};
    use alloc::vec::Vec;

    #[test]
    fn index_range_normalizes_and_iterates() {
        let range = IndexRange::new(5, 2);
        assert_eq!(range, IndexRange { start: 2, stop: 5 });
        assert_eq!(range.len(), 4);
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(6));
        assert_eq!(range.into_iter().collect::<Vec<_>>(), [2, 3, 4, 5]);
        assert_eq!(IndexRange::single(3).len(), 1);
        assert!(!range.is_empty());
    }

    #[test]
    fn index_range_len_never_overflows() {
        let full = IndexRange::new(0, usize::MAX);
        assert_eq!(full.len(), usize::MAX);
        assert!(!full.is_empty());

        let inverted = IndexRange { start: 5, stop: 2 };
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
        assert_eq!(inverted.into_iter().count(), 0);
    }

    #[test]
    fn visible_range_truncates_fractional_rows() {
        // 79.9 / 80 and 679.9 / 80 = 8.49.. floor to 0 and 8.
        assert_eq!(
            compute_visible_range(79.9, 80.0, 600.0, 100),
            Some(IndexRange::new(0, 8))
        );
    }

    #[test]
    fn visible_range_follows_floor_formula() {
        // 600 / 80 = 7.5, so rows 0..=7 intersect the viewport.
        assert_eq!(
            compute_visible_range(0.0, 80.0, 600.0, 100),
            Some(IndexRange::new(0, 7))
        );
        // 1000 / 80 = 12.5 and 1600 / 80 = 20.
        assert_eq!(
            compute_visible_range(1000.0, 80.0, 600.0, 100),
            Some(IndexRange::new(12, 20))
        );
    }

    #[test]
    fn visible_range_is_clamped_to_loaded_prefix() {
        assert_eq!(
            compute_visible_range(0.0, 80.0, 600.0, 3),
            Some(IndexRange::new(0, 2))
        );
        // Scrolled far past the end (e.g. a stale offset): both bounds clamp.
        assert_eq!(
            compute_visible_range(1.0e9, 80.0, 600.0, 3),
            Some(IndexRange::new(2, 2))
        );
    }

    #[test]
    fn visible_range_is_empty_without_items() {
        assert_eq!(compute_visible_range(0.0, 80.0, 600.0, 0), None);
        assert_eq!(compute_visible_range(500.0, 80.0, 600.0, 0), None);
    }

    #[test]
    fn visible_range_sanitizes_scroll_offset() {
        let expected = Some(IndexRange::new(0, 7));
        assert_eq!(compute_visible_range(-250.0, 80.0, 600.0, 100), expected);
        assert_eq!(compute_visible_range(f64::NAN, 80.0, 600.0, 100), expected);
        assert_eq!(
            compute_visible_range(f64::NEG_INFINITY, 80.0, 600.0, 100),
            expected
        );
    }

    #[test]
    fn buffer_range_applies_overscan_and_clamps() {
        let visible = IndexRange::new(14, 18);
        assert_eq!(buffer_range(visible, 6, 100), Some(IndexRange::new(8, 24)));
        // 20 loaded items plus the placeholder slot.
        assert_eq!(buffer_range(visible, 6, 21), Some(IndexRange::new(8, 20)));
        // Overscan never reaches below index zero.
        assert_eq!(
            buffer_range(IndexRange::new(2, 5), 6, 100),
            Some(IndexRange::new(0, 11))
        );
    }

    #[test]
    fn buffer_range_handles_degenerate_slot_counts() {
        assert_eq!(buffer_range(IndexRange::new(0, 7), 6, 0), None);
        // Only the placeholder slot exists.
        assert_eq!(
            buffer_range(IndexRange::new(0, 7), 6, 1),
            Some(IndexRange::single(0))
        );
        // A stale visible range entirely past the end collapses onto the last slot.
        assert_eq!(
            buffer_range(IndexRange::new(50, 55), 2, 10),
            Some(IndexRange::single(9))
        );
    }
}
