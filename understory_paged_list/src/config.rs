// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for [`PagedList`](crate::PagedList).

use core::fmt;

/// Geometry and prefetch tuning for a paged list.
///
/// Rows have a uniform height; variable-height rows are not supported.
/// Heights are expressed in the host's 1D coordinate space (typically
/// logical pixels) and must be finite and strictly positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Height of every row.
    pub item_height: f64,
    /// Height of the visible container.
    pub viewport_height: f64,
    /// Extra rows mounted beyond the visible range on each side.
    pub overscan: usize,
    /// Distance, in items, from the end of the loaded prefix at which the
    /// next page is requested.
    pub prefetch_threshold: usize,
    /// Number of items to ask the data source for per page.
    ///
    /// This is a hint carried on every [`FetchTicket`](crate::FetchTicket);
    /// the source decides how many items a page actually holds.
    pub page_size: usize,
}

impl ListConfig {
    /// Default overscan, in rows.
    pub const DEFAULT_OVERSCAN: usize = 6;
    /// Default prefetch threshold, in items.
    pub const DEFAULT_PREFETCH_THRESHOLD: usize = 12;
    /// Default page size hint.
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    /// Creates a configuration with the given geometry and default tuning.
    #[must_use]
    pub fn new(item_height: f64, viewport_height: f64) -> Self {
        Self {
            item_height,
            viewport_height,
            overscan: Self::DEFAULT_OVERSCAN,
            prefetch_threshold: Self::DEFAULT_PREFETCH_THRESHOLD,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Sets the prefetch threshold.
    #[must_use]
    pub fn with_prefetch_threshold(mut self, threshold: usize) -> Self {
        self.prefetch_threshold = threshold;
        self
    }

    /// Sets the page size hint.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks that the geometry can produce non-degenerate ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.item_height) {
            return Err(ConfigError::ItemHeight(self.item_height));
        }
        if !is_positive(self.viewport_height) {
            return Err(ConfigError::ViewportHeight(self.viewport_height));
        }
        if self.page_size == 0 {
            return Err(ConfigError::PageSize);
        }
        Ok(())
    }
}

/// `NaN` fails both comparisons, so it is rejected here as well.
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when a [`ListConfig`] is rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The row height was zero, negative, or not finite.
    ItemHeight(f64),
    /// The viewport height was zero, negative, or not finite.
    ViewportHeight(f64),
    /// The page size hint was zero.
    PageSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemHeight(h) => {
                write!(f, "item height must be finite and positive, got {h}")
            }
            Self::ViewportHeight(h) => {
                write!(f, "viewport height must be finite and positive, got {h}")
            }
            Self::PageSize => f.write_str("page size must be at least one item"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ListConfig};
    use alloc::string::ToString;

    #[test]
    fn defaults_validate() {
        let config = ListConfig::new(80.0, 600.0);
        assert_eq!(config.overscan, 6);
        assert_eq!(config.prefetch_threshold, 12);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_heights() {
        assert_eq!(
            ListConfig::new(0.0, 600.0).validate(),
            Err(ConfigError::ItemHeight(0.0))
        );
        assert_eq!(
            ListConfig::new(-1.0, 600.0).validate(),
            Err(ConfigError::ItemHeight(-1.0))
        );
        assert_eq!(
            ListConfig::new(80.0, 0.0).validate(),
            Err(ConfigError::ViewportHeight(0.0))
        );
        assert_eq!(
            ListConfig::new(80.0, f64::INFINITY).validate(),
            Err(ConfigError::ViewportHeight(f64::INFINITY))
        );
        // NaN never compares equal, so match on the variant instead.
        assert!(matches!(
            ListConfig::new(f64::NAN, 600.0).validate(),
            Err(ConfigError::ItemHeight(h)) if h.is_nan()
        ));
    }

    #[test]
    fn rejects_empty_pages() {
        let config = ListConfig::new(80.0, 600.0).with_page_size(0);
        assert_eq!(config.validate(), Err(ConfigError::PageSize));
        assert_eq!(
            ConfigError::PageSize.to_string(),
            "page size must be at least one item"
        );
    }
}
