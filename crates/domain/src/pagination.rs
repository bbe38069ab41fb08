// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Page returned when none is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is requested.
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest page size served. Larger requests are clamped to it.
pub const MAX_LIMIT: u32 = 100;

/// A validated page/limit pair (1-based pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

#[derive(Deserialize)]
struct RawPageRequest {
    page: u32,
    limit: u32,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = DomainError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.page, raw.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Creates a new `PageRequest`, clamping `limit` to [`MAX_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns an error if `page` or `limit` is zero.
    pub fn new(page: u32, limit: u32) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPagination {
                field: "page",
                value: page,
            });
        }
        if limit == 0 {
            return Err(DomainError::InvalidPagination {
                field: "limit",
                value: limit,
            });
        }

        Ok(Self {
            page,
            limit: limit.min(MAX_LIMIT),
        })
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items preceding this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        usize::try_from(u64::from(self.page.saturating_sub(1)) * u64::from(self.limit))
            .unwrap_or(usize::MAX)
    }

    /// Takes this page's window out of `items`.
    ///
    /// Pages past the end yield an empty list.
    #[must_use]
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit as usize)
            .collect()
    }

    /// Describes this page over a partition of `total` items.
    #[must_use]
    pub fn window(&self, total: usize) -> PageWindow {
        PageWindow {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: total_pages(total, self.limit),
        }
    }
}

/// Pagination metadata for one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: usize,
}

/// Number of pages of `limit` items needed to hold `total` items.
#[must_use]
pub fn total_pages(total: usize, limit: u32) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as usize)
}
