// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed calendar-date intervals and the overlap math shared by every
//! availability computation.
//!
//! All intervals are inclusive at both ends and have day granularity.
//! `[Jan 1, Jan 5]` and `[Jan 5, Jan 10]` share one day; `[Jan 1, Jan 5]`
//! and `[Jan 6, Jan 10]` share none.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;

/// Wire and storage format for calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Returns `true` if the closed intervals `[start_a, end_a]` and
/// `[start_b, end_b]` share at least one day.
#[must_use]
pub fn overlaps(start_a: Date, end_a: Date, start_b: Date, end_b: Date) -> bool {
    start_a <= end_b && start_b <= end_a
}

/// Counts the days shared by two closed intervals, both boundary days included.
///
/// Returns 0 when the intervals do not overlap, so callers may use it without
/// checking [`overlaps`] first.
#[must_use]
pub fn overlap_days(start_a: Date, end_a: Date, start_b: Date, end_b: Date) -> u32 {
    let overlap_start: Date = start_a.max(start_b);
    let overlap_end: Date = end_a.min(end_b);
    let days: i64 = (overlap_end - overlap_start).whole_days() + 1;

    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Parses a `YYYY-MM-DD` date.
///
/// Timestamp input (`2026-03-15T08:30:00Z`) is truncated to its date part.
///
/// # Errors
///
/// Returns an error if the date portion is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    let date_part: &str = trimmed.split_once('T').map_or(trimmed, |(date, _)| date);

    Date::parse(date_part, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns an error if the date cannot be represented in the wire format
/// (years outside `0000..=9999`).
pub fn format_date(date: Date) -> Result<String, DomainError> {
    date.format(DATE_FORMAT)
        .map_err(|e| DomainError::DateArithmeticOverflow {
            operation: format!("formatting date {date}: {e}"),
        })
}

/// A closed, validated calendar-date interval.
///
/// Deserialization goes through [`DateRange::new`], so an inverted range is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: Date,
    end: Date,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: Date,
    end: Date,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DomainError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days covered, both ends included.
    #[must_use]
    pub fn len_days(&self) -> u32 {
        overlap_days(self.start, self.end, self.start, self.end)
    }

    /// Returns `true` if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns `true` if the range shares a day with `[start, end]`.
    #[must_use]
    pub fn overlaps_dates(&self, start: Date, end: Date) -> bool {
        overlaps(self.start, self.end, start, end)
    }

    /// Counts the days shared with `[start, end]`.
    #[must_use]
    pub fn overlap_days_with(&self, start: Date, end: Date) -> u32 {
        overlap_days(self.start, self.end, start, end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
