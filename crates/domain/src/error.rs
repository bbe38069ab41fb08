// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range whose start falls after its end.
    InvalidDateRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// An age range whose lower bound exceeds its upper bound.
    InvalidAgeRange {
        /// The minimum age requested.
        min_age: u16,
        /// The maximum age requested.
        max_age: u16,
    },
    /// Page or limit outside the accepted range.
    InvalidPagination {
        /// The offending field (`page` or `limit`).
        field: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A string did not name a known enumerated value.
    UnknownValue {
        /// The kind of value being parsed (e.g. `profile stage`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(
                    f,
                    "Start date {start} must be before or equal to end date {end}"
                )
            }
            Self::InvalidAgeRange { min_age, max_age } => {
                write!(
                    f,
                    "Minimum age {min_age} must not exceed maximum age {max_age}"
                )
            }
            Self::InvalidPagination { field, value } => {
                write!(f, "Invalid {field}: {value}. Must be at least 1")
            }
            Self::UnknownValue { kind, value } => write!(f, "Unknown {kind}: '{value}'"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
