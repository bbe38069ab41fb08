// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Age calculation and age-range to birth-date conversion.
//!
//! ## Invariants
//!
//! - Age is whole years, decremented when the birthday has not yet
//!   occurred in the reference year (month/day comparison, not year subtraction)
//! - A `max_age` bound yields the earliest acceptable birth date
//!   `reference - (max_age + 1) years`; a `min_age` bound yields the latest
//!   acceptable birth date `reference - min_age years`
//! - A bound of zero is treated as absent
//! - A 29 February reference date maps to 1 March in non-leap target years

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Calculates age in whole years on `reference_date`.
///
/// Returns `None` when no date of birth is on file.
#[must_use]
pub fn calculate_age(date_of_birth: Option<Date>, reference_date: Date) -> Option<i32> {
    let dob: Date = date_of_birth?;
    let mut age: i32 = reference_date.year() - dob.year();

    let reference_md: (u8, u8) = (u8::from(reference_date.month()), reference_date.day());
    let birth_md: (u8, u8) = (u8::from(dob.month()), dob.day());
    if reference_md < birth_md {
        age -= 1;
    }

    Some(age)
}

/// Inclusive bounds on date of birth derived from an age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDateBounds {
    /// Earliest acceptable date of birth (from `max_age`).
    pub earliest: Option<Date>,
    /// Latest acceptable date of birth (from `min_age`).
    pub latest: Option<Date>,
}

impl BirthDateBounds {
    /// Returns `true` if `date_of_birth` satisfies both bounds.
    ///
    /// A missing date of birth never satisfies a bounded range.
    #[must_use]
    pub fn admits(&self, date_of_birth: Option<Date>) -> bool {
        let Some(dob) = date_of_birth else {
            return false;
        };
        self.earliest.is_none_or(|earliest| dob >= earliest)
            && self.latest.is_none_or(|latest| dob <= latest)
    }
}

/// Converts an age range into birth-date bounds relative to `reference_date`.
///
/// Returns `Ok(None)` when neither bound is set.
///
/// # Errors
///
/// Returns an error if `min_age` exceeds `max_age` or if the shifted date
/// cannot be represented.
pub fn birth_date_bounds(
    min_age: Option<u16>,
    max_age: Option<u16>,
    reference_date: Date,
) -> Result<Option<BirthDateBounds>, DomainError> {
    let min_age: Option<u16> = min_age.filter(|age| *age > 0);
    let max_age: Option<u16> = max_age.filter(|age| *age > 0);

    if let (Some(min), Some(max)) = (min_age, max_age)
        && min > max
    {
        return Err(DomainError::InvalidAgeRange {
            min_age: min,
            max_age: max,
        });
    }

    if min_age.is_none() && max_age.is_none() {
        return Ok(None);
    }

    let earliest: Option<Date> = max_age
        .map(|max| years_before(reference_date, i32::from(max) + 1))
        .transpose()?;
    let latest: Option<Date> = min_age
        .map(|min| years_before(reference_date, i32::from(min)))
        .transpose()?;

    Ok(Some(BirthDateBounds { earliest, latest }))
}

/// Returns the same calendar day `years` years before `reference_date`.
fn years_before(reference_date: Date, years: i32) -> Result<Date, DomainError> {
    let target_year: i32 = reference_date.year() - years;
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("subtracting {years} years from {reference_date}"),
    };

    match Date::from_calendar_date(target_year, reference_date.month(), reference_date.day()) {
        Ok(date) => Ok(date),
        // Only 29 February can fail for a valid reference date
        Err(_) => Date::from_calendar_date(target_year, Month::March, 1).map_err(|_| overflow()),
    }
}
