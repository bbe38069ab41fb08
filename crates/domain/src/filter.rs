// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability filter and the profile query it resolves to.
//!
//! An [`AvailabilityFilter`] is validated once at construction. At that point
//! the purpose is resolved to a stage set and the age range is resolved to
//! birth-date bounds, so repositories only ever see a [`ProfileQuery`] with
//! concrete predicates.

use crate::age::{BirthDateBounds, birth_date_bounds};
use crate::date_range::DateRange;
use crate::error::DomainError;
use crate::pagination::PageRequest;
use crate::profile::ProfileRecord;
use crate::types::{AvailabilityStatus, ProfileStage, Purpose, SortBy, SortOrder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::Date;

/// Optional narrowing applied on top of a date window and purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub availability_status: AvailabilityStatus,
    pub skill_category_ids: Vec<i64>,
    pub gender: Option<String>,
    pub min_age: Option<u16>,
    pub max_age: Option<u16>,
    /// Only honoured for [`Purpose::All`].
    pub stages: Vec<ProfileStage>,
    pub districts: Vec<String>,
    pub states: Vec<String>,
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page: PageRequest,
}

/// A validated, per-request availability filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityFilter {
    window: DateRange,
    purpose: Purpose,
    availability_status: AvailabilityStatus,
    page: PageRequest,
    reference_date: Date,
    exclude_project_id: Option<i64>,
    exclude_batch_id: Option<i64>,
    profile_query: ProfileQuery,
}

impl AvailabilityFilter {
    /// Creates a new `AvailabilityFilter`.
    ///
    /// # Arguments
    ///
    /// * `window` - The candidate date range
    /// * `purpose` - Selects the eligible profile stages
    /// * `options` - Demographic, skill, geographic, sort and page options
    /// * `reference_date` - "Today" for age conversion
    ///
    /// # Errors
    ///
    /// Returns an error if the age range is inverted or cannot be converted
    /// to birth dates.
    pub fn new(
        window: DateRange,
        purpose: Purpose,
        options: FilterOptions,
        reference_date: Date,
    ) -> Result<Self, DomainError> {
        let birth_dates: Option<BirthDateBounds> =
            birth_date_bounds(options.min_age, options.max_age, reference_date)?;

        let profile_query: ProfileQuery = ProfileQuery {
            stages: purpose.eligible_stages(&options.stages),
            gender: options.gender.filter(|gender| !gender.is_empty()),
            birth_dates,
            skill_category_ids: options.skill_category_ids,
            search: options.search.filter(|search| !search.is_empty()),
            districts: options.districts,
            states: options.states,
            sort_by: options.sort_by,
            sort_order: options.sort_order,
        };

        Ok(Self {
            window,
            purpose,
            availability_status: options.availability_status,
            page: options.page,
            reference_date,
            exclude_project_id: None,
            exclude_batch_id: None,
            profile_query,
        })
    }

    /// Ignores assignments to `project_id` when checking overlaps.
    #[must_use]
    pub const fn excluding_project(mut self, project_id: Option<i64>) -> Self {
        self.exclude_project_id = project_id;
        self
    }

    /// Ignores enrollments in `batch_id` when checking overlaps.
    #[must_use]
    pub const fn excluding_batch(mut self, batch_id: Option<i64>) -> Self {
        self.exclude_batch_id = batch_id;
        self
    }

    #[must_use]
    pub const fn window(&self) -> &DateRange {
        &self.window
    }

    #[must_use]
    pub const fn purpose(&self) -> Purpose {
        self.purpose
    }

    #[must_use]
    pub const fn availability_status(&self) -> AvailabilityStatus {
        self.availability_status
    }

    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    #[must_use]
    pub const fn reference_date(&self) -> Date {
        self.reference_date
    }

    #[must_use]
    pub const fn exclude_project_id(&self) -> Option<i64> {
        self.exclude_project_id
    }

    #[must_use]
    pub const fn exclude_batch_id(&self) -> Option<i64> {
        self.exclude_batch_id
    }

    #[must_use]
    pub const fn profile_query(&self) -> &ProfileQuery {
        &self.profile_query
    }
}

/// Concrete predicates and ordering for loading the profile population.
///
/// Every query implicitly restricts to the blue-collar pool (active, not
/// deleted, worker type `blue`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileQuery {
    /// `None` means any stage.
    pub stages: Option<Vec<ProfileStage>>,
    pub gender: Option<String>,
    pub birth_dates: Option<BirthDateBounds>,
    /// Profile must hold at least one skill in one of these categories.
    pub skill_category_ids: Vec<i64>,
    /// Case-insensitive substring over names, codes and phone.
    pub search: Option<String>,
    pub districts: Vec<String>,
    pub states: Vec<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ProfileQuery {
    /// Returns `true` if the query restricts by district or state.
    #[must_use]
    pub fn filters_addresses(&self) -> bool {
        !self.districts.is_empty() || !self.states.is_empty()
    }

    /// Evaluates every predicate against `profile`.
    #[must_use]
    pub fn matches(&self, profile: &ProfileRecord) -> bool {
        if !profile.in_blue_collar_pool() {
            return false;
        }

        if let Some(stages) = &self.stages
            && !profile
                .current_stage
                .is_some_and(|stage| stages.contains(&stage))
        {
            return false;
        }

        if let Some(gender) = &self.gender
            && profile.gender.as_deref() != Some(gender.as_str())
        {
            return false;
        }

        if let Some(bounds) = &self.birth_dates
            && !bounds.admits(profile.date_of_birth)
        {
            return false;
        }

        if !self.skill_category_ids.is_empty()
            && !profile.skills.iter().any(|skill| {
                skill
                    .skill_category_id
                    .is_some_and(|id| self.skill_category_ids.contains(&id))
            })
        {
            return false;
        }

        if let Some(search) = &self.search
            && !matches_search(profile, search)
        {
            return false;
        }

        if self.filters_addresses()
            && !profile.addresses.iter().any(|address| {
                (self.districts.is_empty()
                    || address
                        .district
                        .as_ref()
                        .is_some_and(|d| self.districts.contains(d)))
                    && (self.states.is_empty()
                        || address
                            .state
                            .as_ref()
                            .is_some_and(|s| self.states.contains(s)))
            })
        {
            return false;
        }

        true
    }

    /// Orders two profiles by the requested sort key.
    ///
    /// A missing value ranks above every present one, so it sorts last in
    /// ascending order and first in descending order. Ties are broken by
    /// ascending id so the order is total.
    #[must_use]
    pub fn compare(&self, a: &ProfileRecord, b: &ProfileRecord) -> Ordering {
        let (key_order, direction): (Ordering, SortOrder) = match self.sort_by {
            SortBy::Name => (
                missing_last(a.first_name.as_ref(), b.first_name.as_ref())
                    .then_with(|| missing_last(a.last_name.as_ref(), b.last_name.as_ref())),
                self.sort_order,
            ),
            SortBy::Code => (
                missing_last(a.worker_code.as_ref(), b.worker_code.as_ref())
                    .then_with(|| missing_last(a.candidate_code.as_ref(), b.candidate_code.as_ref())),
                self.sort_order,
            ),
            // Ascending age is descending date of birth
            SortBy::Age => (
                missing_last(a.date_of_birth.as_ref(), b.date_of_birth.as_ref()),
                self.sort_order.reversed(),
            ),
        };

        let directed: Ordering = match direction {
            SortOrder::Asc => key_order,
            SortOrder::Desc => key_order.reverse(),
        };

        directed.then_with(|| a.id.cmp(&b.id))
    }
}

fn missing_last<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Folds ASCII letters only, as `SQLite`'s `LIKE` does.
fn matches_search(profile: &ProfileRecord, search: &str) -> bool {
    let needle: String = search.to_ascii_lowercase();
    [
        &profile.first_name,
        &profile.middle_name,
        &profile.last_name,
        &profile.worker_code,
        &profile.candidate_code,
        &profile.phone,
    ]
    .into_iter()
    .filter_map(Option::as_deref)
    .any(|field| field.to_ascii_lowercase().contains(&needle))
}
