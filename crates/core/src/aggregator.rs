// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Population-level availability.
//!
//! The aggregator loads the filtered population once, fetches both kinds of
//! commitment for the whole population in one batch each, groups them by
//! profile id and classifies every profile with the same blocking-event
//! rules the single-profile engine applies.
//!
//! ## Invariants
//!
//! - Every profile in the population lands in exactly one partition before
//!   the availability-status filter is applied
//! - A profile blocked by both a project and a training counts towards both
//!   `unavailable_by_project` and `unavailable_by_training`
//! - The two partitions are paginated independently with the same page/limit

use crate::engine::blocking_events;
use crate::error::CoreError;
use crate::repository::{CommitmentRepository, ProfileRepository};
use staffing_domain::{
    AvailabilityFilter, AvailabilityStatus, BlockingEvent, CommitmentKind, DateRange,
    FilterOptions, PageRequest, PageWindow, ProfileRecord, ProjectCommitment, Purpose,
    ScheduledDates, TrainingCommitment,
};
use std::collections::HashMap;
use time::Date;
use tracing::{debug, info};

/// One profile's entry in an availability report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAvailability {
    pub profile: ProfileRecord,
    /// Age in whole years on the filter's reference date.
    pub age: Option<i32>,
    /// Empty for available profiles.
    pub blocking_events: Vec<BlockingEvent>,
}

impl ProfileAvailability {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.blocking_events.is_empty()
    }

    fn blocked_by(&self, kind: CommitmentKind) -> bool {
        self.blocking_events.iter().any(|event| event.kind == kind)
    }
}

/// Counters over the classified population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilitySummary {
    /// Available profiles after the availability-status filter.
    pub total_available: usize,
    /// Unavailable profiles after the availability-status filter.
    pub total_unavailable: usize,
    /// Unavailable profiles with at least one project event.
    pub unavailable_by_project: usize,
    /// Unavailable profiles with at least one training event.
    pub unavailable_by_training: usize,
}

/// Independent page metadata for the two partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityPagination {
    pub available: PageWindow,
    pub unavailable: PageWindow,
}

/// A partitioned, paginated availability report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub available: Vec<ProfileAvailability>,
    pub unavailable: Vec<ProfileAvailability>,
    pub summary: AvailabilitySummary,
    pub pagination: AvailabilityPagination,
}

/// The full population split by availability, before any status filter
/// or pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub available: Vec<ProfileAvailability>,
    pub unavailable: Vec<ProfileAvailability>,
    pub unavailable_by_project: usize,
    pub unavailable_by_training: usize,
}

/// Classifies every profile in `profiles` against its grouped commitments.
///
/// The order of `profiles` is preserved within each partition.
#[must_use]
pub fn partition(
    profiles: Vec<ProfileRecord>,
    projects: &[ProjectCommitment],
    trainings: &[TrainingCommitment],
    window: &DateRange,
    reference_date: Date,
) -> Partition {
    let mut projects_by_profile: HashMap<i64, Vec<&ProjectCommitment>> = HashMap::new();
    for commitment in projects {
        projects_by_profile
            .entry(commitment.profile_id)
            .or_default()
            .push(commitment);
    }

    let mut trainings_by_profile: HashMap<i64, Vec<&TrainingCommitment>> = HashMap::new();
    for commitment in trainings {
        trainings_by_profile
            .entry(commitment.profile_id)
            .or_default()
            .push(commitment);
    }

    let mut result: Partition = Partition::default();

    for profile in profiles {
        let events: Vec<BlockingEvent> = blocking_events(
            projects_by_profile
                .get(&profile.id)
                .map_or(&[][..], Vec::as_slice),
            trainings_by_profile
                .get(&profile.id)
                .map_or(&[][..], Vec::as_slice),
            window,
        );

        let entry: ProfileAvailability = ProfileAvailability {
            age: profile.age_on(reference_date),
            profile,
            blocking_events: events,
        };

        if entry.is_available() {
            result.available.push(entry);
        } else {
            if entry.blocked_by(CommitmentKind::Project) {
                result.unavailable_by_project += 1;
            }
            if entry.blocked_by(CommitmentKind::Training) {
                result.unavailable_by_training += 1;
            }
            result.unavailable.push(entry);
        }
    }

    result
}

/// Applies the availability-status filter and paginates each partition.
#[must_use]
pub fn build_report(
    partition: Partition,
    status: AvailabilityStatus,
    page: PageRequest,
) -> AvailabilityReport {
    let Partition {
        mut available,
        mut unavailable,
        unavailable_by_project,
        unavailable_by_training,
    } = partition;

    match status {
        AvailabilityStatus::Available => unavailable.clear(),
        AvailabilityStatus::Unavailable => available.clear(),
        AvailabilityStatus::All => {}
    }

    let total_available: usize = available.len();
    let total_unavailable: usize = unavailable.len();

    AvailabilityReport {
        available: page.slice(available),
        unavailable: page.slice(unavailable),
        summary: AvailabilitySummary {
            total_available,
            total_unavailable,
            unavailable_by_project,
            unavailable_by_training,
        },
        pagination: AvailabilityPagination {
            available: page.window(total_available),
            unavailable: page.window(total_unavailable),
        },
    }
}

/// Computes availability for every profile matched by `filter`.
///
/// # Errors
///
/// Returns an error if the store cannot be read. There is no partial
/// result: any failed read fails the whole computation.
pub fn get_profiles_with_availability<S>(
    store: &mut S,
    filter: &AvailabilityFilter,
) -> Result<AvailabilityReport, CoreError<S::Error>>
where
    S: ProfileRepository + CommitmentRepository,
{
    let profiles: Vec<ProfileRecord> = store
        .list_profiles(filter.profile_query())
        .map_err(CoreError::Repository)?;
    let profile_ids: Vec<i64> = profiles.iter().map(|profile| profile.id).collect();

    let (projects, trainings): (Vec<ProjectCommitment>, Vec<TrainingCommitment>) =
        if profile_ids.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                store
                    .active_project_commitments(
                        &profile_ids,
                        filter.window(),
                        filter.exclude_project_id(),
                    )
                    .map_err(CoreError::Repository)?,
                store
                    .active_training_commitments(
                        &profile_ids,
                        filter.window(),
                        filter.exclude_batch_id(),
                    )
                    .map_err(CoreError::Repository)?,
            )
        };

    debug!(
        population = profile_ids.len(),
        project_commitments = projects.len(),
        training_commitments = trainings.len(),
        window = %filter.window(),
        purpose = %filter.purpose(),
        "Loaded availability inputs"
    );

    let classified: Partition = partition(
        profiles,
        &projects,
        &trainings,
        filter.window(),
        filter.reference_date(),
    );
    let report: AvailabilityReport =
        build_report(classified, filter.availability_status(), filter.page());

    info!(
        total_available = report.summary.total_available,
        total_unavailable = report.summary.total_unavailable,
        unavailable_by_project = report.summary.unavailable_by_project,
        unavailable_by_training = report.summary.unavailable_by_training,
        "Computed availability report"
    );

    Ok(report)
}

/// Computes availability over a project's own dates.
///
/// The population is restricted to project-allocatable stages and the
/// project's existing assignments do not block.
///
/// # Errors
///
/// Returns `ProjectNotFound` if the project does not exist, `MissingDates`
/// if it lacks a start or end date, or a domain error if its dates are
/// inverted or the options are invalid.
pub fn get_available_for_project<S>(
    store: &mut S,
    project_id: i64,
    options: FilterOptions,
    reference_date: Date,
) -> Result<AvailabilityReport, CoreError<S::Error>>
where
    S: ProfileRepository + CommitmentRepository,
{
    let dates: ScheduledDates = store
        .project_dates(project_id)
        .map_err(CoreError::Repository)?
        .ok_or(CoreError::ProjectNotFound(project_id))?;
    let window: DateRange = require_window(dates, "Project", project_id)?;

    let filter: AvailabilityFilter =
        AvailabilityFilter::new(window, Purpose::Project, options, reference_date)?
            .excluding_project(Some(project_id));

    debug!(project_id, window = %window, "Checking availability for project");
    get_profiles_with_availability(store, &filter)
}

/// Computes availability over a training batch's own dates.
///
/// The population is restricted to training-eligible stages and the
/// batch's existing enrollments do not block.
///
/// # Errors
///
/// Returns `TrainingBatchNotFound` if the batch does not exist,
/// `MissingDates` if it lacks a start or end date, or a domain error if its
/// dates are inverted or the options are invalid.
pub fn get_available_for_training<S>(
    store: &mut S,
    batch_id: i64,
    options: FilterOptions,
    reference_date: Date,
) -> Result<AvailabilityReport, CoreError<S::Error>>
where
    S: ProfileRepository + CommitmentRepository,
{
    let dates: ScheduledDates = store
        .batch_dates(batch_id)
        .map_err(CoreError::Repository)?
        .ok_or(CoreError::TrainingBatchNotFound(batch_id))?;
    let window: DateRange = require_window(dates, "Training batch", batch_id)?;

    let filter: AvailabilityFilter =
        AvailabilityFilter::new(window, Purpose::Training, options, reference_date)?
            .excluding_batch(Some(batch_id));

    debug!(batch_id, window = %window, "Checking availability for training batch");
    get_profiles_with_availability(store, &filter)
}

fn require_window<E>(
    dates: ScheduledDates,
    entity: &'static str,
    id: i64,
) -> Result<DateRange, CoreError<E>> {
    let (start, end) = dates
        .both()
        .ok_or(CoreError::MissingDates { entity, id })?;
    Ok(DateRange::new(start, end)?)
}
