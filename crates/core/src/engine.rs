// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-profile availability decision.

use crate::error::CoreError;
use crate::repository::CommitmentRepository;
use staffing_domain::{BlockingEvent, DateRange, ProjectCommitment, TrainingCommitment};
use tracing::debug;

/// Outcome of checking one profile against a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityCheck {
    pub is_available: bool,
    pub blocking_events: Vec<BlockingEvent>,
}

/// Builds the blocking events for one profile's commitments.
///
/// Project events come first, then training events, each in the order
/// given. Commitments without both dates or without overlap are dropped.
#[must_use]
pub fn blocking_events(
    projects: &[&ProjectCommitment],
    trainings: &[&TrainingCommitment],
    window: &DateRange,
) -> Vec<BlockingEvent> {
    projects
        .iter()
        .filter_map(|commitment| BlockingEvent::from_project(commitment, window))
        .chain(
            trainings
                .iter()
                .filter_map(|commitment| BlockingEvent::from_training(commitment, window)),
        )
        .collect()
}

/// Decides whether one profile is free for the whole of `window`.
///
/// # Arguments
///
/// * `store` - The commitment source
/// * `profile_id` - The profile to check
/// * `window` - The candidate date range
/// * `exclude_project_id` - A project whose own assignments are ignored
/// * `exclude_batch_id` - A batch whose own enrollments are ignored
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn check_availability<S>(
    store: &mut S,
    profile_id: i64,
    window: &DateRange,
    exclude_project_id: Option<i64>,
    exclude_batch_id: Option<i64>,
) -> Result<AvailabilityCheck, CoreError<S::Error>>
where
    S: CommitmentRepository,
{
    let ids: [i64; 1] = [profile_id];
    let projects: Vec<ProjectCommitment> = store
        .active_project_commitments(&ids, window, exclude_project_id)
        .map_err(CoreError::Repository)?;
    let trainings: Vec<TrainingCommitment> = store
        .active_training_commitments(&ids, window, exclude_batch_id)
        .map_err(CoreError::Repository)?;

    let projects: Vec<&ProjectCommitment> = projects
        .iter()
        .filter(|c| c.profile_id == profile_id)
        .collect();
    let trainings: Vec<&TrainingCommitment> = trainings
        .iter()
        .filter(|c| c.profile_id == profile_id)
        .collect();

    let events: Vec<BlockingEvent> = blocking_events(&projects, &trainings, window);

    debug!(
        profile_id,
        window = %window,
        blocking = events.len(),
        "Checked single-profile availability"
    );

    Ok(AvailabilityCheck {
        is_available: events.is_empty(),
        blocking_events: events,
    })
}
