// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commitments: project assignments and training enrollments.
//!
//! A commitment participates in overlap computation only when it is not
//! removed or dropped, its container (project or batch) is active, and the
//! container carries both a start and an end date. Anything else is
//! invisible to availability: it neither blocks nor counts as free time.

use crate::date_range::DateRange;
use crate::types::{CommitmentKind, EnrollmentStatus, ProjectStage, TrainingBatchStatus};
use serde::{Deserialize, Serialize};
use time::Date;

/// Label for a project with neither name nor code.
pub const UNNAMED_PROJECT: &str = "Unnamed Project";

/// Label for a training batch with neither name nor code.
pub const UNNAMED_TRAINING: &str = "Unnamed Training";

/// An employer that owns projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub id: i64,
    pub name: Option<String>,
}

/// A project that workers can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_code: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub stage: ProjectStage,
    pub location: Option<String>,
    pub employer_id: Option<i64>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl Project {
    /// Returns `true` if assignments to this project can block a profile.
    #[must_use]
    pub fn reserves_workers(&self) -> bool {
        !self.is_deleted
            && self.is_active
            && self.stage.is_active()
            && self.start_date.is_some()
            && self.end_date.is_some()
    }
}

/// A training batch that profiles can be enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingBatch {
    pub id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    pub program_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: TrainingBatchStatus,
    pub location: Option<String>,
}

impl TrainingBatch {
    /// Returns `true` if enrollments in this batch can block a profile.
    #[must_use]
    pub fn reserves_trainees(&self) -> bool {
        self.status.is_active() && self.start_date.is_some() && self.end_date.is_some()
    }
}

/// Assignment of a profile to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    pub id: i64,
    pub project_id: i64,
    pub profile_id: i64,
    /// Set once the worker is taken off the project.
    pub removed_at: Option<Date>,
}

/// Enrollment of a profile in a training batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingEnrollment {
    pub id: i64,
    pub batch_id: i64,
    pub profile_id: i64,
    pub status: EnrollmentStatus,
}

/// An active project assignment joined with its project and employer.
///
/// This is what a commitment repository hands back for overlap checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCommitment {
    pub profile_id: i64,
    pub project_id: i64,
    pub project_code: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub stage: ProjectStage,
    pub location: Option<String>,
    pub employer: Option<Employer>,
}

impl ProjectCommitment {
    /// Joins an assignment with its project and (optional) employer.
    #[must_use]
    pub fn from_parts(
        assignment: &ProjectAssignment,
        project: &Project,
        employer: Option<&Employer>,
    ) -> Self {
        Self {
            profile_id: assignment.profile_id,
            project_id: project.id,
            project_code: project.project_code.clone(),
            name: project.name.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            stage: project.stage,
            location: project.location.clone(),
            employer: employer.cloned(),
        }
    }
}

/// An active training enrollment joined with its batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCommitment {
    pub profile_id: i64,
    pub batch_id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    pub program_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: TrainingBatchStatus,
    pub location: Option<String>,
}

impl TrainingCommitment {
    /// Joins an enrollment with its batch.
    #[must_use]
    pub fn from_parts(enrollment: &TrainingEnrollment, batch: &TrainingBatch) -> Self {
        Self {
            profile_id: enrollment.profile_id,
            batch_id: batch.id,
            code: batch.code.clone(),
            name: batch.name.clone(),
            program_name: batch.program_name.clone(),
            start_date: batch.start_date,
            end_date: batch.end_date,
            status: batch.status,
            location: batch.location.clone(),
        }
    }
}

/// Start and end dates of a project or batch, either of which may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDates {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl ScheduledDates {
    /// Returns both dates, or `None` if either is missing.
    #[must_use]
    pub const fn both(&self) -> Option<(Date, Date)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// One commitment that overlaps a queried window.
///
/// `start_date`/`end_date` are the container's own dates, not the overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingEvent {
    pub kind: CommitmentKind,
    pub id: i64,
    pub code: Option<String>,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: String,
    pub location: Option<String>,
    pub overlap_days: u32,
    /// Project events only.
    pub employer: Option<Employer>,
    /// Training events only.
    pub program_name: Option<String>,
}

impl BlockingEvent {
    /// Projects a project commitment onto `window`.
    ///
    /// Returns `None` if the project lacks a date or does not overlap.
    #[must_use]
    pub fn from_project(commitment: &ProjectCommitment, window: &DateRange) -> Option<Self> {
        let (start_date, end_date) =
            dated_overlap(commitment.start_date, commitment.end_date, window)?;

        Some(Self {
            kind: CommitmentKind::Project,
            id: commitment.project_id,
            code: commitment.project_code.clone(),
            name: label(
                commitment.name.as_deref(),
                commitment.project_code.as_deref(),
                UNNAMED_PROJECT,
            ),
            start_date,
            end_date,
            status: commitment.stage.as_str().to_string(),
            location: commitment.location.clone(),
            overlap_days: window.overlap_days_with(start_date, end_date),
            employer: commitment.employer.clone(),
            program_name: None,
        })
    }

    /// Projects a training commitment onto `window`.
    ///
    /// Returns `None` if the batch lacks a date or does not overlap.
    #[must_use]
    pub fn from_training(commitment: &TrainingCommitment, window: &DateRange) -> Option<Self> {
        let (start_date, end_date) =
            dated_overlap(commitment.start_date, commitment.end_date, window)?;

        Some(Self {
            kind: CommitmentKind::Training,
            id: commitment.batch_id,
            code: commitment.code.clone(),
            name: label(
                commitment.name.as_deref(),
                commitment.code.as_deref(),
                UNNAMED_TRAINING,
            ),
            start_date,
            end_date,
            status: commitment.status.as_str().to_string(),
            location: commitment.location.clone(),
            overlap_days: window.overlap_days_with(start_date, end_date),
            employer: None,
            program_name: commitment.program_name.clone(),
        })
    }
}

fn dated_overlap(
    start_date: Option<Date>,
    end_date: Option<Date>,
    window: &DateRange,
) -> Option<(Date, Date)> {
    let (start, end) = (start_date?, end_date?);
    window.overlaps_dates(start, end).then_some((start, end))
}

fn label(name: Option<&str>, code: Option<&str>, fallback: &str) -> String {
    [name, code]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn project_commitment(start: Option<Date>, end: Option<Date>) -> ProjectCommitment {
        ProjectCommitment {
            profile_id: 7,
            project_id: 42,
            project_code: Some(String::from("PRJ-042")),
            name: Some(String::from("Warehouse fit-out")),
            start_date: start,
            end_date: end,
            stage: ProjectStage::Ongoing,
            location: Some(String::from("Nagpur")),
            employer: Some(Employer {
                id: 3,
                name: Some(String::from("Acme Logistics")),
            }),
        }
    }

    #[test]
    fn test_project_event_uses_container_dates() {
        let window: DateRange =
            DateRange::new(date!(2024 - 03 - 15), date!(2024 - 04 - 15)).unwrap();
        let event: BlockingEvent = BlockingEvent::from_project(
            &project_commitment(Some(date!(2024 - 03 - 01)), Some(date!(2024 - 03 - 31))),
            &window,
        )
        .unwrap();

        assert_eq!(event.kind, CommitmentKind::Project);
        assert_eq!(event.id, 42);
        assert_eq!(event.start_date, date!(2024 - 03 - 01));
        assert_eq!(event.end_date, date!(2024 - 03 - 31));
        assert_eq!(event.overlap_days, 17);
        assert_eq!(event.status, "ongoing");
        assert_eq!(event.employer.unwrap().id, 3);
    }

    #[test]
    fn test_missing_dates_never_block() {
        let window: DateRange =
            DateRange::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31)).unwrap();
        let open_ended: ProjectCommitment = project_commitment(Some(date!(2024 - 03 - 01)), None);
        let open_start: ProjectCommitment = project_commitment(None, Some(date!(2024 - 03 - 01)));
        assert!(BlockingEvent::from_project(&open_ended, &window).is_none());
        assert!(BlockingEvent::from_project(&open_start, &window).is_none());
    }

    #[test]
    fn test_non_overlapping_commitment_is_not_an_event() {
        let window: DateRange =
            DateRange::new(date!(2024 - 04 - 01), date!(2024 - 04 - 30)).unwrap();
        assert!(
            BlockingEvent::from_project(
                &project_commitment(Some(date!(2024 - 03 - 01)), Some(date!(2024 - 03 - 31))),
                &window
            )
            .is_none()
        );
    }

    #[test]
    fn test_training_label_falls_back_to_code_then_placeholder() {
        let window: DateRange =
            DateRange::new(date!(2024 - 05 - 01), date!(2024 - 05 - 10)).unwrap();
        let mut commitment: TrainingCommitment = TrainingCommitment {
            profile_id: 1,
            batch_id: 9,
            code: Some(String::from("TB-09")),
            name: None,
            program_name: Some(String::from("Masonry basics")),
            start_date: Some(date!(2024 - 05 - 05)),
            end_date: Some(date!(2024 - 05 - 20)),
            status: TrainingBatchStatus::Upcoming,
            location: None,
        };

        let event: BlockingEvent = BlockingEvent::from_training(&commitment, &window).unwrap();
        assert_eq!(event.name, "TB-09");
        assert_eq!(event.overlap_days, 6);
        assert_eq!(event.status, "UPCOMING");
        assert_eq!(event.program_name.as_deref(), Some("Masonry basics"));

        commitment.code = None;
        let event: BlockingEvent = BlockingEvent::from_training(&commitment, &window).unwrap();
        assert_eq!(event.name, "Unnamed Training");
    }

    #[test]
    fn test_project_reservation_rules() {
        let mut project: Project = Project {
            id: 1,
            project_code: None,
            name: None,
            start_date: Some(date!(2024 - 01 - 01)),
            end_date: Some(date!(2024 - 02 - 01)),
            stage: ProjectStage::OnHold,
            location: None,
            employer_id: None,
            is_active: true,
            is_deleted: false,
        };
        assert!(project.reserves_workers());

        project.stage = ProjectStage::Completed;
        assert!(!project.reserves_workers());

        project.stage = ProjectStage::Planning;
        project.end_date = None;
        assert!(!project.reserves_workers());
    }
}
