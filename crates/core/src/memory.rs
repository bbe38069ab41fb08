// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-process store implementing both repositories.
//!
//! A test fixture, compiled only for this crate's tests or with the
//! `test-support` feature. Query semantics match the relational backends:
//! same predicates, same ordering.

use crate::repository::{CommitmentRepository, ProfileRepository, Repository};
use staffing_domain::{
    DateRange, Employer, EnrollmentStatus, ProfileQuery, ProfileRecord, Project,
    ProjectAssignment, ProjectCommitment, ScheduledDates, TrainingBatch, TrainingCommitment,
    TrainingEnrollment,
};
use std::collections::HashMap;
use std::convert::Infallible;

/// A store holding every record in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: Vec<ProfileRecord>,
    employers: HashMap<i64, Employer>,
    projects: HashMap<i64, Project>,
    batches: HashMap<i64, TrainingBatch>,
    assignments: Vec<ProjectAssignment>,
    enrollments: Vec<TrainingEnrollment>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a profile.
    pub fn add_profile(&mut self, profile: ProfileRecord) {
        self.profiles.retain(|existing| existing.id != profile.id);
        self.profiles.push(profile);
    }

    pub fn add_employer(&mut self, employer: Employer) {
        self.employers.insert(employer.id, employer);
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    pub fn add_training_batch(&mut self, batch: TrainingBatch) {
        self.batches.insert(batch.id, batch);
    }

    pub fn add_assignment(&mut self, assignment: ProjectAssignment) {
        self.assignments.push(assignment);
    }

    pub fn add_enrollment(&mut self, enrollment: TrainingEnrollment) {
        self.enrollments.push(enrollment);
    }

    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

impl Repository for InMemoryStore {
    type Error = Infallible;
}

impl ProfileRepository for InMemoryStore {
    fn list_profiles(&mut self, query: &ProfileQuery) -> Result<Vec<ProfileRecord>, Self::Error> {
        let mut matched: Vec<ProfileRecord> = self
            .profiles
            .iter()
            .filter(|profile| query.matches(profile))
            .cloned()
            .collect();
        matched.sort_by(|a, b| query.compare(a, b));
        Ok(matched)
    }

    fn get_profile(&mut self, profile_id: i64) -> Result<Option<ProfileRecord>, Self::Error> {
        Ok(self
            .profiles
            .iter()
            .find(|profile| profile.id == profile_id)
            .cloned())
    }
}

impl CommitmentRepository for InMemoryStore {
    fn active_project_commitments(
        &mut self,
        profile_ids: &[i64],
        window: &DateRange,
        exclude_project_id: Option<i64>,
    ) -> Result<Vec<ProjectCommitment>, Self::Error> {
        let commitments: Vec<ProjectCommitment> = self
            .assignments
            .iter()
            .filter(|assignment| {
                assignment.removed_at.is_none() && profile_ids.contains(&assignment.profile_id)
            })
            .filter(|assignment| Some(assignment.project_id) != exclude_project_id)
            .filter_map(|assignment| {
                let project: &Project = self.projects.get(&assignment.project_id)?;
                let (start, end) = (project.start_date?, project.end_date?);
                (project.reserves_workers() && window.overlaps_dates(start, end)).then(|| {
                    let employer: Option<&Employer> = project
                        .employer_id
                        .and_then(|id| self.employers.get(&id));
                    ProjectCommitment::from_parts(assignment, project, employer)
                })
            })
            .collect();
        Ok(commitments)
    }

    fn active_training_commitments(
        &mut self,
        profile_ids: &[i64],
        window: &DateRange,
        exclude_batch_id: Option<i64>,
    ) -> Result<Vec<TrainingCommitment>, Self::Error> {
        let commitments: Vec<TrainingCommitment> = self
            .enrollments
            .iter()
            .filter(|enrollment| {
                enrollment.status == EnrollmentStatus::Enrolled
                    && profile_ids.contains(&enrollment.profile_id)
            })
            .filter(|enrollment| Some(enrollment.batch_id) != exclude_batch_id)
            .filter_map(|enrollment| {
                let batch: &TrainingBatch = self.batches.get(&enrollment.batch_id)?;
                let (start, end) = (batch.start_date?, batch.end_date?);
                (batch.reserves_trainees() && window.overlaps_dates(start, end))
                    .then(|| TrainingCommitment::from_parts(enrollment, batch))
            })
            .collect();
        Ok(commitments)
    }

    fn project_dates(&mut self, project_id: i64) -> Result<Option<ScheduledDates>, Self::Error> {
        Ok(self
            .projects
            .get(&project_id)
            .filter(|project| !project.is_deleted)
            .map(|project| ScheduledDates {
                start_date: project.start_date,
                end_date: project.end_date,
            }))
    }

    fn batch_dates(&mut self, batch_id: i64) -> Result<Option<ScheduledDates>, Self::Error> {
        Ok(self.batches.get(&batch_id).map(|batch| ScheduledDates {
            start_date: batch.start_date,
            end_date: batch.end_date,
        }))
    }
}
