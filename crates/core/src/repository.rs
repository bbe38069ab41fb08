// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data-source seams consumed by the engine and aggregator.
//!
//! Both repositories share one error type through [`Repository`], so a
//! single store can serve every operation and its failures propagate as
//! `CoreError::Repository` without translation.

use staffing_domain::{
    DateRange, ProfileQuery, ProfileRecord, ProjectCommitment, ScheduledDates, TrainingCommitment,
};

/// Common supertrait naming the store's error type.
pub trait Repository {
    /// Failure raised by the backing store.
    type Error: std::error::Error + 'static;
}

/// Read access to profiles.
pub trait ProfileRepository: Repository {
    /// Loads every profile matching `query`, in the query's sort order,
    /// with skills and addresses attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_profiles(&mut self, query: &ProfileQuery) -> Result<Vec<ProfileRecord>, Self::Error>;

    /// Loads one profile regardless of pool membership.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_profile(&mut self, profile_id: i64) -> Result<Option<ProfileRecord>, Self::Error>;
}

/// Read access to project assignments and training enrollments.
pub trait CommitmentRepository: Repository {
    /// Loads, in one batch, every active project assignment held by any of
    /// `profile_ids` whose project is active, fully dated and intersects
    /// `window`. Assignments to `exclude_project_id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn active_project_commitments(
        &mut self,
        profile_ids: &[i64],
        window: &DateRange,
        exclude_project_id: Option<i64>,
    ) -> Result<Vec<ProjectCommitment>, Self::Error>;

    /// Loads, in one batch, every `ENROLLED` enrollment held by any of
    /// `profile_ids` whose batch is active, fully dated and intersects
    /// `window`. Enrollments in `exclude_batch_id` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn active_training_commitments(
        &mut self,
        profile_ids: &[i64],
        window: &DateRange,
        exclude_batch_id: Option<i64>,
    ) -> Result<Vec<TrainingCommitment>, Self::Error>;

    /// Dates of a non-deleted project, or `None` if there is no such project.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn project_dates(&mut self, project_id: i64) -> Result<Option<ScheduledDates>, Self::Error>;

    /// Dates of a training batch, or `None` if there is no such batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn batch_dates(&mut self, batch_id: i64) -> Result<Option<ScheduledDates>, Self::Error>;
}
