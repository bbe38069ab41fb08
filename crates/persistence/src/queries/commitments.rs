// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commitment queries.
//!
//! Both batch queries return only commitments that reserve the profile
//! during the window: live links to active, dated containers whose closed
//! interval meets the window. Dates are compared as `YYYY-MM-DD` text,
//! which orders the same way as the calendar. A container with a missing
//! start or end date fails the comparison and is never returned.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use staffing_domain::{
    DateRange, EnrollmentStatus, ProjectCommitment, ProjectStage, ScheduledDates,
    TrainingBatchStatus, TrainingCommitment,
};
use tracing::debug;

use crate::data_models::{
    ProjectCommitmentRow, TrainingCommitmentRow, decode_scheduled_dates, encode_date,
};
use crate::diesel_schema::{
    employers, project_worker_assignments, projects, training_batch_enrollments, training_batches,
};
use crate::error::PersistenceError;

backend_fn! {
/// Loads the active project commitments of `profile_ids` that overlap `window`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `profile_ids` - Profiles to load commitments for
/// * `window` - The closed date window
/// * `exclude_project_id` - A project whose assignments are ignored
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn active_project_commitments(
    conn: &mut _,
    profile_ids: &[i64],
    window: &DateRange,
    exclude_project_id: Option<i64>,
) -> Result<Vec<ProjectCommitment>, PersistenceError> {
    if profile_ids.is_empty() {
        return Ok(Vec::new());
    }

    let window_start: String = encode_date(window.start())?;
    let window_end: String = encode_date(window.end())?;
    let active_stages: Vec<&'static str> =
        ProjectStage::ACTIVE.iter().map(ProjectStage::as_str).collect();

    let mut select = project_worker_assignments::table
        .inner_join(projects::table)
        .left_join(
            employers::table.on(projects::employer_id.eq(employers::employer_id.nullable())),
        )
        .filter(project_worker_assignments::profile_id.eq_any(profile_ids.to_vec()))
        .filter(project_worker_assignments::removed_at.is_null())
        .filter(projects::is_active.eq(1))
        .filter(projects::is_deleted.eq(0))
        .filter(projects::stage.eq_any(active_stages))
        .filter(projects::start_date.le(window_end))
        .filter(projects::end_date.ge(window_start))
        .select((
            project_worker_assignments::profile_id,
            projects::project_id,
            projects::project_code,
            projects::name,
            projects::start_date,
            projects::end_date,
            projects::stage,
            projects::location,
            employers::employer_id.nullable(),
            employers::name.nullable(),
        ))
        .order(project_worker_assignments::assignment_id.asc())
        .into_boxed();

    if let Some(project_id) = exclude_project_id {
        select = select.filter(project_worker_assignments::project_id.ne(project_id));
    }

    let rows: Vec<ProjectCommitmentRow> = select.load::<ProjectCommitmentRow>(conn)?;

    debug!(
        profiles = profile_ids.len(),
        commitments = rows.len(),
        "Loaded project commitments"
    );

    rows.into_iter()
        .map(ProjectCommitmentRow::into_commitment)
        .collect()
}
}

backend_fn! {
/// Loads the active training commitments of `profile_ids` that overlap `window`.
///
/// Only `ENROLLED` enrollments in `UPCOMING` or `ONGOING` batches count.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `profile_ids` - Profiles to load commitments for
/// * `window` - The closed date window
/// * `exclude_batch_id` - A batch whose enrollments are ignored
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn active_training_commitments(
    conn: &mut _,
    profile_ids: &[i64],
    window: &DateRange,
    exclude_batch_id: Option<i64>,
) -> Result<Vec<TrainingCommitment>, PersistenceError> {
    if profile_ids.is_empty() {
        return Ok(Vec::new());
    }

    let window_start: String = encode_date(window.start())?;
    let window_end: String = encode_date(window.end())?;
    let active_statuses: Vec<&'static str> = TrainingBatchStatus::ACTIVE
        .iter()
        .map(TrainingBatchStatus::as_str)
        .collect();

    let mut select = training_batch_enrollments::table
        .inner_join(training_batches::table)
        .filter(training_batch_enrollments::profile_id.eq_any(profile_ids.to_vec()))
        .filter(training_batch_enrollments::status.eq(EnrollmentStatus::Enrolled.as_str()))
        .filter(training_batches::status.eq_any(active_statuses))
        .filter(training_batches::start_date.le(window_end))
        .filter(training_batches::end_date.ge(window_start))
        .select((
            training_batch_enrollments::profile_id,
            training_batches::batch_id,
            training_batches::code,
            training_batches::name,
            training_batches::program_name,
            training_batches::start_date,
            training_batches::end_date,
            training_batches::status,
            training_batches::location,
        ))
        .order(training_batch_enrollments::enrollment_id.asc())
        .into_boxed();

    if let Some(batch_id) = exclude_batch_id {
        select = select.filter(training_batch_enrollments::batch_id.ne(batch_id));
    }

    let rows: Vec<TrainingCommitmentRow> = select.load::<TrainingCommitmentRow>(conn)?;

    debug!(
        profiles = profile_ids.len(),
        commitments = rows.len(),
        "Loaded training commitments"
    );

    rows.into_iter()
        .map(TrainingCommitmentRow::into_commitment)
        .collect()
}
}

backend_fn! {
/// Retrieves the scheduled dates of a non-deleted project.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `project_id` - The project ID
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
/// Returns `Ok(None)` if the project does not exist or is deleted.
pub fn project_dates(
    conn: &mut _,
    project_id: i64,
) -> Result<Option<ScheduledDates>, PersistenceError> {
    let row: Option<(Option<String>, Option<String>)> = projects::table
        .filter(projects::project_id.eq(project_id))
        .filter(projects::is_deleted.eq(0))
        .select((projects::start_date, projects::end_date))
        .first::<(Option<String>, Option<String>)>(conn)
        .optional()?;

    row.map(|(start, end)| {
        decode_scheduled_dates("projects", project_id, start.as_deref(), end.as_deref())
    })
    .transpose()
}
}

backend_fn! {
/// Retrieves the scheduled dates of a training batch.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `batch_id` - The batch ID
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
/// Returns `Ok(None)` if the batch does not exist.
pub fn batch_dates(
    conn: &mut _,
    batch_id: i64,
) -> Result<Option<ScheduledDates>, PersistenceError> {
    let row: Option<(Option<String>, Option<String>)> = training_batches::table
        .filter(training_batches::batch_id.eq(batch_id))
        .select((training_batches::start_date, training_batches::end_date))
        .first::<(Option<String>, Option<String>)>(conn)
        .optional()?;

    row.map(|(start, end)| {
        decode_scheduled_dates("training_batches", batch_id, start.as_deref(), end.as_deref())
    })
    .transpose()
}
}
