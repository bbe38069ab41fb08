// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record registration.
//!
//! The availability engine never writes. These inserts exist so that
//! fixtures, seeding tools and tests can populate a database with the same
//! records the in-memory store accepts. Every row carries its caller-chosen
//! primary key.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use staffing_domain::{
    Employer, ProfileRecord, ProfileStage, Project, ProjectAssignment, TrainingBatch,
    TrainingEnrollment,
};
use tracing::debug;

use crate::data_models::{encode_flag, encode_optional_date};
use crate::diesel_schema::{
    addresses, employers, profile_skills, profiles, project_worker_assignments, projects,
    skill_categories, training_batch_enrollments, training_batches,
};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a skill category.
///
/// # Errors
///
/// Returns an error if the insert fails (for example, a duplicate ID).
pub fn insert_skill_category(
    conn: &mut _,
    skill_category_id: i64,
    name: Option<&str>,
    category_type: Option<&str>,
) -> Result<(), PersistenceError> {
    diesel::insert_into(skill_categories::table)
        .values((
            skill_categories::skill_category_id.eq(skill_category_id),
            skill_categories::name.eq(name),
            skill_categories::category_type.eq(category_type),
        ))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Inserts a profile together with its skills and addresses.
///
/// The three inserts run in one transaction. Skill rows reference their
/// category by ID; the category must already exist.
///
/// # Errors
///
/// Returns an error if any insert fails. Nothing is written in that case.
pub fn insert_profile(conn: &mut _, profile: &ProfileRecord) -> Result<(), PersistenceError> {
    let date_of_birth: Option<String> = encode_optional_date(profile.date_of_birth)?;
    let current_stage: Option<&str> = profile.current_stage.as_ref().map(ProfileStage::as_str);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(profiles::table)
            .values((
                profiles::profile_id.eq(profile.id),
                profiles::worker_code.eq(profile.worker_code.as_deref()),
                profiles::candidate_code.eq(profile.candidate_code.as_deref()),
                profiles::first_name.eq(profile.first_name.as_deref()),
                profiles::middle_name.eq(profile.middle_name.as_deref()),
                profiles::last_name.eq(profile.last_name.as_deref()),
                profiles::gender.eq(profile.gender.as_deref()),
                profiles::date_of_birth.eq(date_of_birth.as_deref()),
                profiles::profile_photo_url.eq(profile.profile_photo_url.as_deref()),
                profiles::phone.eq(profile.phone.as_deref()),
                profiles::current_stage.eq(current_stage),
                profiles::profile_type.eq(profile.profile_type.as_deref()),
                profiles::worker_type.eq(profile.worker_type.as_deref()),
                profiles::is_active.eq(encode_flag(profile.is_active)),
                profiles::is_deleted.eq(encode_flag(profile.is_deleted)),
            ))
            .execute(conn)?;

        for skill in &profile.skills {
            diesel::insert_into(profile_skills::table)
                .values((
                    profile_skills::profile_skill_id.eq(skill.id),
                    profile_skills::profile_id.eq(profile.id),
                    profile_skills::skill_category_id.eq(skill.skill_category_id),
                    profile_skills::years_of_experience.eq(skill.years_of_experience),
                    profile_skills::is_primary.eq(skill.is_primary.map(encode_flag)),
                ))
                .execute(conn)?;
        }

        for address in &profile.addresses {
            diesel::insert_into(addresses::table)
                .values((
                    addresses::profile_id.eq(profile.id),
                    addresses::address_type.eq(address.address_type.as_deref()),
                    addresses::district.eq(address.district.as_deref()),
                    addresses::state.eq(address.state.as_deref()),
                ))
                .execute(conn)?;
        }

        Ok(())
    })?;

    debug!(
        profile_id = profile.id,
        skills = profile.skills.len(),
        addresses = profile.addresses.len(),
        "Inserted profile"
    );
    Ok(())
}
}

backend_fn! {
/// Inserts an employer.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_employer(conn: &mut _, employer: &Employer) -> Result<(), PersistenceError> {
    diesel::insert_into(employers::table)
        .values((
            employers::employer_id.eq(employer.id),
            employers::name.eq(employer.name.as_deref()),
        ))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Inserts a project.
///
/// # Errors
///
/// Returns an error if the insert fails, for example when the employer
/// does not exist.
pub fn insert_project(conn: &mut _, project: &Project) -> Result<(), PersistenceError> {
    let start_date: Option<String> = encode_optional_date(project.start_date)?;
    let end_date: Option<String> = encode_optional_date(project.end_date)?;

    diesel::insert_into(projects::table)
        .values((
            projects::project_id.eq(project.id),
            projects::project_code.eq(project.project_code.as_deref()),
            projects::name.eq(project.name.as_deref()),
            projects::start_date.eq(start_date.as_deref()),
            projects::end_date.eq(end_date.as_deref()),
            projects::stage.eq(project.stage.as_str()),
            projects::location.eq(project.location.as_deref()),
            projects::employer_id.eq(project.employer_id),
            projects::is_active.eq(encode_flag(project.is_active)),
            projects::is_deleted.eq(encode_flag(project.is_deleted)),
        ))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Inserts a training batch.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_training_batch(
    conn: &mut _,
    batch: &TrainingBatch,
) -> Result<(), PersistenceError> {
    let start_date: Option<String> = encode_optional_date(batch.start_date)?;
    let end_date: Option<String> = encode_optional_date(batch.end_date)?;

    diesel::insert_into(training_batches::table)
        .values((
            training_batches::batch_id.eq(batch.id),
            training_batches::code.eq(batch.code.as_deref()),
            training_batches::name.eq(batch.name.as_deref()),
            training_batches::program_name.eq(batch.program_name.as_deref()),
            training_batches::start_date.eq(start_date.as_deref()),
            training_batches::end_date.eq(end_date.as_deref()),
            training_batches::status.eq(batch.status.as_str()),
            training_batches::location.eq(batch.location.as_deref()),
        ))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Inserts a project assignment.
///
/// # Errors
///
/// Returns an error if the insert fails, for example when the project or
/// profile does not exist.
pub fn insert_assignment(
    conn: &mut _,
    assignment: &ProjectAssignment,
) -> Result<(), PersistenceError> {
    let removed_at: Option<String> = encode_optional_date(assignment.removed_at)?;

    diesel::insert_into(project_worker_assignments::table)
        .values((
            project_worker_assignments::assignment_id.eq(assignment.id),
            project_worker_assignments::project_id.eq(assignment.project_id),
            project_worker_assignments::profile_id.eq(assignment.profile_id),
            project_worker_assignments::removed_at.eq(removed_at.as_deref()),
        ))
        .execute(conn)?;
    Ok(())
}
}

backend_fn! {
/// Inserts a training enrollment.
///
/// # Errors
///
/// Returns an error if the insert fails, for example when the batch or
/// profile does not exist.
pub fn insert_enrollment(
    conn: &mut _,
    enrollment: &TrainingEnrollment,
) -> Result<(), PersistenceError> {
    diesel::insert_into(training_batch_enrollments::table)
        .values((
            training_batch_enrollments::enrollment_id.eq(enrollment.id),
            training_batch_enrollments::batch_id.eq(enrollment.batch_id),
            training_batch_enrollments::profile_id.eq(enrollment.profile_id),
            training_batch_enrollments::status.eq(enrollment.status.as_str()),
        ))
        .execute(conn)?;
    Ok(())
}
}
