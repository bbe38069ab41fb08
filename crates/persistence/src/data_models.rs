// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion into domain records.
//!
//! Dates are stored as `YYYY-MM-DD` text and flags as `0`/`1` integers.
//! Every conversion that can fail names the table and row it came from.

use diesel::prelude::*;
use staffing_domain::{
    AddressRecord, Employer, ProfileRecord, ProfileStage, ProjectCommitment, ProjectStage,
    ScheduledDates, SkillRecord, TrainingBatchStatus, TrainingCommitment, format_date, parse_date,
};
use time::Date;

use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Diesel Queryable struct for profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = profiles)]
pub struct ProfileRow {
    pub profile_id: i64,
    pub worker_code: Option<String>,
    pub candidate_code: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub profile_photo_url: Option<String>,
    pub phone: Option<String>,
    pub current_stage: Option<String>,
    pub profile_type: Option<String>,
    pub worker_type: Option<String>,
    pub is_active: i32,
    pub is_deleted: i32,
}

impl ProfileRow {
    /// Builds the domain record with empty skill and address lists.
    pub fn into_record(self) -> Result<ProfileRecord, PersistenceError> {
        let id: i64 = self.profile_id;
        let date_of_birth: Option<Date> =
            decode_date("profiles", id, self.date_of_birth.as_deref())?;
        let current_stage: Option<ProfileStage> = self
            .current_stage
            .map(|stage| stage.parse::<ProfileStage>())
            .transpose()
            .map_err(|e| PersistenceError::stored("profiles", id, &e))?;

        Ok(ProfileRecord {
            id,
            worker_code: self.worker_code,
            candidate_code: self.candidate_code,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            gender: self.gender,
            date_of_birth,
            profile_photo_url: self.profile_photo_url,
            phone: self.phone,
            current_stage,
            profile_type: self.profile_type,
            worker_type: self.worker_type,
            is_active: self.is_active != 0,
            is_deleted: self.is_deleted != 0,
            skills: Vec::new(),
            addresses: Vec::new(),
        })
    }
}

/// A profile skill joined with its (optional) category.
#[derive(Queryable)]
pub struct SkillRow {
    pub profile_skill_id: i64,
    pub profile_id: i64,
    pub skill_category_id: Option<i64>,
    pub years_of_experience: Option<i32>,
    pub is_primary: Option<i32>,
    pub category_name: Option<String>,
    pub category_type: Option<String>,
}

impl SkillRow {
    pub fn into_record(self) -> (i64, SkillRecord) {
        (
            self.profile_id,
            SkillRecord {
                id: self.profile_skill_id,
                skill_category_id: self.skill_category_id,
                category_name: self.category_name,
                category_type: self.category_type,
                years_of_experience: self.years_of_experience,
                is_primary: self.is_primary.map(|flag| flag != 0),
            },
        )
    }
}

#[derive(Queryable)]
pub struct AddressRow {
    pub profile_id: i64,
    pub address_type: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
}

impl AddressRow {
    pub fn into_record(self) -> (i64, AddressRecord) {
        (
            self.profile_id,
            AddressRecord {
                address_type: self.address_type,
                district: self.district,
                state: self.state,
            },
        )
    }
}

/// An active assignment joined with its project and employer.
#[derive(Queryable)]
pub struct ProjectCommitmentRow {
    pub profile_id: i64,
    pub project_id: i64,
    pub project_code: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub stage: String,
    pub location: Option<String>,
    pub employer_id: Option<i64>,
    pub employer_name: Option<String>,
}

impl ProjectCommitmentRow {
    pub fn into_commitment(self) -> Result<ProjectCommitment, PersistenceError> {
        let id: i64 = self.project_id;
        let stage: ProjectStage = self
            .stage
            .parse()
            .map_err(|e| PersistenceError::stored("projects", id, &e))?;

        Ok(ProjectCommitment {
            profile_id: self.profile_id,
            project_id: id,
            project_code: self.project_code,
            name: self.name,
            start_date: decode_date("projects", id, self.start_date.as_deref())?,
            end_date: decode_date("projects", id, self.end_date.as_deref())?,
            stage,
            location: self.location,
            employer: self.employer_id.map(|employer_id| Employer {
                id: employer_id,
                name: self.employer_name,
            }),
        })
    }
}

/// An enrollment joined with its batch.
#[derive(Queryable)]
pub struct TrainingCommitmentRow {
    pub profile_id: i64,
    pub batch_id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    pub program_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub location: Option<String>,
}

impl TrainingCommitmentRow {
    pub fn into_commitment(self) -> Result<TrainingCommitment, PersistenceError> {
        let id: i64 = self.batch_id;
        let status: TrainingBatchStatus = self
            .status
            .parse()
            .map_err(|e| PersistenceError::stored("training_batches", id, &e))?;

        Ok(TrainingCommitment {
            profile_id: self.profile_id,
            batch_id: id,
            code: self.code,
            name: self.name,
            program_name: self.program_name,
            start_date: decode_date("training_batches", id, self.start_date.as_deref())?,
            end_date: decode_date("training_batches", id, self.end_date.as_deref())?,
            status,
            location: self.location,
        })
    }
}

/// Decodes a `(start_date, end_date)` pair read from `table`.
pub fn decode_scheduled_dates(
    table: &'static str,
    id: i64,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<ScheduledDates, PersistenceError> {
    Ok(ScheduledDates {
        start_date: decode_date(table, id, start)?,
        end_date: decode_date(table, id, end)?,
    })
}

/// Parses an optional stored date.
pub fn decode_date(
    table: &'static str,
    id: i64,
    value: Option<&str>,
) -> Result<Option<Date>, PersistenceError> {
    value
        .map(parse_date)
        .transpose()
        .map_err(|e| PersistenceError::stored(table, id, &e))
}

/// Formats a date for storage or comparison.
pub fn encode_date(date: Date) -> Result<String, PersistenceError> {
    format_date(date).map_err(|e| PersistenceError::DateEncoding(e.to_string()))
}

/// Formats an optional date for storage.
pub fn encode_optional_date(date: Option<Date>) -> Result<Option<String>, PersistenceError> {
    date.map(encode_date).transpose()
}

/// Stores a flag as `0`/`1`.
pub fn encode_flag(flag: bool) -> i32 {
    i32::from(flag)
}
