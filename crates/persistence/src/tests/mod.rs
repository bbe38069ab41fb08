// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod initialization_tests;

use staffing_domain::{
    AddressRecord, DateRange, EnrollmentStatus, ProfileRecord, ProfileStage, Project,
    ProjectAssignment, ProjectStage, SkillRecord, TrainingBatch, TrainingBatchStatus,
    TrainingEnrollment,
};
use time::Date;
use time::macros::date;

use crate::Persistence;

pub const TODAY: Date = date!(2026 - 10 - 19);

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn create_test_window(start: Date, end: Date) -> DateRange {
    DateRange::new(start, end).unwrap()
}

pub fn create_test_profile(id: i64, first_name: &str, stage: ProfileStage) -> ProfileRecord {
    let mut profile: ProfileRecord = ProfileRecord::new(id);
    profile.first_name = Some(first_name.to_string());
    profile.last_name = Some(String::from("Kumar"));
    profile.worker_code = Some(format!("BSW-{id:04}"));
    profile.current_stage = Some(stage);
    profile
}

pub fn create_test_skill(id: i64, skill_category_id: i64, is_primary: bool) -> SkillRecord {
    SkillRecord {
        id,
        skill_category_id: Some(skill_category_id),
        category_name: None,
        category_type: None,
        years_of_experience: Some(3),
        is_primary: Some(is_primary),
    }
}

pub fn create_test_address(address_type: &str, district: &str, state: &str) -> AddressRecord {
    AddressRecord {
        address_type: Some(address_type.to_string()),
        district: Some(district.to_string()),
        state: Some(state.to_string()),
    }
}

pub fn create_test_project(
    id: i64,
    start: Option<Date>,
    end: Option<Date>,
    stage: ProjectStage,
) -> Project {
    Project {
        id,
        project_code: Some(format!("PRJ-{id:03}")),
        name: Some(format!("Project {id}")),
        start_date: start,
        end_date: end,
        stage,
        location: Some(String::from("Pune")),
        employer_id: None,
        is_active: true,
        is_deleted: false,
    }
}

pub fn create_test_batch(
    id: i64,
    start: Option<Date>,
    end: Option<Date>,
    status: TrainingBatchStatus,
) -> TrainingBatch {
    TrainingBatch {
        id,
        code: Some(format!("TB-{id:03}")),
        name: Some(format!("Batch {id}")),
        program_name: Some(String::from("Scaffolding")),
        start_date: start,
        end_date: end,
        status,
        location: Some(String::from("Nashik")),
    }
}

pub fn assign(persistence: &mut Persistence, project_id: i64, profile_id: i64) {
    persistence
        .add_assignment(&ProjectAssignment {
            id: project_id * 1000 + profile_id,
            project_id,
            profile_id,
            removed_at: None,
        })
        .unwrap();
}

pub fn enroll(
    persistence: &mut Persistence,
    batch_id: i64,
    profile_id: i64,
    status: EnrollmentStatus,
) {
    persistence
        .add_enrollment(&TrainingEnrollment {
            id: batch_id * 1000 + profile_id,
            batch_id,
            profile_id,
            status,
        })
        .unwrap();
}
