// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use staffing::InMemoryStore;
use staffing_domain::{
    AddressRecord, Employer, EnrollmentStatus, ProfileRecord, ProfileStage, Project,
    ProjectAssignment, ProjectStage, SkillRecord, TrainingBatch, TrainingBatchStatus,
    TrainingEnrollment,
};
use time::Date;
use time::macros::date;

use crate::{AvailabilityQuery, CheckAvailabilityQuery};

pub const TODAY: Date = date!(2026 - 10 - 19);

pub fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn create_window_query(start: &str, end: &str) -> AvailabilityQuery {
    AvailabilityQuery {
        start_date: text(start),
        end_date: text(end),
        ..AvailabilityQuery::default()
    }
}

pub fn create_check_query(start: &str, end: &str) -> CheckAvailabilityQuery {
    CheckAvailabilityQuery {
        start_date: text(start),
        end_date: text(end),
        ..CheckAvailabilityQuery::default()
    }
}

pub fn create_test_profile(id: i64, first_name: &str, stage: ProfileStage) -> ProfileRecord {
    let mut profile: ProfileRecord = ProfileRecord::new(id);
    profile.first_name = Some(first_name.to_string());
    profile.worker_code = Some(format!("BSW-{id:04}"));
    profile.current_stage = Some(stage);
    profile
}

fn create_test_project(id: i64, start: Option<Date>, end: Option<Date>) -> Project {
    Project {
        id,
        project_code: Some(format!("PRJ-{id:03}")),
        name: Some(format!("Project {id}")),
        start_date: start,
        end_date: end,
        stage: ProjectStage::Planning,
        location: Some(String::from("Nagpur")),
        employer_id: Some(10),
        is_active: true,
        is_deleted: false,
    }
}

/// Project 1 covers May 2026 for employer 10 and batch 5 runs 10-12 May.
/// Anil is on project 1, Chetan and Esha are enrolled in batch 5. Bharat
/// and Deepa are free. Project 3 has no end date.
pub fn create_staffed_store() -> InMemoryStore {
    let mut store: InMemoryStore = InMemoryStore::new();

    store.add_employer(Employer {
        id: 10,
        name: Some(String::from("Acme Builders")),
    });
    store.add_project(create_test_project(
        1,
        Some(date!(2026 - 05 - 01)),
        Some(date!(2026 - 05 - 31)),
    ));
    store.add_project(create_test_project(3, Some(date!(2026 - 07 - 01)), None));
    store.add_training_batch(TrainingBatch {
        id: 5,
        code: Some(String::from("TB-005")),
        name: Some(String::from("Batch 5")),
        program_name: Some(String::from("Site safety")),
        start_date: Some(date!(2026 - 05 - 10)),
        end_date: Some(date!(2026 - 05 - 12)),
        status: TrainingBatchStatus::Upcoming,
        location: None,
    });

    let mut bharat: ProfileRecord = create_test_profile(2, "Bharat", ProfileStage::Trained);
    bharat.last_name = Some(String::from("Patil"));
    bharat.gender = Some(String::from("male"));
    bharat.date_of_birth = Some(date!(1996 - 01 - 15));
    bharat.skills.push(SkillRecord {
        id: 71,
        skill_category_id: Some(3),
        category_name: Some(String::from("Mason")),
        category_type: Some(String::from("civil")),
        years_of_experience: Some(6),
        is_primary: Some(true),
    });
    bharat.addresses.push(AddressRecord {
        address_type: Some(String::from("permanent")),
        district: Some(String::from("Pune")),
        state: Some(String::from("Maharashtra")),
    });

    store.add_profile(create_test_profile(1, "Anil", ProfileStage::Benched));
    store.add_profile(bharat);
    store.add_profile(create_test_profile(3, "Chetan", ProfileStage::Benched));
    store.add_profile(create_test_profile(4, "Deepa", ProfileStage::Screening));
    store.add_profile(create_test_profile(5, "Esha", ProfileStage::Approved));

    store.add_assignment(ProjectAssignment {
        id: 1001,
        project_id: 1,
        profile_id: 1,
        removed_at: None,
    });
    for profile_id in [3, 5] {
        store.add_enrollment(TrainingEnrollment {
            id: 5000 + profile_id,
            batch_id: 5,
            profile_id,
            status: EnrollmentStatus::Enrolled,
        });
    }

    store
}
