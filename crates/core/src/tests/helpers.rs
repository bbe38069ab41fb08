// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::InMemoryStore;
use staffing_domain::{
    AvailabilityFilter, DateRange, EnrollmentStatus, FilterOptions, PageRequest, ProfileRecord,
    ProfileStage, Project, ProjectAssignment, ProjectStage, Purpose, TrainingBatch,
    TrainingBatchStatus, TrainingEnrollment,
};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 10 - 19);

pub fn create_test_window(start: Date, end: Date) -> DateRange {
    DateRange::new(start, end).unwrap()
}

pub fn create_test_profile(id: i64, first_name: &str, stage: ProfileStage) -> ProfileRecord {
    let mut profile: ProfileRecord = ProfileRecord::new(id);
    profile.first_name = Some(first_name.to_string());
    profile.worker_code = Some(format!("BSW-{id:04}"));
    profile.current_stage = Some(stage);
    profile
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
        location: Some(String::from("Nagpur")),
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
        program_name: Some(String::from("Site safety")),
        start_date: start,
        end_date: end,
        status,
        location: None,
    }
}

pub fn assign(store: &mut InMemoryStore, project_id: i64, profile_id: i64) {
    store.add_assignment(ProjectAssignment {
        id: project_id * 1000 + profile_id,
        project_id,
        profile_id,
        removed_at: None,
    });
}

pub fn enroll(store: &mut InMemoryStore, batch_id: i64, profile_id: i64, status: EnrollmentStatus) {
    store.add_enrollment(TrainingEnrollment {
        id: batch_id * 1000 + profile_id,
        batch_id,
        profile_id,
        status,
    });
}

pub fn create_test_filter(
    window: DateRange,
    purpose: Purpose,
    options: FilterOptions,
) -> AvailabilityFilter {
    AvailabilityFilter::new(window, purpose, options, TODAY).unwrap()
}

pub fn options_with_page(page: u32, limit: u32) -> FilterOptions {
    FilterOptions {
        page: PageRequest::new(page, limit).unwrap(),
        ..FilterOptions::default()
    }
}
