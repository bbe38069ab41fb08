// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod age;
mod commitment;
mod date_range;
mod eligibility;
mod error;
mod filter;
mod pagination;
mod profile;
mod types;

#[cfg(test)]
mod tests;

pub use age::{BirthDateBounds, birth_date_bounds, calculate_age};
pub use commitment::{
    BlockingEvent, Employer, Project, ProjectAssignment, ProjectCommitment, ScheduledDates,
    TrainingBatch, TrainingCommitment, TrainingEnrollment, UNNAMED_PROJECT, UNNAMED_TRAINING,
};
pub use date_range::{DATE_FORMAT, DateRange, format_date, overlap_days, overlaps, parse_date};
pub use eligibility::{EligibilityDecision, evaluate_project_eligibility};
pub use error::DomainError;
pub use filter::{AvailabilityFilter, FilterOptions, ProfileQuery};
pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest, PageWindow, total_pages};
pub use profile::{
    AddressRecord, BLUE_COLLAR_WORKER_TYPE, PERMANENT_ADDRESS_TYPE, ProfileRecord, SkillRecord,
    UNKNOWN_NAME, WORKER_PROFILE_TYPE,
};

// Re-export public types
pub use types::{
    AvailabilityStatus, CommitmentKind, EnrollmentStatus, ProfileStage, ProjectStage, Purpose,
    SortBy, SortOrder, TrainingBatchStatus,
};
