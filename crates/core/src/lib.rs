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

//! Availability computation over injected data sources.
//!
//! The engine answers "is this one profile free over this window"; the
//! aggregator answers the same question for a whole filtered population
//! using two batched commitment reads. Both build blocking events with the
//! same code path, so a profile is classified identically either way.
//!
//! Nothing here mutates data or caches results; every call recomputes from
//! the repositories it is given.

mod aggregator;
mod eligibility;
mod engine;
mod error;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod repository;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregator::{
    AvailabilityPagination, AvailabilityReport, AvailabilitySummary, Partition,
    ProfileAvailability, build_report, get_available_for_project, get_available_for_training,
    get_profiles_with_availability, partition,
};
pub use eligibility::check_project_eligibility;
pub use engine::{AvailabilityCheck, blocking_events, check_availability};
pub use error::CoreError;
#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryStore;
pub use repository::{CommitmentRepository, ProfileRepository, Repository};
