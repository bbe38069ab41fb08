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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Request validation and response shaping for the availability engine.
//!
//! This crate is transport-agnostic: it takes raw query parameters and a
//! store, and returns serializable responses or an [`ApiError`]. Mapping
//! errors to HTTP statuses is left to the server.

mod error;
mod handlers;
mod params;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    check_availability, check_project_eligibility, get_available_for_project,
    get_available_for_training, get_profiles_with_availability,
};
pub use params::{
    parse_filter_options, parse_flag, parse_optional_id, parse_purpose, parse_window,
};
pub use request_response::{
    AddressInfo, AvailabilityData, AvailabilityPaginationInfo, AvailabilityQuery,
    AvailabilityResponse, AvailabilitySummaryInfo, BlockingEventInfo, CheckAvailabilityData,
    CheckAvailabilityQuery, CheckAvailabilityResponse, EligibilityInfo, EligibilityQuery,
    EligibilityResponse, EmployerInfo, ProfileInfo, SkillInfo,
};
