// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests arrive as raw query strings and are validated in
//! [`crate::params`]. Responses serialize with camelCase keys and carry
//! dates as `YYYY-MM-DD` strings.

use serde::{Deserialize, Serialize};

/// Raw query parameters for the population availability endpoints.
///
/// Every field is kept as text so that parsing errors can be reported per
/// field. List parameters are comma-separated. The project and training
/// endpoints ignore the date range, purpose and exclusions: they come from
/// the project or batch itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// First day of the window (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Last day of the window (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// `project`, `training` or `all`.
    pub purpose: Option<String>,
    /// `available`, `unavailable` or `all`.
    pub availability_status: Option<String>,
    pub skill_category_ids: Option<String>,
    pub gender: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub stages: Option<String>,
    pub districts: Option<String>,
    pub states: Option<String>,
    pub search: Option<String>,
    /// `name`, `code` or `age`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub exclude_project_id: Option<String>,
    pub exclude_batch_id: Option<String>,
}

/// Raw query parameters for the single-profile check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub exclude_project_id: Option<String>,
    pub exclude_batch_id: Option<String>,
}

/// Raw query parameters for the project eligibility check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityQuery {
    /// `true` (default) or `false`.
    pub require_blue_worker: Option<String>,
}

/// Employer of a blocking project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerInfo {
    pub id: i64,
    pub name: Option<String>,
}

/// A commitment that blocks the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockingEventInfo {
    /// `PROJECT` or `TRAINING`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub id: i64,
    pub code: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    /// Project stage or batch status.
    pub status: String,
    /// Days shared with the window, both ends included.
    pub overlap_days: u32,
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<EmployerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

/// A skill as reported on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfo {
    /// The skill category id.
    pub id: i64,
    pub name: Option<String>,
    pub category_type: Option<String>,
    pub years_of_experience: Option<i32>,
    pub is_primary: Option<bool>,
}

/// The profile's permanent address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub district: Option<String>,
    pub state: Option<String>,
}

/// A profile entry in an availability report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub id: i64,
    /// Worker code, or candidate code before one is assigned.
    pub code: Option<String>,
    pub full_name: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub date_of_birth: Option<String>,
    pub profile_photo_url: Option<String>,
    pub phone: Option<String>,
    pub current_stage: Option<String>,
    pub skills: Vec<SkillInfo>,
    pub address: Option<AddressInfo>,
    /// Present on unavailable entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking_events: Option<Vec<BlockingEventInfo>>,
}

/// Partition counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummaryInfo {
    pub total_available: usize,
    pub total_unavailable: usize,
    pub unavailable_by_project: usize,
    pub unavailable_by_training: usize,
}

/// Pagination over both partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total_available: usize,
    pub total_unavailable: usize,
    pub total_pages_available: usize,
    pub total_pages_unavailable: usize,
}

/// The report body of an availability response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityData {
    pub available: Vec<ProfileInfo>,
    pub unavailable: Vec<ProfileInfo>,
    pub summary: AvailabilitySummaryInfo,
}

/// API response for the population availability endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub data: AvailabilityData,
    pub pagination: AvailabilityPaginationInfo,
}

/// The body of a single-profile check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityData {
    pub is_available: bool,
    pub blocking_events: Vec<BlockingEventInfo>,
}

/// API response for the single-profile check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAvailabilityResponse {
    pub success: bool,
    pub data: CheckAvailabilityData,
}

/// The body of a project eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityInfo {
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// API response for the project eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResponse {
    pub success: bool,
    pub data: EligibilityInfo,
}
