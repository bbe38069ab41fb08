// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the availability and eligibility queries.
//!
//! Handlers validate raw query parameters, call into the core, and shape
//! the result into response DTOs. They are generic over the store so the
//! same code serves a database and the in-memory fixture.

use staffing::{
    AvailabilityCheck, AvailabilityReport, CommitmentRepository, ProfileAvailability,
    ProfileRepository,
};
use staffing_domain::{
    AvailabilityFilter, BlockingEvent, DateRange, EligibilityDecision, FilterOptions, Purpose,
    format_date,
};
use time::Date;
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::params::{
    parse_filter_options, parse_flag, parse_optional_id, parse_purpose, parse_window,
};
use crate::request_response::{
    AddressInfo, AvailabilityData, AvailabilityPaginationInfo, AvailabilityQuery,
    AvailabilityResponse, AvailabilitySummaryInfo, BlockingEventInfo, CheckAvailabilityData,
    CheckAvailabilityQuery, CheckAvailabilityResponse, EligibilityInfo, EligibilityQuery,
    EligibilityResponse, EmployerInfo, ProfileInfo, SkillInfo,
};

fn date_text(date: Date) -> Result<String, ApiError> {
    format_date(date).map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })
}

fn blocking_event_info(event: &BlockingEvent) -> Result<BlockingEventInfo, ApiError> {
    Ok(BlockingEventInfo {
        event_type: event.kind.as_str().to_string(),
        id: event.id,
        code: event.code.clone(),
        name: event.name.clone(),
        start_date: date_text(event.start_date)?,
        end_date: date_text(event.end_date)?,
        status: event.status.clone(),
        overlap_days: event.overlap_days,
        location: event.location.clone(),
        employer: event.employer.as_ref().map(|employer| EmployerInfo {
            id: employer.id,
            name: employer.name.clone(),
        }),
        program_name: event.program_name.clone(),
    })
}

fn blocking_events_info(events: &[BlockingEvent]) -> Result<Vec<BlockingEventInfo>, ApiError> {
    events.iter().map(blocking_event_info).collect()
}

/// Shapes one report entry. Blocking events are only attached to
/// unavailable entries.
fn profile_info(entry: &ProfileAvailability, with_events: bool) -> Result<ProfileInfo, ApiError> {
    let profile = &entry.profile;

    Ok(ProfileInfo {
        id: profile.id,
        code: profile.code().map(String::from),
        full_name: profile.full_name(),
        first_name: profile.first_name.clone(),
        middle_name: profile.middle_name.clone(),
        last_name: profile.last_name.clone(),
        gender: profile.gender.clone(),
        age: entry.age,
        date_of_birth: profile.date_of_birth.map(date_text).transpose()?,
        profile_photo_url: profile.profile_photo_url.clone(),
        phone: profile.phone.clone(),
        current_stage: profile.current_stage.map(|stage| stage.as_str().to_string()),
        skills: profile
            .skills
            .iter()
            .map(|skill| SkillInfo {
                id: skill.reported_id(),
                name: skill.category_name.clone(),
                category_type: skill.category_type.clone(),
                years_of_experience: skill.years_of_experience,
                is_primary: skill.is_primary,
            })
            .collect(),
        address: profile.primary_address().map(|address| AddressInfo {
            district: address.district.clone(),
            state: address.state.clone(),
        }),
        blocking_events: if with_events {
            Some(blocking_events_info(&entry.blocking_events)?)
        } else {
            None
        },
    })
}

fn availability_response(report: &AvailabilityReport) -> Result<AvailabilityResponse, ApiError> {
    let available: Vec<ProfileInfo> = report
        .available
        .iter()
        .map(|entry| profile_info(entry, false))
        .collect::<Result<_, _>>()?;
    let unavailable: Vec<ProfileInfo> = report
        .unavailable
        .iter()
        .map(|entry| profile_info(entry, true))
        .collect::<Result<_, _>>()?;

    let pages = &report.pagination;

    Ok(AvailabilityResponse {
        success: true,
        data: AvailabilityData {
            available,
            unavailable,
            summary: AvailabilitySummaryInfo {
                total_available: report.summary.total_available,
                total_unavailable: report.summary.total_unavailable,
                unavailable_by_project: report.summary.unavailable_by_project,
                unavailable_by_training: report.summary.unavailable_by_training,
            },
        },
        pagination: AvailabilityPaginationInfo {
            page: pages.available.page,
            limit: pages.available.limit,
            total_available: pages.available.total,
            total_unavailable: pages.unavailable.total,
            total_pages_available: pages.available.total_pages,
            total_pages_unavailable: pages.unavailable.total_pages,
        },
    })
}

/// Lists the filtered population split into available and unavailable
/// profiles for an explicit date window.
///
/// # Arguments
///
/// * `store` - The profile and commitment source
/// * `query` - Raw query parameters; `startDate` and `endDate` are required
/// * `today` - Reference date for ages
///
/// # Errors
///
/// Returns `InvalidInput` for missing or malformed parameters, or
/// `Internal` if the store cannot be read.
pub fn get_profiles_with_availability<S>(
    store: &mut S,
    query: &AvailabilityQuery,
    today: Date,
) -> Result<AvailabilityResponse, ApiError>
where
    S: ProfileRepository + CommitmentRepository,
{
    let window: DateRange = parse_window(query.start_date.as_ref(), query.end_date.as_ref())?;
    let purpose: Purpose = parse_purpose(query)?;
    let options: FilterOptions = parse_filter_options(query)?;
    let exclude_project_id: Option<i64> =
        parse_optional_id("excludeProjectId", query.exclude_project_id.as_ref())?;
    let exclude_batch_id: Option<i64> =
        parse_optional_id("excludeBatchId", query.exclude_batch_id.as_ref())?;

    let filter: AvailabilityFilter = AvailabilityFilter::new(window, purpose, options, today)
        .map_err(translate_domain_error)?
        .excluding_project(exclude_project_id)
        .excluding_batch(exclude_batch_id);

    debug!(window = %window, purpose = %purpose, "Computing population availability");

    let report: AvailabilityReport =
        staffing::get_profiles_with_availability(store, &filter).map_err(translate_core_error)?;
    availability_response(&report)
}

/// Lists the project-allocatable population over a project's own dates.
///
/// The project's current assignees are not blocked by the project itself.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown project, `DomainRuleViolation`
/// if the project lacks usable dates, `InvalidInput` for malformed
/// parameters, or `Internal` if the store cannot be read.
pub fn get_available_for_project<S>(
    store: &mut S,
    project_id: i64,
    query: &AvailabilityQuery,
    today: Date,
) -> Result<AvailabilityResponse, ApiError>
where
    S: ProfileRepository + CommitmentRepository,
{
    let options: FilterOptions = parse_filter_options(query)?;
    let report: AvailabilityReport =
        staffing::get_available_for_project(store, project_id, options, today)
            .map_err(translate_core_error)?;
    availability_response(&report)
}

/// Lists the training-eligible population over a batch's own dates.
///
/// The batch's current enrollees are not blocked by the batch itself.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown batch, `DomainRuleViolation`
/// if the batch lacks usable dates, `InvalidInput` for malformed
/// parameters, or `Internal` if the store cannot be read.
pub fn get_available_for_training<S>(
    store: &mut S,
    batch_id: i64,
    query: &AvailabilityQuery,
    today: Date,
) -> Result<AvailabilityResponse, ApiError>
where
    S: ProfileRepository + CommitmentRepository,
{
    let options: FilterOptions = parse_filter_options(query)?;
    let report: AvailabilityReport =
        staffing::get_available_for_training(store, batch_id, options, today)
            .map_err(translate_core_error)?;
    availability_response(&report)
}

/// Checks whether one profile is free for a whole window.
///
/// The profile is not required to exist: an unknown profile has no
/// commitments and is reported available.
///
/// # Errors
///
/// Returns `InvalidInput` for missing or malformed parameters, or
/// `Internal` if the store cannot be read.
pub fn check_availability<S>(
    store: &mut S,
    profile_id: i64,
    query: &CheckAvailabilityQuery,
) -> Result<CheckAvailabilityResponse, ApiError>
where
    S: CommitmentRepository,
{
    let window: DateRange = parse_window(query.start_date.as_ref(), query.end_date.as_ref())?;
    let exclude_project_id: Option<i64> =
        parse_optional_id("excludeProjectId", query.exclude_project_id.as_ref())?;
    let exclude_batch_id: Option<i64> =
        parse_optional_id("excludeBatchId", query.exclude_batch_id.as_ref())?;

    let check: AvailabilityCheck = staffing::check_availability(
        store,
        profile_id,
        &window,
        exclude_project_id,
        exclude_batch_id,
    )
    .map_err(translate_core_error)?;

    Ok(CheckAvailabilityResponse {
        success: true,
        data: CheckAvailabilityData {
            is_available: check.is_available,
            blocking_events: blocking_events_info(&check.blocking_events)?,
        },
    })
}

/// Decides whether a profile may be allocated to a project.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed `requireBlueWorker`, or
/// `Internal` if the store cannot be read.
pub fn check_project_eligibility<S>(
    store: &mut S,
    profile_id: i64,
    query: &EligibilityQuery,
) -> Result<EligibilityResponse, ApiError>
where
    S: ProfileRepository,
{
    let require_blue_worker: bool =
        parse_flag("requireBlueWorker", query.require_blue_worker.as_ref(), true)?;

    let decision: EligibilityDecision =
        staffing::check_project_eligibility(store, profile_id, require_blue_worker)
            .map_err(translate_core_error)?;

    Ok(EligibilityResponse {
        success: true,
        data: EligibilityInfo {
            eligible: decision.eligible,
            reason: decision.reason,
        },
    })
}
