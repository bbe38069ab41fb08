// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability handler tests over the in-memory store.

use serde_json::Value;
use staffing::InMemoryStore;

use crate::{
    ApiError, AvailabilityQuery, AvailabilityResponse, CheckAvailabilityQuery,
    CheckAvailabilityResponse, ProfileInfo, check_availability, get_available_for_project,
    get_available_for_training, get_profiles_with_availability,
};

use super::helpers::{
    TODAY, create_check_query, create_staffed_store, create_window_query, text,
};

fn ids(entries: &[ProfileInfo]) -> Vec<i64> {
    entries.iter().map(|entry| entry.id).collect()
}

// ============================================================================
// Population availability
// ============================================================================

#[test]
fn test_population_is_split_and_counted() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = create_window_query("2026-05-01", "2026-05-31");

    let response: AvailabilityResponse =
        get_profiles_with_availability(&mut store, &query, TODAY).unwrap();

    assert!(response.success);
    assert_eq!(ids(&response.data.available), vec![2, 4]);
    assert_eq!(ids(&response.data.unavailable), vec![1, 3, 5]);
    assert_eq!(response.data.summary.total_available, 2);
    assert_eq!(response.data.summary.total_unavailable, 3);
    assert_eq!(response.data.summary.unavailable_by_project, 1);
    assert_eq!(response.data.summary.unavailable_by_training, 2);
    assert_eq!(response.pagination.page, 1);
    assert_eq!(response.pagination.limit, 20);
    assert_eq!(response.pagination.total_pages_available, 1);
    assert_eq!(response.pagination.total_pages_unavailable, 1);
}

#[test]
fn test_profile_entry_shape() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = create_window_query("2026-05-01", "2026-05-31");

    let response: AvailabilityResponse =
        get_profiles_with_availability(&mut store, &query, TODAY).unwrap();
    let json: Value = serde_json::to_value(&response).unwrap();

    let bharat: &Value = &json["data"]["available"][0];
    assert_eq!(bharat["id"], 2);
    assert_eq!(bharat["code"], "BSW-0002");
    assert_eq!(bharat["fullName"], "Bharat Patil");
    assert_eq!(bharat["age"], 30);
    assert_eq!(bharat["dateOfBirth"], "1996-01-15");
    assert_eq!(bharat["currentStage"], "TRAINED");
    assert_eq!(bharat["skills"][0]["id"], 3);
    assert_eq!(bharat["skills"][0]["name"], "Mason");
    assert_eq!(bharat["skills"][0]["yearsOfExperience"], 6);
    assert_eq!(bharat["address"]["district"], "Pune");
    assert!(bharat.get("blockingEvents").is_none());

    assert_eq!(json["pagination"]["totalAvailable"], 2);
    assert_eq!(json["pagination"]["totalPagesUnavailable"], 1);
    assert_eq!(json["data"]["summary"]["unavailableByTraining"], 2);
}

#[test]
fn test_blocking_events_are_reported_on_unavailable_entries() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = create_window_query("2026-05-01", "2026-05-31");

    let response: AvailabilityResponse =
        get_profiles_with_availability(&mut store, &query, TODAY).unwrap();
    let json: Value = serde_json::to_value(&response).unwrap();

    let project_event: &Value = &json["data"]["unavailable"][0]["blockingEvents"][0];
    assert_eq!(project_event["type"], "PROJECT");
    assert_eq!(project_event["id"], 1);
    assert_eq!(project_event["code"], "PRJ-001");
    assert_eq!(project_event["startDate"], "2026-05-01");
    assert_eq!(project_event["endDate"], "2026-05-31");
    assert_eq!(project_event["status"], "planning");
    assert_eq!(project_event["overlapDays"], 31);
    assert_eq!(project_event["employer"]["name"], "Acme Builders");
    assert!(project_event.get("programName").is_none());

    let training_event: &Value = &json["data"]["unavailable"][1]["blockingEvents"][0];
    assert_eq!(training_event["type"], "TRAINING");
    assert_eq!(training_event["status"], "UPCOMING");
    assert_eq!(training_event["overlapDays"], 3);
    assert_eq!(training_event["programName"], "Site safety");
    assert!(training_event.get("employer").is_none());
}

#[test]
fn test_status_filter_and_exclusion() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = AvailabilityQuery {
        availability_status: text("available"),
        exclude_project_id: text("1"),
        ..create_window_query("2026-05-01", "2026-05-31")
    };

    let response: AvailabilityResponse =
        get_profiles_with_availability(&mut store, &query, TODAY).unwrap();

    assert_eq!(ids(&response.data.available), vec![1, 2, 4]);
    assert!(response.data.unavailable.is_empty());
    assert_eq!(response.data.summary.total_unavailable, 0);
}

#[test]
fn test_purpose_narrows_population() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = AvailabilityQuery {
        purpose: text("training"),
        ..create_window_query("2026-06-01", "2026-06-30")
    };

    let response: AvailabilityResponse =
        get_profiles_with_availability(&mut store, &query, TODAY).unwrap();

    assert_eq!(ids(&response.data.available), vec![4, 5]);
    assert!(response.data.unavailable.is_empty());
}

#[test]
fn test_window_is_required() {
    let mut store: InMemoryStore = create_staffed_store();

    let err: ApiError =
        get_profiles_with_availability(&mut store, &AvailabilityQuery::default(), TODAY)
            .unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
    assert_eq!(err.message(), "startDate and endDate are required");
}

#[test]
fn test_inverted_age_range_is_invalid_input() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = AvailabilityQuery {
        min_age: text("40"),
        max_age: text("20"),
        ..create_window_query("2026-05-01", "2026-05-31")
    };

    let err: ApiError = get_profiles_with_availability(&mut store, &query, TODAY).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "minAge"));
}

// ============================================================================
// Project and training containers
// ============================================================================

#[test]
fn test_project_ignores_its_own_assignees() {
    let mut store: InMemoryStore = create_staffed_store();

    let response: AvailabilityResponse =
        get_available_for_project(&mut store, 1, &AvailabilityQuery::default(), TODAY).unwrap();

    // Screening and Approved profiles are outside the project population
    assert_eq!(ids(&response.data.available), vec![1, 2]);
    assert_eq!(ids(&response.data.unavailable), vec![3]);
}

#[test]
fn test_training_ignores_its_own_enrollees() {
    let mut store: InMemoryStore = create_staffed_store();

    let response: AvailabilityResponse =
        get_available_for_training(&mut store, 5, &AvailabilityQuery::default(), TODAY).unwrap();

    assert_eq!(ids(&response.data.available), vec![4, 5]);
    assert!(response.data.unavailable.is_empty());
}

#[test]
fn test_unknown_and_undated_containers() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = AvailabilityQuery::default();

    let err: ApiError = get_available_for_project(&mut store, 99, &query, TODAY).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
    assert_eq!(err.to_string(), "Project not found: No project with id 99");

    let err: ApiError = get_available_for_project(&mut store, 3, &query, TODAY).unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
    assert_eq!(err.message(), "Project must have start and end dates");

    let err: ApiError = get_available_for_training(&mut store, 98, &query, TODAY).unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Training batch"
    ));
}

#[test]
fn test_container_options_are_validated() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: AvailabilityQuery = AvailabilityQuery {
        sort_by: text("salary"),
        ..AvailabilityQuery::default()
    };

    let err: ApiError = get_available_for_project(&mut store, 1, &query, TODAY).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

// ============================================================================
// Single-profile check
// ============================================================================

#[test]
fn test_check_reports_overlap() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: CheckAvailabilityQuery = create_check_query("2026-05-25", "2026-06-05");

    let response: CheckAvailabilityResponse = check_availability(&mut store, 1, &query).unwrap();

    assert!(response.success);
    assert!(!response.data.is_available);
    assert_eq!(response.data.blocking_events.len(), 1);
    assert_eq!(response.data.blocking_events[0].overlap_days, 7);

    let json: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(json["data"]["isAvailable"], false);
    assert_eq!(json["data"]["blockingEvents"][0]["type"], "PROJECT");
}

#[test]
fn test_check_honours_exclusion() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: CheckAvailabilityQuery = CheckAvailabilityQuery {
        exclude_project_id: text("1"),
        ..create_check_query("2026-05-25", "2026-06-05")
    };

    let response: CheckAvailabilityResponse = check_availability(&mut store, 1, &query).unwrap();

    assert!(response.data.is_available);
    assert!(response.data.blocking_events.is_empty());
}

#[test]
fn test_check_unknown_profile_is_available() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: CheckAvailabilityQuery = create_check_query("2026-05-01", "2026-05-31");

    let response: CheckAvailabilityResponse = check_availability(&mut store, 404, &query).unwrap();

    assert!(response.data.is_available);
}

#[test]
fn test_check_rejects_bad_dates() {
    let mut store: InMemoryStore = create_staffed_store();
    let query: CheckAvailabilityQuery = create_check_query("2026-05-01", "31/05/2026");

    let err: ApiError = check_availability(&mut store, 1, &query).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "endDate"));
    assert_eq!(
        err.message(),
        "Invalid date format. Use ISO 8601 format (YYYY-MM-DD)"
    );
}
