// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};
use staffing::InMemoryStore;
use staffing_domain::{ProfileRecord, ProfileStage};

use crate::{ApiError, EligibilityQuery, EligibilityResponse, check_project_eligibility};

use super::helpers::{create_staffed_store, create_test_profile, text};

#[test]
fn test_allocatable_worker_is_eligible() {
    let mut store: InMemoryStore = create_staffed_store();

    let response: EligibilityResponse =
        check_project_eligibility(&mut store, 2, &EligibilityQuery::default()).unwrap();

    assert!(response.data.eligible);
    let body: Value = serde_json::to_value(&response).unwrap();
    assert_eq!(body, json!({ "success": true, "data": { "eligible": true } }));
}

#[test]
fn test_ineligible_stage_carries_reason() {
    let mut store: InMemoryStore = create_staffed_store();

    let response: EligibilityResponse =
        check_project_eligibility(&mut store, 4, &EligibilityQuery::default()).unwrap();

    assert!(!response.data.eligible);
    assert_eq!(
        response.data.reason.as_deref(),
        Some("Worker stage must be TRAINED or BENCHED, got: SCREENING")
    );
}

#[test]
fn test_missing_profile_is_a_decision() {
    let mut store: InMemoryStore = create_staffed_store();

    let response: EligibilityResponse =
        check_project_eligibility(&mut store, 404, &EligibilityQuery::default()).unwrap();

    assert!(response.success);
    assert_eq!(response.data.reason.as_deref(), Some("Profile not found"));
}

#[test]
fn test_blue_worker_requirement_can_be_relaxed() {
    let mut store: InMemoryStore = create_staffed_store();
    let mut contractor: ProfileRecord = create_test_profile(6, "Farhan", ProfileStage::Trained);
    contractor.worker_type = Some(String::from("white"));
    store.add_profile(contractor);

    let strict: EligibilityResponse =
        check_project_eligibility(&mut store, 6, &EligibilityQuery::default()).unwrap();
    assert_eq!(
        strict.data.reason.as_deref(),
        Some("Worker type must be 'blue', got: white")
    );

    let relaxed: EligibilityResponse = check_project_eligibility(
        &mut store,
        6,
        &EligibilityQuery {
            require_blue_worker: text("false"),
        },
    )
    .unwrap();
    assert!(relaxed.data.eligible);
}

#[test]
fn test_malformed_flag_is_rejected() {
    let mut store: InMemoryStore = create_staffed_store();

    let err: ApiError = check_project_eligibility(
        &mut store,
        2,
        &EligibilityQuery {
            require_blue_worker: text("yes"),
        },
    )
    .unwrap_err();

    assert!(
        matches!(err, ApiError::InvalidInput { ref field, .. } if field == "requireBlueWorker")
    );
}
