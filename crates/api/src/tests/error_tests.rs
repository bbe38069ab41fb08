// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error translation tests.

use staffing::CoreError;
use staffing_domain::DomainError;
use time::macros::date;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_repository_failure_is_internal() {
    let err: CoreError<std::io::Error> =
        CoreError::Repository(std::io::Error::other("connection reset"));

    let api_err: ApiError = translate_core_error(err);

    assert_eq!(
        api_err,
        ApiError::Internal {
            message: String::from("connection reset"),
        }
    );
}

#[test]
fn test_inverted_container_dates_violate_a_rule() {
    let err: CoreError<std::io::Error> = CoreError::Domain(DomainError::InvalidDateRange {
        start: date!(2026 - 06 - 30),
        end: date!(2026 - 06 - 01),
    });

    let api_err: ApiError = translate_core_error(err);

    assert!(matches!(
        api_err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "scheduled_dates"
    ));
}

#[test]
fn test_inverted_request_window_is_invalid_input() {
    let api_err: ApiError = translate_domain_error(DomainError::InvalidDateRange {
        start: date!(2026 - 06 - 30),
        end: date!(2026 - 06 - 01),
    });

    assert_eq!(
        api_err.to_string(),
        "Invalid input for field 'startDate': startDate must be before or equal to endDate"
    );
}

#[test]
fn test_not_found_display() {
    let api_err: ApiError =
        translate_core_error(CoreError::<std::io::Error>::TrainingBatchNotFound(7));

    assert_eq!(api_err.message(), "No training batch with id 7");
    assert_eq!(
        api_err.to_string(),
        "Training batch not found: No training batch with id 7"
    );
}
