// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staffing::CoreError;
use staffing_domain::DomainError;
use tracing::error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The human-readable message without the error-kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DomainRuleViolation { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("startDate"),
            message: String::from("startDate must be before or equal to endDate"),
        },
        DomainError::InvalidAgeRange { min_age, max_age } => ApiError::InvalidInput {
            field: String::from("minAge"),
            message: format!("minAge {min_age} must not exceed maxAge {max_age}"),
        },
        DomainError::InvalidPagination { field, value } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Invalid {field}: {value}. Must be at least 1"),
        },
        DomainError::UnknownValue { kind, value } => ApiError::InvalidInput {
            field: kind.to_string(),
            message: format!("Unknown {kind}: '{value}'"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!(
                "Invalid date format '{date_string}'. Use ISO 8601 format (YYYY-MM-DD)"
            ),
        },
    }
}

/// Translates a core error into an API error.
///
/// A project or batch whose own dates are inverted is a rule violation of
/// the stored entity, not bad caller input. Repository failures are logged
/// and reported as internal errors.
#[must_use]
pub fn translate_core_error<E: std::fmt::Display>(err: CoreError<E>) -> ApiError {
    match err {
        CoreError::ProjectNotFound(project_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Project"),
            message: format!("No project with id {project_id}"),
        },
        CoreError::TrainingBatchNotFound(batch_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Training batch"),
            message: format!("No training batch with id {batch_id}"),
        },
        CoreError::MissingDates { entity, .. } => ApiError::DomainRuleViolation {
            rule: String::from("scheduled_dates"),
            message: format!("{entity} must have start and end dates"),
        },
        CoreError::Domain(DomainError::InvalidDateRange { start, end }) => {
            ApiError::DomainRuleViolation {
                rule: String::from("scheduled_dates"),
                message: format!("Scheduled start {start} falls after scheduled end {end}"),
            }
        }
        CoreError::Domain(domain_err) => translate_domain_error(domain_err),
        CoreError::Repository(repo_err) => {
            error!(error = %repo_err, "Repository read failed");
            ApiError::Internal {
                message: repo_err.to_string(),
            }
        }
    }
}
