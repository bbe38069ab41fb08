// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffing_domain::DomainError;

/// Errors that can occur while computing availability.
///
/// `E` is the repository's own error type. It is carried unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CoreError<E> {
    /// The referenced project does not exist or is deleted.
    #[error("Project not found: {0}")]
    ProjectNotFound(i64),
    /// The referenced training batch does not exist.
    #[error("Training batch not found: {0}")]
    TrainingBatchNotFound(i64),
    /// The project or batch exists but cannot bound a date window.
    #[error("{entity} must have start and end dates (id {id})")]
    MissingDates {
        /// `Project` or `Training batch`.
        entity: &'static str,
        /// Identifier of the entity.
        id: i64,
    },
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),
    /// The underlying data source failed.
    #[error("Repository error: {0}")]
    Repository(#[source] E),
}
