// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffing_domain::DomainError;

/// Failures of the Diesel-backed profile and commitment store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// The database could not be opened.
    #[error("Cannot open database: {0}")]
    ConnectionFailed(String),
    /// The embedded schema could not be applied.
    #[error("Schema migration failed: {0}")]
    MigrationFailed(String),
    /// The connection does not enforce foreign keys, so commitments could
    /// reference profiles or containers that do not exist.
    #[error("Foreign keys are not enforced by the {backend} connection")]
    ForeignKeysNotEnforced {
        /// `SQLite` or `MySQL`.
        backend: &'static str,
    },
    /// A statement was rejected or failed while running.
    #[error("Database error: {0}")]
    Database(String),
    /// A database file path that is not valid UTF-8.
    #[error("Database path is not valid UTF-8: {0}")]
    UnsupportedPath(String),
    /// A stored row holds a value the domain cannot represent.
    #[error("Invalid value in {table} row {id}: {message}")]
    InvalidStoredValue {
        table: &'static str,
        id: i64,
        message: String,
    },
    /// A date could not be written in its stored `YYYY-MM-DD` form.
    #[error("Cannot store date: {0}")]
    DateEncoding(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::ConnectionFailed(err.to_string())
    }
}

impl PersistenceError {
    /// Wraps a domain parse failure for a value read from `table`.
    pub(crate) fn stored(table: &'static str, id: i64, err: &DomainError) -> Self {
        Self::InvalidStoredValue {
            table,
            id,
            message: err.to_string(),
        }
    }
}
