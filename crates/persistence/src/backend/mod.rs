// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening a store connection.
//!
//! The availability reads in `queries/` are written once in Diesel DSL and
//! stamped out per backend by `backend_fn!`. What cannot be shared is how a
//! connection is brought into service, and that lives here behind
//! [`Dialect`]: session setup, the dialect's embedded schema, and the
//! foreign-key check. Assignments and enrollments are only meaningful if
//! they point at real profiles and containers, so a connection that does
//! not enforce foreign keys is refused.

pub mod mysql;
pub mod sqlite;

use diesel::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// The parts of opening a connection that differ between databases.
pub trait Dialect: Connection + Sized {
    /// Name used in logs and errors.
    const NAME: &'static str;

    /// Session settings applied before the schema is migrated.
    ///
    /// # Errors
    ///
    /// Returns an error if a setting is rejected.
    fn configure(&mut self) -> Result<(), PersistenceError> {
        Ok(())
    }

    /// Applies this dialect's pending migrations and returns how many ran.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails.
    fn migrate(&mut self) -> Result<usize, PersistenceError>;

    /// Reads whether the session enforces foreign keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the setting cannot be read.
    fn enforces_foreign_keys(&mut self) -> Result<bool, PersistenceError>;
}

/// Connects to `url`, configures the session and brings the schema up to
/// date.
///
/// # Errors
///
/// Returns an error if the connection, a session setting or a migration
/// fails, or if the session does not enforce foreign keys.
pub fn open<D: Dialect>(url: &str) -> Result<D, PersistenceError> {
    let mut conn: D = D::establish(url)?;
    conn.configure()?;
    let applied: usize = conn.migrate()?;
    require_foreign_keys(&mut conn)?;

    info!(backend = D::NAME, applied, "Store connection ready");
    Ok(conn)
}

/// Fails unless `conn` enforces foreign keys.
///
/// # Errors
///
/// Returns `ForeignKeysNotEnforced`, or an error if the setting cannot be
/// read.
pub fn require_foreign_keys<D: Dialect>(conn: &mut D) -> Result<(), PersistenceError> {
    if conn.enforces_foreign_keys()? {
        Ok(())
    } else {
        Err(PersistenceError::ForeignKeysNotEnforced { backend: D::NAME })
    }
}
