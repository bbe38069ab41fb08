// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite`, the default store: a shared in-memory database per test or
//! a single file for the server.
//!
//! `SQLite` has no DSL for `PRAGMA`, so the statements here are raw SQL.

use diesel::sql_types::Integer;
use diesel::{QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use super::Dialect;
use crate::error::PersistenceError;

/// The staffing schema in `SQLite` syntax.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

impl Dialect for SqliteConnection {
    const NAME: &'static str = "SQLite";

    // Foreign keys are off by default and are set per connection
    fn configure(&mut self) -> Result<(), PersistenceError> {
        diesel::sql_query("PRAGMA foreign_keys = ON").execute(self)?;
        Ok(())
    }

    fn migrate(&mut self) -> Result<usize, PersistenceError> {
        self.run_pending_migrations(MIGRATIONS)
            .map(|applied| applied.len())
            .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))
    }

    fn enforces_foreign_keys(&mut self) -> Result<bool, PersistenceError> {
        let pragma: ForeignKeysPragma =
            diesel::sql_query("PRAGMA foreign_keys").get_result(self)?;
        Ok(pragma.foreign_keys != 0)
    }
}

/// Switches a file database to write-ahead logging, so availability reads
/// are not blocked while records are being registered.
///
/// # Errors
///
/// Returns an error if the journal mode cannot be changed.
pub fn use_write_ahead_log(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL").execute(conn)?;
    Ok(())
}
