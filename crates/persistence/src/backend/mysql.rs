// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `MySQL`/`MariaDB`, selected with the server's `--mysql-url`.
//!
//! Tests against this backend are `#[ignore]`d and run only through
//! `cargo xtask test-mariadb`, which provides `DATABASE_URL` and
//! `STAFFING_TEST_BACKEND=mariadb`. Building the crate needs the `MySQL`
//! client libraries.
//!
//! `migrations_mysql/` must describe the same tables, columns and keys as
//! `migrations/`; `cargo xtask verify-migrations` checks this. Tables use
//! the `utf8mb4_general_ci` collation, so text comparison here ignores
//! case for every script, while `SQLite` folds ASCII only and orders
//! byte-wise.

use diesel::sql_types::Integer;
use diesel::{MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use super::Dialect;
use crate::error::PersistenceError;

/// The staffing schema in `MySQL` syntax.
pub const MYSQL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

#[derive(QueryableByName)]
struct ForeignKeyChecks {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

impl Dialect for MysqlConnection {
    const NAME: &'static str = "MySQL";

    fn migrate(&mut self) -> Result<usize, PersistenceError> {
        self.run_pending_migrations(MYSQL_MIGRATIONS)
            .map(|applied| applied.len())
            .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))
    }

    // InnoDB enforces foreign keys unless the session turned the checks off
    fn enforces_foreign_keys(&mut self) -> Result<bool, PersistenceError> {
        let checks: ForeignKeyChecks =
            diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks").get_result(self)?;
        Ok(checks.fk_checks == 1)
    }
}
