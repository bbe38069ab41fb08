// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `cargo xtask` for the staffing workspace.
//!
//! `ci` is the gate every change passes: clippy, rustdoc, rustfmt, a full
//! build and the test suite, all against `SQLite`. Two further commands
//! provision a throwaway `MariaDB` container through Docker:
//!
//! - `test-mariadb` runs the ignored backend tests of `staffing-persistence`
//! - `verify-migrations` checks that `migrations/` and `migrations_mysql/`
//!   describe the same tables, columns and keys

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use diesel::sql_types::{Bool, Text};
use diesel::{MysqlConnection, QueryableByName, RunQueryDsl, SqliteConnection};
use duct::cmd;
use std::collections::{BTreeMap, BTreeSet};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    if let Err(err) = cli.task.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Cli {
    #[command(subcommand)]
    task: Task,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Task {
    /// Everything CI runs: lints, build, tests
    Ci,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Rustdoc with warnings denied, one package at a time
    #[command(visible_alias = "d")]
    LintDocs,

    /// Rustfmt in check mode
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Unit and doc tests against `SQLite`
    #[command(visible_alias = "t")]
    Test,

    /// Backend tests against a `MariaDB` container
    #[command(visible_alias = "tm")]
    TestMariadb,

    /// Compare the `SQLite` and `MySQL` migration schemas
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Task {
    /// Order in which `ci` runs its steps. Cheap lints go first.
    const CI_STEPS: [Self; 5] = [
        Self::LintFormatting,
        Self::LintClippy,
        Self::LintDocs,
        Self::Build,
        Self::Test,
    ];

    fn run(self) -> Result<()> {
        match self {
            Self::Ci => Self::CI_STEPS.iter().try_for_each(|step| step.run()),
            Self::Build => cargo(&["build", "--workspace", "--all-targets"]),
            Self::Check => cargo(&["check", "--workspace", "--all-targets"]),
            Self::LintClippy => cargo(&[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ]),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => nightly_cargo(&["fmt", "--all", "--check"]),
            Self::Test => {
                cargo(&["test", "--workspace", "--all-targets"])?;
                cargo(&["test", "--workspace", "--doc"])
            }
            Self::TestMariadb => test_mariadb(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Builds each default member's docs with the docs.rs configuration.
fn lint_docs() -> Result<()> {
    let metadata = MetadataCommand::new()
        .exec()
        .wrap_err("cargo metadata failed")?;

    for package in metadata.workspace_default_packages() {
        traced(
            &cmd!("cargo", "doc", "--no-deps", "--package", package.name.as_str())
                .env_remove("CARGO")
                .env("RUSTUP_TOOLCHAIN", "nightly")
                .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings"),
        )
        .wrap_err_with(|| format!("rustdoc failed for {}", package.name.as_str()))?;
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    traced(&cmd("cargo", args))
}

/// Runs cargo on nightly. `CARGO` points at the stable binary inside a
/// cargo subcommand, so it is cleared for rustup to pick the toolchain.
fn nightly_cargo(args: &[&str]) -> Result<()> {
    traced(
        &cmd("cargo", args)
            .env_remove("CARGO")
            .env("RUSTUP_TOOLCHAIN", "nightly"),
    )
}

/// Logs `expression`, runs it, and repeats it in the error when it fails.
fn traced(expression: &duct::Expression) -> Result<()> {
    tracing::info!("running {expression:?}");
    expression
        .run()
        .map(drop)
        .wrap_err_with(|| format!("command failed: {expression:?}"))
}

// ============================================================================
// MariaDB container orchestration
// ============================================================================

/// Settings for a disposable `MariaDB` container.
struct MariaDbSettings {
    container: &'static str,
    database: &'static str,
    user: &'static str,
    password: &'static str,
    /// Host port, kept off 3306 to avoid clashing with a local server.
    port: &'static str,
}

impl MariaDbSettings {
    fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.port, self.database
        )
    }

    /// Starts the container and waits up to 30 seconds for it to accept
    /// connections. The returned guard removes the container when dropped.
    fn start(&self) -> Result<MariaDbContainer<'_>> {
        tracing::info!("Checking Docker availability");
        traced(&cmd!("docker", "--version"))
            .wrap_err("Docker is not available. Please install Docker.")?;

        remove_container(self.container);

        tracing::info!("Starting MariaDB container: {}", self.container);
        traced(&cmd!(
            "docker",
            "run",
            "--name",
            self.container,
            "-e",
            format!("MARIADB_DATABASE={}", self.database),
            "-e",
            format!("MARIADB_USER={}", self.user),
            "-e",
            format!("MARIADB_PASSWORD={}", self.password),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{}:3306", self.port),
            "-d",
            "mariadb:11"
        ))
        .wrap_err("Failed to start MariaDB container")?;

        let container = MariaDbContainer { settings: self };
        container.wait_until_ready()?;
        Ok(container)
    }
}

/// A running container. Stopped and removed on drop, including on failure.
struct MariaDbContainer<'a> {
    settings: &'a MariaDbSettings,
}

impl MariaDbContainer<'_> {
    fn wait_until_ready(&self) -> Result<()> {
        use std::thread::sleep;
        use std::time::Duration;

        const MAX_ATTEMPTS: u32 = 30;

        tracing::info!("Waiting for MariaDB to be ready...");
        for attempt in 1..=MAX_ATTEMPTS {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {}/{}", attempt, MAX_ATTEMPTS);

            let probe = cmd!(
                "docker",
                "exec",
                self.settings.container,
                "mariadb",
                "-u",
                self.settings.user,
                format!("-p{}", self.settings.password),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();

            if probe.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(());
            }
        }

        Err(eyre!("MariaDB did not become ready within timeout"))
    }
}

impl Drop for MariaDbContainer<'_> {
    fn drop(&mut self) {
        tracing::info!("Stopping MariaDB container");
        remove_container(self.settings.container);
    }
}

fn remove_container(name: &str) {
    let _ = cmd!("docker", "stop", name)
        .stdout_null()
        .stderr_null()
        .run();
    let _ = cmd!("docker", "rm", name).stdout_null().stderr_null().run();
}

/// Starts a `MariaDB` 11 container on port 3307, then runs the ignored
/// `backend_validation_tests` in `staffing-persistence` with
/// `DATABASE_URL` and `STAFFING_TEST_BACKEND=mariadb` set. The container is
/// removed whatever the outcome.
///
/// Needs a running Docker daemon, a free port 3307 and the `MySQL` client
/// library that `diesel`'s `mysql` feature links against.
fn test_mariadb() -> Result<()> {
    let settings = MariaDbSettings {
        container: "staffing-test-mariadb",
        database: "staffing_test",
        user: "staffing",
        password: "test_password",
        port: "3307",
    };

    tracing::info!("Starting MariaDB backend validation");
    let _container = settings.start()?;

    tracing::info!("Running MariaDB backend validation tests");
    traced(
        &cmd!(
            "cargo",
            "test",
            "--package",
            "staffing-persistence",
            "backend_validation_tests",
            "--",
            "--ignored",
            "--test-threads=1"
        )
        .env("DATABASE_URL", settings.database_url())
        .env("STAFFING_TEST_BACKEND", "mariadb"),
    )
    .wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation completed successfully");
    Ok(())
}

// ============================================================================
// Schema parity
// ============================================================================

/// Applies `crates/persistence/migrations` to an in-memory `SQLite`
/// database and `crates/persistence/migrations_mysql` to a `MariaDB`
/// container on port 3308, then compares tables, columns (normalized type
/// and nullability), primary keys and foreign keys.
///
/// Secondary indexes are not compared: `MariaDB` creates one for every
/// foreign key column on its own.
fn verify_migrations() -> Result<()> {
    use diesel::Connection;
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    const SQLITE_MIGRATIONS: EmbeddedMigrations =
        embed_migrations!("../crates/persistence/migrations");
    const MYSQL_MIGRATIONS: EmbeddedMigrations =
        embed_migrations!("../crates/persistence/migrations_mysql");

    let settings = MariaDbSettings {
        container: "staffing-verify-migrations",
        database: "staffing_verify",
        user: "staffing",
        password: "verify_password",
        port: "3308",
    };

    tracing::info!("Starting schema parity verification");
    let _container = settings.start()?;

    tracing::info!("Applying SQLite migrations");
    let mut sqlite_conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut sqlite_conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;
    sqlite_conn
        .run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply SQLite migrations: {e}"))?;

    tracing::info!("Applying MySQL migrations");
    let mut mysql_conn = MysqlConnection::establish(&settings.database_url())
        .wrap_err("Failed to connect to MariaDB")?;
    mysql_conn
        .run_pending_migrations(MYSQL_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply MySQL migrations: {e}"))?;

    tracing::info!("Comparing schemas");
    let sqlite_schema = introspect_sqlite_schema(&mut sqlite_conn)?;
    let mysql_schema = introspect_mysql_schema(&mut mysql_conn)?;
    let differences = compare_schemas(&sqlite_schema, &mysql_schema);

    if differences.is_empty() {
        tracing::info!(
            tables = sqlite_schema.len(),
            "Schema parity verification passed"
        );
        return Ok(());
    }

    for difference in &differences {
        tracing::error!("{difference}");
    }
    Err(eyre!(
        "Schema parity verification failed with {} difference(s)",
        differences.len()
    ))
}

/// Tables by name.
type Schema = BTreeMap<String, Table>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Table {
    /// Column name to (normalized type, nullable).
    columns: BTreeMap<String, (&'static str, bool)>,
    primary_keys: BTreeSet<String>,
    /// (column, referenced table, referenced column).
    foreign_keys: BTreeSet<(String, String, String)>,
}

/// Maps a declared column type onto the shared vocabulary.
fn normalize_type(declared: &str) -> &'static str {
    let base = declared
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase();

    match base.as_str() {
        "INTEGER" | "INT" | "BIGINT" | "SMALLINT" | "TINYINT" | "MEDIUMINT" => "integer",
        "REAL" | "DOUBLE" | "FLOAT" | "DECIMAL" | "NUMERIC" => "real",
        "BLOB" | "BINARY" | "VARBINARY" | "LONGBLOB" => "blob",
        _ => "text",
    }
}

/// One column as reported by either catalog.
#[derive(QueryableByName)]
struct ColumnRow {
    #[diesel(sql_type = Text)]
    table_name: String,
    #[diesel(sql_type = Text)]
    column_name: String,
    #[diesel(sql_type = Text)]
    data_type: String,
    #[diesel(sql_type = Bool)]
    nullable: bool,
    #[diesel(sql_type = Bool)]
    primary: bool,
}

/// One foreign-key column as reported by either catalog.
#[derive(QueryableByName)]
struct ReferenceRow {
    #[diesel(sql_type = Text)]
    table_name: String,
    #[diesel(sql_type = Text)]
    column_name: String,
    #[diesel(sql_type = Text)]
    target_table: String,
    #[diesel(sql_type = Text)]
    target_column: String,
}

// SQLite reports an INTEGER PRIMARY KEY as nullable, hence `pk = 0`.
const SQLITE_COLUMNS: &str = "SELECT m.name AS table_name, p.name AS column_name, \
     p.type AS data_type, (p.\"notnull\" = 0 AND p.pk = 0) AS nullable, (p.pk > 0) AS \"primary\" \
     FROM sqlite_master m JOIN pragma_table_info(m.name) p \
     WHERE m.type = 'table' AND m.name NOT LIKE 'sqlite_%' \
     AND m.name != '__diesel_schema_migrations'";

const SQLITE_REFERENCES: &str = "SELECT m.name AS table_name, f.\"from\" AS column_name, \
     f.\"table\" AS target_table, f.\"to\" AS target_column \
     FROM sqlite_master m JOIN pragma_foreign_key_list(m.name) f \
     WHERE m.type = 'table'";

const MYSQL_COLUMNS: &str = "SELECT table_name AS table_name, column_name AS column_name, \
     data_type AS data_type, \
     (is_nullable = 'YES') AS nullable, (column_key = 'PRI') AS `primary` \
     FROM information_schema.columns \
     WHERE table_schema = DATABASE() AND table_name != '__diesel_schema_migrations'";

const MYSQL_REFERENCES: &str = "SELECT table_name AS table_name, column_name AS column_name, \
     referenced_table_name AS target_table, referenced_column_name AS target_column \
     FROM information_schema.key_column_usage \
     WHERE table_schema = DATABASE() AND referenced_table_name IS NOT NULL";

fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    let columns: Vec<ColumnRow> = diesel::sql_query(SQLITE_COLUMNS)
        .load(conn)
        .wrap_err("Failed to read SQLite columns")?;
    let references: Vec<ReferenceRow> = diesel::sql_query(SQLITE_REFERENCES)
        .load(conn)
        .wrap_err("Failed to read SQLite foreign keys")?;
    Ok(build_schema(columns, references))
}

fn introspect_mysql_schema(conn: &mut MysqlConnection) -> Result<Schema> {
    let columns: Vec<ColumnRow> = diesel::sql_query(MYSQL_COLUMNS)
        .load(conn)
        .wrap_err("Failed to read MySQL columns")?;
    let references: Vec<ReferenceRow> = diesel::sql_query(MYSQL_REFERENCES)
        .load(conn)
        .wrap_err("Failed to read MySQL foreign keys")?;
    Ok(build_schema(columns, references))
}

fn build_schema(columns: Vec<ColumnRow>, references: Vec<ReferenceRow>) -> Schema {
    let mut schema = Schema::new();
    for column in columns {
        let table = schema.entry(column.table_name).or_default();
        if column.primary {
            table.primary_keys.insert(column.column_name.clone());
        }
        table.columns.insert(
            column.column_name,
            (normalize_type(&column.data_type), column.nullable),
        );
    }
    for reference in references {
        schema
            .entry(reference.table_name)
            .or_default()
            .foreign_keys
            .insert((
                reference.column_name,
                reference.target_table,
                reference.target_column,
            ));
    }
    schema
}

/// Describes every way the two schemas differ. Empty means parity.
fn compare_schemas(sqlite: &Schema, mysql: &Schema) -> Vec<String> {
    let mut differences = Vec::new();

    for name in sqlite.keys().filter(|name| !mysql.contains_key(*name)) {
        differences.push(format!("Table '{name}' exists only in SQLite"));
    }
    for name in mysql.keys().filter(|name| !sqlite.contains_key(*name)) {
        differences.push(format!("Table '{name}' exists only in MySQL"));
    }

    for (name, lite) in sqlite {
        let Some(my) = mysql.get(name) else {
            continue;
        };

        let column_names: BTreeSet<&String> =
            lite.columns.keys().chain(my.columns.keys()).collect();
        for column in column_names {
            let (left, right) = (lite.columns.get(column), my.columns.get(column));
            if left != right {
                differences.push(format!(
                    "Column '{name}.{column}' differs: SQLite {left:?}, MySQL {right:?}"
                ));
            }
        }

        if lite.primary_keys != my.primary_keys {
            differences.push(format!(
                "Primary key of '{name}' differs: SQLite {:?}, MySQL {:?}",
                lite.primary_keys, my.primary_keys
            ));
        }
        if lite.foreign_keys != my.foreign_keys {
            differences.push(format!(
                "Foreign keys of '{name}' differ: SQLite {:?}, MySQL {:?}",
                lite.foreign_keys, my.foreign_keys
            ));
        }
    }

    differences
}
