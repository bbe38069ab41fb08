// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test also exercises initialization implicitly:
//! the schema must exist and foreign keys must be enforced for them to pass.

use staffing::ProfileRepository;
use staffing_domain::{ProfileQuery, ProfileRecord, ProfileStage, ProjectAssignment};

use super::{create_test_persistence, create_test_profile};
use crate::Persistence;
use crate::error::PersistenceError;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = create_test_persistence();
    let mut db2: Persistence = create_test_persistence();

    db1.add_profile(&create_test_profile(1, "Arjun", ProfileStage::Benched))
        .unwrap();

    let in_db1: Vec<ProfileRecord> = db1.list_profiles(&ProfileQuery::default()).unwrap();
    let in_db2: Vec<ProfileRecord> = db2.list_profiles(&ProfileQuery::default()).unwrap();

    assert_eq!(in_db1.len(), 1, "db1 should have 1 profile");
    assert!(in_db2.is_empty(), "db2 should have no profiles (isolated)");
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence: Persistence = create_test_persistence();
    persistence.verify_foreign_key_enforcement().unwrap();

    // Neither the project nor the profile exists
    let result: Result<(), PersistenceError> = persistence.add_assignment(&ProjectAssignment {
        id: 1,
        project_id: 404,
        profile_id: 405,
        removed_at: None,
    });

    assert!(matches!(result, Err(PersistenceError::Database(_))));
}

#[test]
fn test_failed_profile_insert_writes_nothing() {
    let mut persistence: Persistence = create_test_persistence();
    let mut profile: ProfileRecord = create_test_profile(1, "Arjun", ProfileStage::Benched);
    // Category 77 was never registered
    profile.skills.push(super::create_test_skill(1, 77, true));

    assert!(persistence.add_profile(&profile).is_err());
    assert_eq!(persistence.get_profile(1).unwrap(), None);
}

#[test]
fn test_file_database_persists_between_connections() {
    let path = std::env::temp_dir().join(format!(
        "staffing_persistence_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .add_profile(&create_test_profile(3, "Meena", ProfileStage::Trained))
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let profile: Option<ProfileRecord> = reopened.get_profile(3).unwrap();
    assert_eq!(
        profile.and_then(|p| p.first_name).as_deref(),
        Some("Meena")
    );

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
