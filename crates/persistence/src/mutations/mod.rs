// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inserts used to load a store: profiles with their skills and addresses,
//! employers, projects, training batches and the commitments that link them.

pub mod records;

pub use records::{
    insert_assignment_mysql, insert_assignment_sqlite, insert_employer_mysql,
    insert_employer_sqlite, insert_enrollment_mysql, insert_enrollment_sqlite,
    insert_profile_mysql, insert_profile_sqlite, insert_project_mysql, insert_project_sqlite,
    insert_skill_category_mysql, insert_skill_category_sqlite, insert_training_batch_mysql,
    insert_training_batch_sqlite,
};
