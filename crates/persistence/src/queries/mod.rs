// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reads behind `ProfileRepository` and `CommitmentRepository`.
//!
//! `profiles` builds the filtered, ordered population and loads skills and
//! addresses for it; `commitments` returns active assignments and
//! enrollments together with container dates. Each read has a `_sqlite`
//! and a `_mysql` copy, picked by `Persistence` from its connection.

pub mod commitments;
pub mod profiles;

pub use commitments::{
    active_project_commitments_mysql, active_project_commitments_sqlite,
    active_training_commitments_mysql, active_training_commitments_sqlite, batch_dates_mysql,
    batch_dates_sqlite, project_dates_mysql, project_dates_sqlite,
};
pub use profiles::{
    find_profile_mysql, find_profile_sqlite, list_profile_rows_mysql, list_profile_rows_sqlite,
    load_profile_details_mysql, load_profile_details_sqlite,
};
