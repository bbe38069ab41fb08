// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile population queries.
//!
//! The population query translates a `ProfileQuery` into a single boxed
//! `SELECT` over `profiles`. Skill and address predicates are expressed as
//! `IN (subselect)` so that a profile matching several skills or addresses
//! is still returned once. Skills and addresses are then loaded for the
//! whole page of profiles in one query each.
//!
//! Search is a case-insensitive substring `LIKE`. `SQLite` folds ASCII
//! letters only, which the in-memory filter mirrors; `MySQL` folds through
//! the `utf8mb4_general_ci` collation and so also matches accented letters
//! of either case.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use staffing_domain::{
    AddressRecord, BLUE_COLLAR_WORKER_TYPE, ProfileQuery, ProfileRecord, ProfileStage,
    SkillRecord, SortBy, SortOrder,
};
use tracing::debug;

use crate::data_models::{AddressRow, ProfileRow, SkillRow, encode_date};
use crate::diesel_schema::{addresses, profile_skills, profiles, skill_categories};
use crate::error::PersistenceError;

/// Escape character used in `LIKE` patterns built from user search text.
const LIKE_ESCAPE: char = '!';

/// Builds a `%…%` substring pattern with `LIKE` wildcards escaped.
pub fn like_pattern(search: &str) -> String {
    let mut pattern: String = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

backend_fn! {
/// Loads the profiles matching `query`, in the query's order.
///
/// The returned records carry no skills or addresses; see
/// `load_profile_details`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `query` - Predicates and ordering for the population
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_profile_rows(
    conn: &mut _,
    query: &ProfileQuery,
) -> Result<Vec<ProfileRecord>, PersistenceError> {
    let mut select = profiles::table
        .filter(profiles::is_active.eq(1))
        .filter(profiles::is_deleted.eq(0))
        .filter(profiles::worker_type.eq(BLUE_COLLAR_WORKER_TYPE))
        .select(ProfileRow::as_select())
        .into_boxed();

    if let Some(stages) = &query.stages {
        let stage_names: Vec<&'static str> = stages.iter().map(ProfileStage::as_str).collect();
        select = select.filter(profiles::current_stage.eq_any(stage_names));
    }

    if let Some(gender) = &query.gender {
        select = select.filter(profiles::gender.eq(gender.clone()));
    }

    if let Some(bounds) = &query.birth_dates {
        if let Some(earliest) = bounds.earliest {
            select = select.filter(profiles::date_of_birth.ge(encode_date(earliest)?));
        }
        if let Some(latest) = bounds.latest {
            select = select.filter(profiles::date_of_birth.le(encode_date(latest)?));
        }
        // An unknown birth date never satisfies an age filter
        select = select.filter(profiles::date_of_birth.is_not_null());
    }

    if !query.skill_category_ids.is_empty() {
        select = select.filter(
            profiles::profile_id.eq_any(
                profile_skills::table
                    .select(profile_skills::profile_id)
                    .filter(
                        profile_skills::skill_category_id
                            .eq_any(query.skill_category_ids.clone()),
                    ),
            ),
        );
    }

    if let Some(search) = &query.search {
        let pattern: String = like_pattern(search);
        select = select.filter(
            profiles::first_name
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(profiles::middle_name.like(pattern.clone()).escape(LIKE_ESCAPE))
                .or(profiles::last_name.like(pattern.clone()).escape(LIKE_ESCAPE))
                .or(profiles::worker_code.like(pattern.clone()).escape(LIKE_ESCAPE))
                .or(profiles::candidate_code.like(pattern.clone()).escape(LIKE_ESCAPE))
                .or(profiles::phone.like(pattern).escape(LIKE_ESCAPE)),
        );
    }

    // A single address must satisfy both the district and the state filter
    match (query.districts.is_empty(), query.states.is_empty()) {
        (false, false) => {
            select = select.filter(
                profiles::profile_id.eq_any(
                    addresses::table
                        .select(addresses::profile_id)
                        .filter(addresses::district.eq_any(query.districts.clone()))
                        .filter(addresses::state.eq_any(query.states.clone())),
                ),
            );
        }
        (false, true) => {
            select = select.filter(
                profiles::profile_id.eq_any(
                    addresses::table
                        .select(addresses::profile_id)
                        .filter(addresses::district.eq_any(query.districts.clone())),
                ),
            );
        }
        (true, false) => {
            select = select.filter(
                profiles::profile_id.eq_any(
                    addresses::table
                        .select(addresses::profile_id)
                        .filter(addresses::state.eq_any(query.states.clone())),
                ),
            );
        }
        (true, true) => {}
    }

    // Ascending age is descending date of birth
    let direction: SortOrder = match query.sort_by {
        SortBy::Age => query.sort_order.reversed(),
        SortBy::Name | SortBy::Code => query.sort_order,
    };

    // A NULL key ranks above every value: last ascending, first descending.
    // Each key leads with its own `IS NULL` so both backends agree.
    select = match (query.sort_by, direction) {
        (SortBy::Name, SortOrder::Asc) => select.order_by((
            profiles::first_name.is_null().asc(),
            profiles::first_name.asc(),
            profiles::last_name.is_null().asc(),
            profiles::last_name.asc(),
        )),
        (SortBy::Name, SortOrder::Desc) => select.order_by((
            profiles::first_name.is_null().desc(),
            profiles::first_name.desc(),
            profiles::last_name.is_null().desc(),
            profiles::last_name.desc(),
        )),
        (SortBy::Code, SortOrder::Asc) => select.order_by((
            profiles::worker_code.is_null().asc(),
            profiles::worker_code.asc(),
            profiles::candidate_code.is_null().asc(),
            profiles::candidate_code.asc(),
        )),
        (SortBy::Code, SortOrder::Desc) => select.order_by((
            profiles::worker_code.is_null().desc(),
            profiles::worker_code.desc(),
            profiles::candidate_code.is_null().desc(),
            profiles::candidate_code.desc(),
        )),
        (SortBy::Age, SortOrder::Asc) => select.order_by((
            profiles::date_of_birth.is_null().asc(),
            profiles::date_of_birth.asc(),
        )),
        (SortBy::Age, SortOrder::Desc) => select.order_by((
            profiles::date_of_birth.is_null().desc(),
            profiles::date_of_birth.desc(),
        )),
    };

    let rows: Vec<ProfileRow> = select
        .then_order_by(profiles::profile_id.asc())
        .load::<ProfileRow>(conn)?;

    debug!(matched = rows.len(), "Loaded profile population");

    rows.into_iter().map(ProfileRow::into_record).collect()
}
}

backend_fn! {
/// Retrieves a profile by ID regardless of its active or deleted flags.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `profile_id` - The profile ID
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if no such profile exists.
pub fn find_profile(
    conn: &mut _,
    profile_id: i64,
) -> Result<Option<ProfileRecord>, PersistenceError> {
    let row: Option<ProfileRow> = profiles::table
        .filter(profiles::profile_id.eq(profile_id))
        .select(ProfileRow::as_select())
        .first::<ProfileRow>(conn)
        .optional()?;

    row.map(ProfileRow::into_record).transpose()
}
}

backend_fn! {
/// Attaches skills and addresses to already-loaded profiles.
///
/// Skills are joined with their category; a skill whose category is
/// missing keeps `None` for the category name and type. Both lists keep
/// insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `records` - Profiles to complete
///
/// # Errors
///
/// Returns an error if either query fails.
pub fn load_profile_details(
    conn: &mut _,
    records: Vec<ProfileRecord>,
) -> Result<Vec<ProfileRecord>, PersistenceError> {
    if records.is_empty() {
        return Ok(records);
    }

    let ids: Vec<i64> = records.iter().map(|record| record.id).collect();

    let skill_rows: Vec<SkillRow> = profile_skills::table
        .left_join(
            skill_categories::table.on(profile_skills::skill_category_id
                .eq(skill_categories::skill_category_id.nullable())),
        )
        .filter(profile_skills::profile_id.eq_any(ids.clone()))
        .select((
            profile_skills::profile_skill_id,
            profile_skills::profile_id,
            profile_skills::skill_category_id,
            profile_skills::years_of_experience,
            profile_skills::is_primary,
            skill_categories::name.nullable(),
            skill_categories::category_type.nullable(),
        ))
        .order(profile_skills::profile_skill_id.asc())
        .load::<SkillRow>(conn)?;

    let address_rows: Vec<AddressRow> = addresses::table
        .filter(addresses::profile_id.eq_any(ids))
        .select((
            addresses::profile_id,
            addresses::address_type,
            addresses::district,
            addresses::state,
        ))
        .order(addresses::address_id.asc())
        .load::<AddressRow>(conn)?;

    let mut skills: HashMap<i64, Vec<SkillRecord>> = HashMap::new();
    for (profile_id, skill) in skill_rows.into_iter().map(SkillRow::into_record) {
        skills.entry(profile_id).or_default().push(skill);
    }

    let mut addresses_by_profile: HashMap<i64, Vec<AddressRecord>> = HashMap::new();
    for (profile_id, address) in address_rows.into_iter().map(AddressRow::into_record) {
        addresses_by_profile.entry(profile_id).or_default().push(address);
    }

    Ok(records
        .into_iter()
        .map(|mut record| {
            record.skills = skills.remove(&record.id).unwrap_or_default();
            record.addresses = addresses_by_profile.remove(&record.id).unwrap_or_default();
            record
        })
        .collect())
}
}
