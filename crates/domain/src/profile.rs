// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::age::calculate_age;
use crate::types::ProfileStage;
use serde::{Deserialize, Serialize};
use time::Date;

/// Worker type tag carried by blue-collar profiles.
pub const BLUE_COLLAR_WORKER_TYPE: &str = "blue";

/// Profile type of a converted worker (as opposed to a candidate).
pub const WORKER_PROFILE_TYPE: &str = "worker";

/// Address type whose first entry is reported as the primary address.
pub const PERMANENT_ADDRESS_TYPE: &str = "permanent";

/// Full name reported when a profile has no name parts on file.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A read-only snapshot of a profile as seen by the availability engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i64,
    pub worker_code: Option<String>,
    pub candidate_code: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub profile_photo_url: Option<String>,
    pub phone: Option<String>,
    pub current_stage: Option<ProfileStage>,
    pub profile_type: Option<String>,
    pub worker_type: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub skills: Vec<SkillRecord>,
    pub addresses: Vec<AddressRecord>,
}

/// A skill held by a profile, joined with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Identifier of the profile-skill row.
    pub id: i64,
    pub skill_category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_type: Option<String>,
    pub years_of_experience: Option<i32>,
    pub is_primary: Option<bool>,
}

/// A postal address attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub address_type: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
}

impl ProfileRecord {
    /// Creates an active, blue-collar worker profile with no optional data.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            worker_code: None,
            candidate_code: None,
            first_name: None,
            middle_name: None,
            last_name: None,
            gender: None,
            date_of_birth: None,
            profile_photo_url: None,
            phone: None,
            current_stage: None,
            profile_type: Some(WORKER_PROFILE_TYPE.to_string()),
            worker_type: Some(BLUE_COLLAR_WORKER_TYPE.to_string()),
            is_active: true,
            is_deleted: false,
            skills: Vec::new(),
            addresses: Vec::new(),
        }
    }

    /// Joins the non-empty name parts with single spaces.
    ///
    /// Returns [`UNKNOWN_NAME`] when every part is missing or empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            parts.join(" ")
        }
    }

    /// The display code: worker code when assigned, otherwise candidate code.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.worker_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .or(self.candidate_code.as_deref())
    }

    /// The first permanent address on file.
    #[must_use]
    pub fn primary_address(&self) -> Option<&AddressRecord> {
        self.addresses
            .iter()
            .find(|address| address.address_type.as_deref() == Some(PERMANENT_ADDRESS_TYPE))
    }

    /// Age in whole years on `reference_date`.
    #[must_use]
    pub fn age_on(&self, reference_date: Date) -> Option<i32> {
        calculate_age(self.date_of_birth, reference_date)
    }

    /// Returns `true` if the profile belongs to the blue-collar worker pool:
    /// active, not deleted and tagged `blue`.
    #[must_use]
    pub fn in_blue_collar_pool(&self) -> bool {
        self.is_active
            && !self.is_deleted
            && self.worker_type.as_deref() == Some(BLUE_COLLAR_WORKER_TYPE)
    }
}

impl SkillRecord {
    /// Reported skill identifier: the category id when joined, else the row id.
    #[must_use]
    pub fn reported_id(&self) -> i64 {
        self.skill_category_id.unwrap_or(self.id)
    }
}
