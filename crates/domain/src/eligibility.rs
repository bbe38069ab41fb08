// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::profile::{BLUE_COLLAR_WORKER_TYPE, ProfileRecord, WORKER_PROFILE_TYPE};
use crate::types::ProfileStage;
use serde::{Deserialize, Serialize};

/// Outcome of a project-allocation eligibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub eligible: bool,
    /// Why the profile is not eligible. Absent when eligible.
    pub reason: Option<String>,
}

impl EligibilityDecision {
    const fn eligible() -> Self {
        Self {
            eligible: true,
            reason: None,
        }
    }

    fn ineligible(reason: String) -> Self {
        Self {
            eligible: false,
            reason: Some(reason),
        }
    }
}

/// Decides whether a profile may be allocated to a project.
///
/// Rules are checked in order and the first failure is reported:
/// the profile exists and is not deleted, is active, is a `worker`,
/// is a `blue` worker (when `require_blue_worker`), and is in an
/// allocatable stage.
#[must_use]
pub fn evaluate_project_eligibility(
    profile: Option<&ProfileRecord>,
    require_blue_worker: bool,
) -> EligibilityDecision {
    let Some(profile) = profile.filter(|p| !p.is_deleted) else {
        return EligibilityDecision::ineligible(String::from("Profile not found"));
    };

    if !profile.is_active {
        return EligibilityDecision::ineligible(String::from("Profile is not active"));
    }

    if profile.profile_type.as_deref() != Some(WORKER_PROFILE_TYPE) {
        return EligibilityDecision::ineligible(format!(
            "Profile type must be '{WORKER_PROFILE_TYPE}', got: {}",
            display_or_null(profile.profile_type.as_deref())
        ));
    }

    if require_blue_worker && profile.worker_type.as_deref() != Some(BLUE_COLLAR_WORKER_TYPE) {
        return EligibilityDecision::ineligible(format!(
            "Worker type must be '{BLUE_COLLAR_WORKER_TYPE}', got: {}",
            display_or_null(profile.worker_type.as_deref())
        ));
    }

    match profile.current_stage {
        Some(stage) if stage.is_project_allocatable() => EligibilityDecision::eligible(),
        stage => EligibilityDecision::ineligible(format!(
            "Worker stage must be TRAINED or BENCHED, got: {}",
            display_or_null(stage.as_ref().map(ProfileStage::as_str))
        )),
    }
}

fn display_or_null(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}
