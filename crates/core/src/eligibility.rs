// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::ProfileRepository;
use staffing_domain::{EligibilityDecision, ProfileRecord, evaluate_project_eligibility};
use tracing::debug;

/// Decides whether a profile may be allocated to a project.
///
/// A missing profile is an ineligible decision, not an error.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn check_project_eligibility<S>(
    store: &mut S,
    profile_id: i64,
    require_blue_worker: bool,
) -> Result<EligibilityDecision, CoreError<S::Error>>
where
    S: ProfileRepository,
{
    let profile: Option<ProfileRecord> = store
        .get_profile(profile_id)
        .map_err(CoreError::Repository)?;
    let decision: EligibilityDecision =
        evaluate_project_eligibility(profile.as_ref(), require_blue_worker);

    debug!(
        profile_id,
        eligible = decision.eligible,
        reason = decision.reason.as_deref().unwrap_or(""),
        "Evaluated project eligibility"
    );

    Ok(decision)
}
