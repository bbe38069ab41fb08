// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Enumerated values exchanged with storage and callers.
//!
//! Every enum round-trips through its wire string: `as_str` produces it,
//! `FromStr` accepts exactly it, and serde uses the same representation.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Converts this value to its wire representation.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    _ => Err(DomainError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value: String = String::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Lifecycle stage of a profile.
    ///
    /// Lifecycle transitions are owned elsewhere; availability only reads
    /// the current value.
    pub enum ProfileStage ("profile stage") {
        NewRegistration => "NEW_REGISTRATION",
        Screening => "SCREENING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        TrainingScheduled => "TRAINING_SCHEDULED",
        InTraining => "IN_TRAINING",
        Trained => "TRAINED",
        Worker => "WORKER",
        Benched => "BENCHED",
        Matched => "MATCHED",
        Assigned => "ASSIGNED",
        Onboarded => "ONBOARDED",
        OnSite => "ON_SITE",
        OnHold => "ON_HOLD",
    }
}

impl ProfileStage {
    /// Stages from which a profile may be allocated to a project.
    pub const PROJECT_ALLOCATABLE: [Self; 2] = [Self::Benched, Self::Trained];

    /// Stages from which a profile may be enrolled in training.
    pub const TRAINING_ELIGIBLE: [Self; 2] = [Self::Approved, Self::Screening];

    /// Returns `true` if this stage allows project allocation.
    #[must_use]
    pub fn is_project_allocatable(self) -> bool {
        Self::PROJECT_ALLOCATABLE.contains(&self)
    }
}

wire_enum! {
    /// Lifecycle stage of a project.
    pub enum ProjectStage ("project stage") {
        Approved => "approved",
        Planning => "planning",
        Shared => "shared",
        Ongoing => "ongoing",
        OnHold => "on_hold",
        Terminated => "terminated",
        Cancelled => "cancelled",
        ShortClosed => "short_closed",
        Completed => "completed",
    }
}

impl ProjectStage {
    /// Stages in which a project still reserves its assigned workers.
    ///
    /// `OnHold` is included: a paused project keeps its staff.
    pub const ACTIVE: [Self; 5] = [
        Self::Approved,
        Self::Planning,
        Self::Shared,
        Self::Ongoing,
        Self::OnHold,
    ];

    /// Returns `true` if assignments to a project in this stage block.
    #[must_use]
    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

wire_enum! {
    /// Status of a training batch.
    pub enum TrainingBatchStatus ("training batch status") {
        Upcoming => "UPCOMING",
        Ongoing => "ONGOING",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

impl TrainingBatchStatus {
    /// Statuses in which a batch still reserves its enrolled trainees.
    pub const ACTIVE: [Self; 2] = [Self::Upcoming, Self::Ongoing];

    /// Returns `true` if enrollments in a batch with this status block.
    #[must_use]
    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

wire_enum! {
    /// Status of a single enrollment in a training batch.
    pub enum EnrollmentStatus ("enrollment status") {
        Enrolled => "ENROLLED",
        Completed => "COMPLETED",
        Dropped => "DROPPED",
    }
}

wire_enum! {
    /// Why the caller is checking availability.
    ///
    /// The purpose selects which profile stages form the population.
    #[derive(Default)]
    pub enum Purpose ("purpose") {
        Project => "project",
        Training => "training",
        #[default]
        All => "all",
    }
}

impl Purpose {
    /// Resolves the stage set a profile must be in to join the population.
    ///
    /// `requested` is only honoured for [`Purpose::All`]. `None` means no
    /// stage restriction.
    #[must_use]
    pub fn eligible_stages(self, requested: &[ProfileStage]) -> Option<Vec<ProfileStage>> {
        match self {
            Self::Project => Some(ProfileStage::PROJECT_ALLOCATABLE.to_vec()),
            Self::Training => Some(ProfileStage::TRAINING_ELIGIBLE.to_vec()),
            Self::All if requested.is_empty() => None,
            Self::All => Some(requested.to_vec()),
        }
    }
}

wire_enum! {
    /// Which partition(s) of the report the caller wants populated.
    #[derive(Default)]
    pub enum AvailabilityStatus ("availability status") {
        Available => "available",
        Unavailable => "unavailable",
        #[default]
        All => "all",
    }
}

wire_enum! {
    /// Sort key for the profile population.
    #[derive(Default)]
    pub enum SortBy ("sort key") {
        #[default]
        Name => "name",
        Code => "code",
        Age => "age",
    }
}

wire_enum! {
    /// Sort direction.
    #[derive(Default)]
    pub enum SortOrder ("sort order") {
        #[default]
        Asc => "asc",
        Desc => "desc",
    }
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

wire_enum! {
    /// The two kinds of commitment that can occupy a profile's time.
    pub enum CommitmentKind ("commitment kind") {
        Project => "PROJECT",
        Training => "TRAINING",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_stage_round_trips() {
        for stage in ProfileStage::ALL {
            assert_eq!(stage.as_str().parse::<ProfileStage>().unwrap(), *stage);
        }
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let err: DomainError = "trained".parse::<ProfileStage>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownValue {
                kind: "profile stage",
                value: String::from("trained"),
            }
        );
    }

    #[test]
    fn test_on_hold_project_is_active() {
        assert!(ProjectStage::OnHold.is_active());
        assert!(!ProjectStage::Cancelled.is_active());
        assert!(!ProjectStage::Completed.is_active());
        assert!(!ProjectStage::ShortClosed.is_active());
        assert!(!ProjectStage::Terminated.is_active());
    }

    #[test]
    fn test_batch_activity() {
        assert!(TrainingBatchStatus::Upcoming.is_active());
        assert!(TrainingBatchStatus::Ongoing.is_active());
        assert!(!TrainingBatchStatus::Completed.is_active());
        assert!(!TrainingBatchStatus::Cancelled.is_active());
    }

    #[test]
    fn test_purpose_resolution() {
        assert_eq!(
            Purpose::Project.eligible_stages(&[ProfileStage::Screening]),
            Some(vec![ProfileStage::Benched, ProfileStage::Trained])
        );
        assert_eq!(
            Purpose::Training.eligible_stages(&[]),
            Some(vec![ProfileStage::Approved, ProfileStage::Screening])
        );
        assert_eq!(Purpose::All.eligible_stages(&[]), None);
        assert_eq!(
            Purpose::All.eligible_stages(&[ProfileStage::OnSite]),
            Some(vec![ProfileStage::OnSite])
        );
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json: String = serde_json::to_string(&CommitmentKind::Training).unwrap();
        assert_eq!(json, "\"TRAINING\"");
        let stage: ProjectStage = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(stage, ProjectStage::OnHold);
    }
}
