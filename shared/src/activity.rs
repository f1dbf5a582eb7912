//! Activity scoring
//!
//! Collapses job type, workout frequency and activity-type selection into a
//! single 0-5 score. The score picks the TDEE multiplier and drives the
//! exercise and hydration planners.

use crate::profile::{JobType, Profile};
use serde::{Deserialize, Serialize};

/// Qualitative label for an activity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

/// Compute the 0-5 activity score for a profile
///
/// Boosts: outdoor activity +1; workout days >=5 / >=3 / >=1 add 3 / 2 / 1
/// (highest tier only, no stacking); manual and healthcare jobs +1 each.
/// The sum is clamped to 5.
pub fn activity_score(profile: &Profile) -> u8 {
    let mut score: u8 = 0;
    if profile.is_active_outdoors() {
        score += 1;
    }
    score += match profile.weekly_workout_days {
        d if d >= 5 => 3,
        d if d >= 3 => 2,
        d if d >= 1 => 1,
        _ => 0,
    };
    if profile.job_type == JobType::Manual {
        score += 1;
    }
    if profile.job_type == JobType::Healthcare {
        score += 1;
    }
    score.min(5)
}

/// Classify a score into its qualitative label
pub fn classify_activity(score: u8) -> ActivityLevel {
    match score {
        0 | 1 => ActivityLevel::Sedentary,
        2 => ActivityLevel::LightlyActive,
        3 => ActivityLevel::ModeratelyActive,
        _ => ActivityLevel::VeryActive,
    }
}
