//! User-submitted preparation profile
//!
//! The validated input to the plan engine. A `Profile` is built once from a
//! form submission and never mutated; every derivation downstream is a pure
//! function of `(profile, reference_date)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender used by the metabolic formulas
///
/// The submission form offers a multi-select, but every downstream formula
/// (BMR, water bonus) branches on a single value, so the validated profile
/// restricts this to one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// Job type from the daily-activities step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    Office,
    Healthcare,
    Teacher,
    Manual,
    Retail,
    Student,
    StayAtHome,
    Other,
}

/// Where the user is usually active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    Indoor,
    Outdoor,
    Other,
}

/// Self-reported nightly sleep duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepDuration {
    #[serde(rename = "less-6")]
    LessThan6,
    #[serde(rename = "6-7")]
    SixToSeven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "more-8")]
    MoreThan8,
    #[serde(rename = "other")]
    Other,
}

impl SleepDuration {
    /// Human-readable hours for the status line
    pub fn description(&self) -> &'static str {
        match self {
            SleepDuration::LessThan6 => "less than 6",
            SleepDuration::SixToSeven => "6-7",
            SleepDuration::Eight => "8",
            SleepDuration::MoreThan8 | SleepDuration::Other => "more than 8",
        }
    }
}

/// Ramadhan goal selected on the expectations step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FullFasting,
    Taraweh,
    QiyamulLail,
    CompleteQuran,
    Umrah,
    Itikaf,
    Charity,
    WorkProductivity,
}

impl Goal {
    /// Label shown in the plan's goal lists
    pub fn label(&self) -> &'static str {
        match self {
            Goal::FullFasting => "Full-day fasting",
            Goal::Taraweh => "Full Taraweh",
            Goal::QiyamulLail => "Qiyamul Lail",
            Goal::CompleteQuran => "Complete Quran",
            Goal::Umrah => "Umrah",
            Goal::Itikaf => "I'tikaf",
            Goal::Charity => "Charity/Zakat",
            Goal::WorkProductivity => "Maintain work productivity",
        }
    }

    /// Label used in the shareable plain text
    pub fn share_label(&self) -> &'static str {
        match self {
            Goal::Taraweh => "Full Taraweh prayers",
            other => other.label(),
        }
    }
}

/// Validated preparation profile
///
/// Invariants (enforced at the ingestion boundary, assumed everywhere else):
/// - `name` is non-empty
/// - `date_of_birth` year is in [1940, 2010] and strictly before today
/// - `height_cm` in [100, 250], `weight_kg` in [30, 200]
/// - `weekly_workout_days` in [0, 7]
/// - `activity_types`, `sleep_durations` and `goals` are non-empty
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub weight_kg: f64,
    pub job_type: JobType,
    /// Multi-select, submission order preserved
    pub activity_types: Vec<ActivityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type_custom: Option<String>,
    pub weekly_workout_days: u8,
    /// Multi-select, submission order preserved
    pub sleep_durations: Vec<SleepDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_duration_custom: Option<String>,
    /// Selected Ramadhan goals, submission order preserved
    pub goals: Vec<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_goal: Option<String>,
}

impl Profile {
    /// Whether the given goal was selected
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    /// Set-membership check on the activity-type multi-select
    pub fn is_active_outdoors(&self) -> bool {
        self.activity_types.contains(&ActivityType::Outdoor)
    }

    /// First selected sleep duration, used for the status line
    ///
    /// The profile invariant guarantees at least one selection.
    pub fn primary_sleep_duration(&self) -> SleepDuration {
        self.sleep_durations
            .first()
            .copied()
            .unwrap_or(SleepDuration::Other)
    }
}
