//! Plan model and assembly
//!
//! `generate_plan` is the engine's single entry point: a pure function of a
//! validated profile and one pinned reference date. It fans the profile out
//! into the shared derived metrics, hands those to the six domain planners
//! and stitches the result into one `Plan`.
//!
//! Determinism contract: identical `(profile, reference_date)` pairs must
//! produce identical output. Nothing below this line reads the clock.

use crate::activity::{activity_score, classify_activity, ActivityLevel};
use crate::date_math::{days_until, age_on, ramadhan_2026};
use crate::metabolic::{
    calculate_bmi, calculate_bmr, calculate_tdee, classify_bmi, daily_water_liters,
    ramadhan_target_calories, BmiCategory, MacroSplit,
};
use crate::planners::Domain;
use crate::profile::Profile;
use crate::urgency::Urgency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Section content: a flat description or an ordered list of bullets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    List(Vec<String>),
}

/// One titled block inside a category card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: SectionContent,
}

impl Section {
    /// Titled section with flat text content
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: SectionContent::Text(content.into()),
        }
    }

    /// Titled section with bullet-list content
    pub fn list(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: SectionContent::List(items),
        }
    }
}

/// One preparation category card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub icon: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Metrics derived once from the profile and shared by every planner
///
/// Recomputed fresh per plan; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub age_years: i32,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub activity_score: u8,
    pub activity_level: ActivityLevel,
    pub bmr: f64,
    pub tdee: f64,
    /// Maintenance calories, rounded
    pub current_calories: i64,
    /// Ramadhan target calories (7% deficit), rounded
    pub target_calories: i64,
    pub macros: MacroSplit,
    /// Daily water target in liters
    pub water_liters: f64,
    pub days_until_ramadhan: i64,
}

impl DerivedMetrics {
    /// Derive all shared metrics from the profile at the reference date
    pub fn compute(profile: &Profile, today: NaiveDate) -> Self {
        let age_years = age_on(profile.date_of_birth, today);
        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
        let score = activity_score(profile);
        let bmr = calculate_bmr(profile.gender, profile.weight_kg, profile.height_cm, age_years);
        let tdee = calculate_tdee(bmr, score);
        let target_calories = ramadhan_target_calories(tdee);

        Self {
            age_years,
            bmi,
            bmi_category: classify_bmi(bmi),
            activity_score: score,
            activity_level: classify_activity(score),
            bmr,
            tdee,
            current_calories: tdee.round() as i64,
            target_calories,
            macros: MacroSplit::from_target_calories(target_calories),
            water_liters: daily_water_liters(profile.weight_kg, score, profile.gender),
            days_until_ramadhan: days_until(ramadhan_2026(), today),
        }
    }
}

/// Everything a domain planner needs, borrowed for one plan computation
pub struct PlannerContext<'a> {
    pub profile: &'a Profile,
    pub metrics: &'a DerivedMetrics,
    /// The pinned reference date for the whole computation
    pub today: NaiveDate,
}

impl PlannerContext<'_> {
    /// Urgency bucket for the remaining preparation window
    pub fn urgency(&self) -> Urgency {
        Urgency::from_days_remaining(self.metrics.days_until_ramadhan)
    }
}

/// The assembled preparation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub days_until_ramadhan: i64,
    /// BMI rounded to one decimal
    pub bmi: f64,
    pub activity_score: u8,
    /// TDEE rounded to the nearest kcal
    pub tdee: i64,
    /// Exercise, sleep, nutrition, fasting, hydration, spiritual - fixed order
    pub categories: Vec<Category>,
}

/// Generate the full preparation plan
///
/// Defined only over validated profiles; callers must run the ingestion
/// checks first. Total and side-effect free: no I/O, no clock reads, no
/// allocation beyond the returned plan.
pub fn generate_plan(profile: &Profile, reference_date: NaiveDate) -> Plan {
    let metrics = DerivedMetrics::compute(profile, reference_date);
    let ctx = PlannerContext {
        profile,
        metrics: &metrics,
        today: reference_date,
    };

    let categories = Domain::ALL.iter().map(|d| d.build(&ctx)).collect();

    Plan {
        days_until_ramadhan: metrics.days_until_ramadhan,
        bmi: (metrics.bmi * 10.0).round() / 10.0,
        activity_score: metrics.activity_score,
        tdee: metrics.tdee.round() as i64,
        categories,
    }
}
