//! Domain planners
//!
//! One planner per preparation domain, all sharing the same contract:
//! `PlannerContext -> Category`. Each emits its critical start date computed
//! from a fixed lead time before the event, plus domain-specific guidance.

use crate::date_math::{critical_start_date, format_dd_mm_yyyy, ramadhan_2026};
use crate::plan::{Category, PlannerContext};
use chrono::NaiveDate;

mod exercise;
mod fasting;
mod hydration;
mod nutrition;
mod sleep;
mod spiritual;

/// The six preparation domains, in plan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Exercise,
    Sleep,
    Nutrition,
    Fasting,
    Hydration,
    Spiritual,
}

impl Domain {
    /// Fixed category order of the assembled plan
    pub const ALL: [Domain; 6] = [
        Domain::Exercise,
        Domain::Sleep,
        Domain::Nutrition,
        Domain::Fasting,
        Domain::Hydration,
        Domain::Spiritual,
    ];

    /// Days before the event this track should start
    pub fn lead_days(self) -> i64 {
        match self {
            Domain::Exercise => 60,
            Domain::Sleep => 45,
            Domain::Nutrition => 45,
            Domain::Fasting => 90,
            Domain::Hydration => 30,
            Domain::Spiritual => 45,
        }
    }

    /// Stable category id
    pub fn id(self) -> &'static str {
        match self {
            Domain::Exercise => "exercise",
            Domain::Sleep => "sleep",
            Domain::Nutrition => "nutrition",
            Domain::Fasting => "fasting",
            Domain::Hydration => "hydration",
            Domain::Spiritual => "spiritual",
        }
    }

    /// Card icon
    pub fn icon(self) -> &'static str {
        match self {
            Domain::Exercise => "\u{1F4AA}",
            Domain::Sleep => "\u{1F634}",
            Domain::Nutrition => "\u{1F957}",
            Domain::Fasting => "\u{1F319}",
            Domain::Hydration => "\u{1F4A7}",
            Domain::Spiritual => "\u{1F4D6}",
        }
    }

    /// Card title
    pub fn title(self) -> &'static str {
        match self {
            Domain::Exercise => "Exercise Plan",
            Domain::Sleep => "Sleep Pattern Adjustment",
            Domain::Nutrition => "Nutrition Intake",
            Domain::Fasting => "Fasting Practice Schedule",
            Domain::Hydration => "Water Intake Strategy",
            Domain::Spiritual => "Spiritual Readiness",
        }
    }

    /// Build this domain's category from the shared context
    pub fn build(self, ctx: &PlannerContext<'_>) -> Category {
        match self {
            Domain::Exercise => exercise::category(ctx),
            Domain::Sleep => sleep::category(ctx),
            Domain::Nutrition => nutrition::category(ctx),
            Domain::Fasting => fasting::category(ctx),
            Domain::Hydration => hydration::category(ctx),
            Domain::Spiritual => spiritual::category(ctx),
        }
    }

    /// This domain's critical start date, formatted dd-mm-yyyy
    fn start_date(self, today: NaiveDate) -> String {
        format_dd_mm_yyyy(critical_start_date(ramadhan_2026(), self.lead_days(), today))
    }
}
