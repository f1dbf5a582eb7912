//! Hydration planner
//!
//! Splits the daily water target across the eating window (40% sahur,
//! 40% after iftar, 20% before sleep) and ramps intake over three phases.

use super::Domain;
use crate::plan::{Category, PlannerContext, Section};

pub(super) fn category(ctx: &PlannerContext<'_>) -> Category {
    let liters = ctx.metrics.water_liters;

    Category {
        id: Domain::Hydration.id().to_string(),
        icon: Domain::Hydration.icon().to_string(),
        title: Domain::Hydration.title().to_string(),
        current_status: Some(format!("Daily Target: {liters:.1} Liters")),
        urgency: None,
        sections: vec![
            Section::text("Critical Start Date", Domain::Hydration.start_date(ctx.today)),
            Section::list(
                "Drinking Schedule",
                vec![
                    format!("At Sahur: {:.1}L", liters * 0.4),
                    format!("After Iftar: {:.1}L", liters * 0.4),
                    format!("Before Sleep: {:.1}L", liters * 0.2),
                ],
            ),
            Section::text(
                "Week 1-2: Track Current",
                "Monitor daily water intake and hydration levels",
            ),
            Section::text(
                "Week 3-6: Meet Daily Target",
                format!("Gradually increase intake to reach {liters:.1}L per day"),
            ),
            Section::text(
                "Week 7+: Practice 8-Hour Window",
                "Practice concentrating water intake into fasting-compatible windows",
            ),
            Section::text(
                "Why This Matters",
                "Proper hydration supports energy, metabolism, and mental clarity essential for \
                 fasting and spiritual practices.",
            ),
            Section::list(
                "Tips",
                vec![
                    "Drink water at body temperature for better absorption".to_string(),
                    "Add minerals/electrolytes during preparation".to_string(),
                    "Avoid excessive caffeine during Ramadhan preparation".to_string(),
                ],
            ),
            Section::list(
                "Success Indicators",
                vec![
                    "Light urine color".to_string(),
                    "Sustained energy levels".to_string(),
                    "Clear mental focus".to_string(),
                ],
            ),
        ],
        warnings: Vec::new(),
    }
}
