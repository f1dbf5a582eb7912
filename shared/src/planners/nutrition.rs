//! Nutrition planner
//!
//! Reports the calorie adjustment for the shortened eating window and the
//! macro breakdown, plus fixed sahur/iftar guidance. No urgency tag and no
//! warnings: nutrition changes are useful at any distance from the event.

use super::Domain;
use crate::plan::{Category, PlannerContext, Section};

pub(super) fn category(ctx: &PlannerContext<'_>) -> Category {
    let m = ctx.metrics;
    let macros = &m.macros;

    Category {
        id: Domain::Nutrition.id().to_string(),
        icon: Domain::Nutrition.icon().to_string(),
        title: Domain::Nutrition.title().to_string(),
        current_status: Some(format!(
            "Your BMI: {:.1} - {}",
            m.bmi,
            m.bmi_category.description()
        )),
        urgency: None,
        sections: vec![
            Section::text("Current Daily Calories", format!("{} kcal", m.current_calories)),
            Section::text("Ramadhan Target", format!("{} kcal", m.target_calories)),
            Section::list(
                "Macro Split",
                vec![
                    format!("Carbs: {}% ({}g)", macros.carbs_percent(), macros.carbs_g),
                    format!("Protein: {}% ({}g)", macros.protein_percent(), macros.protein_g),
                    format!("Fats: {}% ({}g)", macros.fat_percent(), macros.fat_g),
                ],
            ),
            Section::text("Critical Start Date", Domain::Nutrition.start_date(ctx.today)),
            Section::list(
                "Sahur Recommendations",
                vec![
                    "Whole grains and complex carbs".to_string(),
                    "Protein-rich foods (eggs, dairy, legumes)".to_string(),
                    "Foods with healthy fats".to_string(),
                ],
            ),
            Section::list(
                "Iftar Recommendations",
                vec![
                    "Break fast with dates or water first".to_string(),
                    "Start with light, hydrating foods".to_string(),
                    "Follow with balanced meal after 20 minutes".to_string(),
                ],
            ),
            Section::text(
                "Practice Now",
                "Increase whole grains, reduce processed foods, stay hydrated throughout the day",
            ),
            Section::text(
                "Why This Matters",
                "Eating nutritious, well-balanced meals builds energy reserves and prepares your \
                 digestive system for fasting.",
            ),
        ],
        warnings: Vec::new(),
    }
}
