//! Fasting practice planner
//!
//! Three schedule tiers depending on how much runway is left. The 90-day
//! build-up is the ideal path; inside a month the schedule jumps straight to
//! alternate-day fasting with escalating warnings.

use super::Domain;
use crate::plan::{Category, PlannerContext, Section};

/// Practice schedule plus any warnings for the remaining window
pub(super) struct FastingSchedule {
    pub steps: Vec<String>,
    pub warnings: Vec<String>,
}

pub(super) fn schedule(days_until_ramadhan: i64) -> FastingSchedule {
    if days_until_ramadhan >= 90 {
        FastingSchedule {
            steps: vec![
                "Month 1 (Week 1-4): Monday & Thursday (2x/week)".to_string(),
                "Month 2 (Week 5-8): Add Saturday (3x/week)".to_string(),
                "Month 3 (Week 9+): 4x/week as Ramadhan approaches".to_string(),
            ],
            warnings: Vec::new(),
        }
    } else if days_until_ramadhan >= 30 {
        FastingSchedule {
            steps: vec![
                "Week 1-2: 3x/week (e.g., Mon, Wed, Fri)".to_string(),
                "Week 3-4: 4x/week".to_string(),
                "Week 5+: 5x/week alternating".to_string(),
            ],
            warnings: vec!["Moderate urgency - consistent practice essential".to_string()],
        }
    } else {
        FastingSchedule {
            steps: vec![
                "Immediate: Alternate days (4x/week minimum)".to_string(),
                "Intensive preparation required".to_string(),
                "Focus on consistency over duration".to_string(),
            ],
            warnings: vec![
                "High risk of fatigue - follow hydration strictly".to_string(),
                "Consider reducing other activities".to_string(),
                "Monitor energy levels closely".to_string(),
            ],
        }
    }
}

pub(super) fn category(ctx: &PlannerContext<'_>) -> Category {
    let plan = schedule(ctx.metrics.days_until_ramadhan);

    Category {
        id: Domain::Fasting.id().to_string(),
        icon: Domain::Fasting.icon().to_string(),
        title: Domain::Fasting.title().to_string(),
        current_status: None,
        urgency: Some(ctx.urgency()),
        sections: vec![
            Section::text(
                "Critical Start Date",
                format!(
                    "{} (90 days before - Most Important!)",
                    Domain::Fasting.start_date(ctx.today)
                ),
            ),
            Section::list("Fasting Schedule", plan.steps),
            Section::text(
                "Why This Matters",
                "Practice fasting prepares your body and mind, making the full month smoother \
                 and more manageable.",
            ),
            Section::list(
                "Tips",
                vec![
                    "Start with lighter fasts before progressing".to_string(),
                    "Consistency matters more than duration".to_string(),
                    "Keep hydrated during non-fasting hours".to_string(),
                ],
            ),
        ],
        warnings: plan.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graduated_build_up_with_full_runway() {
        let plan = schedule(100);
        assert_eq!(plan.steps.len(), 3);
        assert!(plan.steps[0].contains("2x/week"));
        assert!(plan.steps[1].contains("3x/week"));
        assert!(plan.steps[2].contains("4x/week"));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_mid_tier_carries_single_warning() {
        let plan = schedule(45);
        assert!(plan.steps[0].contains("3x/week"));
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("Moderate urgency"));
    }

    #[test]
    fn test_late_tier_escalates_all_warnings() {
        let plan = schedule(20);
        assert!(plan.steps[0].contains("4x/week minimum"));
        assert_eq!(plan.warnings.len(), 3);
        assert!(plan.warnings[0].contains("fatigue"));
        assert!(plan.warnings[1].contains("reducing other activities"));
        assert!(plan.warnings[2].contains("energy levels"));
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        // >= comparisons, unlike the urgency classifier's strict ones
        assert!(schedule(90).warnings.is_empty());
        assert_eq!(schedule(89).warnings.len(), 1);
        assert_eq!(schedule(30).warnings.len(), 1);
        assert_eq!(schedule(29).warnings.len(), 3);
    }
}
