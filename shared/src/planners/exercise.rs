//! Exercise planner
//!
//! Picks a weekly session frequency and intensity tier from the remaining
//! window and the activity score, then appends stamina rationale for the
//! goals that demand it (Taraweh, Qiyamul Lail, Umrah).

use super::Domain;
use crate::plan::{Category, PlannerContext, Section};
use crate::profile::Goal;

/// Session frequency and intensity for the remaining window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ExerciseTier {
    pub sessions_per_week: u8,
    pub intensity: &'static str,
}

/// Tier selection: under two weeks everything escalates; under a month the
/// frequency is pinned at 4; otherwise frequency scales with the score.
pub(super) fn tier(activity_score: u8, days_until_ramadhan: i64) -> ExerciseTier {
    if days_until_ramadhan < 14 {
        ExerciseTier {
            sessions_per_week: (activity_score + 2).min(5),
            intensity: "High",
        }
    } else if days_until_ramadhan < 30 {
        ExerciseTier {
            sessions_per_week: 4,
            intensity: "Moderate-High",
        }
    } else {
        let scaled = ((f64::from(activity_score) + 1.0) * 0.8).ceil() as u8;
        ExerciseTier {
            sessions_per_week: scaled.clamp(3, 5),
            intensity: "Moderate",
        }
    }
}

fn rationale(ctx: &PlannerContext<'_>) -> String {
    let mut why = "Regular exercise builds endurance and improves metabolic health.".to_string();
    if ctx.profile.has_goal(Goal::Taraweh) || ctx.profile.has_goal(Goal::QiyamulLail) {
        why.push_str(" Taraweh involves 1-2 hours standing - build stamina to prevent discomfort.");
    }
    if ctx.profile.has_goal(Goal::Umrah) {
        why.push_str(" Umrah requires 5-10km walking in heat while fasting.");
    }
    why
}

pub(super) fn category(ctx: &PlannerContext<'_>) -> Category {
    let days = ctx.metrics.days_until_ramadhan;
    let plan = tier(ctx.metrics.activity_score, days);

    let goals: Vec<String> = ctx
        .profile
        .goals
        .iter()
        .map(|g| g.label().to_string())
        .collect();

    let mut start_date = format!(
        "{} (60 days before Ramadhan)",
        Domain::Exercise.start_date(ctx.today)
    );
    if days < 60 {
        start_date.push_str(" - DEADLINE APPROACHING");
    }

    Category {
        id: Domain::Exercise.id().to_string(),
        icon: Domain::Exercise.icon().to_string(),
        title: Domain::Exercise.title().to_string(),
        current_status: Some(format!(
            "You are: {}",
            ctx.metrics.activity_level.description()
        )),
        urgency: Some(ctx.urgency()),
        sections: vec![
            Section::list("Your Goals", goals),
            Section::text("Critical Start Date", start_date),
            Section::text("Training Intensity", plan.intensity),
            Section::list(
                "Progressive Plan",
                vec![
                    format!(
                        "Week 1-2: {} light sessions (30 min)",
                        plan.sessions_per_week
                    ),
                    "Week 3-4: Mix cardio & strength training".to_string(),
                    "Week 5+: Increase intensity based on progress".to_string(),
                    "Final week: Recovery & light activity".to_string(),
                ],
            ),
            Section::text("Why This Matters", rationale(ctx)),
            Section::list(
                "Success Indicators",
                vec![
                    "Increased endurance during activity".to_string(),
                    "Better sleep quality".to_string(),
                    "Sustained energy throughout day".to_string(),
                    "Improved cardiovascular health".to_string(),
                ],
            ),
        ],
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // Final sprint: frequency tracks the score, capped at 5
    #[case(0, 10, 2, "High")]
    #[case(3, 13, 5, "High")]
    #[case(5, 0, 5, "High")]
    // Under a month: fixed 4x/week
    #[case(0, 14, 4, "Moderate-High")]
    #[case(5, 29, 4, "Moderate-High")]
    // Comfortable window: ceil((score+1)*0.8) clamped to [3,5]
    #[case(0, 30, 3, "Moderate")]
    #[case(2, 60, 3, "Moderate")]
    #[case(3, 60, 4, "Moderate")]
    #[case(4, 100, 4, "Moderate")]
    #[case(5, 100, 5, "Moderate")]
    fn test_tier_selection(
        #[case] score: u8,
        #[case] days: i64,
        #[case] frequency: u8,
        #[case] intensity: &str,
    ) {
        let t = tier(score, days);
        assert_eq!(t.sessions_per_week, frequency);
        assert_eq!(t.intensity, intensity);
    }
}
