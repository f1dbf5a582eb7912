//! Sleep planner

use super::Domain;
use crate::plan::{Category, PlannerContext, Section};
use crate::profile::SleepDuration;

/// Nightly target in hours
///
/// Anyone currently at 8 hours or below targets a full 8; only the
/// "more than 8" (and custom) respondents get 7.5. Counter-intuitive for
/// over-sleepers, but this is the established policy.
pub(super) fn target_hours(durations: &[SleepDuration]) -> f64 {
    let within_eight = durations.iter().any(|d| {
        matches!(
            d,
            SleepDuration::LessThan6 | SleepDuration::SixToSeven | SleepDuration::Eight
        )
    });
    if within_eight {
        8.0
    } else {
        7.5
    }
}

fn format_target(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0} hours nightly")
    } else {
        format!("{hours} hours nightly")
    }
}

pub(super) fn category(ctx: &PlannerContext<'_>) -> Category {
    let days = ctx.metrics.days_until_ramadhan;
    let target = target_hours(&ctx.profile.sleep_durations);

    let warnings = if days < 30 {
        vec!["Limited time - prioritize sleep adjustment immediately".to_string()]
    } else {
        Vec::new()
    };

    Category {
        id: Domain::Sleep.id().to_string(),
        icon: Domain::Sleep.icon().to_string(),
        title: Domain::Sleep.title().to_string(),
        current_status: Some(format!(
            "You sleep: {} hours",
            ctx.profile.primary_sleep_duration().description()
        )),
        urgency: Some(ctx.urgency()),
        sections: vec![
            Section::text("Target Hours", format_target(target)),
            Section::text("Critical Start Date", Domain::Sleep.start_date(ctx.today)),
            Section::list(
                "Week 1-2: Establish Routine",
                vec![
                    "Set consistent bedtime".to_string(),
                    "Track sleep quality".to_string(),
                    "Adjust room environment".to_string(),
                ],
            ),
            Section::list(
                "Week 3-6: Stabilize",
                vec![
                    "Maintain new schedule".to_string(),
                    "Optimize sleep environment".to_string(),
                    "Prepare for Ramadhan shifts".to_string(),
                ],
            ),
            Section::text(
                "Why This Matters",
                "Proper sleep is crucial for Qiyam and maintaining focus. Adjusting early helps \
                 your body adapt naturally.",
            ),
        ],
        warnings,
    }
}
