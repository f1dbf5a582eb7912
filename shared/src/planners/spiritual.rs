//! Spiritual readiness planner
//!
//! The most conditional of the six: base sections always present, then one
//! sub-plan per qualifying goal (Quran completion, Taraweh, Qiyamul Lail).
//! When none of the three fire, a generic daily-practice block fills the gap
//! so the card is never just a date.

use super::Domain;
use crate::plan::{Category, PlannerContext, Section};
use crate::profile::Goal;

pub(super) fn sections(ctx: &PlannerContext<'_>) -> Vec<Section> {
    let goals = &ctx.profile.goals;

    let mut sections = vec![
        Section::text(
            "Based on Your Expectations",
            format!("{} goals selected", goals.len()),
        ),
        Section::text("Critical Start Date", Domain::Spiritual.start_date(ctx.today)),
    ];
    let base_len = sections.len();

    if goals.contains(&Goal::CompleteQuran) {
        sections.push(Section::text(
            "Quran Goal",
            "Complete Quran recitation (604 pages, ~20 pages daily during Ramadhan)",
        ));
        sections.push(Section::list(
            "Preparation Now",
            vec![
                "Week 1-4: 5-10 pages daily".to_string(),
                "Week 5+: 15 pages daily".to_string(),
                "Build consistency before Ramadhan".to_string(),
            ],
        ));
    }

    if goals.contains(&Goal::Taraweh) {
        sections.push(Section::list(
            "Taraweh Preparation",
            vec![
                "Practice standing for 15-20 minutes".to_string(),
                "Strengthen legs and lower back".to_string(),
                "Learn Taraweh du'as and surahs".to_string(),
            ],
        ));
    }

    if goals.contains(&Goal::QiyamulLail) {
        sections.push(Section::list(
            "Qiyamul Lail Preparation",
            vec![
                "Practice 2x per week at 2-4 AM".to_string(),
                "Combine with sleep adjustment plan".to_string(),
                "Start with 15 minutes, gradually increase".to_string(),
            ],
        ));
    }

    // No conditional block fired: generic fallback
    if sections.len() == base_len {
        sections.push(Section::list(
            "Daily Spiritual Practice",
            vec![
                "15+ minutes Quran recitation daily".to_string(),
                "All 5 daily prayers on time".to_string(),
                "2 raka'ah tahajjud (night prayer) when possible".to_string(),
            ],
        ));
    }

    sections.push(Section::text(
        "Why This Matters",
        "Spiritual groundwork strengthens intention, deepens connection, and maximizes the \
         blessing of Ramadhan.",
    ));

    sections
}

pub(super) fn category(ctx: &PlannerContext<'_>) -> Category {
    Category {
        id: Domain::Spiritual.id().to_string(),
        icon: Domain::Spiritual.icon().to_string(),
        title: Domain::Spiritual.title().to_string(),
        current_status: None,
        urgency: None,
        sections: sections(ctx),
        warnings: Vec::new(),
    }
}
