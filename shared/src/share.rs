//! Shareable plain-text summary
//!
//! Formats the countdown and a chosen subset of goals into the social-share
//! blurb. Pure text assembly; the caller decides which goals to include.

use crate::profile::Goal;
use chrono::{Duration, NaiveDate};

/// Build the plain-text share blurb
///
/// `goals` is the user-chosen subset to publish; `days_until_ramadhan` comes
/// from the assembled plan so the numbers always agree with the displayed
/// countdown.
pub fn share_text(goals: &[Goal], days_until_ramadhan: i64, today: NaiveDate) -> String {
    let goal_lines = goals
        .iter()
        .map(|g| format!("\u{2022} {}", g.share_label()))
        .collect::<Vec<_>>()
        .join("\n");

    let start_by = today + Duration::days(days_until_ramadhan);

    format!(
        "Preparing for Ramadhan 2026 starting Feb 19! My personalized plan helps me build \
         fitness, adjust sleep, and strengthen my iman.\n\n\
         My Goals:\n{goal_lines}\n\n\
         Days until Ramadhan: {days_until_ramadhan}\n\
         Start by: {start}\n\n\
         Start your plan now!",
        start = start_by.format("%b %-d"),
    )
}
