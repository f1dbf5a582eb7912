//! Calendar arithmetic for the preparation timeline
//!
//! Everything here takes an explicit `today` so the whole plan is computed
//! against one pinned reference date. Callers must never read the wall clock
//! more than once per plan.

use chrono::{Datelike, Duration, NaiveDate};

/// First day of Ramadhan 1447H
pub fn ramadhan_2026() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 19).expect("valid calendar date")
}

/// Days remaining until the event, clamped to zero once it has passed
pub fn days_until(event: NaiveDate, today: NaiveDate) -> i64 {
    (event - today).num_days().max(0)
}

/// Integer age in full years on the reference date
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    let birthday_pending =
        (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day());
    if birthday_pending {
        age -= 1;
    }
    age
}

/// Latest date a preparation track should start
///
/// `lead_days` is how far ahead of the event the track needs; once inside
/// that window the answer clamps to today.
pub fn critical_start_date(event: NaiveDate, lead_days: i64, today: NaiveDate) -> NaiveDate {
    let slack = (days_until(event, today) - lead_days).max(0);
    today + Duration::days(slack)
}

/// Format a date as dd-mm-yyyy, the convention used throughout the plan text
pub fn format_dd_mm_yyyy(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

/// Banner message for the overall preparation deadline
///
/// The deadline is anchored to the fasting-practice window (90 days before
/// the event). Unlike [`days_until`] the distance here is signed: a user who
/// is already past the ideal start date gets progressively blunter copy.
pub fn deadline_message(event: NaiveDate, today: NaiveDate) -> String {
    let critical_date = event - Duration::days(90);
    let days_until_critical = (critical_date - today).num_days();
    let date_str = format_dd_mm_yyyy(critical_date);

    if days_until_critical > 30 {
        format!("Start by {date_str} to achieve all goals ({days_until_critical} days remaining)")
    } else if days_until_critical > 0 {
        format!("URGENT: Start by {date_str} (only {days_until_critical} days left)")
    } else if days_until_critical >= -30 {
        format!("CRITICAL: You should have started on {date_str} - begin immediately")
    } else {
        "VERY LATE: Ideal preparation window passed - do what you can now".to_string()
    }
}
