//! Input validation functions
//!
//! Range and length checks for the raw preparation submission. Required-field
//! and non-empty-set checks live at the ingestion boundary; everything here is
//! a pure check over a single field value.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Validate the submitted name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range matches the form: 100-250 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if !(100.0..=250.0).contains(&height_cm) {
        return Err("Height must be between 100-250 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
/// Valid range matches the form: 30-200 kg
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if !(30.0..=200.0).contains(&weight_kg) {
        return Err("Weight must be between 30-200 kg".to_string());
    }
    Ok(())
}

/// Validate date of birth against a pinned reference date
///
/// The birth year must fall in [1940, 2010] and the date must be strictly
/// before `today`. Taking `today` as a parameter keeps the check
/// deterministic under test.
pub fn validate_date_of_birth(dob: NaiveDate, today: NaiveDate) -> Result<(), String> {
    if dob >= today {
        return Err("Date of birth must be in the past".to_string());
    }
    let year = dob.year();
    if !(1940..=2010).contains(&year) {
        return Err("Birth year must be between 1940 and 2010".to_string());
    }
    Ok(())
}

/// Validate weekly workout days (0-7)
pub fn validate_weekly_workout_days(days: u8) -> Result<(), String> {
    if days > 7 {
        return Err("Workout days must be between 0 and 7".to_string());
    }
    Ok(())
}

/// Validate an optional free-text field against a length cap
pub fn validate_custom_text(text: &str, max_len: usize) -> Result<(), String> {
    if text.chars().count() > max_len {
        return Err(format!("Must be {max_len} characters or less"));
    }
    Ok(())
}

/// Character cap for the custom activity-type and sleep-duration fields
pub const CUSTOM_FIELD_MAX_LEN: usize = 100;
/// Character cap for the custom expectation field
pub const CUSTOM_GOAL_MAX_LEN: usize = 500;

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "dateOfBirth" => "Date of Birth",
        "gender" => "Gender",
        "height" | "heightCm" => "Height",
        "weight" | "weightKg" => "Weight",
        "jobType" => "Job Type",
        "activityType" | "activityTypes" => "Activity Type",
        "activityTypeCustom" => "Custom Activity Type",
        "weeklyWorkoutDays" => "Weekly Workout Days",
        "sleepDuration" | "sleepDurations" => "Sleep Duration",
        "sleepDurationCustom" => "Custom Sleep Duration",
        "expectations" => "Ramadhan Goals",
        "customExpectation" => "Custom Expectation",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Error, Debug, Clone)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
