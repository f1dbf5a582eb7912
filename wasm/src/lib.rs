//! Ramadhan Prep WASM Module
//!
//! This crate provides WebAssembly bindings so the countdown and the core
//! calculations can run in the browser, backed by the same engine the
//! backend uses.

use chrono::NaiveDate;
use ramadhan_prep_shared::date_math;
use ramadhan_prep_shared::metabolic;
use ramadhan_prep_shared::Gender;
use wasm_bindgen::prelude::*;

/// Days remaining until Ramadhan 2026 from an ISO date string (yyyy-mm-dd)
///
/// Returns 0 for unparseable input or once the start date has passed.
#[wasm_bindgen]
pub fn days_until_ramadhan(today_iso: &str) -> i64 {
    match NaiveDate::parse_from_str(today_iso, "%Y-%m-%d") {
        Ok(today) => date_math::days_until(date_math::ramadhan_2026(), today),
        Err(_) => 0,
    }
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    metabolic::calculate_bmi(weight_kg, height_cm)
}

/// Calculate TDEE using the original Harris-Benedict equation
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_score: u8,
) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let bmr = metabolic::calculate_bmr(gender, weight_kg, height_cm, age_years as i32);
    metabolic::calculate_tdee(bmr, activity_score)
}

/// Ramadhan calorie target for a given TDEE
#[wasm_bindgen]
pub fn ramadhan_target_calories(tdee: f64) -> i64 {
    metabolic::ramadhan_target_calories(tdee)
}

/// Daily water target in liters
#[wasm_bindgen]
pub fn daily_water_liters(weight_kg: f64, activity_score: u8, is_male: bool) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    metabolic::daily_water_liters(weight_kg, activity_score, gender)
}
