//! Metabolic calculations
//!
//! BMI, BMR, TDEE, Ramadhan calorie targets, macronutrient split and the
//! daily water target. All pure functions over the validated profile domain;
//! validation guarantees height and weight are bounded away from zero, so no
//! defensive checks are needed here.

use crate::profile::Gender;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Human-readable description used in the nutrition status line
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the original Harris-Benedict equation
///
/// Men: BMR = 66 + 13.7 × weight(kg) + 5 × height(cm) - 6.8 × age(y)
/// Women: BMR = 655 + 9.6 × weight(kg) + 1.8 × height(cm) - 4.7 × age(y)
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: i32) -> f64 {
    match gender {
        Gender::Male => 66.0 + 13.7 * weight_kg + 5.0 * height_cm - 6.8 * age_years as f64,
        Gender::Female => 655.0 + 9.6 * weight_kg + 1.8 * height_cm - 4.7 * age_years as f64,
    }
}

/// TDEE multiplier for an activity score
///
/// Scores above 4 share the top multiplier.
pub fn activity_multiplier(activity_score: u8) -> f64 {
    const MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];
    MULTIPLIERS[usize::from(activity_score).min(4)]
}

/// Total Daily Energy Expenditure
pub fn calculate_tdee(bmr: f64, activity_score: u8) -> f64 {
    bmr * activity_multiplier(activity_score)
}

/// Ramadhan calorie target: a 7% deficit for the reduced eating window
pub fn ramadhan_target_calories(tdee: f64) -> i64 {
    (tdee * 0.93).round() as i64
}

// ============================================================================
// Macronutrient split
// ============================================================================

/// Macro grams derived from the Ramadhan calorie target
///
/// The split is 50% carbs / 25% protein / 25% fat of target calories at
/// 4 / 4 / 9 kcal per gram, each rounded independently. Reported percentages
/// are recomputed from the rounded grams, so they can drift a point or two
/// from the nominal ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carbs_g: i64,
    pub protein_g: i64,
    pub fat_g: i64,
}

impl MacroSplit {
    /// Compute the split for a calorie target
    pub fn from_target_calories(target: i64) -> Self {
        let target = target as f64;
        Self {
            carbs_g: (target * 0.5 / 4.0).round() as i64,
            protein_g: (target * 0.25 / 4.0).round() as i64,
            fat_g: (target * 0.25 / 9.0).round() as i64,
        }
    }

    fn total_grams(&self) -> f64 {
        (self.carbs_g + self.protein_g + self.fat_g) as f64
    }

    /// Carb share of total grams, rounded percent
    pub fn carbs_percent(&self) -> i64 {
        (self.carbs_g as f64 / self.total_grams() * 100.0).round() as i64
    }

    /// Protein share of total grams, rounded percent
    pub fn protein_percent(&self) -> i64 {
        (self.protein_g as f64 / self.total_grams() * 100.0).round() as i64
    }

    /// Fat share of total grams, rounded percent
    pub fn fat_percent(&self) -> i64 {
        (self.fat_g as f64 / self.total_grams() * 100.0).round() as i64
    }

    /// Calories recombined from the rounded grams
    pub fn total_kcal(&self) -> i64 {
        4 * self.carbs_g + 4 * self.protein_g + 9 * self.fat_g
    }
}

// ============================================================================
// Hydration
// ============================================================================

/// Recommended daily water intake in milliliters
///
/// Base 35 ml per kg, +500 ml for activity score >= 3, +200 ml for men.
pub fn daily_water_ml(weight_kg: f64, activity_score: u8, gender: Gender) -> f64 {
    let mut ml = weight_kg * 35.0;
    if activity_score >= 3 {
        ml += 500.0;
    }
    if gender == Gender::Male {
        ml += 200.0;
    }
    ml
}

/// Daily water target in liters
pub fn daily_water_liters(weight_kg: f64, activity_score: u8, gender: Gender) -> f64 {
    daily_water_ml(weight_kg, activity_score, gender) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 170cm -> 24.22
        let bmi = calculate_bmi(70.0, 170.0);
        assert!((bmi - 24.22).abs() < 0.01);
    }

    #[rstest]
    #[case(17.0, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::NormalWeight)]
    #[case(24.9, BmiCategory::NormalWeight)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn test_bmi_category_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_bmr_harris_benedict() {
        // 35yo male, 70kg, 170cm: 66 + 959 + 850 - 238 = 1637
        let bmr = calculate_bmr(Gender::Male, 70.0, 170.0, 35);
        assert!((bmr - 1637.0).abs() < 0.001);

        // 35yo female, 60kg, 165cm: 655 + 576 + 297 - 164.5 = 1363.5
        let bmr = calculate_bmr(Gender::Female, 60.0, 165.0, 35);
        assert!((bmr - 1363.5).abs() < 0.001);
    }

    #[rstest]
    #[case(0, 1.2)]
    #[case(1, 1.375)]
    #[case(2, 1.55)]
    #[case(3, 1.725)]
    #[case(4, 1.9)]
    #[case(5, 1.9)]
    fn test_activity_multiplier_table(#[case] score: u8, #[case] expected: f64) {
        assert_eq!(activity_multiplier(score), expected);
    }

    #[test]
    fn test_ramadhan_target_is_seven_percent_deficit() {
        assert_eq!(ramadhan_target_calories(2000.0), 1860);
        assert_eq!(ramadhan_target_calories(2251.0), 2093);
    }

    #[test]
    fn test_macro_split_grams() {
        let split = MacroSplit::from_target_calories(2000);
        assert_eq!(split.carbs_g, 250); // 1000 kcal / 4
        assert_eq!(split.protein_g, 125); // 500 kcal / 4
        assert_eq!(split.fat_g, 56); // 500 kcal / 9, rounded
    }

    #[test]
    fn test_macro_percentages_recomputed_from_grams() {
        let split = MacroSplit::from_target_calories(2000);
        // 250 + 125 + 56 = 431 grams total
        assert_eq!(split.carbs_percent(), 58);
        assert_eq!(split.protein_percent(), 29);
        assert_eq!(split.fat_percent(), 13);
    }

    #[test]
    fn test_water_target_bonuses() {
        // 70kg, low activity, female: base only
        assert_eq!(daily_water_ml(70.0, 2, Gender::Female), 2450.0);
        // Activity bonus kicks in at score 3
        assert_eq!(daily_water_ml(70.0, 3, Gender::Female), 2950.0);
        // Male bonus stacks on top
        assert_eq!(daily_water_ml(70.0, 3, Gender::Male), 3150.0);
        assert!((daily_water_liters(70.0, 3, Gender::Male) - 3.15).abs() < 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// BMI is positive and monotone in weight over the validated domain
        #[test]
        fn prop_bmi_positive(weight in 30.0f64..=200.0, height in 100.0f64..=250.0) {
            prop_assert!(calculate_bmi(weight, height) > 0.0);
        }

        /// BMR stays positive over the validated profile domain
        #[test]
        fn prop_bmr_positive(
            weight in 30.0f64..=200.0,
            height in 100.0f64..=250.0,
            age in 15i32..=86,
        ) {
            prop_assert!(calculate_bmr(Gender::Male, weight, height, age) > 0.0);
            prop_assert!(calculate_bmr(Gender::Female, weight, height, age) > 0.0);
        }

        /// Recombined macro calories land within 1% of the target
        #[test]
        fn prop_macros_recombine_close_to_target(target in 1000i64..=4000) {
            let split = MacroSplit::from_target_calories(target);
            let recombined = split.total_kcal();
            let drift = (recombined - target).abs() as f64 / target as f64;
            prop_assert!(drift < 0.01, "target {target}, recombined {recombined}");
        }

        /// Water target grows with weight and never loses the bonuses
        #[test]
        fn prop_water_bonuses_monotone(weight in 30.0f64..=200.0) {
            let base = daily_water_ml(weight, 0, Gender::Female);
            let active = daily_water_ml(weight, 3, Gender::Female);
            let active_male = daily_water_ml(weight, 3, Gender::Male);
            prop_assert_eq!(active, base + 500.0);
            prop_assert_eq!(active_male, active + 200.0);
        }
    }
}
