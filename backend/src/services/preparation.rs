//! Preparation service - ingestion validation and plan assembly
//!
//! The boundary between the untrusted form payload and the pure engine.
//! Every required field is checked here with a field-identifying error;
//! `generate_plan` itself is only ever called with a validated profile and
//! one pinned reference date.

use crate::error::ApiError;
use chrono::NaiveDate;
use ramadhan_prep_shared::date_math::{deadline_message, ramadhan_2026};
use ramadhan_prep_shared::share::share_text;
use ramadhan_prep_shared::validation::{
    validate_custom_text, validate_date_of_birth, validate_height_cm, validate_name,
    validate_weekly_workout_days, validate_weight_kg, ValidationError, CUSTOM_FIELD_MAX_LEN,
    CUSTOM_GOAL_MAX_LEN,
};
use ramadhan_prep_shared::{
    generate_plan, ActivityType, Gender, Goal, JobType, Plan, Profile, SleepDuration, Urgency,
};
use serde::{Deserialize, Serialize};

/// Raw preparation submission, straight off the wire
///
/// All fields optional so missing-field errors can name the field instead of
/// failing JSON deserialization wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationRequest {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// The form presents gender as a multi-select; exactly one value is accepted
    pub gender: Option<Vec<Gender>>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub job_type: Option<JobType>,
    pub activity_type: Option<Vec<ActivityType>>,
    pub activity_type_custom: Option<String>,
    pub weekly_workout_days: Option<u8>,
    pub sleep_duration: Option<Vec<SleepDuration>>,
    pub sleep_duration_custom: Option<String>,
    pub expectations: Option<Vec<Goal>>,
    pub custom_expectation: Option<String>,
}

/// Plan response returned to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub plan: Plan,
    /// Overall urgency bucket for the banner badge
    pub urgency: Urgency,
    /// Banner deadline message anchored to the 90-day fasting window
    pub deadline: String,
    /// Ready-to-post plain-text summary
    pub share_text: String,
}

/// Preparation service
pub struct PreparationService;

impl PreparationService {
    /// Validate a raw submission into a profile
    ///
    /// Checks run in form order and stop at the first failure, so the client
    /// always gets one actionable field error.
    pub fn validate_submission(
        req: PreparationRequest,
        today: NaiveDate,
    ) -> Result<Profile, ApiError> {
        let name = req.name.ok_or_else(|| ApiError::missing_field("name"))?;
        validate_name(&name).map_err(|msg| field_error("name", &msg))?;

        let date_of_birth = req
            .date_of_birth
            .ok_or_else(|| ApiError::missing_field("dateOfBirth"))?;
        validate_date_of_birth(date_of_birth, today)
            .map_err(|msg| field_error("dateOfBirth", &msg))?;

        let gender_selection = req.gender.ok_or_else(|| ApiError::missing_field("gender"))?;
        let gender = match gender_selection.as_slice() {
            [] => return Err(field_error("gender", "Select at least one option")),
            [single] => *single,
            _ => return Err(field_error("gender", "Select exactly one option")),
        };

        let height_cm = req.height.ok_or_else(|| ApiError::missing_field("height"))?;
        validate_height_cm(height_cm).map_err(|msg| field_error("height", &msg))?;

        let weight_kg = req.weight.ok_or_else(|| ApiError::missing_field("weight"))?;
        validate_weight_kg(weight_kg).map_err(|msg| field_error("weight", &msg))?;

        let job_type = req
            .job_type
            .ok_or_else(|| ApiError::missing_field("jobType"))?;

        let activity_types = req
            .activity_type
            .ok_or_else(|| ApiError::missing_field("activityType"))?;
        if activity_types.is_empty() {
            return Err(field_error("activityType", "Select at least one option"));
        }
        if let Some(ref custom) = req.activity_type_custom {
            validate_custom_text(custom, CUSTOM_FIELD_MAX_LEN)
                .map_err(|msg| field_error("activityTypeCustom", &msg))?;
        }

        let weekly_workout_days = req
            .weekly_workout_days
            .ok_or_else(|| ApiError::missing_field("weeklyWorkoutDays"))?;
        validate_weekly_workout_days(weekly_workout_days)
            .map_err(|msg| field_error("weeklyWorkoutDays", &msg))?;

        let sleep_durations = req
            .sleep_duration
            .ok_or_else(|| ApiError::missing_field("sleepDuration"))?;
        if sleep_durations.is_empty() {
            return Err(field_error("sleepDuration", "Select at least one option"));
        }
        if let Some(ref custom) = req.sleep_duration_custom {
            validate_custom_text(custom, CUSTOM_FIELD_MAX_LEN)
                .map_err(|msg| field_error("sleepDurationCustom", &msg))?;
        }

        let goals = req
            .expectations
            .ok_or_else(|| ApiError::missing_field("expectations"))?;
        if goals.is_empty() {
            return Err(field_error(
                "expectations",
                "At least one expectation must be selected",
            ));
        }
        if let Some(ref custom) = req.custom_expectation {
            validate_custom_text(custom, CUSTOM_GOAL_MAX_LEN)
                .map_err(|msg| field_error("customExpectation", &msg))?;
        }

        Ok(Profile {
            name,
            date_of_birth,
            gender,
            height_cm,
            weight_kg,
            job_type,
            activity_types,
            activity_type_custom: req.activity_type_custom,
            weekly_workout_days,
            sleep_durations,
            sleep_duration_custom: req.sleep_duration_custom,
            goals,
            custom_goal: req.custom_expectation,
        })
    }

    /// Compute the full plan response for a validated profile
    ///
    /// `today` is pinned once per request so every derived date agrees.
    pub fn build_response(profile: &Profile, today: NaiveDate) -> PlanResponse {
        let plan = generate_plan(profile, today);
        let urgency = Urgency::from_days_remaining(plan.days_until_ramadhan);
        let deadline = deadline_message(ramadhan_2026(), today);
        let share = share_text(&profile.goals, plan.days_until_ramadhan, today);

        PlanResponse {
            plan,
            urgency,
            deadline,
            share_text: share,
        }
    }
}

fn field_error(field: &str, message: &str) -> ApiError {
    ApiError::from(ValidationError::new(field, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn complete_request() -> PreparationRequest {
        PreparationRequest {
            name: Some("Hasan".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1991, 3, 10),
            gender: Some(vec![Gender::Male]),
            height: Some(170.0),
            weight: Some(70.0),
            job_type: Some(JobType::Office),
            activity_type: Some(vec![ActivityType::Indoor]),
            activity_type_custom: None,
            weekly_workout_days: Some(2),
            sleep_duration: Some(vec![SleepDuration::SixToSeven]),
            sleep_duration_custom: None,
            expectations: Some(vec![Goal::FullFasting, Goal::Taraweh]),
            custom_expectation: None,
        }
    }

    fn rejected_field(req: PreparationRequest) -> String {
        match PreparationService::validate_submission(req, today()) {
            Err(ApiError::Validation { field, .. }) => field.unwrap(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_submission_builds_profile() {
        let profile =
            PreparationService::validate_submission(complete_request(), today()).unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.weekly_workout_days, 2);
        assert_eq!(profile.goals.len(), 2);
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let cases: Vec<(&str, Box<dyn Fn(&mut PreparationRequest)>)> = vec![
            ("name", Box::new(|r| r.name = None)),
            ("dateOfBirth", Box::new(|r| r.date_of_birth = None)),
            ("gender", Box::new(|r| r.gender = None)),
            ("height", Box::new(|r| r.height = None)),
            ("weight", Box::new(|r| r.weight = None)),
            ("jobType", Box::new(|r| r.job_type = None)),
            ("activityType", Box::new(|r| r.activity_type = None)),
            ("weeklyWorkoutDays", Box::new(|r| r.weekly_workout_days = None)),
            ("sleepDuration", Box::new(|r| r.sleep_duration = None)),
            ("expectations", Box::new(|r| r.expectations = None)),
        ];
        for (field, strip) in cases {
            let mut req = complete_request();
            strip(&mut req);
            assert_eq!(rejected_field(req), field);
        }
    }

    #[test]
    fn test_empty_expectations_rejected() {
        let mut req = complete_request();
        req.expectations = Some(vec![]);
        assert_eq!(rejected_field(req), "expectations");
    }

    #[test]
    fn test_gender_must_be_single_choice() {
        let mut req = complete_request();
        req.gender = Some(vec![Gender::Male, Gender::Female]);
        assert_eq!(rejected_field(req), "gender");

        let mut req = complete_request();
        req.gender = Some(vec![]);
        assert_eq!(rejected_field(req), "gender");
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut req = complete_request();
        req.height = Some(99.0);
        assert_eq!(rejected_field(req), "height");

        let mut req = complete_request();
        req.weight = Some(250.0);
        assert_eq!(rejected_field(req), "weight");

        let mut req = complete_request();
        req.weekly_workout_days = Some(9);
        assert_eq!(rejected_field(req), "weeklyWorkoutDays");

        let mut req = complete_request();
        req.custom_expectation = Some("x".repeat(501));
        assert_eq!(rejected_field(req), "customExpectation");
    }

    #[test]
    fn test_build_response_ties_everything_to_one_date() {
        let profile =
            PreparationService::validate_submission(complete_request(), today()).unwrap();
        let response = PreparationService::build_response(&profile, today());

        assert_eq!(response.plan.days_until_ramadhan, 45);
        assert_eq!(response.urgency, Urgency::High);
        // 2026-01-05 is 45 days past the 90-day critical date (2025-11-21),
        // beyond the 30-day grace band
        assert!(response.deadline.starts_with("VERY LATE"));
        assert!(response.share_text.contains("Days until Ramadhan: 45"));
    }

    #[test]
    fn test_deadline_tier_within_grace_band() {
        let grace_band_day = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let profile =
            PreparationService::validate_submission(complete_request(), grace_band_day).unwrap();
        let response = PreparationService::build_response(&profile, grace_band_day);

        // 19 days past the critical date, still inside the 30-day band
        assert!(response.deadline.starts_with("CRITICAL"));
        assert!(response.deadline.contains("21-11-2025"));
    }
}
