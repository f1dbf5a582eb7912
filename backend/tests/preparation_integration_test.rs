//! Integration tests for the preparation plan endpoint

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn complete_submission() -> Value {
    json!({
        "name": "Hasan",
        "dateOfBirth": "1991-03-10",
        "gender": ["male"],
        "height": 170.0,
        "weight": 70.0,
        "jobType": "office",
        "activityType": ["indoor"],
        "weeklyWorkoutDays": 2,
        "sleepDuration": ["6-7"],
        "expectations": ["full-fasting", "taraweh"]
    })
}

#[tokio::test]
async fn test_generate_plan_happy_path() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/preparation", &complete_submission().to_string())
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&body).unwrap();
    let plan = &response["plan"];

    assert!(plan["daysUntilRamadhan"].is_i64());
    assert!((plan["bmi"].as_f64().unwrap() - 24.2).abs() < 0.01);
    assert_eq!(plan["activityScore"], 1);
    // TDEE shifts by a few kcal on the subject's birthday, so only bound it
    let tdee = plan["tdee"].as_i64().unwrap();
    assert!((2000..2500).contains(&tdee));

    let categories = plan["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    let ids: Vec<&str> = categories
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["exercise", "sleep", "nutrition", "fasting", "hydration", "spiritual"]
    );

    assert!(response["urgency"].is_string());
    assert!(!response["deadline"].as_str().unwrap().is_empty());
    assert!(response["shareText"]
        .as_str()
        .unwrap()
        .contains("Ramadhan 2026"));
}

#[tokio::test]
async fn test_trailing_slash_is_a_different_route() {
    let app = common::TestApp::new();

    // No trailing-slash normalization; only the exact path is routed
    let (status, _) = app
        .post("/api/v1/preparation/", &complete_submission().to_string())
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/api/v1/preparation", &complete_submission().to_string())
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_fields_are_named() {
    let app = common::TestApp::new();

    for field in [
        "name",
        "dateOfBirth",
        "gender",
        "height",
        "weight",
        "jobType",
        "activityType",
        "weeklyWorkoutDays",
        "sleepDuration",
        "expectations",
    ] {
        let mut submission = complete_submission();
        submission.as_object_mut().unwrap().remove(field);

        let (status, body) = app
            .post("/api/v1/preparation", &submission.to_string())
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {field}");
        let error: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(error["error"]["field"], field);
    }
}

#[tokio::test]
async fn test_empty_expectations_rejected() {
    let app = common::TestApp::new();

    let mut submission = complete_submission();
    submission["expectations"] = json!([]);

    let (status, body) = app
        .post("/api/v1/preparation", &submission.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"]["field"], "expectations");
}

#[tokio::test]
async fn test_out_of_range_height_rejected() {
    let app = common::TestApp::new();

    let mut submission = complete_submission();
    submission["height"] = json!(99.0);

    let (status, body) = app
        .post("/api/v1/preparation", &submission.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"]["field"], "height");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("100-250"));
}

#[tokio::test]
async fn test_birth_year_outside_window_rejected() {
    let app = common::TestApp::new();

    let mut submission = complete_submission();
    submission["dateOfBirth"] = json!("2015-06-01");

    let (status, body) = app
        .post("/api/v1/preparation", &submission.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"]["field"], "dateOfBirth");
}

#[tokio::test]
async fn test_two_genders_rejected() {
    let app = common::TestApp::new();

    let mut submission = complete_submission();
    submission["gender"] = json!(["male", "female"]);

    let (status, body) = app
        .post("/api/v1/preparation", &submission.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"]["field"], "gender");
}
