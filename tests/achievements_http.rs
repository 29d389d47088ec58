//! Integration tests for the achievement endpoints.
//!
//! These drive the full router against in-memory adapters:
//! 1. The catalog is served ordered by requirement
//! 2. A refresh creates rows and writes progress from activity logs
//! 3. Repeated refreshes leave earned timestamps untouched

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;
use mindcare::adapters::InMemoryAchievementStore;
use mindcare::domain::achievement::{default_catalog, Achievement, AchievementType, TherapyMetric};
use mindcare::domain::activity::ActivityKey;
use mindcare::ports::KeyValueStore;

fn app() -> TestApp {
    TestApp::new(InMemoryAchievementStore::with_catalog(vec![
        Achievement::new("Week Warrior", AchievementType::Streak, 7),
        Achievement::new("First Steps", AchievementType::Streak, 3),
        Achievement::new("Mindful meditation", AchievementType::Therapy, 5)
            .with_metric(TherapyMetric::MindfulnessSessions),
    ]))
}

async fn seed_alice(app: &TestApp) {
    app.activity
        .put_json(ActivityKey::Streak.as_str(), &json!({"currentStreak": 5}))
        .await;
    app.activity
        .put_json(
            ActivityKey::ExposureSessions.as_str(),
            &json!([
                {"userId": "alice"}, {"userId": "alice"}, {"userId": "alice"},
                {"userId": "alice"}, {"userId": "alice"}, {"userId": "bob"}
            ]),
        )
        .await;
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = app().get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn catalog_is_ordered_by_requirement() {
    let (status, body) = app().get("/api/achievements").await;

    assert_eq!(status, StatusCode::OK);
    let requirements: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["requirement"].as_u64().unwrap())
        .collect();
    assert_eq!(requirements, vec![3, 5, 7]);
}

#[tokio::test]
async fn new_user_has_no_rows_until_refresh() {
    let (status, body) = app().get("/api/users/alice/achievements").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn refresh_writes_progress_from_activity() {
    let app = app();
    seed_alice(&app).await;

    let (status, summary) = app
        .post("/api/users/alice/achievements/refresh", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["processed"], 3);
    assert_eq!(summary["newly_earned"], 2);
    assert_eq!(summary["metrics"]["current_streak"], 5);
    assert_eq!(summary["metrics"]["mindfulness_sessions"], 5);

    let (_, rows) = app.get("/api/users/alice/achievements").await;
    let rows = rows.as_array().unwrap().clone();
    assert_eq!(rows.len(), 3);

    let row = |title: &str| {
        rows.iter()
            .find(|r| r["achievement"]["title"] == title)
            .cloned()
            .unwrap()
    };
    assert_eq!(row("First Steps")["earned"], true);
    assert!(row("First Steps")["earned_at"].is_string());
    assert_eq!(row("Mindful meditation")["earned"], true);
    assert_eq!(row("Week Warrior")["earned"], false);
    assert_eq!(row("Week Warrior")["progress"], 5);
    assert!(row("Week Warrior").get("earned_at").is_none());
}

#[tokio::test]
async fn second_refresh_keeps_earned_timestamps() {
    let app = app();
    seed_alice(&app).await;
    app.post("/api/users/alice/achievements/refresh", None).await;
    let (_, first) = app.get("/api/users/alice/achievements").await;

    let (_, summary) = app
        .post("/api/users/alice/achievements/refresh", None)
        .await;
    let (_, second) = app.get("/api/users/alice/achievements").await;

    assert_eq!(summary["newly_earned"], 0);
    assert_eq!(app.achievements.row_count().await, 3);
    for row in first.as_array().unwrap() {
        let again = second
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["id"] == row["id"])
            .unwrap();
        assert_eq!(again["earned_at"], row["earned_at"]);
        assert_eq!(again["progress"], row["progress"]);
    }
}

#[tokio::test]
async fn malformed_activity_is_treated_as_empty() {
    let app = app();
    app.activity
        .set(ActivityKey::ExposureSessions.as_str(), "not json".to_string())
        .await
        .unwrap();

    let (status, summary) = app.post("/api/users/alice/achievements/refresh", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["metrics"]["mindfulness_sessions"], 0);
    assert_eq!(summary["processed"], 3);
}

#[tokio::test]
async fn default_catalog_is_servable() {
    let app = TestApp::new(InMemoryAchievementStore::with_catalog(default_catalog()));

    let (status, body) = app.get("/api/achievements").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), default_catalog().len());
}
