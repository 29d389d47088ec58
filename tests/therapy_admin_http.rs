//! Integration tests for the therapy admin and report endpoints.

mod common;

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;
use mindcare::adapters::{InMemoryAchievementStore, TracingEditorFeedback};
use mindcare::application::handlers::{
    EditorState, TherapySettingsEditor, SETTINGS_SAVED_MESSAGE, THERAPY_MANAGEMENT_ROUTE,
};
use mindcare::domain::foundation::TherapyId;
use mindcare::domain::therapy::{Therapy, TherapySettings};
use mindcare::ports::EditorFeedback;

fn app() -> TestApp {
    TestApp::new(InMemoryAchievementStore::new())
}

async fn seed_cbt(app: &TestApp) {
    app.therapies
        .insert(Therapy::new(
            TherapyId::new("cbt").unwrap(),
            TherapySettings {
                title: "CBT".into(),
                sessions: 8,
                ..TherapySettings::default()
            },
        ))
        .await;
}

#[tokio::test]
async fn lists_and_fetches_programs() {
    let app = app();
    seed_cbt(&app).await;

    let (status, list) = app.get("/api/admin/therapies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, therapy) = app.get("/api/admin/therapies/cbt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(therapy["title"], "CBT");
    assert_eq!(therapy["difficulty"], "Beginner");
    assert_eq!(therapy["icon"], "Brain");
}

#[tokio::test]
async fn unknown_program_is_404() {
    let (status, body) = app().get("/api/admin/therapies/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "THERAPY_NOT_FOUND");
}

#[tokio::test]
async fn seeded_server_can_open_and_save_a_program() {
    let app = TestApp::starter(true);

    let (status, list) = app.get("/api/admin/therapies").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!list.as_array().unwrap().is_empty());

    let (status, therapy) = app.get("/api/admin/therapies/cbt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(therapy["title"], "Cognitive Behavioral Therapy");

    let (status, body) = app
        .put(
            "/api/admin/therapies/mindfulness/settings",
            json!({"title": "Mindful Minutes", "sessions": 14, "difficulty": "Beginner", "status": "Active"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["therapy"]["title"], "Mindful Minutes");

    let (_, achievements) = app.get("/api/achievements").await;
    assert!(!achievements.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unseeded_server_starts_empty() {
    let app = TestApp::starter(false);

    let (status, list) = app.get("/api/admin/therapies").await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = app.get("/api/admin/therapies/cbt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn saving_settings_overwrites_the_record() {
    let app = app();
    seed_cbt(&app).await;

    let (status, body) = app
        .put(
            "/api/admin/therapies/cbt/settings",
            json!({
                "title": "Cognitive Behavioral Therapy",
                "description": "Reframe unhelpful thoughts",
                "duration": "15-30 min",
                "sessions": 12,
                "difficulty": "Advanced",
                "category": "Cognitive",
                "tags": ["anxiety"],
                "status": "Inactive"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], SETTINGS_SAVED_MESSAGE);
    assert_eq!(body["therapy"]["sessions"], 12);

    let (_, therapy) = app.get("/api/admin/therapies/cbt").await;
    assert_eq!(therapy["title"], "Cognitive Behavioral Therapy");
    assert_eq!(therapy["difficulty"], "Advanced");
    assert_eq!(therapy["status"], "Inactive");
    assert_eq!(therapy["tags"], json!(["anxiety"]));
}

#[tokio::test]
async fn invalid_difficulty_is_rejected() {
    let app = app();
    seed_cbt(&app).await;

    let (status, body) = app
        .put(
            "/api/admin/therapies/cbt/settings",
            json!({"title": "CBT", "difficulty": "Expert"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn saving_unknown_program_is_404() {
    let (status, _) = app()
        .put("/api/admin/therapies/missing/settings", json!({"title": "x"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn revenue_report_counts_completed_bookings_in_month() {
    let (status, report) = app()
        .post(
            "/api/admin/reports/revenue",
            Some(json!({
                "month": 0,
                "year": 2024,
                "bookings": [
                    {"amount": "$10", "status": "Completed", "date": "2024-01-10"},
                    {"amount": "$90", "status": "pending", "date": "2024-01-11"},
                    {"amount": 40, "status": "completed", "createdAt": "2024-02-01T00:00:00Z"},
                    {"amount": "₹1,000", "status": " COMPLETED ", "timestamp": "2024-01-31T12:00:00Z"}
                ]
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["booking_count"], 3);
    assert_eq!(report["completed_count"], 2);
    assert_eq!(report["revenue"], 1010.0);
}

#[tokio::test]
async fn revenue_report_rejects_month_twelve() {
    let (status, body) = app()
        .post(
            "/api/admin/reports/revenue",
            Some(json!({"month": 12, "year": 2024, "bookings": []})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "OUT_OF_RANGE");
}

// =============================================================================
// Settings editor against the in-memory repository
// =============================================================================

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl EditorFeedback for Recorder {
    fn notify_success(&self, message: &str) {
        self.events.lock().unwrap().push(format!("notice:{}", message));
    }

    fn navigate(&self, route: &str) {
        self.events.lock().unwrap().push(format!("route:{}", route));
    }
}

#[tokio::test]
async fn editor_round_trip_is_visible_over_http() {
    let app = app();
    seed_cbt(&app).await;
    let recorder = Arc::new(Recorder::default());
    let mut editor = TherapySettingsEditor::new(Arc::new(app.therapies.clone()), recorder.clone());

    editor.load(TherapyId::new("cbt").unwrap()).await;
    editor.settings_mut().color = "from-green-500 to-teal-500".into();
    editor.save().await;
    editor.back();

    assert_eq!(editor.state(), EditorState::Saved);
    assert_eq!(
        *recorder.events.lock().unwrap(),
        vec![
            format!("notice:{}", SETTINGS_SAVED_MESSAGE),
            format!("route:{}", THERAPY_MANAGEMENT_ROUTE),
        ]
    );
    let (_, therapy) = app.get("/api/admin/therapies/cbt").await;
    assert_eq!(therapy["color"], "from-green-500 to-teal-500");
}

#[tokio::test]
async fn editor_works_with_tracing_feedback() {
    let app = app();
    seed_cbt(&app).await;
    let mut editor = TherapySettingsEditor::new(
        Arc::new(app.therapies.clone()),
        Arc::new(TracingEditorFeedback),
    );

    editor.load(TherapyId::new("cbt").unwrap()).await;
    editor.settings_mut().sessions = 10;
    editor.save().await;

    assert_eq!(editor.state(), EditorState::Saved);
    assert_eq!(editor.therapy().map(|t| t.sessions), Some(10));
}
