//! Top-level router composing every HTTP adapter.
//!
//! # Routes
//!
//! - `GET /health` - Liveness probe
//! - `GET /api/achievements` - Achievement catalog
//! - `GET /api/users/:user_id/achievements` - A user's progress
//! - `POST /api/users/:user_id/achievements/refresh` - Recompute progress
//! - `GET /api/admin/therapies` - Therapy programs
//! - `GET /api/admin/therapies/:id` - One program
//! - `PUT /api/admin/therapies/:id/settings` - Save general settings
//! - `POST /api/admin/reports/revenue` - Monthly revenue report

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::application::handlers::{
    GetTherapyHandler, GetUserAchievementsHandler, ListAchievementsHandler, ListTherapiesHandler,
    MonthlyRevenueHandler, RefreshUserAchievementsHandler, UpdateTherapySettingsHandler,
};
use crate::ports::{AchievementCatalog, KeyValueStore, TherapyRepository, UserAchievementRepository};

use super::achievements::{achievement_routes, AchievementHandlers};
use super::reports::{report_routes, ReportHandlers};
use super::therapies::{therapy_routes, TherapyHandlers};

/// Ports the HTTP layer is built from.
#[derive(Clone)]
pub struct ApiState {
    pub achievement_catalog: Arc<dyn AchievementCatalog>,
    pub user_achievements: Arc<dyn UserAchievementRepository>,
    pub therapies: Arc<dyn TherapyRepository>,
    pub activity_logs: Arc<dyn KeyValueStore>,
}

impl ApiState {
    pub fn achievement_handlers(&self) -> AchievementHandlers {
        AchievementHandlers::new(
            Arc::new(ListAchievementsHandler::new(self.achievement_catalog.clone())),
            Arc::new(GetUserAchievementsHandler::new(self.user_achievements.clone())),
            Arc::new(RefreshUserAchievementsHandler::new(
                self.achievement_catalog.clone(),
                self.user_achievements.clone(),
                self.activity_logs.clone(),
            )),
        )
    }

    pub fn therapy_handlers(&self) -> TherapyHandlers {
        TherapyHandlers::new(
            Arc::new(ListTherapiesHandler::new(self.therapies.clone())),
            Arc::new(GetTherapyHandler::new(self.therapies.clone())),
            Arc::new(UpdateTherapySettingsHandler::new(self.therapies.clone())),
        )
    }

    pub fn report_handlers(&self) -> ReportHandlers {
        ReportHandlers::new(Arc::new(MonthlyRevenueHandler::new()))
    }
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the full API router. Middleware layers are added by the caller.
pub fn api_router(state: ApiState) -> Router {
    let admin = therapy_routes(state.therapy_handlers())
        .merge(report_routes(state.report_handlers()));

    let api = achievement_routes(state.achievement_handlers()).nest("/admin", admin);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}
