//! HTTP handlers for achievement endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::{
    GetUserAchievementsHandler, GetUserAchievementsQuery, ListAchievementsHandler,
    RefreshUserAchievementsCommand, RefreshUserAchievementsHandler,
};
use crate::domain::foundation::UserId;

use super::dto::{AchievementResponse, RefreshResponse, UserAchievementResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AchievementHandlers {
    list_handler: Arc<ListAchievementsHandler>,
    user_handler: Arc<GetUserAchievementsHandler>,
    refresh_handler: Arc<RefreshUserAchievementsHandler>,
}

impl AchievementHandlers {
    pub fn new(
        list_handler: Arc<ListAchievementsHandler>,
        user_handler: Arc<GetUserAchievementsHandler>,
        refresh_handler: Arc<RefreshUserAchievementsHandler>,
    ) -> Self {
        Self {
            list_handler,
            user_handler,
            refresh_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/achievements - Catalog ordered by requirement
pub async fn list_achievements(State(handlers): State<AchievementHandlers>) -> Response {
    let achievements: Vec<AchievementResponse> = handlers
        .list_handler
        .handle()
        .await
        .into_iter()
        .map(Into::into)
        .collect();
    (StatusCode::OK, Json(achievements)).into_response()
}

/// GET /api/users/:user_id/achievements - A user's progress rows
pub async fn get_user_achievements(
    State(handlers): State<AchievementHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match parse_user_id(user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let rows: Vec<UserAchievementResponse> = handlers
        .user_handler
        .handle(GetUserAchievementsQuery { user_id })
        .await
        .into_iter()
        .map(Into::into)
        .collect();
    (StatusCode::OK, Json(rows)).into_response()
}

/// POST /api/users/:user_id/achievements/refresh - Recompute progress
pub async fn refresh_user_achievements(
    State(handlers): State<AchievementHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match parse_user_id(user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let summary = handlers
        .refresh_handler
        .handle(RefreshUserAchievementsCommand { user_id })
        .await;
    (StatusCode::OK, Json(RefreshResponse::from(summary))).into_response()
}

fn parse_user_id(raw: String) -> Result<UserId, Response> {
    UserId::new(raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid user ID")),
        )
            .into_response()
    })
}
