//! HTTP routes for achievement endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_user_achievements, list_achievements, refresh_user_achievements, AchievementHandlers,
};

/// Creates the achievement router, mounted under `/api`.
pub fn achievement_routes(handlers: AchievementHandlers) -> Router {
    Router::new()
        .route("/achievements", get(list_achievements))
        .route("/users/:user_id/achievements", get(get_user_achievements))
        .route(
            "/users/:user_id/achievements/refresh",
            post(refresh_user_achievements),
        )
        .with_state(handlers)
}
