//! HTTP routes for the therapy admin endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{get_therapy, list_therapies, update_therapy_settings, TherapyHandlers};

/// Creates the therapy admin router, mounted under `/api/admin`.
pub fn therapy_routes(handlers: TherapyHandlers) -> Router {
    Router::new()
        .route("/therapies", get(list_therapies))
        .route("/therapies/:id", get(get_therapy))
        .route("/therapies/:id/settings", put(update_therapy_settings))
        .with_state(handlers)
}
