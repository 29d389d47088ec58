//! HTTP adapter for achievement endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AchievementResponse, RefreshResponse, UserAchievementResponse};
pub use handlers::AchievementHandlers;
pub use routes::achievement_routes;
