//! Achievement command and query handlers.

mod get_user_achievements;
mod initialize_user_achievements;
mod list_achievements;
mod load_activity_logs;
mod refresh_user_achievements;
mod update_achievement_progress;

pub use get_user_achievements::{GetUserAchievementsHandler, GetUserAchievementsQuery};
pub use initialize_user_achievements::{
    InitializeUserAchievementsCommand, InitializeUserAchievementsHandler,
    InitializeUserAchievementsResult,
};
pub use list_achievements::ListAchievementsHandler;
pub use load_activity_logs::ActivityLogLoader;
pub use refresh_user_achievements::{
    RefreshSummary, RefreshUserAchievementsCommand, RefreshUserAchievementsHandler,
};
pub use update_achievement_progress::{
    ProgressOutcome, UpdateAchievementProgressCommand, UpdateAchievementProgressHandler,
};
