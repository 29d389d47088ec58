//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod achievement;
pub mod booking;
pub mod therapy;

pub use achievement::{
    ActivityLogLoader, GetUserAchievementsHandler, GetUserAchievementsQuery,
    InitializeUserAchievementsCommand, InitializeUserAchievementsHandler,
    InitializeUserAchievementsResult, ListAchievementsHandler, ProgressOutcome, RefreshSummary,
    RefreshUserAchievementsCommand, RefreshUserAchievementsHandler,
    UpdateAchievementProgressCommand, UpdateAchievementProgressHandler,
};
pub use booking::{MonthlyRevenueHandler, MonthlyRevenueQuery};
pub use therapy::{
    EditorState, GetTherapyHandler, GetTherapyQuery, ListTherapiesHandler, TherapySettingsEditor,
    UpdateTherapySettingsCommand, UpdateTherapySettingsHandler, SETTINGS_SAVED_MESSAGE,
    THERAPY_MANAGEMENT_ROUTE,
};
