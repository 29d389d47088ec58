//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Achievement handlers
    GetUserAchievementsHandler, GetUserAchievementsQuery, InitializeUserAchievementsCommand,
    InitializeUserAchievementsHandler, ListAchievementsHandler, RefreshSummary,
    RefreshUserAchievementsCommand, RefreshUserAchievementsHandler,
    UpdateAchievementProgressCommand, UpdateAchievementProgressHandler,
    // Therapy handlers
    GetTherapyHandler, ListTherapiesHandler, TherapySettingsEditor, UpdateTherapySettingsHandler,
    // Booking reports
    MonthlyRevenueHandler,
};
