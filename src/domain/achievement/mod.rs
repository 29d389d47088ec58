//! Achievements: the catalog, per-user progress rows and the metrics that
//! drive them.

mod achievement;
mod catalog;
mod metrics;
mod user_achievement;

pub use achievement::{Achievement, AchievementType, TherapyMetric};
pub use catalog::default_catalog;
pub use metrics::{ActivityMetrics, MORNING_MEDITATIONS_PLACEHOLDER};
pub use user_achievement::{ProgressUpdate, UserAchievement};
