//! Derived metrics that feed achievement progress.

use serde::Serialize;

use super::{Achievement, AchievementType, TherapyMetric};
use crate::domain::activity::ActivitySnapshot;

/// Morning meditations are not tracked by time of day yet; the value is fixed.
pub const MORNING_MEDITATIONS_PLACEHOLDER: u32 = 5;

/// Scalar metrics derived from a user's activity counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityMetrics {
    pub current_streak: u32,
    pub mood_track_days: u32,
    pub mindfulness_sessions: u32,
    pub good_stress_days: u32,
    pub completed_modules: u32,
    pub total_therapy_sessions: u32,
    pub morning_meditations: u32,
}

impl ActivityMetrics {
    pub fn derive(activity: &ActivitySnapshot) -> Self {
        let mindfulness_sessions = (activity.mood_entries as f64 * 0.3).floor() as u32
            + (activity.gratitude_entries as f64 * 0.5).floor() as u32
            + activity.exposure_sessions;

        let completed_modules = [
            activity.cbt_records >= 3,
            activity.gratitude_entries >= 7,
            activity.stress_logs >= 3,
            mindfulness_sessions >= 5,
            activity.video_progress >= 2,
        ]
        .iter()
        .filter(|done| **done)
        .count() as u32;

        let total_therapy_sessions = activity.cbt_records
            + activity.gratitude_entries
            + activity.exposure_sessions
            + activity.video_progress
            + activity.stress_logs;

        Self {
            current_streak: activity.current_streak,
            mood_track_days: activity.mood_entries,
            mindfulness_sessions,
            good_stress_days: activity.good_stress_logs,
            completed_modules,
            total_therapy_sessions,
            morning_meditations: MORNING_MEDITATIONS_PLACEHOLDER,
        }
    }

    /// Progress value for `achievement`, chosen by its type and metric.
    pub fn progress_for(&self, achievement: &Achievement) -> u32 {
        match achievement.achievement_type {
            AchievementType::Streak => self.current_streak,
            AchievementType::Stress => self.good_stress_days,
            AchievementType::Mood => self.mood_track_days,
            AchievementType::Therapy => match achievement.therapy_metric() {
                TherapyMetric::MindfulnessSessions => self.mindfulness_sessions,
                TherapyMetric::CompletedModules => self.completed_modules,
                TherapyMetric::MorningMeditations => self.morning_meditations,
                TherapyMetric::TotalSessions => self.total_therapy_sessions,
            },
            AchievementType::Unknown => 0,
        }
    }
}
