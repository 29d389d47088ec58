//! Starter catalog used when no catalog is managed externally.

use super::{Achievement, AchievementType, TherapyMetric};

/// The achievements a fresh in-memory deployment starts with.
pub fn default_catalog() -> Vec<Achievement> {
    vec![
        Achievement::new("First Steps", AchievementType::Streak, 3)
            .with_description("Check in three days in a row")
            .with_icon("Flame"),
        Achievement::new("Week Warrior", AchievementType::Streak, 7)
            .with_description("Keep a seven day streak")
            .with_icon("Flame"),
        Achievement::new("Mood Tracker", AchievementType::Mood, 7)
            .with_description("Log your mood on seven days")
            .with_icon("Smile"),
        Achievement::new("Stress Buster", AchievementType::Stress, 5)
            .with_description("Five stress techniques rated 7 or higher")
            .with_icon("Shield"),
        Achievement::new("Mindful meditation", AchievementType::Therapy, 10)
            .with_metric(TherapyMetric::MindfulnessSessions)
            .with_description("Complete ten mindfulness sessions")
            .with_icon("Leaf"),
        Achievement::new("Early morning", AchievementType::Therapy, 5)
            .with_metric(TherapyMetric::MorningMeditations)
            .with_description("Meditate in the morning five times")
            .with_icon("Sunrise"),
        Achievement::new("Therapy Graduate", AchievementType::Therapy, 5)
            .with_metric(TherapyMetric::CompletedModules)
            .with_description("Complete every therapy module")
            .with_icon("GraduationCap"),
        Achievement::new("Dedicated Learner", AchievementType::Therapy, 25)
            .with_metric(TherapyMetric::TotalSessions)
            .with_description("Finish twenty-five therapy sessions")
            .with_icon("BookOpen"),
    ]
}
