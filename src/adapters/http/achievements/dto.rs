//! HTTP DTOs for achievement endpoints.

use serde::Serialize;

use crate::application::handlers::RefreshSummary;
use crate::domain::achievement::{Achievement, ActivityMetrics, UserAchievement};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub achievement_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    pub requirement: u32,
    pub icon: String,
    pub created_at: String,
}

impl From<Achievement> for AchievementResponse {
    fn from(achievement: Achievement) -> Self {
        Self {
            id: achievement.id.to_string(),
            title: achievement.title,
            description: achievement.description,
            achievement_type: achievement.achievement_type.as_str().to_string(),
            metric: achievement.metric.map(|m| m.as_str().to_string()),
            requirement: achievement.requirement,
            icon: achievement.icon,
            created_at: achievement.created_at.to_rfc3339(),
        }
    }
}

/// A user's progress row with its catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct UserAchievementResponse {
    pub id: String,
    pub user_id: String,
    pub achievement_id: String,
    pub progress: u32,
    pub earned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievement: Option<AchievementResponse>,
}

impl From<UserAchievement> for UserAchievementResponse {
    fn from(row: UserAchievement) -> Self {
        Self {
            id: row.id.to_string(),
            user_id: row.user_id.to_string(),
            achievement_id: row.achievement_id.to_string(),
            progress: row.progress,
            earned: row.earned,
            earned_at: row.earned_at.map(|t| t.to_rfc3339()),
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
            achievement: row.achievement.map(Into::into),
        }
    }
}

/// Result of a refresh pass.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub metrics: ActivityMetrics,
    pub processed: usize,
    pub newly_earned: usize,
}

impl From<RefreshSummary> for RefreshResponse {
    fn from(summary: RefreshSummary) -> Self {
        Self {
            metrics: summary.metrics,
            processed: summary.processed,
            newly_earned: summary.newly_earned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::achievement::{AchievementType, TherapyMetric};
    use crate::domain::foundation::UserId;

    #[test]
    fn achievement_response_uses_type_key() {
        let achievement = Achievement::new("Zen Master", AchievementType::Therapy, 20)
            .with_metric(TherapyMetric::MindfulnessSessions);

        let json = serde_json::to_value(AchievementResponse::from(achievement)).unwrap();

        assert_eq!(json["type"], "therapy");
        assert_eq!(json["metric"], "mindfulness_sessions");
        assert_eq!(json["requirement"], 20);
    }

    #[test]
    fn unearned_row_omits_earned_at() {
        let achievement = Achievement::new("Week", AchievementType::Streak, 7);
        let row = UserAchievement::start(UserId::new("u1").unwrap(), achievement.id)
            .with_achievement(achievement);

        let json = serde_json::to_value(UserAchievementResponse::from(row)).unwrap();

        assert!(json.get("earned_at").is_none());
        assert_eq!(json["earned"], false);
        assert_eq!(json["achievement"]["title"], "Week");
    }
}
