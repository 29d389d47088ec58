//! PostgreSQL implementation of AchievementCatalog.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::achievement::{Achievement, AchievementType, TherapyMetric};
use crate::domain::foundation::{AchievementId, DomainError, Timestamp};
use crate::ports::AchievementCatalog;

/// Reads the `achievements` table.
#[derive(Clone)]
pub struct PostgresAchievementCatalog {
    pool: PgPool,
}

impl PostgresAchievementCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a catalog entry.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct AchievementRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[sqlx(rename = "type")]
    pub achievement_type: String,
    pub metric: Option<String>,
    pub requirement: i32,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl From<AchievementRow> for Achievement {
    fn from(row: AchievementRow) -> Self {
        Achievement {
            id: AchievementId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            achievement_type: AchievementType::from_tag(&row.achievement_type),
            metric: row.metric.as_deref().and_then(TherapyMetric::from_key),
            requirement: row.requirement.max(0) as u32,
            icon: row.icon,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl AchievementCatalog for PostgresAchievementCatalog {
    async fn list_by_requirement(&self) -> Result<Vec<Achievement>, DomainError> {
        let rows: Vec<AchievementRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, type, metric, requirement, icon, created_at
            FROM achievements
            ORDER BY requirement ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch achievements: {}", e)))?;

        Ok(rows.into_iter().map(Achievement::from).collect())
    }

    async fn find_by_id(&self, id: &AchievementId) -> Result<Option<Achievement>, DomainError> {
        let row: Option<AchievementRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, type, metric, requirement, icon, created_at
            FROM achievements
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch achievement: {}", e)))?;

        Ok(row.map(Achievement::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(achievement_type: &str, metric: Option<&str>) -> AchievementRow {
        AchievementRow {
            id: Uuid::new_v4(),
            title: "Zen Master".to_string(),
            description: "Complete meditation sessions".to_string(),
            achievement_type: achievement_type.to_string(),
            metric: metric.map(str::to_string),
            requirement: 10,
            icon: "Sparkles".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn maps_therapy_metric_column() {
        let achievement = Achievement::from(row("therapy", Some("mindfulness_sessions")));
        assert_eq!(achievement.achievement_type, AchievementType::Therapy);
        assert_eq!(achievement.metric, Some(TherapyMetric::MindfulnessSessions));
        assert_eq!(achievement.requirement, 10);
    }

    #[test]
    fn unknown_metric_falls_back_to_none() {
        let achievement = Achievement::from(row("therapy", Some("sunsets")));
        assert_eq!(achievement.metric, None);
        assert_eq!(achievement.therapy_metric(), TherapyMetric::TotalSessions);
    }

    #[test]
    fn negative_requirement_clamps_to_zero() {
        let mut raw = row("mood", None);
        raw.requirement = -3;
        assert_eq!(Achievement::from(raw).requirement, 0);
    }
}
