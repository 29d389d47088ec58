//! PostgreSQL implementation of UserAchievementRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::achievement_catalog::AchievementRow;
use crate::domain::achievement::{Achievement, ProgressUpdate, UserAchievement};
use crate::domain::foundation::{
    AchievementId, DomainError, ErrorCode, Timestamp, UserAchievementId, UserId,
};
use crate::ports::UserAchievementRepository;

/// Persists progress rows in `user_achievements`.
#[derive(Clone)]
pub struct PostgresUserAchievementRepository {
    pool: PgPool,
}

impl PostgresUserAchievementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Progress row with the joined catalog columns (all nullable from the join).
#[derive(Debug, sqlx::FromRow)]
struct UserAchievementRow {
    id: Uuid,
    user_id: String,
    achievement_id: Uuid,
    progress: i32,
    earned: bool,
    earned_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    a_title: Option<String>,
    a_description: Option<String>,
    a_type: Option<String>,
    a_metric: Option<String>,
    a_requirement: Option<i32>,
    a_icon: Option<String>,
    a_created_at: Option<DateTime<Utc>>,
}

impl UserAchievementRow {
    fn joined_achievement(&self) -> Option<Achievement> {
        Some(Achievement::from(AchievementRow {
            id: self.achievement_id,
            title: self.a_title.clone()?,
            description: self.a_description.clone().unwrap_or_default(),
            achievement_type: self.a_type.clone()?,
            metric: self.a_metric.clone(),
            requirement: self.a_requirement?,
            icon: self.a_icon.clone().unwrap_or_default(),
            created_at: self.a_created_at?,
        }))
    }
}

impl TryFrom<UserAchievementRow> for UserAchievement {
    type Error = DomainError;

    fn try_from(row: UserAchievementRow) -> Result<Self, Self::Error> {
        let achievement = row.joined_achievement();
        Ok(UserAchievement {
            id: UserAchievementId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            achievement_id: AchievementId::from_uuid(row.achievement_id),
            progress: row.progress.max(0) as u32,
            earned: row.earned,
            earned_at: row.earned_at.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
            achievement,
        })
    }
}

const SELECT_JOINED: &str = r#"
    SELECT ua.id, ua.user_id, ua.achievement_id, ua.progress, ua.earned,
           ua.earned_at, ua.created_at, ua.updated_at,
           a.title AS a_title, a.description AS a_description, a.type AS a_type,
           a.metric AS a_metric, a.requirement AS a_requirement, a.icon AS a_icon,
           a.created_at AS a_created_at
    FROM user_achievements ua
    LEFT JOIN achievements a ON a.id = ua.achievement_id
"#;

fn clamp_progress(progress: u32) -> i32 {
    progress.min(i32::MAX as u32) as i32
}

#[async_trait]
impl UserAchievementRepository for PostgresUserAchievementRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserAchievement>, DomainError> {
        let sql = format!("{} WHERE ua.user_id = $1 ORDER BY ua.created_at DESC", SELECT_JOINED);
        let rows: Vec<UserAchievementRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to fetch user achievements: {}", e))
            })?;

        rows.into_iter().map(UserAchievement::try_from).collect()
    }

    async fn achievement_ids_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AchievementId>, DomainError> {
        let ids: Vec<(Uuid,)> =
            sqlx::query_as("SELECT achievement_id FROM user_achievements WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to fetch achievement ids: {}", e))
                })?;

        Ok(ids.into_iter().map(|(id,)| AchievementId::from_uuid(id)).collect())
    }

    async fn insert_many(&self, rows: &[UserAchievement]) -> Result<(), DomainError> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO user_achievements \
             (id, user_id, achievement_id, progress, earned, earned_at, created_at, updated_at) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(*row.id.as_uuid())
                .push_bind(row.user_id.as_str().to_string())
                .push_bind(*row.achievement_id.as_uuid())
                .push_bind(clamp_progress(row.progress))
                .push_bind(row.earned)
                .push_bind(row.earned_at.map(|t| *t.as_datetime()))
                .push_bind(*row.created_at.as_datetime())
                .push_bind(*row.updated_at.as_datetime());
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert user achievements: {}", e))
            })?;

        Ok(())
    }

    async fn find(
        &self,
        user_id: &UserId,
        achievement_id: &AchievementId,
    ) -> Result<Option<UserAchievement>, DomainError> {
        let sql = format!(
            "{} WHERE ua.user_id = $1 AND ua.achievement_id = $2",
            SELECT_JOINED
        );
        let row: Option<UserAchievementRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .bind(achievement_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to fetch user achievement: {}", e))
            })?;

        row.map(UserAchievement::try_from).transpose()
    }

    async fn update_progress(
        &self,
        user_id: &UserId,
        achievement_id: &AchievementId,
        update: &ProgressUpdate,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE user_achievements SET
                progress = $3,
                earned = earned OR $4,
                earned_at = COALESCE($5, earned_at),
                updated_at = $6
            WHERE user_id = $1 AND achievement_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(achievement_id.as_uuid())
        .bind(clamp_progress(update.progress))
        .bind(update.earned)
        .bind(update.earned_at.map(|t| *t.as_datetime()))
        .bind(update.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to update achievement progress: {}", e))
        })?;

        Ok(result.rows_affected() > 0)
    }
}
