//! PostgreSQL implementation of TherapyRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, TherapyId};
use crate::domain::therapy::{Difficulty, Therapy, TherapySettings, TherapyStatus};
use crate::ports::TherapyRepository;

/// Persists therapy programs in `therapies`.
#[derive(Clone)]
pub struct PostgresTherapyRepository {
    pool: PgPool,
}

impl PostgresTherapyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TherapyRow {
    id: String,
    title: String,
    description: String,
    duration: String,
    sessions: i32,
    difficulty: String,
    category: String,
    icon: String,
    color: String,
    tags: Vec<String>,
    status: String,
}

impl TryFrom<TherapyRow> for Therapy {
    type Error = DomainError;

    fn try_from(row: TherapyRow) -> Result<Self, Self::Error> {
        let id = TherapyId::new(row.id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid therapy id: {}", e))
        })?;
        let difficulty = Difficulty::from_label(&row.difficulty).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid difficulty: {}", row.difficulty),
            )
        })?;
        let status = TherapyStatus::from_label(&row.status).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid therapy status: {}", row.status),
            )
        })?;

        Ok(Therapy {
            id,
            title: row.title,
            description: row.description,
            duration: row.duration,
            sessions: row.sessions.max(0) as u32,
            difficulty,
            category: row.category,
            icon: row.icon,
            color: row.color,
            tags: row.tags,
            status,
        })
    }
}

const COLUMNS: &str =
    "id, title, description, duration, sessions, difficulty, category, icon, color, tags, status";

#[async_trait]
impl TherapyRepository for PostgresTherapyRepository {
    async fn list_all(&self) -> Result<Vec<Therapy>, DomainError> {
        let sql = format!("SELECT {} FROM therapies ORDER BY title ASC", COLUMNS);
        let rows: Vec<TherapyRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch therapies: {}", e)))?;

        rows.into_iter().map(Therapy::try_from).collect()
    }

    async fn find_by_id(&self, id: &TherapyId) -> Result<Option<Therapy>, DomainError> {
        let sql = format!("SELECT {} FROM therapies WHERE id = $1", COLUMNS);
        let row: Option<TherapyRow> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch therapy: {}", e)))?;

        row.map(Therapy::try_from).transpose()
    }

    async fn update_settings(
        &self,
        id: &TherapyId,
        settings: &TherapySettings,
    ) -> Result<Option<Therapy>, DomainError> {
        let sql = format!(
            r#"
            UPDATE therapies SET
                title = $2,
                description = $3,
                duration = $4,
                sessions = $5,
                difficulty = $6,
                category = $7,
                icon = $8,
                color = $9,
                tags = $10,
                status = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        let row: Option<TherapyRow> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .bind(&settings.title)
            .bind(&settings.description)
            .bind(&settings.duration)
            .bind(settings.sessions.min(i32::MAX as u32) as i32)
            .bind(settings.difficulty.as_str())
            .bind(&settings.category)
            .bind(&settings.icon)
            .bind(&settings.color)
            .bind(&settings.tags)
            .bind(settings.status.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update therapy: {}", e)))?;

        row.map(Therapy::try_from).transpose()
    }
}
