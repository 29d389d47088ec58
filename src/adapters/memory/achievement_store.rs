//! In-memory achievement catalog and user progress.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::achievement::{Achievement, ProgressUpdate, UserAchievement};
use crate::domain::foundation::{AchievementId, DomainError, UserId};
use crate::ports::{AchievementCatalog, UserAchievementRepository};

type RowKey = (UserId, AchievementId);

/// Catalog plus progress rows, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAchievementStore {
    achievements: Arc<RwLock<Vec<Achievement>>>,
    rows: Arc<RwLock<HashMap<RowKey, UserAchievement>>>,
}

impl InMemoryAchievementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a catalog.
    pub fn with_catalog(achievements: Vec<Achievement>) -> Self {
        Self {
            achievements: Arc::new(RwLock::new(achievements)),
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn add_achievement(&self, achievement: Achievement) {
        self.achievements.write().await.push(achievement);
    }

    /// Number of progress rows across all users
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl AchievementCatalog for InMemoryAchievementStore {
    async fn list_by_requirement(&self) -> Result<Vec<Achievement>, DomainError> {
        let mut achievements = self.achievements.read().await.clone();
        achievements.sort_by_key(|a| a.requirement);
        Ok(achievements)
    }

    async fn find_by_id(&self, id: &AchievementId) -> Result<Option<Achievement>, DomainError> {
        let achievements = self.achievements.read().await;
        Ok(achievements.iter().find(|a| a.id == *id).cloned())
    }
}

#[async_trait]
impl UserAchievementRepository for InMemoryAchievementStore {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserAchievement>, DomainError> {
        let achievements = self.achievements.read().await;
        let rows = self.rows.read().await;

        let mut listed: Vec<UserAchievement> = rows
            .values()
            .filter(|row| row.user_id == *user_id)
            .map(|row| {
                let mut row = row.clone();
                row.achievement = achievements
                    .iter()
                    .find(|a| a.id == row.achievement_id)
                    .cloned();
                row
            })
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn achievement_ids_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AchievementId>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .keys()
            .filter(|(user, _)| user == user_id)
            .map(|(_, achievement_id)| *achievement_id)
            .collect())
    }

    async fn insert_many(&self, new_rows: &[UserAchievement]) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        for row in new_rows {
            let key = (row.user_id.clone(), row.achievement_id);
            if rows.contains_key(&key) {
                return Err(DomainError::database(format!(
                    "Duplicate user achievement for user {} and achievement {}",
                    row.user_id, row.achievement_id
                )));
            }
        }
        for row in new_rows {
            let mut stored = row.clone();
            stored.achievement = None;
            rows.insert((row.user_id.clone(), row.achievement_id), stored);
        }
        Ok(())
    }

    async fn find(
        &self,
        user_id: &UserId,
        achievement_id: &AchievementId,
    ) -> Result<Option<UserAchievement>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&(user_id.clone(), *achievement_id)).cloned())
    }

    async fn update_progress(
        &self,
        user_id: &UserId,
        achievement_id: &AchievementId,
        update: &ProgressUpdate,
    ) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&(user_id.clone(), *achievement_id)) {
            Some(row) => {
                row.apply(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
