//! GetUserAchievements - Query handler for a user's progress rows.

use std::sync::Arc;

use crate::domain::achievement::UserAchievement;
use crate::domain::foundation::UserId;
use crate::ports::UserAchievementRepository;

/// Query for one user's achievements.
#[derive(Debug, Clone)]
pub struct GetUserAchievementsQuery {
    pub user_id: UserId,
}

/// Handler returning rows joined with their catalog entry, newest first.
pub struct GetUserAchievementsHandler {
    repository: Arc<dyn UserAchievementRepository>,
}

impl GetUserAchievementsHandler {
    pub fn new(repository: Arc<dyn UserAchievementRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserAchievementsQuery) -> Vec<UserAchievement> {
        match self.repository.list_for_user(&query.user_id).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(user_id = %query.user_id, error = %e, "Error fetching user achievements");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAchievementStore;
    use crate::domain::achievement::{Achievement, AchievementType, ProgressUpdate};
    use crate::domain::foundation::{AchievementId, DomainError};
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl UserAchievementRepository for FailingRepository {
        async fn list_for_user(&self, _: &UserId) -> Result<Vec<UserAchievement>, DomainError> {
            Err(DomainError::database("timeout"))
        }

        async fn achievement_ids_for_user(
            &self,
            _: &UserId,
        ) -> Result<Vec<AchievementId>, DomainError> {
            Err(DomainError::database("timeout"))
        }

        async fn insert_many(&self, _: &[UserAchievement]) -> Result<(), DomainError> {
            Err(DomainError::database("timeout"))
        }

        async fn find(
            &self,
            _: &UserId,
            _: &AchievementId,
        ) -> Result<Option<UserAchievement>, DomainError> {
            Err(DomainError::database("timeout"))
        }

        async fn update_progress(
            &self,
            _: &UserId,
            _: &AchievementId,
            _: &ProgressUpdate,
        ) -> Result<bool, DomainError> {
            Err(DomainError::database("timeout"))
        }
    }

    fn user() -> UserId {
        UserId::new("user-7").unwrap()
    }

    #[tokio::test]
    async fn returns_joined_rows() {
        let achievement = Achievement::new("Mood Tracker", AchievementType::Mood, 7);
        let store = InMemoryAchievementStore::with_catalog(vec![achievement.clone()]);
        store
            .insert_many(&[UserAchievement::start(user(), achievement.id)])
            .await
            .unwrap();

        let handler = GetUserAchievementsHandler::new(Arc::new(store));
        let rows = handler.handle(GetUserAchievementsQuery { user_id: user() }).await;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].achievement.as_ref().map(|a| a.title.as_str()), Some("Mood Tracker"));
    }

    #[tokio::test]
    async fn backend_failure_yields_empty_list() {
        let handler = GetUserAchievementsHandler::new(Arc::new(FailingRepository));
        let rows = handler.handle(GetUserAchievementsQuery { user_id: user() }).await;
        assert!(rows.is_empty());
    }
}
