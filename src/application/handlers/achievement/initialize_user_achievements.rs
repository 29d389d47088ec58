//! InitializeUserAchievements - Command handler creating missing progress rows.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::achievement::UserAchievement;
use crate::domain::foundation::UserId;
use crate::ports::{AchievementCatalog, UserAchievementRepository};

/// Command to make sure a user has a row for every catalog achievement.
#[derive(Debug, Clone)]
pub struct InitializeUserAchievementsCommand {
    pub user_id: UserId,
}

/// Outcome of an initialization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitializeUserAchievementsResult {
    pub created: usize,
}

/// Inserts zero-progress rows for achievements the user lacks.
///
/// Backend failures are logged; the pass then creates nothing.
pub struct InitializeUserAchievementsHandler {
    catalog: Arc<dyn AchievementCatalog>,
    repository: Arc<dyn UserAchievementRepository>,
}

impl InitializeUserAchievementsHandler {
    pub fn new(
        catalog: Arc<dyn AchievementCatalog>,
        repository: Arc<dyn UserAchievementRepository>,
    ) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: InitializeUserAchievementsCommand,
    ) -> InitializeUserAchievementsResult {
        let achievements = match self.catalog.list_by_requirement().await {
            Ok(achievements) => achievements,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching achievements");
                return InitializeUserAchievementsResult::default();
            }
        };

        let existing: HashSet<_> = match self.repository.achievement_ids_for_user(&cmd.user_id).await
        {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::error!(user_id = %cmd.user_id, error = %e, "Error fetching existing user achievements");
                return InitializeUserAchievementsResult::default();
            }
        };

        let missing: Vec<UserAchievement> = achievements
            .iter()
            .filter(|a| !existing.contains(&a.id))
            .map(|a| UserAchievement::start(cmd.user_id.clone(), a.id))
            .collect();

        if missing.is_empty() {
            return InitializeUserAchievementsResult::default();
        }

        match self.repository.insert_many(&missing).await {
            Ok(()) => {
                tracing::debug!(user_id = %cmd.user_id, created = missing.len(), "Initialized user achievements");
                InitializeUserAchievementsResult {
                    created: missing.len(),
                }
            }
            Err(e) => {
                tracing::error!(user_id = %cmd.user_id, error = %e, "Error creating user achievements");
                InitializeUserAchievementsResult::default()
            }
        }
    }
}
