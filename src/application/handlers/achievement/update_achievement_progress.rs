//! UpdateAchievementProgress - Command handler writing one progress value.

use std::sync::Arc;

use crate::domain::achievement::ProgressUpdate;
use crate::domain::foundation::{AchievementId, DomainError, Timestamp, UserId};
use crate::ports::{AchievementCatalog, UserAchievementRepository};

/// Command to record `progress` for one (user, achievement) pair.
#[derive(Debug, Clone)]
pub struct UpdateAchievementProgressCommand {
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub progress: u32,
}

/// What an update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    /// The achievement id is not in the catalog; nothing was written.
    UnknownAchievement,
    /// The user has no row for the achievement; nothing was written.
    MissingRow,
    Updated { earned: bool, newly_earned: bool },
}

/// Writes progress, stamping `earned_at` when the threshold is first reached.
pub struct UpdateAchievementProgressHandler {
    catalog: Arc<dyn AchievementCatalog>,
    repository: Arc<dyn UserAchievementRepository>,
}

impl UpdateAchievementProgressHandler {
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
        cmd: UpdateAchievementProgressCommand,
    ) -> Result<ProgressOutcome, DomainError> {
        // 1. Requirement from the catalog
        let Some(achievement) = self.catalog.find_by_id(&cmd.achievement_id).await? else {
            return Ok(ProgressOutcome::UnknownAchievement);
        };

        // 2. Current earned flag; an unreadable row still gets its progress
        let was_earned = match self.repository.find(&cmd.user_id, &cmd.achievement_id).await {
            Ok(Some(current)) => Some(current.earned),
            Ok(None) => return Ok(ProgressOutcome::MissingRow),
            Err(e) => {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    achievement_id = %cmd.achievement_id,
                    error = %e,
                    "Failed to read achievement row, writing progress without earned_at"
                );
                None
            }
        };

        // 3. Decide and write back
        let update = ProgressUpdate::compute(
            was_earned,
            cmd.progress,
            achievement.requirement,
            Timestamp::now(),
        );
        let matched = self
            .repository
            .update_progress(&cmd.user_id, &cmd.achievement_id, &update)
            .await?;

        if !matched {
            return Ok(ProgressOutcome::MissingRow);
        }

        if update.is_transition() {
            tracing::info!(
                user_id = %cmd.user_id,
                achievement = %achievement.title,
                "Achievement earned"
            );
        }

        Ok(ProgressOutcome::Updated {
            earned: update.earned,
            newly_earned: update.is_transition(),
        })
    }
}
