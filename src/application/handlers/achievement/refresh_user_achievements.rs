//! RefreshUserAchievements - recomputes every achievement from activity logs.

use std::sync::Arc;

use serde::Serialize;

use super::{
    ActivityLogLoader, InitializeUserAchievementsCommand, InitializeUserAchievementsHandler,
    ProgressOutcome, UpdateAchievementProgressCommand, UpdateAchievementProgressHandler,
};
use crate::domain::achievement::ActivityMetrics;
use crate::domain::foundation::UserId;
use crate::ports::{AchievementCatalog, KeyValueStore, UserAchievementRepository};

/// Command to refresh all achievements of one user.
#[derive(Debug, Clone)]
pub struct RefreshUserAchievementsCommand {
    pub user_id: UserId,
}

/// What a refresh computed and wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub metrics: ActivityMetrics,
    /// Achievements whose progress was written.
    pub processed: usize,
    /// Achievements that crossed their requirement during this refresh.
    pub newly_earned: usize,
}

/// Ensures rows exist, derives metrics and writes progress per achievement.
///
/// Never fails. Per-achievement write errors are logged and skipped.
pub struct RefreshUserAchievementsHandler {
    catalog: Arc<dyn AchievementCatalog>,
    initialize: InitializeUserAchievementsHandler,
    update: UpdateAchievementProgressHandler,
    loader: ActivityLogLoader,
}

impl RefreshUserAchievementsHandler {
    pub fn new(
        catalog: Arc<dyn AchievementCatalog>,
        repository: Arc<dyn UserAchievementRepository>,
        activity: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            initialize: InitializeUserAchievementsHandler::new(catalog.clone(), repository.clone()),
            update: UpdateAchievementProgressHandler::new(catalog.clone(), repository),
            loader: ActivityLogLoader::new(activity),
            catalog,
        }
    }

    pub async fn handle(&self, cmd: RefreshUserAchievementsCommand) -> RefreshSummary {
        self.initialize
            .handle(InitializeUserAchievementsCommand {
                user_id: cmd.user_id.clone(),
            })
            .await;

        let logs = self.loader.load().await;
        let metrics = ActivityMetrics::derive(&logs.snapshot_for(&cmd.user_id));

        let achievements = match self.catalog.list_by_requirement().await {
            Ok(achievements) => achievements,
            Err(e) => {
                tracing::error!(error = %e, "Error updating achievements");
                return RefreshSummary {
                    metrics,
                    ..RefreshSummary::default()
                };
            }
        };

        let mut summary = RefreshSummary {
            metrics,
            ..RefreshSummary::default()
        };

        for achievement in &achievements {
            let progress = metrics.progress_for(achievement);
            let result = self
                .update
                .handle(UpdateAchievementProgressCommand {
                    user_id: cmd.user_id.clone(),
                    achievement_id: achievement.id,
                    progress,
                })
                .await;

            match result {
                Ok(ProgressOutcome::Updated { newly_earned, .. }) => {
                    summary.processed += 1;
                    if newly_earned {
                        summary.newly_earned += 1;
                    }
                }
                Ok(outcome) => {
                    tracing::debug!(achievement_id = %achievement.id, ?outcome, "Progress not written");
                }
                Err(e) => {
                    tracing::error!(
                        user_id = %cmd.user_id,
                        achievement_id = %achievement.id,
                        error = %e,
                        "Error updating achievement progress"
                    );
                }
            }
        }

        tracing::debug!(
            user_id = %cmd.user_id,
            processed = summary.processed,
            newly_earned = summary.newly_earned,
            "Refreshed user achievements"
        );
        summary
    }
}
