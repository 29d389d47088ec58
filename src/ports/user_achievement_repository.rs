//! User achievement repository port.
//!
//! Rows are keyed by (user, achievement). Implementations must treat that
//! pair as unique.

use async_trait::async_trait;

use crate::domain::achievement::{ProgressUpdate, UserAchievement};
use crate::domain::foundation::{AchievementId, DomainError, UserId};

/// Repository port for per-user achievement progress.
#[async_trait]
pub trait UserAchievementRepository: Send + Sync {
    /// A user's rows with their catalog entry embedded, newest created first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserAchievement>, DomainError>;

    /// Ids of the achievements the user already has a row for.
    async fn achievement_ids_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AchievementId>, DomainError>;

    /// Inserts all rows in one batch.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert_many(&self, rows: &[UserAchievement]) -> Result<(), DomainError>;

    /// Point lookup by composite key.
    async fn find(
        &self,
        user_id: &UserId,
        achievement_id: &AchievementId,
    ) -> Result<Option<UserAchievement>, DomainError>;

    /// Applies `update` to the row matching the composite key.
    ///
    /// Returns `false` when no row matched. `update.earned_at == None` must
    /// leave the stored value unchanged, and a stored `earned = true` is
    /// never cleared.
    async fn update_progress(
        &self,
        user_id: &UserId,
        achievement_id: &AchievementId,
        update: &ProgressUpdate,
    ) -> Result<bool, DomainError>;
}
