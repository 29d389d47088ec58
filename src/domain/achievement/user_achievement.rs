//! Per-user progress rows and the rule for advancing them.

use serde::{Deserialize, Serialize};

use super::Achievement;
use crate::domain::foundation::{AchievementId, Timestamp, UserAchievementId, UserId};

/// A user's progress against one catalog achievement.
///
/// Keyed by (user, achievement). `earned` only ever goes from false to true,
/// and `earned_at` is stamped at that transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    pub id: UserAchievementId,
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub progress: u32,
    pub earned: bool,
    pub earned_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<Achievement>,
}

impl UserAchievement {
    /// Fresh zero-progress row, as created on a user's first pass.
    pub fn start(user_id: UserId, achievement_id: AchievementId) -> Self {
        let now = Timestamp::now();
        Self {
            id: UserAchievementId::new(),
            user_id,
            achievement_id,
            progress: 0,
            earned: false,
            earned_at: None,
            created_at: now,
            updated_at: now,
            achievement: None,
        }
    }

    pub fn with_achievement(mut self, achievement: Achievement) -> Self {
        self.achievement = Some(achievement);
        self
    }

    /// Applies a computed update in place.
    pub fn apply(&mut self, update: &ProgressUpdate) {
        self.progress = update.progress;
        self.earned = self.earned || update.earned;
        if let Some(earned_at) = update.earned_at {
            self.earned_at = Some(earned_at);
        }
        self.updated_at = update.updated_at;
    }
}

/// Write-back for one (user, achievement) row.
///
/// `earned_at` is `Some` only on the call that crosses the threshold; `None`
/// leaves the stored value untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub progress: u32,
    pub earned: bool,
    pub earned_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl ProgressUpdate {
    /// Decides the new row state for `progress` against `requirement`.
    ///
    /// `was_earned` is the stored flag, `None` when the row cannot be read.
    pub fn compute(
        was_earned: Option<bool>,
        progress: u32,
        requirement: u32,
        now: Timestamp,
    ) -> Self {
        let previously_earned = was_earned.unwrap_or(false);
        let reached = progress >= requirement;
        let earned = previously_earned || reached;
        let earned_at = match was_earned {
            Some(false) if reached => Some(now),
            _ => None,
        };

        Self {
            progress,
            earned,
            earned_at,
            updated_at: now,
        }
    }

    /// True when this update is the not-earned to earned transition.
    pub fn is_transition(&self) -> bool {
        self.earned_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::achievement::AchievementType;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn start_is_zero_and_unearned() {
        let row = UserAchievement::start(user(), AchievementId::new());
        assert_eq!(row.progress, 0);
        assert!(!row.earned);
        assert!(row.earned_at.is_none());
        assert_eq!(row.created_at, row.updated_at);
    }

    #[test]
    fn crossing_threshold_stamps_earned_at() {
        let now = Timestamp::now();
        let update = ProgressUpdate::compute(Some(false), 7, 7, now);
        assert!(update.earned);
        assert_eq!(update.earned_at, Some(now));
        assert!(update.is_transition());
    }

    #[test]
    fn already_earned_does_not_restamp() {
        let update = ProgressUpdate::compute(Some(true), 9, 7, Timestamp::now());
        assert!(update.earned);
        assert!(update.earned_at.is_none());
    }

    #[test]
    fn earned_never_reverts_when_progress_drops() {
        let update = ProgressUpdate::compute(Some(true), 2, 7, Timestamp::now());
        assert!(update.earned);
        assert_eq!(update.progress, 2);
    }

    #[test]
    fn below_threshold_stays_unearned() {
        let update = ProgressUpdate::compute(Some(false), 3, 7, Timestamp::now());
        assert!(!update.earned);
        assert!(update.earned_at.is_none());
    }

    #[test]
    fn unreadable_row_reports_earned_without_stamp() {
        let update = ProgressUpdate::compute(None, 10, 7, Timestamp::now());
        assert!(update.earned);
        assert!(update.earned_at.is_none());
    }

    #[test]
    fn apply_keeps_existing_earned_at() {
        let mut row = UserAchievement::start(user(), AchievementId::new())
            .with_achievement(Achievement::new("Calm", AchievementType::Stress, 3));
        let first = ProgressUpdate::compute(Some(false), 3, 3, Timestamp::now());
        row.apply(&first);
        let stamped = row.earned_at;

        let second = ProgressUpdate::compute(Some(true), 4, 3, Timestamp::now().plus_secs(5));
        row.apply(&second);

        assert_eq!(row.earned_at, stamped);
        assert_eq!(row.progress, 4);
        assert_eq!(row.updated_at, second.updated_at);
    }
}
