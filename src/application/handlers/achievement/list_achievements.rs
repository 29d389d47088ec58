//! ListAchievements - Query handler for the achievement catalog.

use std::sync::Arc;

use crate::domain::achievement::Achievement;
use crate::ports::AchievementCatalog;

/// Handler returning the catalog ordered by requirement.
///
/// A failed catalog read is logged and yields an empty list.
pub struct ListAchievementsHandler {
    catalog: Arc<dyn AchievementCatalog>,
}

impl ListAchievementsHandler {
    pub fn new(catalog: Arc<dyn AchievementCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Vec<Achievement> {
        match self.catalog.list_by_requirement().await {
            Ok(achievements) => achievements,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching achievements");
                Vec::new()
            }
        }
    }
}
