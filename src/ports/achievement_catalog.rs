//! Achievement catalog port (read side).
//!
//! The catalog is maintained outside this service; nothing here writes it.

use async_trait::async_trait;

use crate::domain::achievement::Achievement;
use crate::domain::foundation::{AchievementId, DomainError};

/// Read-only access to the achievement catalog.
#[async_trait]
pub trait AchievementCatalog: Send + Sync {
    /// All achievements ordered by requirement ascending.
    async fn list_by_requirement(&self) -> Result<Vec<Achievement>, DomainError>;

    /// Point lookup. Returns `None` for an unknown id.
    async fn find_by_id(&self, id: &AchievementId) -> Result<Option<Achievement>, DomainError>;
}
