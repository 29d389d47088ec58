//! Therapy repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TherapyId};
use crate::domain::therapy::{Therapy, TherapySettings};

/// Persistence for therapy programs.
#[async_trait]
pub trait TherapyRepository: Send + Sync {
    /// All programs, ordered by title.
    async fn list_all(&self) -> Result<Vec<Therapy>, DomainError>;

    async fn find_by_id(&self, id: &TherapyId) -> Result<Option<Therapy>, DomainError>;

    /// Overwrites the editable fields and returns the stored record.
    ///
    /// Returns `None` if the program does not exist. No version check is
    /// made; the last write wins.
    async fn update_settings(
        &self,
        id: &TherapyId,
        settings: &TherapySettings,
    ) -> Result<Option<Therapy>, DomainError>;
}
