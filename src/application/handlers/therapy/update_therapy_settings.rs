//! UpdateTherapySettings - Command handler for the general settings form.

use std::sync::Arc;

use super::get_therapy::not_found;
use crate::domain::foundation::{DomainError, TherapyId};
use crate::domain::therapy::{Therapy, TherapySettings};
use crate::ports::TherapyRepository;

#[derive(Debug, Clone)]
pub struct UpdateTherapySettingsCommand {
    pub therapy_id: TherapyId,
    pub settings: TherapySettings,
}

/// Overwrites a program's editable fields; last write wins.
pub struct UpdateTherapySettingsHandler {
    repository: Arc<dyn TherapyRepository>,
}

impl UpdateTherapySettingsHandler {
    pub fn new(repository: Arc<dyn TherapyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateTherapySettingsCommand) -> Result<Therapy, DomainError> {
        let updated = self
            .repository
            .update_settings(&cmd.therapy_id, &cmd.settings)
            .await?
            .ok_or_else(|| not_found(&cmd.therapy_id))?;

        tracing::info!(therapy_id = %cmd.therapy_id, "Therapy settings updated");
        Ok(updated)
    }
}
