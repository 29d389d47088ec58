//! TherapySettingsEditor - state behind the admin "General settings" form.
//!
//! The editor loads one program, hands out a mutable copy of its settings
//! and writes the copy back on save. A failed save leaves the form as it
//! was and tells the user nothing; the error only reaches the log.

use std::sync::Arc;

use super::{
    GetTherapyHandler, GetTherapyQuery, UpdateTherapySettingsCommand, UpdateTherapySettingsHandler,
};
use crate::domain::foundation::TherapyId;
use crate::domain::therapy::{Therapy, TherapySettings};
use crate::ports::{EditorFeedback, TherapyRepository};

/// Notice shown after a successful save.
pub const SETTINGS_SAVED_MESSAGE: &str = "General settings saved!";

/// Route of the therapy management screen.
pub const THERAPY_MANAGEMENT_ROUTE: &str = "/admin/therapy-management";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Loaded,
    Saved,
}

pub struct TherapySettingsEditor {
    get: GetTherapyHandler,
    update: UpdateTherapySettingsHandler,
    feedback: Arc<dyn EditorFeedback>,
    state: EditorState,
    therapy: Option<Therapy>,
    settings: TherapySettings,
}

impl TherapySettingsEditor {
    pub fn new(repository: Arc<dyn TherapyRepository>, feedback: Arc<dyn EditorFeedback>) -> Self {
        Self {
            get: GetTherapyHandler::new(repository.clone()),
            update: UpdateTherapySettingsHandler::new(repository),
            feedback,
            state: EditorState::Loading,
            therapy: None,
            settings: TherapySettings::default(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The record as last loaded or saved.
    pub fn therapy(&self) -> Option<&Therapy> {
        self.therapy.as_ref()
    }

    pub fn settings(&self) -> &TherapySettings {
        &self.settings
    }

    /// Mutable form fields; changes stay local until [`save`](Self::save).
    pub fn settings_mut(&mut self) -> &mut TherapySettings {
        &mut self.settings
    }

    /// Loads the program; an unknown id leaves the editor in `Loading`.
    pub async fn load(&mut self, id: TherapyId) {
        match self.get.handle(GetTherapyQuery { therapy_id: id }).await {
            Ok(therapy) => {
                self.settings = therapy.settings();
                self.therapy = Some(therapy);
                self.state = EditorState::Loaded;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Therapy not loaded");
            }
        }
    }

    /// Writes the local settings back.
    pub async fn save(&mut self) {
        let Some(therapy) = self.therapy.as_ref() else {
            return;
        };

        let cmd = UpdateTherapySettingsCommand {
            therapy_id: therapy.id.clone(),
            settings: self.settings.clone(),
        };
        match self.update.handle(cmd).await {
            Ok(updated) => {
                self.settings = updated.settings();
                self.therapy = Some(updated);
                self.state = EditorState::Saved;
                self.feedback.notify_success(SETTINGS_SAVED_MESSAGE);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error saving therapy settings");
            }
        }
    }

    pub fn back(&self) {
        self.feedback.navigate(THERAPY_MANAGEMENT_ROUTE);
    }
}
