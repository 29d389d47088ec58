//! HTTP DTOs for the therapy admin endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::therapy::{Difficulty, Therapy, TherapySettings, TherapyStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The general settings form as submitted by the admin client.
///
/// Omitted fields take the blank-form defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpdateTherapySettingsRequest {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub sessions: u32,
    pub difficulty: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub tags: Vec<String>,
    pub status: String,
}

impl Default for UpdateTherapySettingsRequest {
    fn default() -> Self {
        let blank = TherapySettings::default();
        Self {
            title: blank.title,
            description: blank.description,
            duration: blank.duration,
            sessions: blank.sessions,
            difficulty: blank.difficulty.as_str().to_string(),
            category: blank.category,
            icon: blank.icon,
            color: blank.color,
            tags: blank.tags,
            status: blank.status.as_str().to_string(),
        }
    }
}

impl TryFrom<UpdateTherapySettingsRequest> for TherapySettings {
    type Error = ValidationError;

    fn try_from(req: UpdateTherapySettingsRequest) -> Result<Self, Self::Error> {
        let difficulty = Difficulty::from_label(&req.difficulty).ok_or_else(|| {
            ValidationError::invalid_format("difficulty", "expected Beginner, Intermediate or Advanced")
        })?;
        let status = TherapyStatus::from_label(&req.status).ok_or_else(|| {
            ValidationError::invalid_format("status", "expected Active or Inactive")
        })?;

        Ok(TherapySettings {
            title: req.title,
            description: req.description,
            duration: req.duration,
            sessions: req.sessions,
            difficulty,
            category: req.category,
            icon: req.icon,
            color: req.color,
            tags: req.tags,
            status,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct TherapyResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub sessions: u32,
    pub difficulty: Difficulty,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub tags: Vec<String>,
    pub status: TherapyStatus,
}

impl From<Therapy> for TherapyResponse {
    fn from(therapy: Therapy) -> Self {
        Self {
            id: therapy.id.to_string(),
            title: therapy.title,
            description: therapy.description,
            duration: therapy.duration,
            sessions: therapy.sessions,
            difficulty: therapy.difficulty,
            category: therapy.category,
            icon: therapy.icon,
            color: therapy.color,
            tags: therapy.tags,
            status: therapy.status,
        }
    }
}

/// Response to a successful save.
#[derive(Debug, Clone, Serialize)]
pub struct TherapySettingsSavedResponse {
    pub message: String,
    pub therapy: TherapyResponse,
}
