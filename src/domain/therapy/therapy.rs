//! Therapy program record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TherapyId;

/// Intended experience level of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Beginner" => Some(Difficulty::Beginner),
            "Intermediate" => Some(Difficulty::Intermediate),
            "Advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// Whether a program is offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TherapyStatus {
    #[default]
    Active,
    Inactive,
}

impl TherapyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TherapyStatus::Active => "Active",
            TherapyStatus::Inactive => "Inactive",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(TherapyStatus::Active),
            "Inactive" => Some(TherapyStatus::Inactive),
            _ => None,
        }
    }
}

/// A therapy program as listed in the app's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Therapy {
    pub id: TherapyId,
    pub title: String,
    pub description: String,
    /// Free text such as "15-30 min".
    pub duration: String,
    pub sessions: u32,
    pub difficulty: Difficulty,
    pub category: String,
    /// Icon name understood by the client.
    pub icon: String,
    /// Tailwind gradient classes, e.g. `from-blue-500 to-cyan-500`.
    pub color: String,
    pub tags: Vec<String>,
    pub status: TherapyStatus,
}

impl Therapy {
    pub fn new(id: TherapyId, settings: TherapySettings) -> Self {
        Self {
            id,
            title: settings.title,
            description: settings.description,
            duration: settings.duration,
            sessions: settings.sessions,
            difficulty: settings.difficulty,
            category: settings.category,
            icon: settings.icon,
            color: settings.color,
            tags: settings.tags,
            status: settings.status,
        }
    }

    /// Copy of the editable fields.
    pub fn settings(&self) -> TherapySettings {
        TherapySettings {
            title: self.title.clone(),
            description: self.description.clone(),
            duration: self.duration.clone(),
            sessions: self.sessions,
            difficulty: self.difficulty,
            category: self.category.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            tags: self.tags.clone(),
            status: self.status,
        }
    }

    /// Overwrites every editable field; the id is untouched.
    pub fn apply_settings(&mut self, settings: TherapySettings) {
        let id = self.id.clone();
        *self = Therapy::new(id, settings);
    }
}

/// The general settings form of a therapy program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapySettings {
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

impl Default for TherapySettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration: String::new(),
            sessions: 0,
            difficulty: Difficulty::Beginner,
            category: String::new(),
            icon: "Brain".to_string(),
            color: "from-blue-500 to-cyan-500".to_string(),
            tags: Vec::new(),
            status: TherapyStatus::Active,
        }
    }
}
