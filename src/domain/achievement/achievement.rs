//! Achievement catalog entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AchievementId, Timestamp};

/// Category tag of an achievement, deciding which metric feeds its progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementType {
    Streak,
    Therapy,
    Stress,
    Mood,
    /// Tag this service does not know; progress stays at zero.
    #[serde(other)]
    Unknown,
}

impl AchievementType {
    /// Parses a stored tag. Unrecognised tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "streak" => AchievementType::Streak,
            "therapy" => AchievementType::Therapy,
            "stress" => AchievementType::Stress,
            "mood" => AchievementType::Mood,
            _ => AchievementType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementType::Streak => "streak",
            AchievementType::Therapy => "therapy",
            AchievementType::Stress => "stress",
            AchievementType::Mood => "mood",
            AchievementType::Unknown => "unknown",
        }
    }
}

/// Which derived metric a therapy-type achievement tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TherapyMetric {
    MindfulnessSessions,
    CompletedModules,
    MorningMeditations,
    #[default]
    TotalSessions,
}

impl TherapyMetric {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mindfulness_sessions" => Some(TherapyMetric::MindfulnessSessions),
            "completed_modules" => Some(TherapyMetric::CompletedModules),
            "morning_meditations" => Some(TherapyMetric::MorningMeditations),
            "total_sessions" => Some(TherapyMetric::TotalSessions),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TherapyMetric::MindfulnessSessions => "mindfulness_sessions",
            TherapyMetric::CompletedModules => "completed_modules",
            TherapyMetric::MorningMeditations => "morning_meditations",
            TherapyMetric::TotalSessions => "total_sessions",
        }
    }
}

/// A catalog entry: reaching `requirement` on its metric earns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    /// Only meaningful for `Therapy`; `None` tracks total sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<TherapyMetric>,
    pub requirement: u32,
    pub icon: String,
    pub created_at: Timestamp,
}

impl Achievement {
    /// Builds a catalog entry with a fresh id, mostly for seeding and tests.
    pub fn new(
        title: impl Into<String>,
        achievement_type: AchievementType,
        requirement: u32,
    ) -> Self {
        Self {
            id: AchievementId::new(),
            title: title.into(),
            description: String::new(),
            achievement_type,
            metric: None,
            requirement,
            icon: String::new(),
            created_at: Timestamp::now(),
        }
    }

    pub fn with_metric(mut self, metric: TherapyMetric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Metric used when this is a therapy achievement.
    pub fn therapy_metric(&self) -> TherapyMetric {
        self.metric.unwrap_or_default()
    }

    /// True once `progress` reaches the threshold.
    pub fn is_met_by(&self, progress: u32) -> bool {
        progress >= self.requirement
    }
}
