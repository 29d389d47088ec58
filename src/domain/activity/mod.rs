//! Activity logs recorded by the client apps.
//!
//! Logs are JSON documents stored under fixed keys in a key-value store.
//! Every list entry carries the `userId` of its author; the streak object is
//! shared. Fields this service does not use are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::UserId;

/// Fixed storage keys of the activity logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKey {
    Streak,
    MoodEntries,
    CbtRecords,
    GratitudeEntries,
    ExposureSessions,
    VideoProgress,
    StressLogs,
}

impl ActivityKey {
    pub const ALL: [ActivityKey; 7] = [
        ActivityKey::Streak,
        ActivityKey::MoodEntries,
        ActivityKey::CbtRecords,
        ActivityKey::GratitudeEntries,
        ActivityKey::ExposureSessions,
        ActivityKey::VideoProgress,
        ActivityKey::StressLogs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKey::Streak => "mindcare_streak",
            ActivityKey::MoodEntries => "mindcare_mood_entries",
            ActivityKey::CbtRecords => "mindcare_cbt_records",
            ActivityKey::GratitudeEntries => "mindcare_gratitude_entries",
            ActivityKey::ExposureSessions => "mindcare_exposure_sessions",
            ActivityKey::VideoProgress => "mindcare_video_progress",
            ActivityKey::StressLogs => "mindcare_stress_logs",
        }
    }
}

/// Streak counter object.
///
/// `currentStreak` may be a number or a numeric string; anything else reads
/// as no streak.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct StreakRecord {
    pub current_streak: Option<f64>,
}

impl From<Value> for StreakRecord {
    fn from(value: Value) -> Self {
        Self {
            current_streak: value.get("currentStreak").and_then(loose_number),
        }
    }
}

impl StreakRecord {
    /// Current streak in whole days, 0 when missing or not positive.
    pub fn current_streak(&self) -> u32 {
        match self.current_streak {
            Some(days) if days.is_finite() && days > 0.0 => days as u32,
            _ => 0,
        }
    }
}

/// Generic log entry; only ownership matters for counting.
///
/// Built from any JSON value so one odd entry never spoils its log: a
/// non-string `userId`, or an entry that is not an object, simply belongs
/// to nobody.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ActivityEntry {
    pub user_id: Option<String>,
}

impl From<Value> for ActivityEntry {
    fn from(value: Value) -> Self {
        Self {
            user_id: user_of(&value),
        }
    }
}

/// Stress log entry with its 1-10 effectiveness rating.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct StressLogEntry {
    pub user_id: Option<String>,
    pub effectiveness: Option<Value>,
}

impl From<Value> for StressLogEntry {
    fn from(value: Value) -> Self {
        Self {
            user_id: user_of(&value),
            effectiveness: value.get("effectiveness").cloned(),
        }
    }
}

/// Rating at or above which a stress log counts as a good day.
pub const GOOD_STRESS_EFFECTIVENESS: f64 = 7.0;

impl StressLogEntry {
    /// Effectiveness as a number; numeric strings are accepted.
    pub fn effectiveness(&self) -> Option<f64> {
        self.effectiveness.as_ref().and_then(loose_number)
    }

    pub fn is_good_day(&self) -> bool {
        self.effectiveness()
            .map(|rating| rating >= GOOD_STRESS_EFFECTIVENESS)
            .unwrap_or(false)
    }
}

fn user_of(value: &Value) -> Option<String> {
    value.get("userId").and_then(Value::as_str).map(str::to_string)
}

fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn owned_by(entry_user: &Option<String>, user_id: &UserId) -> bool {
    entry_user.as_deref() == Some(user_id.as_str())
}

/// All activity logs as loaded from storage, not yet filtered by user.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogs {
    pub streak: StreakRecord,
    pub mood_entries: Vec<ActivityEntry>,
    pub cbt_records: Vec<ActivityEntry>,
    pub gratitude_entries: Vec<ActivityEntry>,
    pub exposure_sessions: Vec<ActivityEntry>,
    pub video_progress: Vec<ActivityEntry>,
    pub stress_logs: Vec<StressLogEntry>,
}

impl ActivityLogs {
    /// Counts the entries belonging to `user_id`.
    pub fn snapshot_for(&self, user_id: &UserId) -> ActivitySnapshot {
        let count = |entries: &[ActivityEntry]| {
            entries
                .iter()
                .filter(|e| owned_by(&e.user_id, user_id))
                .count() as u32
        };
        let user_stress: Vec<&StressLogEntry> = self
            .stress_logs
            .iter()
            .filter(|l| owned_by(&l.user_id, user_id))
            .collect();

        ActivitySnapshot {
            current_streak: self.streak.current_streak(),
            mood_entries: count(&self.mood_entries),
            cbt_records: count(&self.cbt_records),
            gratitude_entries: count(&self.gratitude_entries),
            exposure_sessions: count(&self.exposure_sessions),
            video_progress: count(&self.video_progress),
            stress_logs: user_stress.len() as u32,
            good_stress_logs: user_stress.iter().filter(|l| l.is_good_day()).count() as u32,
        }
    }
}

/// Per-user activity counts, the input of metric derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    pub current_streak: u32,
    pub mood_entries: u32,
    pub cbt_records: u32,
    pub gratitude_entries: u32,
    pub exposure_sessions: u32,
    pub video_progress: u32,
    pub stress_logs: u32,
    pub good_stress_logs: u32,
}
