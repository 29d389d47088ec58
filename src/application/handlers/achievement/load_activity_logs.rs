//! ActivityLogLoader - reads the seven activity logs from the key-value store.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::activity::{ActivityKey, ActivityLogs};
use crate::ports::KeyValueStore;

/// Loads activity logs, treating each unreadable source as empty.
///
/// A missing key, a store error or a malformed document all yield the
/// default for that source; the other sources are still read.
pub struct ActivityLogLoader {
    store: Arc<dyn KeyValueStore>,
}

impl ActivityLogLoader {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> ActivityLogs {
        ActivityLogs {
            streak: self.read(ActivityKey::Streak).await,
            mood_entries: self.read(ActivityKey::MoodEntries).await,
            cbt_records: self.read(ActivityKey::CbtRecords).await,
            gratitude_entries: self.read(ActivityKey::GratitudeEntries).await,
            exposure_sessions: self.read(ActivityKey::ExposureSessions).await,
            video_progress: self.read(ActivityKey::VideoProgress).await,
            stress_logs: self.read(ActivityKey::StressLogs).await,
        }
    }

    async fn read<T: DeserializeOwned + Default>(&self, key: ActivityKey) -> T {
        let raw = match self.store.get(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = %e, "Failed to read activity log");
                return T::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = key.as_str(), error = %e, "Malformed activity log");
            T::default()
        })
    }
}
