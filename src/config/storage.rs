//! Storage backend selection

use serde::Deserialize;

/// Which adapters back the repositories and the activity logs
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Repository backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Where the client apps' activity logs are read from
    #[serde(default)]
    pub activity_cache: ActivityCache,

    /// Seed the starter achievements and therapy programs into the memory backend
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

/// Repository backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

/// Activity log source
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCache {
    #[default]
    Memory,
    Redis,
}

impl StorageConfig {
    pub fn uses_postgres(&self) -> bool {
        self.backend == StorageBackend::Postgres
    }

    pub fn uses_redis(&self) -> bool {
        self.activity_cache == ActivityCache::Redis
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            activity_cache: ActivityCache::default(),
            seed_catalog: default_seed_catalog(),
        }
    }
}

fn default_seed_catalog() -> bool {
    true
}
