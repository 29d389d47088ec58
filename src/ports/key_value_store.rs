//! Key-Value Store Port - string values under string keys.
//!
//! Backs the activity logs the client apps sync. Values are JSON documents,
//! but the store itself is agnostic of their shape.

use async_trait::async_trait;

/// Errors that can occur during key-value operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Command failed: {0}")]
    Command(String),
}

/// Port for reading and writing string values by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueError>;
}
