//! Redis-backed key-value store for activity logs.
//!
//! Each key holds one JSON document as a plain Redis string (GET/SET).

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::ports::{KeyValueError, KeyValueStore};

/// Redis key-value store sharing one multiplexed connection.
#[derive(Clone)]
pub struct RedisKeyValueStore {
    conn: MultiplexedConnection,
}

impl RedisKeyValueStore {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection to `url`.
    pub async fn connect(url: &str) -> Result<Self, KeyValueError> {
        let client =
            redis::Client::open(url).map_err(|e| KeyValueError::Connection(e.to_string()))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| KeyValueError::Connection(e.to_string()))?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let mut conn = self.conn.clone();
        conn.get(key)
            .await
            .map_err(|e: redis::RedisError| KeyValueError::Command(e.to_string()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e: redis::RedisError| KeyValueError::Command(e.to_string()))
    }
}
