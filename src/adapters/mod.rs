//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process stores for tests and development
//! - `postgres` - SQLx-backed repositories
//! - `redis` - Activity log cache
//! - `feedback` - Editor notices routed to tracing
//! - `http` - Axum REST API

pub mod feedback;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod redis;

pub use feedback::TracingEditorFeedback;
pub use memory::{InMemoryAchievementStore, InMemoryKeyValueStore, InMemoryTherapyRepository};
pub use postgres::{
    PostgresAchievementCatalog, PostgresTherapyRepository, PostgresUserAchievementRepository,
};
pub use redis::RedisKeyValueStore;
