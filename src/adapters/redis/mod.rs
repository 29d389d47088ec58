//! Redis adapters.
//!
//! - `RedisKeyValueStore` - Activity log documents in Redis string keys

mod key_value_store;

pub use key_value_store::RedisKeyValueStore;
