//! In-Memory Adapters
//!
//! Implementations of the persistence ports backed by process memory.
//! Used by tests and by the `memory` storage backend in development.
//!
//! ## Available Adapters
//!
//! - **InMemoryAchievementStore** - Achievement catalog and user progress rows
//! - **InMemoryTherapyRepository** - Therapy programs
//! - **InMemoryKeyValueStore** - Activity log documents

mod achievement_store;
mod key_value_store;
mod therapy_repository;

pub use achievement_store::InMemoryAchievementStore;
pub use key_value_store::InMemoryKeyValueStore;
pub use therapy_repository::InMemoryTherapyRepository;

use crate::domain::achievement::default_catalog;
use crate::domain::therapy::default_therapies;

/// Stores a memory-backed deployment starts with.
///
/// With `seed` they hold the starter achievement catalog and therapy
/// programs; otherwise both are empty.
pub fn starter_stores(seed: bool) -> (InMemoryAchievementStore, InMemoryTherapyRepository) {
    if !seed {
        return (InMemoryAchievementStore::new(), InMemoryTherapyRepository::new());
    }
    (
        InMemoryAchievementStore::with_catalog(default_catalog()),
        InMemoryTherapyRepository::with_therapies(default_therapies()),
    )
}
