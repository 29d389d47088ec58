//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `AchievementCatalog` - Read-only achievement catalog
//! - `UserAchievementRepository` - Per-user progress rows
//! - `TherapyRepository` - Therapy programs
//! - `KeyValueStore` - Activity logs synced by the client apps
//!
//! ## Client Ports
//!
//! - `EditorFeedback` - Notices and navigation for the settings editor

mod achievement_catalog;
mod editor_feedback;
mod key_value_store;
mod therapy_repository;
mod user_achievement_repository;

pub use achievement_catalog::AchievementCatalog;
pub use editor_feedback::EditorFeedback;
pub use key_value_store::{KeyValueError, KeyValueStore};
pub use therapy_repository::TherapyRepository;
pub use user_achievement_repository::UserAchievementRepository;
