//! Therapy programs and their admin-editable settings.

mod catalog;
mod therapy;

pub use catalog::default_therapies;
pub use therapy::{Difficulty, Therapy, TherapySettings, TherapyStatus};
