//! HTTP adapter for the therapy admin endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{TherapyResponse, TherapySettingsSavedResponse, UpdateTherapySettingsRequest};
pub use handlers::TherapyHandlers;
pub use routes::therapy_routes;
