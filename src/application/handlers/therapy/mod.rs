//! Therapy program handlers and the admin settings editor.

mod get_therapy;
mod list_therapies;
mod settings_editor;
mod update_therapy_settings;

pub use get_therapy::{GetTherapyHandler, GetTherapyQuery};
pub use list_therapies::ListTherapiesHandler;
pub use settings_editor::{
    EditorState, TherapySettingsEditor, SETTINGS_SAVED_MESSAGE, THERAPY_MANAGEMENT_ROUTE,
};
pub use update_therapy_settings::{UpdateTherapySettingsCommand, UpdateTherapySettingsHandler};
