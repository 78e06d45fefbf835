//! Host-side helpers for the PlantNxt navigation panel.

mod path_processing;
mod preferences;

pub use path_processing::{env_path_override, expand_tilde};
pub use preferences::{PREFERENCES_FILE_NAME, PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
