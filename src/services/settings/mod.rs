mod service;

pub use service::{default_settings_path, SettingsService, SETTINGS_FILE_NAME};
