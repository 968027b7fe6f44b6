// Settings service module
// Loads and saves settings.toml in the platform config directory

mod service;

pub use service::{SettingsError, SettingsService};
