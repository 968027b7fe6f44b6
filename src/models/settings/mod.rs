// Settings module
// User-adjustable options read from settings.toml

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Years listed before the current year in the year dropdown
    pub picker_years_before: u16,
    /// Years listed after the current year in the year dropdown
    pub picker_years_after: u16,
    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            picker_years_before: 5,
            picker_years_after: 5,
            log_level: "info".to_string(),
            window_width: 480.0,
            window_height: 640.0,
        }
    }
}

impl Settings {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
