//! Driver settings persistence using TOML
//!
//! Stores settings in ~/.config/blocky/settings.toml (or platform equivalent)

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Driver settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationSettings,
    pub logging: LoggingSettings,
}

/// Headless run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Fixed seed for the piece sequence and inputs, random if unset
    pub seed: Option<u64>,
    /// Stop after this many ticks even if the game is still running
    pub max_ticks: u64,
    /// Issue one random input every N ticks (0 disables input)
    pub input_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: 20_000,
            input_interval: 4,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "blocky=debug".to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "blocky", "blocky").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    /// Parse TOML contents, ignoring anything that doesn't deserialize
    pub fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::parse("[simulation]\nseed = 42\n");
        assert_eq!(settings.simulation.seed, Some(42));
        assert_eq!(settings.simulation.max_ticks, 20_000);
        assert_eq!(settings.logging.filter, "blocky=debug");
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let settings = Settings::parse("simulation = 'not a table'");
        assert_eq!(settings.simulation.input_interval, 4);
        assert_eq!(settings.simulation.seed, None);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut settings = Settings::default();
        settings.simulation.seed = Some(7);
        settings.logging.filter = "blocky=trace".to_string();

        let contents = toml::to_string_pretty(&settings).unwrap();
        let parsed = Settings::parse(&contents);
        assert_eq!(parsed.simulation.seed, Some(7));
        assert_eq!(parsed.logging.filter, "blocky=trace");
    }
}
