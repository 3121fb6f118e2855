// SPDX-License-Identifier: MPL-2.0
//! User preferences, persisted as `settings.toml`.
//!
//! The file carries three sections: `[general]` (language, theme mode),
//! `[playback]` (highlight playback behavior) and `[processing]` (backend
//! endpoint and the mock switch). Unknown or missing keys fall back to
//! defaults so old files keep loading after upgrades.
//!
//! Where the file lives follows the usual override chain: an explicit
//! path via `load_from_path()` / `save_to_path()`, then the
//! `REELCUT_CONFIG_DIR` environment variable, then the platform config
//! directory.
//!
//! ```no_run
//! use reelcut::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("zh-TW".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// The `[general]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-TW"). `None` defers to the
    /// system locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Light, dark, or follow the system.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// The `[playback]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct PlaybackConfig {
    /// Start playing as soon as a processed document arrives.
    #[serde(default)]
    pub autoplay: bool,
}

/// The `[processing]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProcessingConfig {
    /// Base URL of the processing backend.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Serve the bundled sample document instead of calling the backend.
    #[serde(default = "default_use_mock_data")]
    pub use_mock_data: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            use_mock_data: default_use_mock_data(),
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub processing: ProcessingConfig,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_use_mock_data() -> bool {
    DEFAULT_USE_MOCK_DATA
}

/// Case-insensitive theme mode, so hand-edited files with "Dark" or
/// "DARK" still load.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults silently, while an
/// unreadable or malformed file yields defaults plus the i18n key of a
/// warning to surface to the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Loads configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific file, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn sample() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("zh-TW".to_string()),
                theme_mode: ThemeMode::Light,
            },
            playback: PlaybackConfig { autoplay: true },
            processing: ProcessingConfig {
                api_base_url: "http://media.example.test/api".to_string(),
                use_mock_data: false,
            },
        }
    }

    #[test]
    fn round_trip_preserves_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&sample(), &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, sample());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn defaults_match_shipped_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(!config.playback.autoplay);
        assert_eq!(config.processing.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.processing.use_mock_data);
    }

    #[test]
    fn file_uses_kebab_case_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        for expected in [
            "[general]",
            "[playback]",
            "[processing]",
            "theme-mode",
            "use-mock-data",
        ] {
            assert!(content.contains(expected), "missing {expected} in:\n{content}");
        }
    }

    #[test]
    fn theme_mode_accepts_any_casing() {
        let config: Config = toml::from_str("[general]\ntheme-mode = \"DARK\"\n")
            .expect("parse config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        assert!(toml::from_str::<Config>("[general]\ntheme-mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n")
            .expect("parse config");
        assert_eq!(config.general.language, Some("en-US".to_string()));
        assert!(!config.playback.autoplay);
        assert_eq!(config.processing.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.processing.use_mock_data);
    }

    #[test]
    fn override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        save_with_override(&sample(), Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, sample());
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn corrupted_file_warns_and_falls_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn override_directories_are_isolated() {
        let dir_a = tempdir().expect("create temp dir A");
        let dir_b = tempdir().expect("create temp dir B");

        let mut config_a = Config::default();
        config_a.general.language = Some("en-US".to_string());
        let mut config_b = Config::default();
        config_b.general.language = Some("zh-TW".to_string());

        save_with_override(&config_a, Some(dir_a.path().to_path_buf()))
            .expect("save A should succeed");
        save_with_override(&config_b, Some(dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.language, Some("en-US".to_string()));
        assert_eq!(loaded_b.general.language, Some("zh-TW".to_string()));
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }
}
