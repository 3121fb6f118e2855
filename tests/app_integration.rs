// SPDX-License-Identifier: MPL-2.0
//! Preferences, persisted state and locale resolution exercised together
//! through the public API, using directory overrides instead of the real
//! platform paths.

use reelcut::app::config::{self, Config};
use reelcut::app::persisted_state::AppState;
use reelcut::i18n::fluent::I18n;
use reelcut::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn config_round_trip_preserves_preferences() {
    let dir = tempdir().expect("temp dir");

    let mut config = Config::default();
    config.general.language = Some("zh-TW".to_string());
    config.general.theme_mode = ThemeMode::Dark;
    config.playback.autoplay = true;
    config.processing.api_base_url = "http://media.example.test/api".to_string();
    config.processing.use_mock_data = false;

    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("config saves");

    // The file uses kebab-case keys under section headers.
    let raw = std::fs::read_to_string(dir.path().join("settings.toml")).expect("file exists");
    assert!(raw.contains("[general]"));
    assert!(raw.contains("theme-mode"));
    assert!(raw.contains("api-base-url"));
    assert!(raw.contains("use-mock-data"));

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, config);
    assert!(warning.is_none());
}

#[test]
fn corrupt_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("settings.toml"), "general = {{{ nonsense")
        .expect("write corrupt file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn missing_config_loads_defaults_silently() {
    let dir = tempdir().expect("temp dir");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn theme_mode_accepts_any_casing_on_disk() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme-mode = \"DARK\"\n",
    )
    .expect("write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert!(warning.is_none());
}

#[test]
fn config_language_drives_locale_resolution() {
    let mut config = Config::default();
    config.general.language = Some("zh-TW".to_string());

    let i18n = I18n::new(None, None, &config);
    assert_eq!(i18n.current_locale().to_string(), "zh-TW");
    // The product name is not translated.
    assert_eq!(i18n.tr("app-name"), "Reelcut");
}

#[test]
fn cli_language_overrides_config_language() {
    let mut config = Config::default();
    config.general.language = Some("zh-TW".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn app_state_round_trips_through_cbor() {
    let dir = tempdir().expect("temp dir");

    let mut state = AppState::default();
    let video = dir.path().join("videos").join("clip.mp4");
    let export = dir.path().join("exports").join("session.json");
    state.set_last_open_directory_from_file(&video);
    state.set_last_export_directory_from_file(&export);
    assert_eq!(
        state.last_open_directory.as_deref(),
        Some(dir.path().join("videos").as_path())
    );

    let warning = state.save_to(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(dir.path().join("state.cbor").exists());

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, state);
}

#[test]
fn unreadable_state_resets_with_warning() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("state.cbor"), b"not cbor at all")
        .expect("write corrupt state");

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, AppState::default());
    assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
}
