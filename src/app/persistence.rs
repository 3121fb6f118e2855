// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk: theme mode, autoplay,
//! and the processing endpoint settings, plus the language selection.

use super::Message;
use crate::app::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Current preference values gathered from application state, plus the
/// notification manager for reporting save failures.
pub struct PreferencesContext<'a> {
    pub theme_mode: ThemeMode,
    pub autoplay: bool,
    pub api_base_url: &'a str,
    pub use_mock_data: bool,
    pub notifications: &'a mut notifications::Manager,
}

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the update handlers directly rather than through the config file.
pub fn persist_preferences(ctx: PreferencesContext<'_>) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = ctx.theme_mode;
    cfg.playback.autoplay = ctx.autoplay;
    cfg.processing.api_base_url = ctx.api_base_url.to_string();
    cfg.processing.use_mock_data = ctx.use_mock_data;

    if let Err(error) = config::save(&cfg) {
        ctx.notifications.push(
            Notification::warning("notification-config-save-error")
                .with_arg("error", error.to_string()),
        );
    }

    Task::none()
}

/// Applies the newly selected locale and persists it to config.
///
/// Visible strings do not need a refresh pass: toasts and screens store i18n
/// keys and translate at render time.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    notifications: &mut notifications::Manager,
) -> Task<Message> {
    i18n.set_locale(locale.clone());

    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        notifications.push(
            Notification::warning("notification-config-save-error")
                .with_arg("error", error.to_string()),
        );
    }

    Task::none()
}
