// SPDX-License-Identifier: MPL-2.0
//! Settings screen module.
//!
//! Lets the user pick the display language, the theme mode, and playback and
//! processing preferences. The screen holds no state of its own: current
//! values arrive through [`ViewContext`] and every change is propagated as an
//! [`Event`] for the application to apply and persist.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, text_input, toggler, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub autoplay: bool,
    pub use_mock_data: bool,
    pub api_base_url: &'a str,
    pub session_log_len: usize,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToPlayer,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    AutoplayToggled(bool),
    UseMockDataToggled(bool),
    ApiBaseUrlChanged(String),
    ApiBaseUrlSubmitted,
    ExportSessionLog,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToPlayer,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    AutoplayToggled(bool),
    UseMockDataToggled(bool),
    ApiBaseUrlChanged(String),
    ApiBaseUrlSubmitted,
    ExportSessionLog,
}

/// Process a settings screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::BackToPlayer => Event::BackToPlayer,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::AutoplayToggled(enabled) => Event::AutoplayToggled(enabled),
        Message::UseMockDataToggled(enabled) => Event::UseMockDataToggled(enabled),
        Message::ApiBaseUrlChanged(url) => Event::ApiBaseUrlChanged(url),
        Message::ApiBaseUrlSubmitted => Event::ApiBaseUrlSubmitted,
        Message::ExportSessionLog => Event::ExportSessionLog,
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToPlayer);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let language_section = build_language_section(&ctx);
    let appearance_section = build_appearance_section(&ctx);
    let playback_section = build_playback_section(&ctx);
    let processing_section = build_processing_section(&ctx);
    let session_log_section = build_session_log_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(language_section)
        .push(appearance_section)
        .push(playback_section)
        .push(processing_section)
        .push(session_log_section);

    scrollable(content).into()
}

/// Build the language selection section.
fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut buttons = Column::new().spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone() // Use raw locale if translation missing
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = ctx.i18n.current_locale() == locale;
        let mut locale_button = button(Text::new(button_text).size(typography::BODY))
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            locale_button = locale_button.style(styles::button::selected);
        } else {
            locale_button = locale_button.style(styles::button::unselected);
        }

        buttons = buttons.push(locale_button);
    }

    build_section(ctx.i18n.tr("settings-section-language"), buttons.into())
}

/// Build the theme mode section with a Light/Dark/System toggle group.
fn build_appearance_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modes = [
        (ThemeMode::Light, ctx.i18n.tr("settings-theme-light")),
        (ThemeMode::Dark, ctx.i18n.tr("settings-theme-dark")),
        (ThemeMode::System, ctx.i18n.tr("settings-theme-system")),
    ];

    let mut row = Row::new().spacing(spacing::XS);
    for (mode, label) in modes {
        let mut mode_button = button(Text::new(label).size(typography::BODY))
            .on_press(Message::ThemeModeSelected(mode));
        if mode == ctx.theme_mode {
            mode_button = mode_button.style(styles::button::selected);
        } else {
            mode_button = mode_button.style(styles::button::unselected);
        }
        row = row.push(mode_button);
    }

    build_section(ctx.i18n.tr("settings-section-appearance"), row.into())
}

/// Build the playback section (autoplay preference).
fn build_playback_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-autoplay-label")).size(typography::BODY);
    let toggle = toggler(ctx.autoplay)
        .on_toggle(Message::AutoplayToggled)
        .size(20.0);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label)
        .push(toggle);

    let hint = Text::new(ctx.i18n.tr("settings-autoplay-hint")).size(typography::CAPTION);

    let content = Column::new().spacing(spacing::XS).push(row).push(hint);

    build_section(ctx.i18n.tr("settings-section-playback"), content.into())
}

/// Build the processing section (mock mode and endpoint URL).
fn build_processing_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mock_label = Text::new(ctx.i18n.tr("settings-mock-label")).size(typography::BODY);
    let mock_toggle = toggler(ctx.use_mock_data)
        .on_toggle(Message::UseMockDataToggled)
        .size(20.0);

    let mock_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(mock_label)
        .push(mock_toggle);

    let mock_hint = Text::new(ctx.i18n.tr("settings-mock-hint")).size(typography::CAPTION);

    let url_label = Text::new(ctx.i18n.tr("settings-api-url-label")).size(typography::BODY);
    let url_input = text_input(
        &ctx.i18n.tr("settings-api-url-placeholder"),
        ctx.api_base_url,
    )
    .on_input(Message::ApiBaseUrlChanged)
    .on_submit(Message::ApiBaseUrlSubmitted)
    .padding(6)
    .size(14)
    .width(Length::Fill);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(mock_row)
        .push(mock_hint)
        .push(url_label)
        .push(url_input);

    build_section(ctx.i18n.tr("settings-section-processing"), content.into())
}

/// Build the session log section (event count and JSON export).
fn build_session_log_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = ctx.session_log_len.to_string();
    let hint = Text::new(ctx.i18n.tr_with_args("settings-log-hint", &[("count", &count)]))
        .size(typography::CAPTION);

    let label = text(ctx.i18n.tr("settings-log-export-button")).size(typography::BODY);
    let export_button = if ctx.session_log_len > 0 {
        button(label)
            .on_press(Message::ExportSessionLog)
            .style(styles::button::primary)
    } else {
        // Nothing recorded yet, nothing to export
        button(label).style(styles::button::disabled())
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .push(hint)
        .push(export_button);

    build_section(ctx.i18n.tr("settings-section-log"), content.into())
}

/// Build a section card with title and content.
fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let header = Text::new(title).size(typography::TITLE_SM);

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn test_ctx(i18n: &I18n) -> ViewContext<'_> {
        ViewContext {
            i18n,
            theme_mode: ThemeMode::System,
            autoplay: false,
            use_mock_data: true,
            api_base_url: "http://localhost:3001/api",
            session_log_len: 4,
        }
    }

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let _element = view(test_ctx(&i18n));
    }

    #[test]
    fn back_to_player_emits_event() {
        let event = update(Message::BackToPlayer);
        assert!(matches!(event, Event::BackToPlayer));
    }

    #[test]
    fn language_selection_emits_event() {
        let locale: LanguageIdentifier = "zh-TW".parse().unwrap();
        let event = update(Message::LanguageSelected(locale.clone()));
        match event {
            Event::LanguageSelected(selected) => assert_eq!(selected, locale),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn theme_mode_selection_emits_event() {
        let event = update(Message::ThemeModeSelected(ThemeMode::Dark));
        assert!(matches!(event, Event::ThemeModeSelected(ThemeMode::Dark)));
    }

    #[test]
    fn preference_toggles_emit_events() {
        assert!(matches!(
            update(Message::AutoplayToggled(true)),
            Event::AutoplayToggled(true)
        ));
        assert!(matches!(
            update(Message::UseMockDataToggled(false)),
            Event::UseMockDataToggled(false)
        ));
    }

    #[test]
    fn api_url_edits_emit_events() {
        match update(Message::ApiBaseUrlChanged("http://example.com".into())) {
            Event::ApiBaseUrlChanged(url) => assert_eq!(url, "http://example.com"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(
            update(Message::ApiBaseUrlSubmitted),
            Event::ApiBaseUrlSubmitted
        ));
    }

    #[test]
    fn export_session_log_emits_event() {
        assert!(matches!(
            update(Message::ExportSessionLog),
            Event::ExportSessionLog
        ));
    }

    #[test]
    fn settings_view_renders_with_empty_log() {
        let i18n = I18n::default();
        let mut ctx = test_ctx(&i18n);
        ctx.session_log_len = 0;
        let _element = view(ctx);
    }
}
