// SPDX-License-Identifier: MPL-2.0
//! Transport controls UI.
//!
//! Provides the previous / play-pause / next button row with a time display,
//! plus a sticky error line underneath when the media session reports a
//! failure. All buttons are disabled while media metadata is still loading.

use crate::error::PlaybackError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, row, tooltip, Column, Row, Text};
use iced::{Element, Font, Length};

/// Messages emitted by the transport controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Jump to the start of the previous highlight segment.
    PreviousHighlight,

    /// Jump to the start of the next highlight segment.
    NextHighlight,
}

/// View context for rendering the transport controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Playback state snapshot for rendering controls.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    /// Is playback currently running?
    pub is_playing: bool,

    /// Is media metadata still loading? Disables every button.
    pub is_loading: bool,

    /// Current playback position in seconds.
    pub position_secs: f64,

    /// Total duration in seconds.
    pub duration_secs: f64,

    /// Sticky error from the media session, cleared on the next load.
    pub error: Option<PlaybackError>,
}

/// Renders the transport controls row.
pub fn view<'a>(ctx: ViewContext<'a>, state: &PlaybackState) -> Element<'a, Message> {
    let previous_button = glyph_button(
        "|<",
        ctx.i18n.tr("controls-previous-tooltip"),
        Message::PreviousHighlight,
        state.is_loading,
    );

    let play_pause_glyph = if state.is_loading {
        "\u{231B}"
    } else if state.is_playing {
        "\u{23F8}"
    } else {
        "\u{25B6}"
    };
    let play_pause_tip = if state.is_playing {
        ctx.i18n.tr("controls-pause-tooltip")
    } else {
        ctx.i18n.tr("controls-play-tooltip")
    };
    let play_pause_button = glyph_button(
        play_pause_glyph,
        play_pause_tip,
        Message::TogglePlayback,
        state.is_loading,
    );

    let next_button = glyph_button(
        ">|",
        ctx.i18n.tr("controls-next-tooltip"),
        Message::NextHighlight,
        state.is_loading,
    );

    let time_display = Text::new(format!(
        "{} / {}",
        format_time(state.position_secs),
        format_time(state.duration_secs)
    ))
    .font(Font::MONOSPACE)
    .size(typography::BODY_SM);

    let controls: Row<'a, Message> = row![
        previous_button,
        play_pause_button,
        next_button,
        time_display,
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(iced::Alignment::Center);

    let mut content = Column::new().width(Length::Fill).push(controls);

    if let Some(error) = &state.error {
        content = content.push(
            Text::new(error_text(ctx.i18n, error))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    content.into()
}

/// Builds one glyph button with a tooltip, disabled while loading.
fn glyph_button<'a>(
    glyph: &'a str,
    tip: String,
    message: Message,
    loading: bool,
) -> Element<'a, Message> {
    let base = button(Text::new(glyph).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let content: Element<'a, Message> = if loading {
        base.style(styles::button::disabled()).into()
    } else {
        base.on_press(message).into()
    };

    tooltip(content, Text::new(tip), tooltip::Position::Top)
        .gap(4)
        .into()
}

/// Localized message for a playback error.
fn error_text(i18n: &I18n, error: &PlaybackError) -> String {
    match error {
        PlaybackError::PlayRejected(message) | PlaybackError::Media(message) => {
            i18n.tr_with_args(error.i18n_key(), &[("message", message)])
        }
        PlaybackError::SessionClosed => i18n.tr(error.i18n_key()),
    }
}

/// Formats duration in MM:SS or HH:MM:SS format.
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
