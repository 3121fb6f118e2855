// SPDX-License-Identifier: MPL-2.0
//! Video preview stage.
//!
//! Renders the letterboxed stage with a central play/pause overlay button
//! and the caption bar along the bottom edge. The caption carries the
//! current sentence's text and is only present while that sentence is both
//! current and selected; the engine hands it over pre-filtered.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Messages emitted by the preview stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TogglePlayback,
}

/// Process a preview message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::TogglePlayback => Event::TogglePlayback,
    }
}

/// Contextual data needed to render the preview stage.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Caption text, already gated on current-and-selected.
    pub caption: Option<&'a str>,
    pub is_playing: bool,
    /// Disables the overlay button until metadata arrives.
    pub is_loading: bool,
    /// Name of the loaded video, shown on the stage backdrop.
    pub file_name: Option<&'a str>,
}

/// Render the preview stage.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut backdrop = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);
    backdrop = match ctx.file_name {
        Some(file_name) => backdrop.push(Text::new(file_name.to_string()).size(typography::BODY_SM)),
        None => backdrop.push(
            Text::new(ctx.i18n.tr("preview-stage-placeholder")).size(typography::BODY_SM),
        ),
    };

    let stage = Container::new(backdrop)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::stage);

    let mut stack = Stack::new().push(stage);

    // Central play/pause control
    let glyph = if ctx.is_playing {
        "\u{23F8}"
    } else {
        "\u{25B6}"
    };
    let mut overlay_button = button(Text::new(glyph).size(sizing::ICON_MD))
        .padding(spacing::MD)
        .style(styles::button::play_overlay());
    if !ctx.is_loading {
        overlay_button = overlay_button.on_press(Message::TogglePlayback);
    }

    stack = stack.push(
        Container::new(overlay_button)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );

    // Caption bar pinned to the bottom edge
    if let Some(caption) = ctx.caption {
        let caption_bar = Container::new(Text::new(caption).size(typography::BODY_LG))
            .width(Length::Fill)
            .max_width(sizing::CAPTION_MAX_WIDTH)
            .padding(spacing::MD)
            .style(styles::container::caption);

        stack = stack.push(
            Container::new(caption_bar)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_emits_event() {
        let event = update(Message::TogglePlayback);
        assert_eq!(event, Event::TogglePlayback);
    }

    #[test]
    fn preview_renders_without_caption() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            caption: None,
            is_playing: false,
            is_loading: false,
            file_name: Some("demo.mp4"),
        };
        let _element = view(ctx);
    }

    #[test]
    fn preview_renders_with_caption() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            caption: Some("The shutter fires at last."),
            is_playing: true,
            is_loading: false,
            file_name: None,
        };
        let _element = view(ctx);
    }
}
