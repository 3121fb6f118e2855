// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! One row pinned above the player: hamburger menu on the left, app title,
//! then the loaded file name and the open-video action on the right. The
//! hamburger unfolds a small dropdown for Settings, Help, and About.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Disables the open action while a processing request is in flight.
    pub uploading: bool,
    /// Name of the loaded video, shown left of the open button.
    pub file_name: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenVideo,
    OpenSettings,
    OpenHelp,
    OpenAbout,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenVideo,
    OpenSettings,
    OpenHelp,
    OpenAbout,
}

/// Folds a navbar message into the menu-open flag and the resulting event.
///
/// Every action closes the dropdown; only the toggle keeps it open.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    let (open, event) = match message {
        Message::ToggleMenu => (!*menu_open, Event::None),
        Message::CloseMenu => (false, Event::None),
        Message::OpenVideo => (false, Event::OpenVideo),
        Message::OpenSettings => (false, Event::OpenSettings),
        Message::OpenHelp => (false, Event::OpenHelp),
        Message::OpenAbout => (false, Event::OpenAbout),
    };
    *menu_open = open;
    event
}

/// Render the navigation bar, with the dropdown attached while open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Column::new().width(Length::Fill).push(top_row(&ctx));

    if ctx.menu_open {
        bar = bar.push(dropdown(&ctx));
    }

    bar.into()
}

fn top_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hamburger = button(Text::new("\u{2630}").size(typography::BODY_LG))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS);

    let title = Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_SM);

    let open_label = Text::new(ctx.i18n.tr("navbar-open-button"));
    let open = if ctx.uploading {
        button(open_label).style(styles::button::disabled())
    } else {
        button(open_label)
            .on_press(Message::OpenVideo)
            .style(styles::button::primary)
    };

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .push(hamburger)
        .push(title)
        .push(iced::widget::space::horizontal());

    if let Some(file_name) = ctx.file_name {
        row = row.push(
            Text::new(file_name.to_string())
                .size(typography::CAPTION)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    Container::new(row.push(open))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

fn dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries = [
        ("\u{2699}", "menu-settings", Message::OpenSettings),
        ("?", "menu-help", Message::OpenHelp),
        ("\u{2139}", "menu-about", Message::OpenAbout),
    ];

    let mut items = Column::new().spacing(spacing::XXS);
    for (glyph, key, message) in entries {
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(glyph).size(typography::BODY))
            .push(Text::new(ctx.i18n.tr(key)));

        items = items.push(
            button(row)
                .on_press(message)
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(entry_style),
        );
    }

    Container::new(items)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Menu entries are flat until hovered, filled while pressed.
fn entry_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.background.base.text),
        button::Status::Hovered => (
            Some(palette.background.strong.color.into()),
            palette.background.base.text,
        ),
        button::Status::Pressed => (
            Some(palette.primary.strong.color.into()),
            palette.primary.strong.text,
        ),
        button::Status::Disabled => (None, palette.background.weak.text),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn ctx(i18n: &I18n, menu_open: bool, uploading: bool) -> ViewContext<'_> {
        ViewContext {
            i18n,
            menu_open,
            uploading,
            file_name: None,
        }
    }

    #[test]
    fn navbar_renders_closed_open_and_uploading() {
        let i18n = I18n::default();
        let _closed = view(ctx(&i18n, false, false));
        let _open = view(ctx(&i18n, true, false));
        let _uploading = view(ctx(&i18n, false, true));
        let _with_file = view(ViewContext {
            file_name: Some("demo.mp4"),
            ..ctx(&i18n, false, false)
        });
    }

    #[test]
    fn toggle_flips_the_menu_without_an_event() {
        let mut menu_open = false;

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(menu_open);

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(!menu_open);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        let _ = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn every_action_closes_the_menu_and_reports_its_event() {
        let cases = [
            (Message::OpenVideo, "OpenVideo"),
            (Message::OpenSettings, "OpenSettings"),
            (Message::OpenHelp, "OpenHelp"),
            (Message::OpenAbout, "OpenAbout"),
        ];

        for (message, expected) in cases {
            let mut menu_open = true;
            let event = update(message, &mut menu_open);
            assert!(!menu_open);
            let actual = match event {
                Event::OpenVideo => "OpenVideo",
                Event::OpenSettings => "OpenSettings",
                Event::OpenHelp => "OpenHelp",
                Event::OpenAbout => "OpenAbout",
                Event::None => "None",
            };
            assert_eq!(actual, expected);
        }
    }
}
