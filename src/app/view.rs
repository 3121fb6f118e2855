// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch.
//!
//! Picks the screen to render from [`ViewContext::screen`] and stacks the
//! toast overlay on top of it.

use super::{Message, Screen};
use crate::error::TranscriptError;
use crate::i18n::fluent::I18n;
use crate::playback::HighlightEngine;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::help::{self, ViewContext as HelpViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::player::{self, ViewContext as PlayerViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Borrowed slices of `App` state that the screens read while rendering.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub engine: &'a HighlightEngine,
    pub uploading: bool,
    pub current_file_name: Option<&'a str>,
    pub upload_error: Option<&'a TranscriptError>,
    pub spinner_rotation: f32,
    pub menu_open: bool,
    pub help_state: &'a help::State,
    pub theme_mode: ThemeMode,
    pub autoplay: bool,
    pub use_mock_data: bool,
    pub api_base_url: &'a str,
    pub session_log_len: usize,
    pub notifications: &'a Manager,
}

/// Renders whichever screen is active, plus any live toasts.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current: Element<'_, Message> = match ctx.screen {
        Screen::Player => view_player(&ctx),
        Screen::Settings => view_settings(&ctx),
        Screen::Help => view_help(&ctx),
        Screen::About => view_about(&ctx),
    };

    let screen = Container::new(current)
        .width(Length::Fill)
        .height(Length::Fill);

    // Toasts float above whichever screen is active
    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(screen).push(overlay).into()
}

fn view_player<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        uploading: ctx.uploading,
        file_name: ctx.current_file_name,
    })
    .map(Message::Navbar);

    let player_view = player::view(PlayerViewContext {
        i18n: ctx.i18n,
        engine: ctx.engine,
        uploading: ctx.uploading,
        file_name: ctx.current_file_name,
        upload_error: ctx.upload_error,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Player);

    Column::new()
        .push(navbar_view)
        .push(player_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    settings::view(SettingsViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        autoplay: ctx.autoplay,
        use_mock_data: ctx.use_mock_data,
        api_base_url: ctx.api_base_url,
        session_log_len: ctx.session_log_len,
    })
    .map(Message::Settings)
}

fn view_help<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    help::view(HelpViewContext {
        i18n: ctx.i18n,
        state: ctx.help_state,
    })
    .map(Message::Help)
}

fn view_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About)
}
