// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard shortcuts) to the
//! appropriate screen, the media session stream, and the periodic ticks that
//! drive the upload spinner, notification auto-dismiss and the debounced
//! transcript scroll.

use super::{Message, Screen};
use crate::playback;
use crate::ui::player;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// Player: Space toggles playback, the arrow keys jump between highlight
/// segments. Settings/Help/About: Escape returns to the player. Shortcuts
/// only fire for events no widget consumed, so typing a space into the
/// endpoint text input never toggles playback.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Player => event::listen_with(|event, status, _window_id| {
            if matches!(status, event::Status::Captured) {
                return None;
            }

            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Space),
                    ..
                }) => Some(Message::Player(player::Message::Controls(
                    player::controls::Message::TogglePlayback,
                ))),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                    ..
                }) => Some(Message::Player(player::Message::Controls(
                    player::controls::Message::PreviousHighlight,
                ))),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                    ..
                }) => Some(Message::Player(player::Message::Controls(
                    player::controls::Message::NextHighlight,
                ))),
                _ => None,
            }
        }),
        Screen::Settings | Screen::Help | Screen::About => {
            event::listen_with(|event, status, _window_id| {
                if matches!(status, event::Status::Captured) {
                    return None;
                }

                match event {
                    event::Event::Keyboard(keyboard::Event::KeyPressed {
                        key: keyboard::Key::Named(keyboard::key::Named::Escape),
                        ..
                    }) => Some(Message::SwitchScreen(Screen::Player)),
                    _ => None,
                }
            })
        }
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the debounced transcript scroll.
pub fn create_tick_subscription(
    has_notifications: bool,
    scroll_pending: bool,
) -> Subscription<Message> {
    if has_notifications || scroll_pending {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the media session subscription for the given session id.
///
/// `None` before the first document loads; each new upload bumps the id,
/// which tears the previous transport task down and starts a fresh one.
/// Signals are tagged with the id so late arrivals from a replaced
/// session can be told apart from current ones.
pub fn create_media_subscription(session_id: Option<u64>) -> Subscription<Message> {
    match session_id {
        Some(id) => playback::media_session(id)
            .with(id)
            .map(|(session, signal)| Message::Media { session, signal }),
        None => Subscription::none(),
    }
}

/// Creates the spinner animation subscription, active only while an upload
/// is processing.
pub fn create_spinner_subscription(uploading: bool) -> Subscription<Message> {
    if uploading {
        // Animate at 60 FPS while the service call is in flight
        time::every(Duration::from_millis(16)).map(|_| Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
