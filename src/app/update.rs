// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! `App::update` stays a thin dispatcher; the logic for each concern lives
//! in the handler functions here, which work on an [`UpdateContext`] of
//! mutable borrows into the application state.

use super::{persistence, Message, ProcessingUpload, Screen};
use crate::app::config::defaults::VIDEO_FILE_EXTENSIONS;
use crate::diagnostics::{self, SeekSource, SessionEvent, SessionLog};
use crate::error::TranscriptError;
use crate::i18n::fluent::I18n;
use crate::playback::{HighlightEngine, MediaCommand, MediaSessionHandle, MediaSignal};
use crate::transcript::service;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::help::{self, Event as HelpEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::player::{self, transcript_list::ScrollDebounce};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub engine: &'a mut HighlightEngine,
    pub media_handle: &'a mut Option<MediaSessionHandle>,
    pub session_id: &'a mut Option<u64>,
    pub pending_commands: &'a mut Vec<MediaCommand>,
    pub session_log: &'a mut SessionLog,
    pub uploading: &'a mut bool,
    pub upload_error: &'a mut Option<TranscriptError>,
    pub current_file_name: &'a mut Option<String>,
    pub scroll_debounce: &'a mut ScrollDebounce,
    pub theme_mode: &'a mut ThemeMode,
    pub autoplay: &'a mut bool,
    pub use_mock_data: &'a mut bool,
    pub api_base_url: &'a mut String,
    pub menu_open: &'a mut bool,
    pub help_state: &'a mut help::State,
    pub persisted: &'a mut super::persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Creates a `PreferencesContext` for persisting preferences.
    pub fn preferences_context(&mut self) -> persistence::PreferencesContext<'_> {
        persistence::PreferencesContext {
            theme_mode: *self.theme_mode,
            autoplay: *self.autoplay,
            api_base_url: self.api_base_url,
            use_mock_data: *self.use_mock_data,
            notifications: self.notifications,
        }
    }
}

/// Handles player screen messages.
pub fn handle_player_message(
    ctx: &mut UpdateContext<'_>,
    message: player::Message,
) -> Task<Message> {
    match player::update(message) {
        player::Event::OpenFile => handle_open_file_dialog(ctx),
        player::Event::TogglePlayback => {
            if !ctx.engine.has_document() {
                return Task::none();
            }
            let commands = ctx.engine.toggle_play();
            send_media_commands(ctx, commands);
            sync_transcript_scroll(ctx);
            Task::none()
        }
        player::Event::PreviousHighlight => jump_highlight(ctx, JumpDirection::Previous),
        player::Event::NextHighlight => jump_highlight(ctx, JumpDirection::Next),
        player::Event::SeekToFraction(fraction) => {
            if !ctx.engine.has_document() {
                return Task::none();
            }
            let commands = ctx.engine.seek_fraction(fraction);
            record_seek(ctx, SeekSource::Timeline);
            send_media_commands(ctx, commands);
            sync_transcript_scroll(ctx);
            Task::none()
        }
        player::Event::SeekToSentence { start_secs, .. } => {
            if !ctx.engine.has_document() {
                return Task::none();
            }
            let commands = ctx.engine.seek(start_secs);
            record_seek(ctx, SeekSource::TranscriptRow);
            send_media_commands(ctx, commands);
            sync_transcript_scroll(ctx);
            Task::none()
        }
        player::Event::ToggleSentence(sentence_id) => {
            let selected = ctx.engine.toggle_sentence(&sentence_id);
            ctx.session_log.record(SessionEvent::SelectionToggled {
                sentence_id,
                selected,
            });
            Task::none()
        }
    }
}

enum JumpDirection {
    Previous,
    Next,
}

/// Shared prev/next highlight jump path; the arrow keys and the transport
/// buttons both land here.
fn jump_highlight(ctx: &mut UpdateContext<'_>, direction: JumpDirection) -> Task<Message> {
    if ctx.engine.segments().is_empty() {
        return Task::none();
    }

    let commands = match direction {
        JumpDirection::Previous => ctx.engine.prev_highlight(),
        JumpDirection::Next => ctx.engine.next_highlight(),
    };
    record_seek(ctx, SeekSource::Keyboard);
    send_media_commands(ctx, commands);
    sync_transcript_scroll(ctx);
    Task::none()
}

/// Records a seek against the clock's settled position.
///
/// The clock register already holds the resolved target by the time this
/// runs, including clamping and boundary snapping.
fn record_seek(ctx: &mut UpdateContext<'_>, source: SeekSource) {
    ctx.session_log.record(SessionEvent::SeekRequested {
        source,
        target_secs: ctx.engine.clock().position_secs(),
    });
}

/// Sends transport commands through the session handle.
///
/// Before the session reports in (between a document install and its
/// `SessionStarted`), commands are parked and flushed once the handle
/// arrives. A failed send becomes a sticky playback error plus a toast.
fn send_media_commands(ctx: &mut UpdateContext<'_>, commands: Vec<MediaCommand>) {
    if commands.is_empty() {
        return;
    }

    let Some(handle) = ctx.media_handle.as_ref() else {
        ctx.pending_commands.extend(commands);
        return;
    };

    for command in commands {
        if let Err(error) = handle.send(command) {
            let message = error.to_string();
            ctx.engine.playback_error(&message);
            ctx.session_log
                .record(SessionEvent::PlaybackError { message });
            ctx.notifications
                .push(Notification::error(error.i18n_key()));
            break;
        }
    }
}

/// Arms the debounced transcript scroll towards the current sentence.
fn sync_transcript_scroll(ctx: &mut UpdateContext<'_>) {
    if let Some(sentence) = ctx.engine.current_sentence() {
        let id = sentence.id.clone();
        ctx.scroll_debounce.arm(&id, Instant::now());
    }
}

/// Handles a signal from a media session.
///
/// A replaced session's stream can still have signals in flight while the
/// new one spins up; anything not carrying the current id is stale and
/// dropped.
pub fn handle_media_signal(
    ctx: &mut UpdateContext<'_>,
    session: u64,
    signal: MediaSignal,
) -> Task<Message> {
    if *ctx.session_id != Some(session) {
        return Task::none();
    }

    match signal {
        MediaSignal::SessionStarted(handle) => {
            *ctx.media_handle = Some(handle);
            let parked = std::mem::take(ctx.pending_commands);
            send_media_commands(ctx, parked);
        }
        MediaSignal::LoadStarted => ctx.engine.load_started(),
        MediaSignal::MetadataLoaded { .. } => {
            ctx.engine.metadata_loaded();
            if *ctx.autoplay {
                let commands = ctx.engine.toggle_play();
                send_media_commands(ctx, commands);
            }
        }
        MediaSignal::PositionChanged { position_secs } => {
            let commands = ctx.engine.position_changed(position_secs);
            match commands.as_slice() {
                [MediaCommand::SetPosition { position_secs: to }] => {
                    ctx.session_log.record(SessionEvent::AutoSkipJump {
                        from_secs: position_secs,
                        to_secs: *to,
                    });
                }
                [.., MediaCommand::Pause] => {
                    ctx.session_log.record(SessionEvent::PlaybackFinished {
                        position_secs: ctx.engine.clock().position_secs(),
                    });
                }
                _ => {}
            }
            send_media_commands(ctx, commands);
            sync_transcript_scroll(ctx);
        }
        MediaSignal::Played => {
            ctx.engine.played();
            ctx.session_log.record(SessionEvent::PlaybackStarted {
                position_secs: ctx.engine.clock().position_secs(),
            });
        }
        MediaSignal::Paused => {
            ctx.engine.paused();
            ctx.session_log.record(SessionEvent::PlaybackPaused {
                position_secs: ctx.engine.clock().position_secs(),
            });
        }
        MediaSignal::Ended => {
            ctx.engine.ended();
            ctx.session_log.record(SessionEvent::PlaybackFinished {
                position_secs: ctx.engine.clock().position_secs(),
            });
        }
        MediaSignal::Error(message) => {
            ctx.engine.playback_error(&message);
            let error = crate::error::PlaybackError::from_message(&message);
            let mut notification = Notification::error(error.i18n_key());
            if matches!(
                error,
                crate::error::PlaybackError::PlayRejected(_) | crate::error::PlaybackError::Media(_)
            ) {
                notification = notification.with_arg("message", message.clone());
            }
            ctx.notifications.push(notification);
            ctx.session_log
                .record(SessionEvent::PlaybackError { message });
        }
    }
    Task::none()
}

/// Handles a screen switch request.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    Task::none()
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenVideo => handle_open_file_dialog(ctx),
        NavbarEvent::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::OpenHelp => {
            *ctx.screen = Screen::Help;
            Task::none()
        }
        NavbarEvent::OpenAbout => {
            *ctx.screen = Screen::About;
            Task::none()
        }
    }
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::BackToPlayer => {
            *ctx.screen = Screen::Player;
            Task::none()
        }
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, locale, ctx.notifications)
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persistence::persist_preferences(ctx.preferences_context())
        }
        SettingsEvent::AutoplayToggled(enabled) => {
            *ctx.autoplay = enabled;
            persistence::persist_preferences(ctx.preferences_context())
        }
        SettingsEvent::UseMockDataToggled(enabled) => {
            *ctx.use_mock_data = enabled;
            persistence::persist_preferences(ctx.preferences_context())
        }
        SettingsEvent::ApiBaseUrlChanged(url) => {
            // Applied on submit; typing only updates the draft value
            *ctx.api_base_url = url;
            Task::none()
        }
        SettingsEvent::ApiBaseUrlSubmitted => {
            persistence::persist_preferences(ctx.preferences_context())
        }
        SettingsEvent::ExportSessionLog => {
            handle_export_log_dialog(ctx.persisted.last_export_directory.clone())
        }
    }
}

/// Handles help screen messages.
pub fn handle_help_message(ctx: &mut UpdateContext<'_>, message: help::Message) -> Task<Message> {
    match help::update(ctx.help_state, message) {
        HelpEvent::None => Task::none(),
        HelpEvent::BackToPlayer => {
            *ctx.screen = Screen::Player;
            Task::none()
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToPlayer => {
            *ctx.screen = Screen::Player;
            Task::none()
        }
    }
}

/// Opens the video picker, remembering the last directory.
pub fn handle_open_file_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.uploading {
        return Task::none();
    }

    let last_directory = ctx.persisted.last_open_directory.clone();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Video", VIDEO_FILE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open video dialog.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    begin_processing(ctx, path)
}

/// Kicks a selected video file into the processing service.
pub fn begin_processing(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("video")
        .to_string();

    *ctx.uploading = true;
    *ctx.upload_error = None;
    ctx.notifications.clear_upload_errors();
    ctx.session_log.record(SessionEvent::UploadStarted {
        file_name: file_name.clone(),
    });

    // Remember the directory for next time and persist
    ctx.persisted.set_last_open_directory_from_file(&path);
    if let Some(key) = ctx.persisted.save() {
        ctx.notifications.push(Notification::warning(&key));
    }

    let api_base_url = ctx.api_base_url.clone();
    let use_mock_data = *ctx.use_mock_data;
    Task::perform(
        async move {
            let result = service::process_video(&path, &api_base_url, use_mock_data).await;
            ProcessingUpload { file_name, result }
        },
        |upload| Message::ProcessingFinished(Box::new(upload)),
    )
}

/// Handles the processing service's verdict on an upload.
pub fn handle_processing_finished(
    ctx: &mut UpdateContext<'_>,
    upload: ProcessingUpload,
) -> Task<Message> {
    *ctx.uploading = false;

    match upload.result {
        Ok(document) => {
            let sentence_count = document.sentence_count();
            let duration_secs = document.duration_secs();

            let commands = ctx.engine.install_document(document);
            *ctx.current_file_name = Some(upload.file_name);
            *ctx.upload_error = None;

            // A new session replaces the old transport wholesale; the Load
            // command waits for the new session's handle.
            *ctx.session_id = Some(ctx.session_id.map_or(0, |id| id + 1));
            *ctx.media_handle = None;
            ctx.pending_commands.clear();
            ctx.pending_commands.extend(commands);

            ctx.scroll_debounce.reset();
            ctx.session_log.clear();
            ctx.session_log.record(SessionEvent::DocumentLoaded {
                sentence_count,
                duration_secs,
            });

            ctx.notifications
                .push(Notification::success("notification-upload-success"));
        }
        Err(error) => {
            ctx.session_log.record(SessionEvent::UploadFailed {
                message: error.to_string(),
            });
            ctx.notifications.push(upload_error_notification(&error));
            *ctx.upload_error = Some(error);
        }
    }

    Task::none()
}

/// Builds the toast for a failed upload, with the arguments the message
/// key interpolates.
fn upload_error_notification(error: &TranscriptError) -> Notification {
    let notification = Notification::error(error.i18n_key());
    match error {
        TranscriptError::Transport(message) | TranscriptError::MalformedDocument(message) => {
            notification.with_arg("message", message.clone())
        }
        TranscriptError::Status(code) => notification.with_arg("status", code.to_string()),
        TranscriptError::EmptyDocument => notification,
    }
}

/// Opens the save dialog for the session log export.
pub fn handle_export_log_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name(diagnostics::default_export_filename());

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ExportLogDialogResult,
    )
}

/// Writes the session log where the save dialog pointed.
pub fn handle_export_log_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    let written = ctx
        .session_log
        .to_json()
        .map_err(|e| e.to_string())
        .and_then(|json| {
            diagnostics::write_atomic(&path, &json).map_err(|e| e.to_string())
        });

    match written {
        Ok(()) => {
            ctx.persisted.set_last_export_directory_from_file(&path);
            if let Some(key) = ctx.persisted.save() {
                ctx.notifications.push(Notification::warning(&key));
            }
            ctx.notifications
                .push(Notification::success("notification-log-exported"));
        }
        Err(message) => {
            ctx.notifications.push(
                Notification::error("notification-log-export-error").with_arg("message", message),
            );
        }
    }

    Task::none()
}

/// Periodic tick: notification lifetimes and the deferred transcript scroll.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick();

    if let Some(sentence_id) = ctx.scroll_debounce.take_due(now) {
        if let Some(document) = ctx.engine.document() {
            if let Some(offset) = player::transcript_list::scroll_offset(document, &sentence_id) {
                return snap_transcript_to(offset);
            }
        }
    }

    Task::none()
}

fn snap_transcript_to(offset: RelativeOffset) -> Task<Message> {
    operation::snap_to(Id::new(player::transcript_list::SCROLLABLE_ID), offset)
}
