// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the player and settings views.
//!
//! The `App` struct wires together the domains (playback, processing,
//! localization) and translates messages into side effects like config
//! persistence or media session commands. This file intentionally keeps
//! policy decisions (minimum window size, session identity, theme
//! resolution) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, ProcessingUpload};
pub use screen::Screen;

use crate::diagnostics::SessionLog;
use crate::error::TranscriptError;
use crate::i18n::fluent::I18n;
use crate::playback::{HighlightEngine, MediaCommand, MediaSessionHandle};
use crate::ui::help;
use crate::ui::notifications;
use crate::ui::player::transcript_list::ScrollDebounce;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the highlight engine, the media
/// session, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Highlight playback engine holding the document, selection, and clock.
    engine: HighlightEngine,
    /// Transport handle into the live media session, once it reports in.
    media_handle: Option<MediaSessionHandle>,
    /// Identity of the current media session; bumped on every install so
    /// signals from a replaced session can be told apart and dropped.
    session_id: Option<u64>,
    /// Commands issued before the session handle arrived.
    pending_commands: Vec<MediaCommand>,
    /// Event log for the current session, exportable from settings.
    session_log: SessionLog,
    /// Whether an upload is being processed.
    uploading: bool,
    /// Error from the last failed upload, shown in the upload panel.
    upload_error: Option<TranscriptError>,
    /// Name of the currently loaded video file.
    current_file_name: Option<String>,
    /// Debounce for following the current sentence in the transcript.
    scroll_debounce: ScrollDebounce,
    theme_mode: ThemeMode,
    /// Whether playback should start as soon as a document's metadata loads.
    autoplay: bool,
    /// Whether the bundled sample document stands in for the backend.
    use_mock_data: bool,
    /// Base URL of the processing backend.
    api_base_url: String,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Help screen state (tracks expanded sections).
    help_state: help::State,
    /// Persisted application state (last open/export directories).
    persisted: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Rotation angle of the upload spinner, advanced one frame per tick.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_document", &self.engine.has_document())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

/// Spinner advance per 16 ms animation frame.
const SPINNER_ROTATION_SPEED: f32 = std::f32::consts::PI / 60.0;

/// Window geometry and icon for the main window.
pub fn window_settings() -> window::Settings {
    let size = |w: u32, h: u32| iced::Size::new(w as f32, h as f32);

    window::Settings {
        size: size(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(size(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Launches the Iced application loop. Called from `main.rs` after flag parsing.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants boot: Fn, not FnOnce, so the one-shot flags go through
    // a RefCell<Option<_>> and are taken on the single real call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot ran twice");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Player,
            engine: HighlightEngine::new(),
            media_handle: None,
            session_id: None,
            pending_commands: Vec::new(),
            session_log: SessionLog::new(),
            uploading: false,
            upload_error: None,
            current_file_name: None,
            scroll_debounce: ScrollDebounce::default(),
            theme_mode: ThemeMode::System,
            autoplay: false,
            use_mock_data: config::DEFAULT_USE_MOCK_DATA,
            api_base_url: config::DEFAULT_API_BASE_URL.to_string(),
            menu_open: false,
            help_state: help::State::new(),
            persisted: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks a video from the
    /// launcher straight into processing.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.autoplay = config.playback.autoplay;
        app.use_mock_data = config.processing.use_mock_data;
        app.api_base_url = config.processing.api_base_url;

        let (persisted, state_warning) = persisted_state::AppState::load();
        app.persisted = persisted;

        // Either load may have fallen back to defaults; tell the user why.
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.file_path {
            Some(path_str) => {
                let path = std::path::PathBuf::from(path_str);
                let mut ctx = app.update_context();
                update::begin_processing(&mut ctx, path)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.current_file_name {
            Some(file) => self.i18n.tr_with_args("window-title", &[("file", file)]),
            None => self.i18n.tr("app-name"),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.scroll_debounce.has_pending(),
        );
        let media_sub = subscription::create_media_subscription(self.session_id);
        let spinner_sub = subscription::create_spinner_subscription(self.uploading);

        Subscription::batch([event_sub, tick_sub, media_sub, spinner_sub])
    }

    /// Gathers the mutable borrows the update handlers work on.
    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            engine: &mut self.engine,
            media_handle: &mut self.media_handle,
            session_id: &mut self.session_id,
            pending_commands: &mut self.pending_commands,
            session_log: &mut self.session_log,
            uploading: &mut self.uploading,
            upload_error: &mut self.upload_error,
            current_file_name: &mut self.current_file_name,
            scroll_debounce: &mut self.scroll_debounce,
            theme_mode: &mut self.theme_mode,
            autoplay: &mut self.autoplay,
            use_mock_data: &mut self.use_mock_data,
            api_base_url: &mut self.api_base_url,
            menu_open: &mut self.menu_open,
            help_state: &mut self.help_state,
            persisted: &mut self.persisted,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Player(player_message) => {
                update::handle_player_message(&mut ctx, player_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Help(help_message) => update::handle_help_message(&mut ctx, help_message),
            Message::About(about_message) => {
                update::handle_about_message(&mut ctx, &about_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialog => update::handle_open_file_dialog(&mut ctx),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::ProcessingFinished(upload) => {
                update::handle_processing_finished(&mut ctx, *upload)
            }
            Message::Media { session, signal } => {
                update::handle_media_signal(&mut ctx, session, signal)
            }
            Message::SpinnerTick => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_ROTATION_SPEED)
                    % (2.0 * std::f32::consts::PI);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::ExportLogDialogResult(path) => {
                update::handle_export_log_result(&mut ctx, path)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            engine: &self.engine,
            uploading: self.uploading,
            current_file_name: self.current_file_name.as_deref(),
            upload_error: self.upload_error.as_ref(),
            spinner_rotation: self.spinner_rotation,
            menu_open: self.menu_open,
            help_state: &self.help_state,
            theme_mode: self.theme_mode,
            autoplay: self.autoplay,
            use_mock_data: self.use_mock_data,
            api_base_url: &self.api_base_url,
            session_log_len: self.session_log.len(),
            notifications: &self.notifications,
        })
    }
}
