// SPDX-License-Identifier: MPL-2.0
//! The application message enum and startup flags.

use crate::error::TranscriptError;
use crate::playback::MediaSignal;
use crate::ui::about;
use crate::ui::help;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::player;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Everything `App::update` can be asked to do. Screen-local messages are
/// wrapped in a variant per screen so the whole app funnels through one
/// update function.
#[derive(Debug, Clone)]
pub enum Message {
    Player(player::Message),
    SwitchScreen(Screen),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Help(help::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    /// Trigger the open video dialog from the navbar or the upload panel.
    OpenFileDialog,
    /// Result from the open video dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from sending the selected file through the processing service.
    ProcessingFinished(Box<ProcessingUpload>),
    /// A signal from a media session. Signals from sessions other than the
    /// current one are stale and get dropped.
    Media { session: u64, signal: MediaSignal },
    /// Advance the upload spinner animation one frame.
    SpinnerTick,
    /// Periodic tick for notification auto-dismiss and the debounced
    /// transcript scroll.
    Tick(Instant),
    /// Result from the session log save dialog.
    ExportLogDialogResult(Option<PathBuf>),
}

/// Startup options collected from the command line before `App::new` runs.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form (e.g. `zh-TW`, `en-US`).
    pub lang: Option<String>,
    /// Video path to run through processing on startup.
    pub file_path: Option<String>,
    /// Directory of Fluent `.ftl` files that replaces the embedded ones.
    pub i18n_dir: Option<String>,
    /// Data directory override (state files). Beats `REELCUT_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (settings.toml). Beats `REELCUT_CONFIG_DIR`.
    pub config_dir: Option<String>,
}

/// What the processing service produced for one upload, together with the
/// name of the file it ran on.
#[derive(Debug, Clone)]
pub struct ProcessingUpload {
    pub file_name: String,
    pub result: Result<crate::transcript::ProcessingResult, TranscriptError>,
}
