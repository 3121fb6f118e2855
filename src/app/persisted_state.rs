// SPDX-License-Identifier: MPL-2.0
//! Session-to-session state the user never edits.
//!
//! Remembers conveniences like the last directories used by the file
//! dialogs. Stored as CBOR in `state.cbor` under the app data
//! directory, deliberately apart from the TOML preferences: preferences
//! are meant to be hand-edited, this file is not.
//!
//! Load and save never propagate errors. They hand back an optional
//! i18n key instead, which the caller can surface as a notification;
//! a lost `state.cbor` only costs a remembered directory.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Where the last video was opened from; seeds the upload dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Where the last session log was exported to; seeds the save dialog.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default location, resolving the directory
    /// through [`paths::get_app_data_dir`].
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from a custom directory. A missing file is normal
    /// (first launch) and yields defaults without a warning.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        };
        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (
                Self::default(),
                Some("notification-state-parse-error".to_string()),
            ),
        }
    }

    /// Saves state to the default location.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state to a custom directory, creating it as needed.
    /// Returns the i18n key of a warning on failure, `None` on success.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(_) => return Some("notification-state-create-error".to_string()),
        };
        ciborium::into_writer(self, BufWriter::new(file))
            .is_err()
            .then(|| "notification-state-write-error".to_string())
    }

    fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory a video was opened from. Paths without a
    /// parent (like `/`) leave the stored value untouched.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    /// Remembers the directory a session log was exported to, with the
    /// same no-parent rule as the open directory.
    pub fn set_last_export_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_export_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fresh_state_remembers_nothing() {
        let state = AppState::default();
        assert!(state.last_open_directory.is_none());
        assert!(state.last_export_directory.is_none());
    }

    #[test]
    fn open_directory_comes_from_file_parent() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/home/user/videos/talk.mp4"));
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/videos"))
        );
    }

    #[test]
    fn rootlike_paths_leave_directory_unset() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("/"));
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn export_directory_comes_from_file_parent() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(Path::new("/home/user/logs/session.json"));
        assert_eq!(
            state.last_export_directory,
            Some(PathBuf::from("/home/user/logs"))
        );
    }

    #[test]
    fn load_never_panics() {
        // Runs against whatever (if anything) is on this machine, so no
        // value assertions; reaching the end is the test.
        let _ = AppState::load();
    }

    #[test]
    fn round_trips_through_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_open_directory: Some(PathBuf::from("/test/open/directory")),
            last_export_directory: Some(PathBuf::from("/test/export/directory")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(original, loaded);
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn garbage_file_warns_and_falls_back() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn separate_directories_hold_separate_state() {
        let dir_a = tempdir().expect("create temp dir A");
        let dir_b = tempdir().expect("create temp dir B");

        let state_a = AppState {
            last_open_directory: Some(PathBuf::from("/path/a")),
            last_export_directory: None,
        };
        let state_b = AppState {
            last_open_directory: Some(PathBuf::from("/path/b")),
            last_export_directory: None,
        };
        state_a.save_to(Some(dir_a.path().to_path_buf()));
        state_b.save_to(Some(dir_b.path().to_path_buf()));

        let (loaded_a, _) = AppState::load_from(Some(dir_a.path().to_path_buf()));
        let (loaded_b, _) = AppState::load_from(Some(dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.last_open_directory, Some(PathBuf::from("/path/a")));
        assert_eq!(loaded_b.last_open_directory, Some(PathBuf::from("/path/b")));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_open_directory: Some(PathBuf::from("/test")),
            last_export_directory: None,
        };

        assert!(state.save_to(Some(nested_dir.clone())).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}