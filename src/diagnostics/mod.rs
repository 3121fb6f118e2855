// SPDX-License-Identifier: MPL-2.0
//! Session event log: an in-memory trail of playback/sync activity.
//!
//! Events are recorded into a memory-bounded circular buffer and can be
//! exported as JSON for bug reports. Recording is always on; the log is
//! cleared whenever a new processing document replaces the old one.

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{SeekSource, SessionEvent};

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::app::config::defaults::SESSION_LOG_CAPACITY;

/// One recorded event with its offset from the start of the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Milliseconds since the log last started (or was cleared).
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub event: SessionEvent,
}

/// Bounded in-memory event log for one app run.
#[derive(Debug, Clone)]
pub struct SessionLog {
    events: CircularBuffer<LoggedEvent>,
    started: Instant,
}

impl SessionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(SESSION_LOG_CAPACITY)
    }

    /// Creates a log with an explicit capacity. Used by tests to force
    /// eviction with few events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            started: Instant::now(),
        }
    }

    /// Records an event, stamping it with the elapsed time since the log
    /// started.
    pub fn record(&mut self, event: SessionEvent) {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.events.push(LoggedEvent { elapsed_ms, event });
    }

    /// Drops all recorded events and restarts the elapsed clock.
    pub fn clear(&mut self) {
        self.events.clear();
        self.started = Instant::now();
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the whole log to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let events: Vec<&LoggedEvent> = self.events.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Default filename offered by the export save dialog.
///
/// Format: `reelcut_session_YYYYMMDD_HHMMSS.json`, local time.
#[must_use]
pub fn default_export_filename() -> String {
    let now = Local::now();
    format!("reelcut_session_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes content to a file atomically.
///
/// Writes to a `.tmp` sibling first, then renames onto the final path so a
/// failed write cannot leave a truncated export behind.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_order() {
        let mut log = SessionLog::new();
        log.record(SessionEvent::PlaybackStarted { position_secs: 0.0 });
        log.record(SessionEvent::PlaybackPaused { position_secs: 3.0 });

        let kinds: Vec<_> = log.iter().map(|e| &e.event).collect();
        assert!(matches!(kinds[0], SessionEvent::PlaybackStarted { .. }));
        assert!(matches!(kinds[1], SessionEvent::PlaybackPaused { .. }));
    }

    #[test]
    fn capacity_evicts_oldest_events() {
        let mut log = SessionLog::with_capacity(2);
        log.record(SessionEvent::PlaybackStarted { position_secs: 0.0 });
        log.record(SessionEvent::PlaybackPaused { position_secs: 1.0 });
        log.record(SessionEvent::PlaybackFinished { position_secs: 2.0 });

        assert_eq!(log.len(), 2);
        let first = log.iter().next().expect("two events retained");
        assert!(matches!(first.event, SessionEvent::PlaybackPaused { .. }));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = SessionLog::new();
        log.record(SessionEvent::DocumentLoaded {
            sentence_count: 3,
            duration_secs: 25.0,
        });
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn elapsed_timestamps_are_monotonic() {
        let mut log = SessionLog::new();
        log.record(SessionEvent::PlaybackStarted { position_secs: 0.0 });
        log.record(SessionEvent::PlaybackPaused { position_secs: 1.0 });

        let stamps: Vec<u64> = log.iter().map(|e| e.elapsed_ms).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn to_json_flattens_event_fields() {
        let mut log = SessionLog::new();
        log.record(SessionEvent::SeekRequested {
            source: SeekSource::Keyboard,
            target_secs: 42.0,
        });

        let json = log.to_json().expect("serialization should succeed");
        assert!(json.contains("\"type\": \"seek_requested\""));
        assert!(json.contains("\"source\": \"keyboard\""));
        assert!(json.contains("\"elapsed_ms\""));
    }

    #[test]
    fn default_export_filename_has_expected_shape() {
        let filename = default_export_filename();

        assert!(filename.starts_with("reelcut_session_"));
        assert!(filename.ends_with(".json"));
        // reelcut_session_ + YYYYMMDD_HHMMSS + .json
        assert_eq!(filename.len(), "reelcut_session_".len() + 15 + ".json".len());
    }

    #[test]
    fn write_atomic_creates_file_without_leftover_temp() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let path = temp_dir.path().join("session.json");

        write_atomic(&path, r#"[{"elapsed_ms":0}]"#).expect("write should succeed");

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let content = std::fs::read_to_string(&path).expect("should read file");
        assert_eq!(content, r#"[{"elapsed_ms":0}]"#);
    }
}
