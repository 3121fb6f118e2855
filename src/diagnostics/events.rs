// SPDX-License-Identifier: MPL-2.0
//! Event kinds recorded in the session log.

use serde::{Deserialize, Serialize};

/// Where a seek request originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekSource {
    /// Click on a transcript row's time chip.
    TranscriptRow,
    /// Click on the timeline bar.
    Timeline,
    /// Arrow-key highlight navigation.
    Keyboard,
}

/// One recordable playback/sync event.
///
/// Kinds cover the activity a bug report needs to reconstruct: what
/// document was loaded, what the user selected, and how playback moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A processing document replaced the previous one.
    DocumentLoaded {
        sentence_count: usize,
        duration_secs: f64,
    },

    /// A sentence was added to or removed from the highlight selection.
    SelectionToggled {
        sentence_id: String,
        selected: bool,
    },

    /// Playback transitioned to playing.
    PlaybackStarted { position_secs: f64 },

    /// Playback transitioned to paused.
    PlaybackPaused { position_secs: f64 },

    /// The user asked to move the playhead.
    SeekRequested {
        source: SeekSource,
        target_secs: f64,
    },

    /// Auto-skip jumped the playhead across a gap.
    AutoSkipJump { from_secs: f64, to_secs: f64 },

    /// Playback ran past the end of the last highlight segment.
    PlaybackFinished { position_secs: f64 },

    /// An upload/processing run began.
    UploadStarted { file_name: String },

    /// An upload/processing run failed.
    UploadFailed { message: String },

    /// The media session reported an error.
    PlaybackError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_type_tag() {
        let event = SessionEvent::SeekRequested {
            source: SeekSource::Timeline,
            target_secs: 12.5,
        };

        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"seek_requested\""));
        assert!(json.contains("\"source\":\"timeline\""));
        assert!(json.contains("\"target_secs\":12.5"));
    }

    #[test]
    fn events_deserialize_from_json() {
        let json = r#"{"type":"auto_skip_jump","from_secs":5.0,"to_secs":10.0}"#;
        let event: SessionEvent =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(
            event,
            SessionEvent::AutoSkipJump {
                from_secs: 5.0,
                to_secs: 10.0,
            }
        );
    }

    #[test]
    fn seek_sources_serialize_distinctly() {
        let sources = [
            (SeekSource::TranscriptRow, "transcript_row"),
            (SeekSource::Timeline, "timeline"),
            (SeekSource::Keyboard, "keyboard"),
        ];
        for (source, expected) in sources {
            let json = serde_json::to_string(&source).expect("serialization should succeed");
            assert_eq!(json, format!("\"{expected}\""));
        }
    }
}
