// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! [`Error`] is the app-level umbrella. Upload and playback failures
//! keep their own enums because the UI maps each shape to a localized
//! message through `i18n_key()`.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Transcript(TranscriptError),
    Playback(PlaybackError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Transcript(e) => write!(f, "Transcript Error: {e}"),
            Error::Playback(e) => write!(f, "Playback Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<TranscriptError> for Error {
    fn from(err: TranscriptError) -> Self {
        Self::Transcript(err)
    }
}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Self::Playback(err)
    }
}

/// What went wrong while uploading a video or fetching its processing
/// document.
#[derive(Debug, Clone)]
pub enum TranscriptError {
    /// The processing endpoint could not be reached.
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not a valid processing document.
    MalformedDocument(String),

    /// The document parsed but contains no sentences.
    EmptyDocument,
}

impl TranscriptError {
    /// The i18n key of the user-facing message for this failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TranscriptError::Transport(_) => "error-upload-transport",
            TranscriptError::Status(_) => "error-upload-status",
            TranscriptError::MalformedDocument(_) => "error-upload-malformed",
            TranscriptError::EmptyDocument => "error-upload-empty",
        }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::Transport(msg) => write!(f, "Upload failed: {msg}"),
            TranscriptError::Status(code) => {
                write!(f, "Processing endpoint returned status {code}")
            }
            TranscriptError::MalformedDocument(msg) => {
                write!(f, "Malformed processing document: {msg}")
            }
            TranscriptError::EmptyDocument => write!(f, "Processing document has no sentences"),
        }
    }
}

impl std::error::Error for TranscriptError {}

impl From<reqwest::Error> for TranscriptError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for TranscriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedDocument(err.to_string())
    }
}

/// What went wrong while driving media playback.
#[derive(Debug, Clone)]
pub enum PlaybackError {
    /// A play request was rejected (e.g., no media session loaded).
    PlayRejected(String),

    /// The command channel to the media transport is gone.
    SessionClosed,

    /// The media transport reported a failure during playback.
    Media(String),
}

impl PlaybackError {
    /// The i18n key of the user-facing message for this failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::PlayRejected(_) => "error-playback-play-rejected",
            PlaybackError::SessionClosed => "error-playback-session-closed",
            PlaybackError::Media(_) => "error-playback-media",
        }
    }

    /// Buckets a raw transport error message into a variant by keyword.
    /// Signals arrive as plain strings, so classification is heuristic;
    /// anything unrecognized lands in `Media`.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("rejected")
            || msg_lower.contains("no media")
            || msg_lower.contains("not loaded")
        {
            return PlaybackError::PlayRejected(msg.to_string());
        }

        if msg_lower.contains("channel")
            || msg_lower.contains("closed")
            || msg_lower.contains("not running")
        {
            return PlaybackError::SessionClosed;
        }

        PlaybackError::Media(msg.to_string())
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::PlayRejected(msg) => write!(f, "Play rejected: {msg}"),
            PlaybackError::SessionClosed => write!(f, "Media session is not running"),
            PlaybackError::Media(msg) => write!(f, "Playback error: {msg}"),
        }
    }
}

impl std::error::Error for PlaybackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrella_display_names_the_domain() {
        assert_eq!(
            Error::Io("disk failure".to_string()).to_string(),
            "I/O Error: disk failure"
        );
        assert_eq!(
            Error::Config("bad field".to_string()).to_string(),
            "Config Error: bad field"
        );
    }

    #[test]
    fn io_errors_convert_with_their_message() {
        let err: Error = std::io::Error::other("boom").into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn domain_errors_wrap_into_the_umbrella() {
        let err: Error = TranscriptError::EmptyDocument.into();
        assert!(matches!(
            err,
            Error::Transcript(TranscriptError::EmptyDocument)
        ));

        let err: Error = PlaybackError::SessionClosed.into();
        assert!(matches!(err, Error::Playback(PlaybackError::SessionClosed)));
    }

    #[test]
    fn from_message_buckets_by_keyword() {
        assert!(matches!(
            PlaybackError::from_message("play rejected: no media loaded"),
            PlaybackError::PlayRejected(_)
        ));
        assert!(matches!(
            PlaybackError::from_message("command channel closed"),
            PlaybackError::SessionClosed
        ));
        assert!(matches!(
            PlaybackError::from_message("position out of range"),
            PlaybackError::Media(_)
        ));
    }

    #[test]
    fn transcript_errors_map_to_upload_keys() {
        assert_eq!(
            TranscriptError::Transport(String::new()).i18n_key(),
            "error-upload-transport"
        );
        assert_eq!(TranscriptError::Status(500).i18n_key(), "error-upload-status");
        assert_eq!(
            TranscriptError::EmptyDocument.i18n_key(),
            "error-upload-empty"
        );
    }

    #[test]
    fn playback_errors_map_to_playback_keys() {
        assert_eq!(
            PlaybackError::PlayRejected(String::new()).i18n_key(),
            "error-playback-play-rejected"
        );
        assert_eq!(
            PlaybackError::SessionClosed.i18n_key(),
            "error-playback-session-closed"
        );
    }

    #[test]
    fn displays_carry_the_detail() {
        let err = PlaybackError::PlayRejected("no media loaded".to_string());
        assert!(err.to_string().contains("no media loaded"));

        let err = TranscriptError::Status(503);
        assert!(err.to_string().contains("503"));
    }
}
