// SPDX-License-Identifier: MPL-2.0
//! Media transport state machine and its command/signal vocabulary.
//!
//! The transport stands in for the media element: it owns the real
//! position, advances it on wall-clock time while playing, and reports
//! every change as a [`MediaSignal`]. The engine never touches it except
//! through [`MediaCommand`]s sent over the session handle.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::error::PlaybackError;

/// Commands the UI side sends into a media session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    /// Bind new media to the session. `duration_secs` is the playable
    /// length, taken from the transcript that accompanies the media.
    Load { duration_secs: f64 },
    Play,
    Pause,
    SetPosition { position_secs: f64 },
}

/// Signals a media session emits back to the UI event loop.
#[derive(Debug, Clone)]
pub enum MediaSignal {
    /// Session is up; carries the handle for sending commands.
    SessionStarted(MediaSessionHandle),

    /// A load attempt has begun.
    LoadStarted,

    /// Media metadata is available; the transport is ready to play.
    MetadataLoaded { duration_secs: f64 },

    /// The transport position moved, by playback or by an applied seek.
    PositionChanged { position_secs: f64 },

    /// Playback started.
    Played,

    /// Playback stopped.
    Paused,

    /// The position reached the end of the media.
    Ended,

    /// The transport failed; the message describes the failure.
    Error(String),
}

/// Cloneable handle for sending commands to a running media session.
#[derive(Debug, Clone)]
pub struct MediaSessionHandle {
    sender: mpsc::UnboundedSender<MediaCommand>,
}

impl MediaSessionHandle {
    pub(crate) fn new(sender: mpsc::UnboundedSender<MediaCommand>) -> Self {
        Self { sender }
    }

    /// Sends a command to the session. Fails when the session task has
    /// shut down, which happens when a newer session replaces it.
    pub fn send(&self, command: MediaCommand) -> Result<(), PlaybackError> {
        self.sender
            .send(command)
            .map_err(|_| PlaybackError::SessionClosed)
    }
}

/// The transport proper. Pure state machine: callers feed it commands and
/// tick instants, it returns the signals to emit, in order.
#[derive(Debug)]
pub(crate) struct Transport {
    length_secs: Option<f64>,
    position_secs: f64,
    playing: bool,
    last_advance: Option<Instant>,
}

impl Transport {
    pub(crate) fn new() -> Self {
        Self {
            length_secs: None,
            position_secs: 0.0,
            playing: false,
            last_advance: None,
        }
    }

    /// True while playback is advancing; gates the tick branch.
    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    /// Applies one command at time `now` and returns the resulting signals.
    pub(crate) fn apply(&mut self, command: MediaCommand, now: Instant) -> Vec<MediaSignal> {
        match command {
            MediaCommand::Load { duration_secs } => {
                self.length_secs = Some(duration_secs);
                self.position_secs = 0.0;
                self.playing = false;
                self.last_advance = None;
                vec![
                    MediaSignal::LoadStarted,
                    MediaSignal::MetadataLoaded { duration_secs },
                ]
            }
            MediaCommand::Play => match self.length_secs {
                None => vec![MediaSignal::Error(
                    "play rejected: no media loaded".to_string(),
                )],
                Some(_) if self.playing => Vec::new(),
                Some(_) => {
                    self.playing = true;
                    self.last_advance = Some(now);
                    vec![MediaSignal::Played]
                }
            },
            MediaCommand::Pause => {
                if self.playing {
                    self.playing = false;
                    self.last_advance = None;
                    vec![MediaSignal::Paused]
                } else {
                    Vec::new()
                }
            }
            MediaCommand::SetPosition { position_secs } => {
                let Some(length) = self.length_secs else {
                    return Vec::new();
                };
                self.position_secs = position_secs.clamp(0.0, length);
                if self.playing {
                    self.last_advance = Some(now);
                }
                vec![MediaSignal::PositionChanged {
                    position_secs: self.position_secs,
                }]
            }
        }
    }

    /// Advances the position by the wall-clock time elapsed since the last
    /// advance. Reaching the end clamps, stops playback and reports it.
    pub(crate) fn advance(&mut self, now: Instant) -> Vec<MediaSignal> {
        if !self.playing {
            return Vec::new();
        }
        let Some(length) = self.length_secs else {
            return Vec::new();
        };

        let elapsed = self
            .last_advance
            .map(|t| now.duration_since(t).as_secs_f64())
            .unwrap_or(0.0);
        self.last_advance = Some(now);
        self.position_secs += elapsed;

        if self.position_secs >= length {
            self.position_secs = length;
            self.playing = false;
            self.last_advance = None;
            vec![
                MediaSignal::PositionChanged {
                    position_secs: length,
                },
                MediaSignal::Ended,
            ]
        } else {
            vec![MediaSignal::PositionChanged {
                position_secs: self.position_secs,
            }]
        }
    }
}
