// SPDX-License-Identifier: MPL-2.0
//! Single arbiter for the playback position register.
//!
//! Every component reads the position through this adapter and requests
//! changes through it; nothing else writes the transport's position
//! directly. Keeping one owner avoids feedback loops between the
//! transport's own position reports and corrective seeks.

use crate::error::PlaybackError;

/// How far the register may drift from the transport's last reported
/// position before a corrective seek is actually commanded.
pub const DRIFT_TOLERANCE_SECS: f64 = 0.1;

/// Mirror of the playback transport plus the transcript-derived duration.
///
/// `position_secs` is the canonical register the UI renders. `playing` is
/// mirrored from discrete play/pause signals, never polled. An error is
/// sticky: it survives until the next load attempt begins.
#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    position_secs: f64,
    media_position_secs: f64,
    duration_secs: f64,
    playing: bool,
    loading: bool,
    error: Option<PlaybackError>,
}

impl PlaybackClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Duration in seconds, taken from the transcript rather than the media
    /// file so the timeline reflects transcript coverage.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&PlaybackError> {
        self.error.as_ref()
    }

    /// Position as a fraction of the duration, clamped to `[0, 1]`.
    /// Zero while no document is loaded.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.duration_secs > 0.0 {
            (self.position_secs / self.duration_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Installs the transcript-derived duration and rewinds to the start.
    /// Called when a new document replaces the previous one.
    pub fn reset_for_duration(&mut self, duration_secs: f64) {
        self.position_secs = 0.0;
        self.media_position_secs = 0.0;
        self.duration_secs = duration_secs;
        self.playing = false;
    }

    /// Accepts a position report from the transport.
    pub fn record_position(&mut self, position_secs: f64) {
        self.position_secs = position_secs;
        self.media_position_secs = position_secs;
    }

    /// Moves the register to `target_secs` and decides whether the
    /// transport must be told.
    ///
    /// Returns `Some(target_secs)` when the transport's last reported
    /// position is more than [`DRIFT_TOLERANCE_SECS`] away, meaning a seek
    /// command is required; `None` when the transport is already close
    /// enough and writing back would only echo its own report.
    pub fn request_position(&mut self, target_secs: f64) -> Option<f64> {
        self.position_secs = target_secs;
        if (target_secs - self.media_position_secs).abs() > DRIFT_TOLERANCE_SECS {
            self.media_position_secs = target_secs;
            Some(target_secs)
        } else {
            None
        }
    }

    /// Mirrors the transport's play signal.
    pub fn mark_playing(&mut self) {
        self.playing = true;
    }

    /// Mirrors the transport's pause signal.
    pub fn mark_paused(&mut self) {
        self.playing = false;
    }

    /// A load attempt has begun. Clears any sticky error.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Metadata arrived; the transport is ready.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Records a sticky playback error. Stays set until the next load.
    pub fn record_error(&mut self, error: PlaybackError) {
        self.loading = false;
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn recorded_position_within_tolerance_suppresses_seek() {
        let mut clock = PlaybackClock::new();
        clock.record_position(14.95);

        let command = clock.request_position(14.9);
        assert!(command.is_none());
        assert_relative_eq!(clock.position_secs(), 14.9);
    }

    #[test]
    fn request_beyond_tolerance_commands_a_seek() {
        let mut clock = PlaybackClock::new();
        clock.record_position(3.0);

        let command = clock.request_position(14.9);
        assert_eq!(command, Some(14.9));
        assert_relative_eq!(clock.position_secs(), 14.9);
    }

    #[test]
    fn repeated_request_to_same_target_sends_once() {
        let mut clock = PlaybackClock::new();
        clock.record_position(0.0);

        assert_eq!(clock.request_position(10.0), Some(10.0));
        assert!(clock.request_position(10.0).is_none());
    }

    #[test]
    fn play_pause_signals_mirror_into_state() {
        let mut clock = PlaybackClock::new();
        assert!(!clock.is_playing());
        clock.mark_playing();
        assert!(clock.is_playing());
        clock.mark_paused();
        assert!(!clock.is_playing());
    }

    #[test]
    fn error_is_sticky_until_next_load() {
        let mut clock = PlaybackClock::new();
        clock.record_error(PlaybackError::Media("decode failed".to_string()));
        assert!(clock.error().is_some());

        clock.mark_playing();
        clock.record_position(5.0);
        assert!(clock.error().is_some(), "error survives unrelated signals");

        clock.begin_loading();
        assert!(clock.error().is_none());
        assert!(clock.is_loading());
        clock.finish_loading();
        assert!(!clock.is_loading());
    }

    #[test]
    fn reset_rewinds_and_installs_duration() {
        let mut clock = PlaybackClock::new();
        clock.record_position(12.0);
        clock.mark_playing();

        clock.reset_for_duration(25.0);
        assert_relative_eq!(clock.position_secs(), 0.0);
        assert_relative_eq!(clock.duration_secs(), 25.0);
        assert!(!clock.is_playing());
    }

    #[test]
    fn progress_fraction_clamps_and_handles_zero_duration() {
        let mut clock = PlaybackClock::new();
        assert_relative_eq!(clock.progress_fraction(), 0.0);

        clock.reset_for_duration(20.0);
        clock.record_position(5.0);
        assert_relative_eq!(clock.progress_fraction(), 0.25);

        clock.record_position(30.0);
        assert_relative_eq!(clock.progress_fraction(), 1.0);
    }
}
