// SPDX-License-Identifier: MPL-2.0
//! Coordination facade for highlight playback.
//!
//! Owns the document, the selection, the derived segment list and the
//! playback clock. Every mutation goes through a method here, and the
//! segment list is recomputed explicitly after each mutation rather than
//! relying on any implicit reactivity. Methods that may need transport
//! work return the [`MediaCommand`]s to send; the caller owns the session
//! handle and does the sending.

use crate::transcript::{highlight_segments, HighlightSegment, ProcessingResult, SelectedSet, Sentence};

use super::auto_skip::{self, SkipAction};
use super::clock::PlaybackClock;
use super::driver::MediaCommand;
use super::navigator;

#[derive(Debug, Default)]
pub struct HighlightEngine {
    document: Option<ProcessingResult>,
    selection: SelectedSet,
    segments: Vec<HighlightSegment>,
    clock: PlaybackClock,
}

impl HighlightEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current document wholesale.
    ///
    /// Seeds the selection from the document's suggested highlights,
    /// recomputes segments, rewinds the clock to the transcript-derived
    /// duration and asks the transport to load the new media.
    pub fn install_document(&mut self, document: ProcessingResult) -> Vec<MediaCommand> {
        let duration_secs = document.duration_secs();
        self.selection = SelectedSet::from_suggestions(&document);
        self.document = Some(document);
        self.recompute_segments();
        self.clock.reset_for_duration(duration_secs);
        vec![MediaCommand::Load { duration_secs }]
    }

    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    #[must_use]
    pub fn document(&self) -> Option<&ProcessingResult> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> &SelectedSet {
        &self.selection
    }

    #[must_use]
    pub fn segments(&self) -> &[HighlightSegment] {
        &self.segments
    }

    #[must_use]
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Sentence being spoken at the current position, independent of
    /// whether it is selected.
    #[must_use]
    pub fn current_sentence(&self) -> Option<&Sentence> {
        self.document
            .as_ref()
            .and_then(|doc| doc.sentence_at(self.clock.position_secs()))
    }

    /// Caption to overlay on the preview: the current sentence, but only
    /// while that sentence is also selected.
    #[must_use]
    pub fn caption(&self) -> Option<&Sentence> {
        self.current_sentence()
            .filter(|sentence| self.selection.contains(&sentence.id))
    }

    #[must_use]
    pub fn is_selected(&self, sentence_id: &str) -> bool {
        self.selection.contains(sentence_id)
    }

    /// Flips one sentence's selection and rebuilds the segment list.
    /// Returns the sentence's new selection state.
    pub fn toggle_sentence(&mut self, sentence_id: &str) -> bool {
        let selected = self.selection.toggle(sentence_id);
        self.recompute_segments();
        selected
    }

    /// Play/pause toggle with the gap-entry correction.
    ///
    /// Pausing is unconditional. Playing from a position outside every
    /// segment first moves into one, so playback never starts in a gap;
    /// from at or past the final segment end this restarts at the first
    /// segment.
    pub fn toggle_play(&mut self) -> Vec<MediaCommand> {
        if self.clock.is_playing() {
            return vec![MediaCommand::Pause];
        }

        let mut commands = Vec::new();
        if let Some(entry) = auto_skip::play_entry_target(&self.segments, self.clock.position_secs())
        {
            commands.extend(self.seek_command(entry));
        }
        commands.push(MediaCommand::Play);
        commands
    }

    /// Jumps to the next highlight, staying at the last one when nothing
    /// is ahead. No-op without segments.
    pub fn next_highlight(&mut self) -> Vec<MediaCommand> {
        match navigator::next_target(&self.segments, self.clock.position_secs()) {
            Some(target) => self.seek_command(target),
            None => Vec::new(),
        }
    }

    /// Jumps to the previous highlight, falling back to the first one.
    /// No-op without segments.
    pub fn prev_highlight(&mut self) -> Vec<MediaCommand> {
        match navigator::prev_target(&self.segments, self.clock.position_secs()) {
            Some(target) => self.seek_command(target),
            None => Vec::new(),
        }
    }

    /// Seeks to an absolute time, with clamping and boundary snap.
    pub fn seek(&mut self, requested_secs: f64) -> Vec<MediaCommand> {
        let duration_secs = self.clock.duration_secs();
        match navigator::seek_target(&self.segments, duration_secs, requested_secs) {
            Some(target) => self.seek_command(target),
            None => Vec::new(),
        }
    }

    /// Seeks to a fraction of the duration; timeline clicks land here.
    pub fn seek_fraction(&mut self, fraction: f64) -> Vec<MediaCommand> {
        let requested = fraction.clamp(0.0, 1.0) * self.clock.duration_secs();
        self.seek(requested)
    }

    /// Handles a transport position report.
    ///
    /// The report always lands in the clock. While playing, the auto-skip
    /// rules then get a chance to issue a corrective jump, or to finish
    /// playback at the end of the last segment.
    pub fn position_changed(&mut self, position_secs: f64) -> Vec<MediaCommand> {
        self.clock.record_position(position_secs);
        if !self.clock.is_playing() {
            return Vec::new();
        }

        match auto_skip::evaluate(&self.segments, position_secs) {
            Some(SkipAction::JumpTo(target)) => self.seek_command(target),
            Some(SkipAction::FinishAt(end)) => {
                let mut commands = self.seek_command(end);
                commands.push(MediaCommand::Pause);
                commands
            }
            None => Vec::new(),
        }
    }

    pub fn load_started(&mut self) {
        self.clock.begin_loading();
    }

    pub fn metadata_loaded(&mut self) {
        self.clock.finish_loading();
    }

    pub fn played(&mut self) {
        self.clock.mark_playing();
    }

    pub fn paused(&mut self) {
        self.clock.mark_paused();
    }

    pub fn ended(&mut self) {
        self.clock.mark_paused();
    }

    /// Records a transport failure as a sticky error on the clock.
    pub fn playback_error(&mut self, message: &str) {
        self.clock
            .record_error(crate::error::PlaybackError::from_message(message));
    }

    fn recompute_segments(&mut self) {
        self.segments = highlight_segments(self.document.as_ref(), &self.selection);
    }

    fn seek_command(&mut self, target_secs: f64) -> Vec<MediaCommand> {
        match self.clock.request_position(target_secs) {
            Some(position_secs) => vec![MediaCommand::SetPosition { position_secs }],
            None => Vec::new(),
        }
    }
}
