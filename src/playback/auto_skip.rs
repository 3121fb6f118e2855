// SPDX-License-Identifier: MPL-2.0
//! Keeps a playing position inside the selected segments.
//!
//! Evaluated on every position report while the transport is playing;
//! never while paused, so manual scrubbing does not fight the controller.

use crate::transcript::HighlightSegment;

/// Lead applied to the end-of-segment check. Position reports arrive at a
/// fixed cadence, so waiting for exact equality with the segment end would
/// overshoot into the gap and flash non-highlighted content.
pub const END_LEAD_SECS: f64 = 0.05;

/// Corrective action for one position report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipAction {
    /// Jump the position forward and keep playing.
    JumpTo(f64),
    /// Park the position at the end of the final segment and pause.
    FinishAt(f64),
}

/// Decides what to do about a position report taken while playing.
///
/// Containment is half-open: a position sitting exactly on a segment end
/// counts as outside. Outside every segment the position jumps to the next
/// upcoming segment start; past all of them it finishes at the last end.
/// Inside a segment but within [`END_LEAD_SECS`] of its end, the jump to
/// the following segment happens early. Returns `None` when no correction
/// is needed or there are no segments at all.
#[must_use]
pub fn evaluate(segments: &[HighlightSegment], position_secs: f64) -> Option<SkipAction> {
    let last = segments.last()?;

    let Some(index) = segments.iter().position(|seg| seg.contains(position_secs)) else {
        return match segments.iter().find(|seg| seg.start_secs > position_secs) {
            Some(next) => Some(SkipAction::JumpTo(next.start_secs)),
            None => Some(SkipAction::FinishAt(last.end_secs)),
        };
    };

    let current = segments[index];
    if position_secs < current.end_secs - END_LEAD_SECS {
        return None;
    }
    match segments.get(index + 1) {
        Some(next) => Some(SkipAction::JumpTo(next.start_secs)),
        None => Some(SkipAction::FinishAt(current.end_secs)),
    }
}

/// Position correction applied when play is requested from pause.
///
/// Playback must never begin in a gap: if the position is outside every
/// segment, the play command is preceded by a jump to the next upcoming
/// segment start, or back to the first segment when nothing is upcoming
/// (explicit play at the end of the sequence restarts it). Returns `None`
/// when no correction is needed.
#[must_use]
pub fn play_entry_target(segments: &[HighlightSegment], position_secs: f64) -> Option<f64> {
    if segments.is_empty() || segments.iter().any(|seg| seg.contains(position_secs)) {
        return None;
    }
    segments
        .iter()
        .find(|seg| seg.start_secs > position_secs)
        .or_else(|| segments.first())
        .map(|seg| seg.start_secs)
}
