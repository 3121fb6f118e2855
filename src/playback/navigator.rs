// SPDX-License-Identifier: MPL-2.0
//! Prev/next/seek target computation over the ordered segment list.
//!
//! Pure functions: they take the segment list and a position and return
//! the position to move to. Issuing the actual seek is the engine's job.

use crate::transcript::HighlightSegment;

/// Forward-search tolerance so a position parked exactly on a segment
/// start does not re-select that same segment as "next".
pub const NEXT_EPSILON_SECS: f64 = 0.01;

/// How close to a segment end a seek may land before it is snapped back.
pub const SNAP_WINDOW_SECS: f64 = 0.05;

/// Backward offset applied by the snap, leaving enough room that the
/// auto-skip end check does not fire immediately after the seek.
pub const SNAP_OFFSET_SECS: f64 = 0.1;

/// Target for the "next highlight" action.
///
/// First segment starting after the current position wins; with nothing
/// ahead the position stays near the end by re-targeting the last
/// segment's start. `None` when there are no segments.
#[must_use]
pub fn next_target(segments: &[HighlightSegment], position_secs: f64) -> Option<f64> {
    let last = segments.last()?;
    let target = segments
        .iter()
        .find(|seg| seg.start_secs > position_secs + NEXT_EPSILON_SECS)
        .unwrap_or(last);
    Some(target.start_secs)
}

/// Target for the "previous highlight" action.
///
/// Last segment ending before the current position wins; with nothing
/// behind the first segment's start is the floor. `None` when there are
/// no segments.
#[must_use]
pub fn prev_target(segments: &[HighlightSegment], position_secs: f64) -> Option<f64> {
    let first = segments.first()?;
    let target = segments
        .iter()
        .rev()
        .find(|seg| seg.end_secs < position_secs)
        .unwrap_or(first);
    Some(target.start_secs)
}

/// Resolves a raw seek request into the position to assume.
///
/// Clamps to `[0, duration]`; a clamped time landing inside a segment
/// within [`SNAP_WINDOW_SECS`] of its end snaps back to
/// `end - `[`SNAP_OFFSET_SECS`], so the seek cannot park on a boundary
/// the auto-skip check would treat as already exited. Applies whether or
/// not playback is running. `None` while no document gives a duration.
#[must_use]
pub fn seek_target(
    segments: &[HighlightSegment],
    duration_secs: f64,
    requested_secs: f64,
) -> Option<f64> {
    if duration_secs <= 0.0 {
        return None;
    }
    let clamped = requested_secs.clamp(0.0, duration_secs);
    let snapped = segments
        .iter()
        .find(|seg| seg.contains(clamped))
        .filter(|seg| clamped >= seg.end_secs - SNAP_WINDOW_SECS)
        .map(|seg| seg.end_secs - SNAP_OFFSET_SECS)
        .unwrap_or(clamped);
    Some(snapped)
}
