// SPDX-License-Identifier: MPL-2.0
//! Highlight playback: clock, navigation, auto-skip and the media session.
//!
//! The moving parts split cleanly: [`clock`] owns the position register,
//! [`navigator`] and [`auto_skip`] are pure target computations over the
//! segment list, [`engine`] coordinates them against the document and
//! selection, and [`driver`]/[`subscription`] run the media transport as
//! an async session feeding signals into the UI event loop.

pub mod auto_skip;
pub mod clock;
pub mod driver;
pub mod engine;
pub mod navigator;
pub mod subscription;

pub use clock::{PlaybackClock, DRIFT_TOLERANCE_SECS};
pub use driver::{MediaCommand, MediaSessionHandle, MediaSignal};
pub use engine::HighlightEngine;
pub use subscription::{media_session, POSITION_UPDATE_INTERVAL};
