// SPDX-License-Identifier: MPL-2.0
//! Default values behind the configuration file.
//!
//! Everything tunable starts here so each default is written down
//! exactly once. The `const` block at the bottom sanity-checks the
//! values at compile time.

/// Base URL of the video processing backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Serve the bundled sample document instead of calling the backend.
/// On by default so the app works out of the box, backend or not.
pub const DEFAULT_USE_MOCK_DATA: bool = true;

/// Simulated processing delay in mock mode (milliseconds).
pub const MOCK_PROCESSING_DELAY_MS: u64 = 800;

/// Ceiling for the simulated delay (milliseconds).
pub const MAX_MOCK_PROCESSING_DELAY_MS: u64 = 10_000;

/// Video file extensions accepted by the upload dialog.
pub const VIDEO_FILE_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Debounce applied before auto-scrolling the transcript list to the
/// current sentence (milliseconds). Restarted whenever the current
/// sentence changes again before the deadline.
pub const SCROLL_DEBOUNCE_MS: u64 = 80;

/// Ceiling for the scroll debounce (milliseconds).
pub const MAX_SCROLL_DEBOUNCE_MS: u64 = 1_000;

/// Events the session log retains before evicting the oldest.
pub const SESSION_LOG_CAPACITY: usize = 1_000;

const _: () = {
    assert!(!DEFAULT_API_BASE_URL.is_empty());
    assert!(MOCK_PROCESSING_DELAY_MS > 0);
    assert!(MOCK_PROCESSING_DELAY_MS <= MAX_MOCK_PROCESSING_DELAY_MS);

    assert!(!VIDEO_FILE_EXTENSIONS.is_empty());
    // Extensions are stored bare: non-empty, no leading dot.
    let mut i = 0;
    while i < VIDEO_FILE_EXTENSIONS.len() {
        assert!(!VIDEO_FILE_EXTENSIONS[i].is_empty());
        assert!(VIDEO_FILE_EXTENSIONS[i].as_bytes()[0] != b'.');
        i += 1;
    }

    assert!(SCROLL_DEBOUNCE_MS > 0);
    assert!(SCROLL_DEBOUNCE_MS <= MAX_SCROLL_DEBOUNCE_MS);

    assert!(SESSION_LOG_CAPACITY > 0);
};
