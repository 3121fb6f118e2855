// SPDX-License-Identifier: MPL-2.0
//! Toast payloads.
//!
//! A toast stores an i18n key plus interpolation arguments, not resolved
//! text; rendering translates on every pass, so switching language
//! retranslates whatever is on screen. Each severity maps to a color and a
//! display window, with errors staying up until dismissed.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Process-unique toast identity, used as the dismiss-button target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// How loud a toast is. Drives both the accent color and how long it stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Errors are sticky: no display window, dismissed by hand.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Display window before auto-dismiss, `None` for sticky severities.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// One toast: severity, translatable message, and an expiry deadline.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    /// When the toast ages out. `None` means sticky.
    expires_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            expires_at: severity
                .auto_dismiss_duration()
                .map(|window| Instant::now() + window),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds one Fluent argument for the message key.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's display window.
    ///
    /// Gives slow-to-read toasts (a config parse warning with a path in it)
    /// more time, or puts a limit on an otherwise sticky error.
    #[must_use]
    pub fn auto_dismiss(mut self, window: Duration) -> Self {
        self.expires_at = Some(Instant::now() + window);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// True when the toast never ages out on its own.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.expires_at.is_none()
    }

    /// True once the display window has fully elapsed.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.expires_at
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_its_own_id() {
        assert_ne!(
            Notification::success("toast").id(),
            Notification::success("toast").id()
        );
    }

    #[test]
    fn severity_colors_do_not_collide() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_windows_scale_with_severity() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
        assert_eq!(
            Severity::Info.auto_dismiss_duration(),
            Some(success),
            "info shares the success window"
        );
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn constructors_pick_the_matching_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn with_arg_accumulates_fluent_arguments() {
        let toast = Notification::error("error-upload-status")
            .with_arg("status", "500")
            .with_arg("file", "clip.mp4");

        assert_eq!(toast.message_key(), "error-upload-status");
        assert_eq!(
            toast.message_args(),
            &[
                ("status".to_string(), "500".to_string()),
                ("file".to_string(), "clip.mp4".to_string()),
            ]
        );
    }

    #[test]
    fn only_errors_are_sticky_by_default() {
        assert!(Notification::error("error-upload-transport").is_sticky());
        assert!(!Notification::warning("notification-config-load-error").is_sticky());
    }

    #[test]
    fn auto_dismiss_override_unsticks_an_error() {
        let timed =
            Notification::error("error-upload-transport").auto_dismiss(Duration::from_secs(10));
        assert!(!timed.is_sticky());
        assert!(!timed.should_auto_dismiss(), "window has not elapsed yet");
    }

    #[test]
    fn zero_window_expires_immediately() {
        let toast = Notification::success("toast").auto_dismiss(Duration::ZERO);
        assert!(toast.should_auto_dismiss());
    }
}
