// SPDX-License-Identifier: MPL-2.0
//! `reelcut` is a highlight-based video player built with the Iced GUI framework.
//!
//! It plays back only the selected sentences of a machine-processed transcript,
//! skipping everything in between, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/reelcut/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod playback;
pub mod transcript;
pub mod ui;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
