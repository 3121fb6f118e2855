// SPDX-License-Identifier: MPL-2.0
//! Top-level screen switch.

/// The screen currently filling the window. Player is home; the others are
/// reached through the hamburger menu and return with their back buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Player,
    Settings,
    Help,
    About,
}
