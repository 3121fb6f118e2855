// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each screen is a stateless module: `view` renders from a context
//! struct, `update` folds a message into an `Event` for the app layer.
//! [`player`] is the main screen (upload panel, preview stage,
//! transcript list, timeline); [`settings`], [`help`] and [`about`] are
//! reached through the [`navbar`] menu.
//!
//! Cross-cutting pieces: [`design_tokens`] holds every color, size and
//! spacing value; [`styles`] turns them into iced widget styles;
//! [`theming`] resolves the light/dark/system mode; [`notifications`]
//! is the toast stack.

pub mod about;
pub mod design_tokens;
pub mod help;
pub mod navbar;
pub mod notifications;
pub mod player;
pub mod settings;
pub mod styles;
pub mod theming;
