// SPDX-License-Identifier: MPL-2.0
//! Localization layer built on Fluent.
//!
//! Translations live in embedded `.ftl` bundles, one per locale. The active
//! locale is resolved at startup from the CLI flag, then the config file,
//! then the system locale, and can be switched at runtime from the settings
//! screen. Keys missing from the active bundle fall back to `en-US`.

pub mod fluent;
