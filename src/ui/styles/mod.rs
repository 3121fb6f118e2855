// SPDX-License-Identifier: MPL-2.0
//! Shared widget styling, grouped by widget kind.

pub mod button;
pub mod container;
