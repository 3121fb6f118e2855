// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Theme background with the standard surface opacity. Derived from the
/// active palette so panels stay readable in light and dark mode alike.
fn themed_surface(theme: &Theme) -> Background {
    let base = theme.extended_palette().background.base.color;
    Background::Color(Color {
        a: opacity::SURFACE,
        ..base
    })
}

/// Panel surface for the settings screen and the transcript list.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(themed_surface(theme)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Letterboxed backdrop of the video stage.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_200),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Caption bar overlaid on the bottom edge of the stage.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Top navigation bar: same surface as panels, square corners.
pub fn toolbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(themed_surface(theme)),
        ..container::Style::default()
    }
}
