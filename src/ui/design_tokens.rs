// SPDX-License-Identifier: MPL-2.0
//! The application's design tokens.
//!
//! Single palette, one spacing grid, one type scale. Components read
//! from here instead of hard-coding values, so restyling the app means
//! editing this file only. The compile-time block at the bottom pins
//! the relationships between tokens (scales stay monotonic, channels
//! stay in range) so a careless edit fails the build instead of the
//! eye.
//!
//! ```
//! use iced::Color;
//! use reelcut::ui::design_tokens::{opacity, palette, spacing};
//!
//! let caption_backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let row_padding = spacing::SM;
//! ```

use iced::Color;

/// Base colors: grays for chrome, a blue brand ramp, a warm amber ramp
/// for highlight affordances, and one accent per notification severity.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand ramp, light to dark
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Amber ramp for selected transcript rows and played segments
    pub const HIGHLIGHT_200: Color = Color::from_rgb(1.0, 0.92, 0.7);
    pub const HIGHLIGHT_500: Color = Color::from_rgb(0.98, 0.75, 0.18);
    pub const HIGHLIGHT_700: Color = Color::from_rgb(0.8, 0.55, 0.05);

    // Notification severities
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha levels for overlays and washes.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Semi-transparent panels and containers.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing steps on an 8px grid, XXS being the half-unit.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

/// Fixed component dimensions.
pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    pub const NAVBAR_HEIGHT: f32 = 48.0;

    // Timeline canvas
    pub const TIMELINE_HEIGHT: f32 = 32.0;
    pub const TIMELINE_TRACK: f32 = 8.0;
    pub const PLAYHEAD_WIDTH: f32 = 2.0;

    /// Start/end chip in a transcript row.
    pub const TIME_CHIP_WIDTH: f32 = 120.0;

    /// Caption overlay wraps beyond this.
    pub const CAPTION_MAX_WIDTH: f32 = 560.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

/// Font size scale. Three title steps above two-and-a-half body steps;
/// captions sit at the bottom for badges and time chips.
pub mod typography {
    /// Page headings (Settings, Help, About).
    pub const TITLE_LG: f32 = 30.0;

    /// App name and prominent labels.
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;

    /// Form inputs and the caption overlay text.
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Hints and secondary labels.
    pub const BODY_SM: f32 = 13.0;

    /// Badges, time chips, small print.
    pub const CAPTION: f32 = 12.0;
}

/// Border widths: hairline separators and emphasis strokes.
pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

/// Corner radii. `FULL` is effectively a pill.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

/// Elevation shadows, all plain black and offset downward.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// Relationships the scales must keep. Checked at compile time so a bad
// token edit cannot ship.
const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TIMELINE_HEIGHT > sizing::TIMELINE_TRACK);
    assert!(sizing::PLAYHEAD_WIDTH > 0.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(radius::SM > radius::NONE);
    assert!(radius::MD > radius::SM);
    assert!(radius::LG > radius::MD);

    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
    assert!(palette::HIGHLIGHT_500.r >= 0.0 && palette::HIGHLIGHT_500.r <= 1.0);
};
