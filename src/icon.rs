// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at startup from the embedded branding SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SVG: &[u8] = include_bytes!("../assets/branding/reelcut.svg");
const ICON_SIDE: u32 = 128;

/// Renders the branding SVG into an RGBA window icon.
///
/// Any parse or raster failure yields `None` and the window falls back to
/// the platform default icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIDE as f32 / source.width(),
        ICON_SIDE as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIDE, ICON_SIDE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.take(), ICON_SIDE, ICON_SIDE).ok()
}
