// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Assemble le style commun: fond plein, bordure fine, coins arrondis.
fn filled(background: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn grayed_out(background: Color) -> button::Style {
    filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Bouton d'action principale, aux couleurs de la marque.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => grayed_out(palette::GRAY_200),
    }
}

/// Bouton inactif quel que soit le statut.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| grayed_out(palette::GRAY_200)
}

/// Etat retenu d'un groupe de boutons (langue, mode de theme).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => {
            let background = if matches!(theme, Theme::Light) {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            grayed_out(background)
        }
        // Un bouton retenu garde le rendu primaire, survol compris
        _ => primary(theme, status),
    }
}

/// Etat non retenu du meme groupe, neutre dans les deux themes.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (resting, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(resting, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(hover, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => grayed_out(resting),
    }
}

/// Bouton lecture/pause pose au centre de la scene video.
pub fn play_overlay() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
