// SPDX-License-Identifier: MPL-2.0
//! Upload panel shown on the player screen while no document is loaded.
//!
//! Presents a prompt with an open-video button, switches to an animated
//! spinner with a status line while the processing service call is in
//! flight, and surfaces the last upload error inline.

use crate::error::TranscriptError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Contextual data needed to render the upload panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether a processing request is currently in flight.
    pub uploading: bool,
    /// Name of the file being processed, shown under the spinner.
    pub file_name: Option<&'a str>,
    /// Error from the most recent failed upload, cleared on retry.
    pub last_error: Option<&'a TranscriptError>,
    /// Current spinner angle in radians, advanced by the app tick.
    pub spinner_rotation: f32,
}

/// Messages emitted by the upload panel.
#[derive(Debug, Clone)]
pub enum Message {
    OpenFile,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenFile,
}

/// Process an upload panel message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenFile => Event::OpenFile,
    }
}

/// Render the upload panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("upload-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let hint = Text::new(ctx.i18n.tr("upload-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_label = Text::new(ctx.i18n.tr("upload-button"));
    let open_button = if ctx.uploading {
        button(open_label)
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::disabled())
    } else {
        button(open_label)
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary)
            .on_press(Message::OpenFile)
    };

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint)
        .push(open_button);

    if ctx.uploading {
        let spinner = Spinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element();

        let mut progress = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(Text::new(ctx.i18n.tr("upload-processing")).size(typography::BODY));

        if let Some(file_name) = ctx.file_name {
            progress = progress.push(
                Text::new(file_name.to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }

        content = content.push(progress);
    } else if let Some(error) = ctx.last_error {
        content = content.push(
            Text::new(error_text(ctx.i18n, error))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Localized message for an upload error, with the variant's details
/// threaded through as Fluent arguments.
fn error_text(i18n: &I18n, error: &TranscriptError) -> String {
    match error {
        TranscriptError::Transport(message) => {
            i18n.tr_with_args(error.i18n_key(), &[("message", message)])
        }
        TranscriptError::Status(code) => {
            let code = code.to_string();
            i18n.tr_with_args(error.i18n_key(), &[("status", &code)])
        }
        TranscriptError::MalformedDocument(message) => {
            i18n.tr_with_args(error.i18n_key(), &[("message", message)])
        }
        TranscriptError::EmptyDocument => i18n.tr(error.i18n_key()),
    }
}

/// Animated spinner drawn on a canvas for smooth rotation.
struct Spinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl Spinner {
    fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Subtle full circle behind the moving arc
                let background_circle = Path::circle(center, radius);
                frame.stroke(
                    &background_circle,
                    Stroke::default().with_width(3.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // 180° arc starting at the current rotation, -90° so the
                // resting position points up
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();

                let start_x = center.x + radius * start_angle.cos();
                let start_y = center.y + radius * start_angle.sin();
                arc_path.move_to(Point::new(start_x, start_y));

                // Approximate the arc with short line segments
                let segments = 30;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    let x = center.x + radius * angle.cos();
                    let y = center.y + radius * angle.sin();
                    arc_path.line_to(Point::new(x, y));
                }

                let arc = arc_path.build();
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
