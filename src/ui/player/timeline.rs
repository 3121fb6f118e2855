// SPDX-License-Identifier: MPL-2.0
//! Canvas-drawn timeline bar.
//!
//! Renders a proportional view of the loaded video: a background rail, one
//! filled rectangle per highlight segment, and a playhead at the current
//! position. Clicking anywhere on the bar requests a seek to the clicked
//! fraction of the duration.

use crate::transcript::HighlightSegment;
use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{Canvas, Frame, Geometry};
use iced::{Element, Length, Point, Size};

/// Messages emitted by the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The bar was clicked at this fraction of its width (0.0 to 1.0).
    Clicked(f64),
}

/// Renders the timeline bar for the given segments and playback progress.
///
/// `progress` is the playback position as a fraction of the duration.
pub fn view(
    segments: &[HighlightSegment],
    duration_secs: f64,
    progress: f64,
) -> Element<'_, Message> {
    Canvas::new(Timeline {
        segments,
        duration_secs,
        progress,
    })
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TIMELINE_HEIGHT))
    .into()
}

struct Timeline<'a> {
    segments: &'a [HighlightSegment],
    duration_secs: f64,
    progress: f64,
}

impl iced::widget::canvas::Program<Message> for Timeline<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) =
            event
        {
            if let Some(position) = cursor.position_in(bounds) {
                let fraction = f64::from((position.x / bounds.width).clamp(0.0, 1.0));
                return Some(Action::publish(Message::Clicked(fraction)).and_capture());
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;

        // Background rail, a thin strip centered vertically
        let rail_y = (height - sizing::TIMELINE_TRACK) / 2.0;
        frame.fill_rectangle(
            Point::new(0.0, rail_y),
            Size::new(width, sizing::TIMELINE_TRACK),
            theme.extended_palette().background.strong.color,
        );

        // One full-height rectangle per highlight segment
        if self.duration_secs > 0.0 {
            for segment in self.segments {
                let left = (segment.start_secs / self.duration_secs) as f32 * width;
                let segment_width =
                    (segment.duration_secs() / self.duration_secs) as f32 * width;
                frame.fill_rectangle(
                    Point::new(left, 0.0),
                    Size::new(segment_width.max(1.0), height),
                    palette::PRIMARY_500,
                );
            }

            // Playhead
            let playhead_x = (self.progress.clamp(0.0, 1.0) as f32 * width)
                .min(width - sizing::PLAYHEAD_WIDTH);
            frame.fill_rectangle(
                Point::new(playhead_x, 0.0),
                Size::new(sizing::PLAYHEAD_WIDTH, height),
                palette::ERROR_500,
            );
        }

        vec![frame.into_geometry()]
    }
}
