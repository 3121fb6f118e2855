// SPDX-License-Identifier: MPL-2.0
//! Player screen composition.
//!
//! While no document is loaded the screen is the upload panel. Once a
//! document is installed it splits into the transcript list on the left and
//! the preview column (stage, transport controls, timeline) on the right.
//! Every sub-component stays a stateless emitter; this module only nests
//! their messages and maps them onto player-level events the app applies to
//! the engine.

pub mod controls;
pub mod preview;
pub mod timeline;
pub mod transcript_list;
pub mod upload;

use crate::error::TranscriptError;
use crate::i18n::fluent::I18n;
use crate::playback::HighlightEngine;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{Column, Container, Row};
use iced::{Element, Length};

/// Messages emitted by the player screen.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    Preview(preview::Message),
    Controls(controls::Message),
    Timeline(timeline::Message),
    TranscriptList(transcript_list::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenFile,
    TogglePlayback,
    PreviousHighlight,
    NextHighlight,
    /// Seek to this fraction of the duration (timeline click).
    SeekToFraction(f64),
    /// Seek to a sentence's start (time chip click).
    SeekToSentence { sentence_id: String, start_secs: f64 },
    ToggleSentence(String),
}

/// Process a player message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Upload(message) => match upload::update(message) {
            upload::Event::OpenFile => Event::OpenFile,
        },
        Message::Preview(message) => match preview::update(message) {
            preview::Event::TogglePlayback => Event::TogglePlayback,
        },
        Message::Controls(message) => match message {
            controls::Message::TogglePlayback => Event::TogglePlayback,
            controls::Message::PreviousHighlight => Event::PreviousHighlight,
            controls::Message::NextHighlight => Event::NextHighlight,
        },
        Message::Timeline(timeline::Message::Clicked(fraction)) => Event::SeekToFraction(fraction),
        Message::TranscriptList(message) => match transcript_list::update(message) {
            transcript_list::Event::ToggleSentence(id) => Event::ToggleSentence(id),
            transcript_list::Event::SeekToSentence {
                sentence_id,
                start_secs,
            } => Event::SeekToSentence {
                sentence_id,
                start_secs,
            },
        },
    }
}

/// Contextual data needed to render the player screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub engine: &'a HighlightEngine,
    pub uploading: bool,
    pub file_name: Option<&'a str>,
    pub upload_error: Option<&'a TranscriptError>,
    pub spinner_rotation: f32,
}

/// Render the player screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(document) = ctx.engine.document() else {
        return upload::view(upload::ViewContext {
            i18n: ctx.i18n,
            uploading: ctx.uploading,
            file_name: ctx.file_name,
            last_error: ctx.upload_error,
            spinner_rotation: ctx.spinner_rotation,
        })
        .map(Message::Upload);
    };

    let clock = ctx.engine.clock();

    let transcript = transcript_list::view(transcript_list::ViewContext {
        i18n: ctx.i18n,
        document,
        selection: ctx.engine.selection(),
        current_sentence_id: ctx.engine.current_sentence().map(|s| s.id.as_str()),
    })
    .map(Message::TranscriptList);

    let stage = preview::view(preview::ViewContext {
        i18n: ctx.i18n,
        caption: ctx.engine.caption().map(|s| s.text.as_str()),
        is_playing: clock.is_playing(),
        is_loading: clock.is_loading(),
        file_name: ctx.file_name,
    })
    .map(Message::Preview);

    let transport = controls::view(
        controls::ViewContext { i18n: ctx.i18n },
        &controls::PlaybackState {
            is_playing: clock.is_playing(),
            is_loading: clock.is_loading(),
            position_secs: clock.position_secs(),
            duration_secs: clock.duration_secs(),
            error: clock.error().cloned(),
        },
    )
    .map(Message::Controls);

    let mut preview_column = Column::new()
        .spacing(spacing::SM)
        .push(Container::new(stage).width(Length::Fill).height(Length::Fill))
        .push(transport);

    // Like the playhead, the timeline only makes sense with segments to show
    let segments = ctx.engine.segments();
    if !segments.is_empty() {
        preview_column = preview_column.push(
            timeline::view(segments, clock.duration_secs(), clock.progress_fraction())
                .map(Message::Timeline),
        );
    }

    // Even split, transcript left and preview right
    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(
            Container::new(transcript)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .style(styles::container::panel),
        )
        .push(
            Container::new(preview_column)
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::test_fixtures;

    fn engine_with_document() -> HighlightEngine {
        let mut engine = HighlightEngine::new();
        let _commands = engine.install_document(test_fixtures::gapped_document());
        engine
    }

    fn test_ctx<'a>(i18n: &'a I18n, engine: &'a HighlightEngine) -> ViewContext<'a> {
        ViewContext {
            i18n,
            engine,
            uploading: false,
            file_name: None,
            upload_error: None,
            spinner_rotation: 0.0,
        }
    }

    #[test]
    fn renders_upload_panel_without_document() {
        let i18n = I18n::default();
        let engine = HighlightEngine::new();
        let _element = view(test_ctx(&i18n, &engine));
    }

    #[test]
    fn renders_split_layout_with_document() {
        let i18n = I18n::default();
        let engine = engine_with_document();
        let _element = view(test_ctx(&i18n, &engine));
    }

    #[test]
    fn timeline_click_becomes_fraction_seek() {
        let event = update(Message::Timeline(timeline::Message::Clicked(0.25)));
        assert!(matches!(event, Event::SeekToFraction(f) if f == 0.25));
    }

    #[test]
    fn controls_messages_map_to_events() {
        assert!(matches!(
            update(Message::Controls(controls::Message::TogglePlayback)),
            Event::TogglePlayback
        ));
        assert!(matches!(
            update(Message::Controls(controls::Message::PreviousHighlight)),
            Event::PreviousHighlight
        ));
        assert!(matches!(
            update(Message::Controls(controls::Message::NextHighlight)),
            Event::NextHighlight
        ));
    }

    #[test]
    fn row_click_becomes_toggle_event() {
        let event = update(Message::TranscriptList(
            transcript_list::Message::RowClicked("2".to_string()),
        ));
        assert!(matches!(event, Event::ToggleSentence(id) if id == "2"));
    }
}
