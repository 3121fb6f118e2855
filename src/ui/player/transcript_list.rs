// SPDX-License-Identifier: MPL-2.0
//! Transcript list UI.
//!
//! Renders the processed document as titled sections of sentence rows.
//! Clicking a row toggles its selection; clicking the time chip seeks to the
//! sentence start. The list auto-scrolls to the current sentence through a
//! debounced deferral so rapid sentence changes collapse into one scroll.

use crate::app::config::defaults;
use crate::i18n::fluent::I18n;
use crate::transcript::{ProcessingResult, SelectedSet, Sentence};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::player::controls::format_time;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, container, mouse_area, Column, Container, Id, Row, Scrollable, Text};
use iced::{Background, Border, Element, Font, Length, Theme};
use std::time::{Duration, Instant};

/// Widget id of the transcript scrollable, used as the snap target.
pub const SCROLLABLE_ID: &str = "transcript-scrollable";

/// Messages emitted by the transcript list.
#[derive(Debug, Clone)]
pub enum Message {
    /// A sentence row was clicked.
    RowClicked(String),

    /// A time chip was clicked; carries the sentence start in seconds.
    TimeChipClicked(String, f64),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ToggleSentence(String),
    SeekToSentence { sentence_id: String, start_secs: f64 },
}

/// Process a transcript list message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::RowClicked(id) => Event::ToggleSentence(id),
        Message::TimeChipClicked(id, start_secs) => Event::SeekToSentence {
            sentence_id: id,
            start_secs,
        },
    }
}

/// Contextual data needed to render the transcript list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a ProcessingResult,
    pub selection: &'a SelectedSet,
    pub current_sentence_id: Option<&'a str>,
}

/// Render the transcript list.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(spacing::LG).padding(spacing::MD);

    for section in &ctx.document.sections {
        let title = Text::new(section.title.as_str()).size(typography::TITLE_SM);

        let mut rows = Column::new().spacing(spacing::XXS);
        for sentence in &section.sentences {
            rows = rows.push(sentence_row(&ctx, sentence));
        }

        sections = sections.push(
            Column::new()
                .spacing(spacing::SM)
                .push(title)
                .push(rows),
        );
    }

    Scrollable::new(sections)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build one sentence row: time chip, text, and an optional suggested badge.
fn sentence_row<'a>(ctx: &ViewContext<'a>, sentence: &'a Sentence) -> Element<'a, Message> {
    let is_selected = ctx.selection.contains(&sentence.id);
    let is_current = ctx.current_sentence_id == Some(sentence.id.as_str());

    let chip_label = format!(
        "[{} - {}]",
        format_time(sentence.start_time),
        format_time(sentence.end_time)
    );
    let time_chip = button(
        Text::new(chip_label)
            .font(Font::MONOSPACE)
            .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .width(Length::Fixed(sizing::TIME_CHIP_WIDTH))
    .style(time_chip_style)
    .on_press(Message::TimeChipClicked(
        sentence.id.clone(),
        sentence.start_time,
    ));

    let text = Text::new(sentence.text.as_str())
        .size(typography::BODY)
        .width(Length::Fill);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .push(time_chip)
        .push(text);

    if sentence.is_suggested_highlight {
        row = row.push(
            Container::new(
                Text::new(ctx.i18n.tr("transcript-suggested-badge")).size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(suggested_badge_style),
        );
    }

    let row_container = Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(row_style(is_selected, is_current));

    // The chip button captures its own clicks, so the surrounding area only
    // sees presses that land outside it.
    mouse_area(row_container)
        .on_press(Message::RowClicked(sentence.id.clone()))
        .into()
}

/// Row background by state. Current wins over selected.
fn row_style(selected: bool, current: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, border_color) = if current {
            (Some(palette::HIGHLIGHT_200), palette::HIGHLIGHT_500)
        } else if selected {
            (Some(palette::PRIMARY_100), palette::PRIMARY_200)
        } else {
            (None, iced::Color::TRANSPARENT)
        };

        container::Style {
            background: background.map(Background::Color),
            // Tinted rows keep dark text regardless of theme mode
            text_color: background.map(|_| palette::GRAY_900),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Flat link-like style for the time chip.
fn time_chip_style(theme: &Theme, status: button::Status) -> button::Style {
    let color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => theme.extended_palette().background.weak.text,
    };

    button::Style {
        background: None,
        text_color: color,
        border: Border::default(),
        ..Default::default()
    }
}

fn suggested_badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        text_color: Some(palette::PRIMARY_700),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Relative scroll offset that brings `sentence_id` into view, or `None`
/// when the sentence is not in the document.
///
/// Rows have near-uniform height, so the sentence's index as a fraction of
/// the sentence count approximates its vertical position well enough for
/// `snap_to`.
#[must_use]
pub fn scroll_offset(document: &ProcessingResult, sentence_id: &str) -> Option<RelativeOffset> {
    let count = document.sentence_count();
    let index = document.sentences().position(|s| s.id == sentence_id)?;

    let y = if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        0.0
    };

    Some(RelativeOffset { x: 0.0, y })
}

/// Deferred auto-scroll bookkeeping.
///
/// Arming records a target sentence and a deadline; the deferral fires when
/// `take_due` is polled past the deadline. Re-arming before the deadline
/// replaces the pending target, which is what collapses rapid sentence
/// changes into a single scroll.
#[derive(Debug, Default)]
pub struct ScrollDebounce {
    pending: Option<PendingScroll>,
    last_target: Option<String>,
}

#[derive(Debug)]
struct PendingScroll {
    sentence_id: String,
    due: Instant,
}

impl ScrollDebounce {
    /// Arm a deferred scroll towards `sentence_id`.
    ///
    /// Returns true when a new deferral was started and the caller should
    /// schedule a wake-up after the debounce window. Arming the sentence the
    /// list already scrolled to is a no-op.
    pub fn arm(&mut self, sentence_id: &str, now: Instant) -> bool {
        if self.pending.is_none() && self.last_target.as_deref() == Some(sentence_id) {
            return false;
        }

        self.pending = Some(PendingScroll {
            sentence_id: sentence_id.to_string(),
            due: now + Duration::from_millis(defaults::SCROLL_DEBOUNCE_MS),
        });
        true
    }

    /// Take the pending target if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.due > now {
            return None;
        }

        let pending = self.pending.take()?;
        self.last_target = Some(pending.sentence_id.clone());
        Some(pending.sentence_id)
    }

    /// Drop any pending scroll without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Forget all state. Used when a new document replaces the old one.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_target = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
