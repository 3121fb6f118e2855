// SPDX-License-Identifier: MPL-2.0
//! In-app documentation screen.
//!
//! Four collapsible sections, one per area of the player: upload,
//! playback, transcript and timeline. Bodies are plain localized text
//! assembled from a handful of layout helpers; the only state is which
//! sections are open.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, scrollable, text, Column, Container, Row, Text},
    Border, Element, Font, Length, Theme,
};
use std::collections::HashSet;

/// Collapsible documentation sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpSection {
    Upload,
    Playback,
    Transcript,
    Timeline,
}

impl HelpSection {
    pub const ALL: [HelpSection; 4] = [
        HelpSection::Upload,
        HelpSection::Playback,
        HelpSection::Transcript,
        HelpSection::Timeline,
    ];

    fn title_key(self) -> &'static str {
        match self {
            HelpSection::Upload => "help-section-upload",
            HelpSection::Playback => "help-section-playback",
            HelpSection::Transcript => "help-section-transcript",
            HelpSection::Timeline => "help-section-timeline",
        }
    }

    /// Localized body of the section. Built only for open sections.
    fn body<'a>(self, i18n: &I18n) -> Element<'a, Message> {
        match self {
            HelpSection::Upload => upload_body(i18n),
            HelpSection::Playback => playback_body(i18n),
            HelpSection::Transcript => transcript_body(i18n),
            HelpSection::Timeline => timeline_body(i18n),
        }
    }
}

/// Which sections are currently open. Everything starts collapsed.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<HelpSection>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, section: HelpSection) -> bool {
        self.expanded.contains(&section)
    }

    /// Flips one section between open and collapsed.
    pub fn toggle(&mut self, section: HelpSection) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }
}

/// Contextual data needed to render the help screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the help screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToPlayer,
    ToggleSection(HelpSection),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToPlayer,
}

/// Process a help screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToPlayer => Event::BackToPlayer,
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
    }
}

/// Render the help screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_label = ctx.i18n.tr("help-back-button");
    let back = button(text(format!("← {back_label}")).size(typography::BODY))
        .on_press(Message::BackToPlayer);

    let page = HelpSection::ALL.into_iter().fold(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .align_x(Horizontal::Left)
            .padding(spacing::MD)
            .push(back)
            .push(Text::new(ctx.i18n.tr("help-title")).size(typography::TITLE_LG)),
        |column, section| column.push(collapsible(&ctx, section)),
    );

    scrollable(page).into()
}

/// One section: a toggle header, plus the body when open.
fn collapsible<'a>(ctx: &ViewContext<'a>, section: HelpSection) -> Element<'a, Message> {
    let open = ctx.state.is_expanded(section);

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(if open { "▼" } else { "▶" }).size(typography::BODY))
            .push(Text::new(ctx.i18n.tr(section.title_key())).size(typography::TITLE_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(header_style)
    .on_press(Message::ToggleSection(section));

    let mut block = Column::new().spacing(spacing::XS).push(header);
    if open {
        block = block.push(
            Container::new(section.body(ctx.i18n))
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.extended_palette().background.weak.color.into()),
                    border: rounded(radius::MD),
                    ..container::Style::default()
                }),
        );
    }
    block.into()
}

/// Section headers brighten on hover, otherwise sit on the weak background.
fn header_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: rounded(radius::MD),
        ..button::Style::default()
    }
}

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

fn upload_body<'a>(i18n: &I18n) -> Element<'a, Message> {
    let steps = [
        "help-upload-step1",
        "help-upload-step2",
        "help-upload-step3",
        "help-upload-step4",
    ]
    .into_iter()
    .enumerate()
    .fold(Column::new().spacing(spacing::XXS), |column, (index, key)| {
        column.push(step(index + 1, i18n.tr(key)))
    });

    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(i18n.tr("help-upload-role")))
        .push(heading(i18n.tr("help-usage-title")))
        .push(steps)
        .push(paragraph(i18n.tr("help-upload-formats")))
        .push(paragraph(i18n.tr("help-upload-mock-hint")))
        .into()
}

fn playback_body<'a>(i18n: &I18n) -> Element<'a, Message> {
    let controls = [
        (
            "help-playback-tool-playpause",
            "help-playback-tool-playpause-desc",
        ),
        ("help-playback-tool-next", "help-playback-tool-next-desc"),
        (
            "help-playback-tool-autoskip",
            "help-playback-tool-autoskip-desc",
        ),
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::XS), |column, (name, desc)| {
        column.push(control_row(i18n.tr(name), i18n.tr(desc)))
    });

    let shortcuts = [
        ("Space", "help-playback-key-playpause"),
        ("←", "help-playback-key-previous"),
        ("→", "help-playback-key-next"),
        ("Esc", "help-playback-key-escape"),
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::XXS), |column, (key, desc)| {
        column.push(shortcut(key, i18n.tr(desc)))
    });

    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(i18n.tr("help-playback-role")))
        .push(heading(i18n.tr("help-tools-title")))
        .push(controls)
        .push(heading(i18n.tr("help-shortcuts-title")))
        .push(shortcuts)
        .into()
}

fn transcript_body<'a>(i18n: &I18n) -> Element<'a, Message> {
    let controls = [
        (
            "help-transcript-tool-toggle",
            "help-transcript-tool-toggle-desc",
        ),
        ("help-transcript-tool-seek", "help-transcript-tool-seek-desc"),
        (
            "help-transcript-tool-follow",
            "help-transcript-tool-follow-desc",
        ),
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::XS), |column, (name, desc)| {
        column.push(control_row(i18n.tr(name), i18n.tr(desc)))
    });

    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(i18n.tr("help-transcript-role")))
        .push(heading(i18n.tr("help-tools-title")))
        .push(controls)
        .push(paragraph(i18n.tr("help-transcript-selection-hint")))
        .into()
}

fn timeline_body<'a>(i18n: &I18n) -> Element<'a, Message> {
    let points = [
        "help-timeline-segments",
        "help-timeline-click",
        "help-timeline-snap",
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::XXS), |column, key| {
        column.push(bullet(i18n.tr(key)))
    });

    Column::new()
        .spacing(spacing::SM)
        .push(paragraph(i18n.tr("help-timeline-role")))
        .push(points)
        .into()
}

fn paragraph<'a>(content: String) -> Element<'a, Message> {
    Text::new(content).size(typography::BODY).into()
}

/// Secondary heading inside a section body.
fn heading<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

/// "Name: what it does" line for one control.
fn control_row<'a>(name: String, description: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("• {name}:")).size(typography::BODY).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }))
        .push(Text::new(description).size(typography::BODY))
        .into()
}

fn bullet<'a>(content: String) -> Element<'a, Message> {
    Text::new(format!("  • {content}"))
        .size(typography::BODY)
        .into()
}

/// Numbered instruction line with a small colored badge.
fn step<'a>(number: usize, content: String) -> Element<'a, Message> {
    let badge = Container::new(Text::new(number.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.primary.base.color.into()),
                text_color: Some(palette.primary.base.text),
                border: rounded(radius::SM),
                ..container::Style::default()
            }
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(badge)
        .push(Text::new(content).size(typography::BODY))
        .into()
}

/// Keyboard shortcut line: fixed-width key badge, then what it does.
fn shortcut<'a>(key: &'a str, description: String) -> Element<'a, Message> {
    let badge = Container::new(Text::new(key).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: rounded(radius::SM),
            ..container::Style::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(badge).width(Length::Fixed(70.0)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn renders_collapsed_and_fully_expanded() {
        let i18n = I18n::default();
        let mut state = State::new();

        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        for section in HelpSection::ALL {
            state.toggle(section);
        }
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn back_message_maps_to_back_event() {
        let mut state = State::new();
        assert!(matches!(
            update(&mut state, Message::BackToPlayer),
            Event::BackToPlayer
        ));
    }

    #[test]
    fn toggling_flips_a_single_section() {
        let mut state = State::new();
        assert!(!state.is_expanded(HelpSection::Upload));

        let event = update(&mut state, Message::ToggleSection(HelpSection::Upload));
        assert!(matches!(event, Event::None));
        assert!(state.is_expanded(HelpSection::Upload));

        update(&mut state, Message::ToggleSection(HelpSection::Upload));
        assert!(!state.is_expanded(HelpSection::Upload));
    }

    #[test]
    fn sections_expand_independently() {
        let mut state = State::new();
        update(&mut state, Message::ToggleSection(HelpSection::Upload));
        update(&mut state, Message::ToggleSection(HelpSection::Timeline));

        assert!(state.is_expanded(HelpSection::Upload));
        assert!(state.is_expanded(HelpSection::Timeline));
        assert!(!state.is_expanded(HelpSection::Playback));
        assert!(!state.is_expanded(HelpSection::Transcript));
    }

    #[test]
    fn all_lists_every_section_once() {
        let unique: HashSet<HelpSection> = HelpSection::ALL.into_iter().collect();
        assert_eq!(unique.len(), HelpSection::ALL.len());
    }
}
