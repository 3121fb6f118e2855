// SPDX-License-Identifier: MPL-2.0
//! About screen: version, license notice, credits, and project links.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, rule, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const REPOSITORY_URL: &str = "https://codeberg.org/reelcut/reelcut";
const ISSUES_URL: &str = "https://codeberg.org/reelcut/reelcut/issues";
const DEPENDENCIES_URL: &str = "https://codeberg.org/reelcut/reelcut/src/branch/master/Cargo.toml";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToPlayer,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToPlayer,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToPlayer => Event::BackToPlayer,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let back = button(text(format!("← {}", i18n.tr("about-back-button"))).size(typography::BODY))
        .on_press(Message::BackToPlayer);

    let identity = {
        let name_and_version = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_MD))
            .push(Text::new(format!("v{APP_VERSION}")).size(typography::BODY));

        section(
            i18n.tr("about-section-app"),
            Column::new()
                .spacing(spacing::XS)
                .push(name_and_version)
                .push(Text::new(i18n.tr("about-app-description")).size(typography::BODY))
                .into(),
        )
    };

    let license = section(
        i18n.tr("about-section-license"),
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("about-license-name")).size(typography::BODY_LG))
            .push(Text::new(i18n.tr("about-license-summary")).size(typography::BODY))
            .into(),
    );

    let credits = {
        let mut rows = Column::new().spacing(spacing::XS);
        for key in [
            "about-credits-iced",
            "about-credits-fluent",
            "about-credits-tokio",
        ] {
            rows = rows.push(Text::new(format!("• {}", i18n.tr(key))).size(typography::BODY));
        }
        rows = rows.push(labeled_url(&i18n.tr("about-credits-full-list"), DEPENDENCIES_URL));

        section(i18n.tr("about-section-credits"), rows.into())
    };

    let links = section(
        i18n.tr("about-section-links"),
        Column::new()
            .spacing(spacing::SM)
            .push(labeled_url(&i18n.tr("about-link-repository"), REPOSITORY_URL))
            .push(labeled_url(&i18n.tr("about-link-issues"), ISSUES_URL))
            .into(),
    );

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back)
        .push(Text::new(i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(identity)
        .push(license)
        .push(credits)
        .push(links);

    scrollable(content).into()
}

fn labeled_url<'a>(label: &str, url: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(Text::new(url).size(typography::BODY))
        .into()
}

/// One rounded card with a ruled header, shared look with settings and help.
fn section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
