// SPDX-License-Identifier: MPL-2.0
//! Banner for the active status-code notification (401/403).
//!
//! Status notifications never reach the toaster; the host screen renders
//! this banner from the store snapshot instead.

use crate::i18n::fluent::I18n;
use crate::notifications::{ActiveNotification, StatusCode};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the status notification currently shown, if any.
#[must_use]
pub fn active_status(notifications: &[ActiveNotification]) -> Option<StatusCode> {
    notifications
        .iter()
        .rev()
        .find_map(|entry| entry.notification().status())
}

/// Renders the banner, or nothing when no status notification is active.
pub fn view<'a, Message: 'a>(
    notifications: &[ActiveNotification],
    i18n: &I18n,
) -> Option<Element<'a, Message>> {
    let status = active_status(notifications)?;
    let accent = status_color(status);

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(format!("{} · {}", status.code(), i18n.tr(status.title_i18n_key())))
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                }),
        )
        .push(Text::new(i18n.tr(status.i18n_key())).size(typography::BODY));

    Some(
        Container::new(content)
            .max_width(sizing::BANNER_MAX_WIDTH)
            .width(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Left)
            .style(move |theme: &Theme| banner_style(theme, accent))
            .into(),
    )
}

fn status_color(status: StatusCode) -> Color {
    match status {
        StatusCode::Unauthorized => palette::WARNING_500,
        StatusCode::Forbidden => palette::ERROR_500,
    }
}

fn banner_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
