// SPDX-License-Identifier: MPL-2.0
//! Demo screen layout: status banner, controls, and the toast overlay on top.

use super::message::{DemoKind, Message};
use crate::i18n::fluent::I18n;
use crate::notifications::ActiveNotification;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::status_banner;
use crate::ui::toaster::IcedToaster;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toaster: &'a IcedToaster,
    pub active: &'a [ActiveNotification],
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let add_buttons = DemoKind::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(button(Text::new(i18n.tr(kind.button_key()))).on_press(Message::Add(*kind)))
        })
        .wrap();

    let manage_buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new(i18n.tr("demo-close-demo"))).on_press(Message::CloseDemo))
        .push(button(Text::new(i18n.tr("demo-reset"))).on_press(Message::Reset));

    let count = ctx.active.len().to_string();
    let mut content = Column::new().spacing(spacing::MD).padding(spacing::LG);
    if let Some(banner) = status_banner::view(ctx.active, i18n) {
        content = content.push(banner);
    }
    content = content
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(add_buttons)
        .push(manage_buttons)
        .push(
            Text::new(i18n.tr_with_args("demo-active-count", &[("count", count.as_str())]))
                .size(typography::BODY),
        );

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(ctx.toaster.view_overlay(i18n).map(Message::Toaster))
        .into()
}
