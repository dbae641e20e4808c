// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual toasts.
//!
//! Toasts appear as small cards with severity-colored accents, a headline,
//! either a plain description or a mounted rich body, and a dismiss button.

use super::manager::{Manager, Message, Toast};
use crate::i18n::fluent::I18n;
use crate::notifications::Severity;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct ToastView;

impl ToastView {
    /// Renders a single toast.
    pub fn view<'a>(toast: &Toast, i18n: &I18n) -> Element<'a, Message> {
        let severity = toast.severity();
        let accent_color = severity.color();
        let toast_id = toast.id();

        let glyph = Container::new(
            Text::new(Self::severity_glyph(severity))
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                }),
        )
        .width(Length::Fixed(sizing::GLYPH))
        .padding(spacing::XXS);

        let headline = Text::new(toast.label().to_string())
            .size(typography::BODY_LG)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut body = Column::new().spacing(spacing::XXS).push(headline);
        if let Some(description) = toast.description() {
            body = body.push(
                Text::new(description.to_string())
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(rich) = toast.mount().and_then(|mount| mount.view()) {
            // A rich body closes its own toast by publishing `()`.
            body = body.push(rich.map(move |()| Message::Dismiss(toast_id)));
        }

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(toast_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        let dismiss = iced::widget::tooltip(
            dismiss_button,
            Text::new(i18n.tr("toast-dismiss")).size(typography::CAPTION),
            iced::widget::tooltip::Position::Left,
        );

        // Layout: [glyph] [headline + body] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(glyph)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible toasts.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically, with
    /// a counter for toasts still waiting in the queue.
    pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
        let mut toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|toast| Self::view(toast, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let queued = manager.queued_count();
        if queued > 0 {
            let count = queued.to_string();
            toasts.push(
                Text::new(i18n.tr_with_args("toast-queued-count", &[("count", count.as_str())]))
                    .size(typography::CAPTION)
                    .into(),
            );
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning => "!",
            Severity::Error => "✕",
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => highlighted_button_style(base.text, opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => highlighted_button_style(base.text, opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

fn highlighted_button_style(text_color: Color, alpha: f32) -> button::Style {
    button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn severity_glyphs_are_distinct() {
        let glyphs = [
            ToastView::severity_glyph(Severity::Success),
            ToastView::severity_glyph(Severity::Info),
            ToastView::severity_glyph(Severity::Warning),
            ToastView::severity_glyph(Severity::Error),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn pressed_dismiss_button_is_darker_than_hovered() {
        let theme = Theme::Light;
        let hovered = dismiss_button_style(&theme, button::Status::Hovered);
        let pressed = dismiss_button_style(&theme, button::Status::Pressed);

        let alpha = |style: &button::Style| match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&pressed) > alpha(&hovered));
    }
}
