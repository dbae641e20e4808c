// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::notifications::{
    CloseHandle, ContentNotification, Notification, RichContent, Severity, StatusCode,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toaster;
use iced::widget::{button, Column, Text};
use std::time::Instant;

/// Identifier shared by the plain demo toasts, so each one replaces the last.
pub const DEMO_ID: &str = "demo";

/// Identifier of the rich-content demo toast.
pub const DEMO_RICH_ID: &str = "demo-rich";

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Add(DemoKind),
    /// An add finished; carries the close handle for content toasts.
    Added(Result<Option<CloseHandle>, Error>),
    CloseDemo,
    Reset,
    Toaster(toaster::Message),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// The notifications the demo buttons raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Info,
    Success,
    Warning,
    Error,
    Rich,
    Unauthorized,
    Forbidden,
}

impl DemoKind {
    pub const ALL: [DemoKind; 7] = [
        DemoKind::Info,
        DemoKind::Success,
        DemoKind::Warning,
        DemoKind::Error,
        DemoKind::Rich,
        DemoKind::Unauthorized,
        DemoKind::Forbidden,
    ];

    /// i18n key of the button raising this notification.
    #[must_use]
    pub fn button_key(self) -> &'static str {
        match self {
            DemoKind::Info => "demo-add-info",
            DemoKind::Success => "demo-add-success",
            DemoKind::Warning => "demo-add-warning",
            DemoKind::Error => "demo-add-error",
            DemoKind::Rich => "demo-add-rich",
            DemoKind::Unauthorized => "demo-add-401",
            DemoKind::Forbidden => "demo-add-403",
        }
    }

    /// Builds the notification, resolving its text in the current locale.
    pub fn notification(self, i18n: &I18n) -> Notification {
        let content = |severity: Severity, suffix: &str| {
            ContentNotification::new(
                severity,
                i18n.tr(&format!("demo-headline-{suffix}")),
                i18n.tr(&format!("demo-message-{suffix}")),
            )
            .with_id(DEMO_ID)
        };

        match self {
            DemoKind::Info => content(Severity::Info, "info").into(),
            DemoKind::Success => content(Severity::Success, "success").into(),
            DemoKind::Warning => content(Severity::Warning, "warning").into(),
            DemoKind::Error => content(Severity::Error, "error").into(),
            DemoKind::Rich => {
                let body = i18n.tr("demo-rich-body");
                let dismiss = i18n.tr("demo-rich-dismiss");
                let rich = RichContent::new(move || {
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(body.clone()).size(typography::BODY))
                        .push(button(Text::new(dismiss.clone()).size(typography::BODY)).on_press(()))
                        .into()
                });
                ContentNotification::info(i18n.tr("demo-headline-rich"), rich)
                    .with_id(DEMO_RICH_ID)
                    .into()
            }
            DemoKind::Unauthorized => StatusCode::Unauthorized.into(),
            DemoKind::Forbidden => StatusCode::Forbidden.into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Locale requested on the command line.
    pub lang: Option<String>,
    /// Overrides the directory `settings.toml` is read from.
    pub config_dir: Option<String>,
}
