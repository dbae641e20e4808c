// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is either a content notification (severity, headline,
//! body, optional identifier) or a status-code notification standing for an
//! authentication/authorization failure.

use crate::ui::design_tokens::palette;
use iced::{Color, Element};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Caller-chosen identifier used to deduplicate content notifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Severity level determines visual styling and default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue, 3s duration).
    #[default]
    Info,
    /// Operation completed successfully (green, 3s duration).
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// Authentication/authorization failure states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
}

impl StatusCode {
    /// Maps a numeric HTTP status to a status notification kind.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            401 => Some(StatusCode::Unauthorized),
            403 => Some(StatusCode::Forbidden),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
        }
    }

    /// Returns the i18n key for the banner message.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StatusCode::Unauthorized => "notification-status-401",
            StatusCode::Forbidden => "notification-status-403",
        }
    }

    /// Returns the i18n key for the banner title.
    #[must_use]
    pub fn title_i18n_key(&self) -> &'static str {
        match self {
            StatusCode::Unauthorized => "notification-status-title-401",
            StatusCode::Forbidden => "notification-status-title-403",
        }
    }
}

/// Factory for a widget subtree rendered inside a toast.
///
/// The subtree publishes `()` to ask the toaster to close the toast.
#[derive(Clone)]
pub struct RichContent(Arc<dyn Fn() -> Element<'static, ()> + Send + Sync>);

impl RichContent {
    pub fn new(view: impl Fn() -> Element<'static, ()> + Send + Sync + 'static) -> Self {
        Self(Arc::new(view))
    }

    /// Builds a fresh widget tree from the factory.
    #[must_use]
    pub fn view(&self) -> Element<'static, ()> {
        (self.0)()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RichContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RichContent(..)")
    }
}

/// The body of a content notification.
#[derive(Debug, Clone)]
pub enum Body {
    Text(String),
    Rich(RichContent),
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Body::Text(a), Body::Text(b)) => a == b,
            (Body::Rich(a), Body::Rich(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<RichContent> for Body {
    fn from(content: RichContent) -> Self {
        Body::Rich(content)
    }
}

/// A notification carrying user-visible content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNotification {
    id: Option<NotificationId>,
    severity: Severity,
    headline: String,
    body: Body,
}

impl ContentNotification {
    pub fn new(severity: Severity, headline: impl Into<String>, body: impl Into<Body>) -> Self {
        Self {
            id: None,
            severity,
            headline: headline.into(),
            body: body.into(),
        }
    }

    pub fn info(headline: impl Into<String>, body: impl Into<Body>) -> Self {
        Self::new(Severity::Info, headline, body)
    }

    pub fn success(headline: impl Into<String>, body: impl Into<Body>) -> Self {
        Self::new(Severity::Success, headline, body)
    }

    pub fn warning(headline: impl Into<String>, body: impl Into<Body>) -> Self {
        Self::new(Severity::Warning, headline, body)
    }

    pub fn error(headline: impl Into<String>, body: impl Into<Body>) -> Self {
        Self::new(Severity::Error, headline, body)
    }

    /// Tags the notification so a later one with the same id replaces it.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&NotificationId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// A notification request.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Content(ContentNotification),
    Status(StatusCode),
}

impl Notification {
    /// Identifier of a content notification; status notifications have none.
    #[must_use]
    pub fn id(&self) -> Option<&NotificationId> {
        match self {
            Notification::Content(content) => content.id(),
            Notification::Status(_) => None,
        }
    }

    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Notification::Status(_))
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Notification::Status(code) => Some(*code),
            Notification::Content(_) => None,
        }
    }

    #[must_use]
    pub fn as_content(&self) -> Option<&ContentNotification> {
        match self {
            Notification::Content(content) => Some(content),
            Notification::Status(_) => None,
        }
    }
}

impl From<ContentNotification> for Notification {
    fn from(content: ContentNotification) -> Self {
        Notification::Content(content)
    }
}

impl From<StatusCode> for Notification {
    fn from(code: StatusCode) -> Self {
        Notification::Status(code)
    }
}
