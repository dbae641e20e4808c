// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the notification context to the toast overlay.
//!
//! The `App` owns the [`NotificationProvider`] for the window's lifetime and
//! passes its [`NotificationContext`] to everything that raises
//! notifications. Dropping the app tears the session down, closing every
//! toast still on screen.

mod message;
mod subscription;
mod view;

pub use message::{DemoKind, Flags, Message, DEMO_ID, DEMO_RICH_ID};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::notifications::{
    ContentNotification, Notification, NotificationContext, NotificationId, NotificationProvider,
};
use crate::ui::toaster::{self, IcedToaster};
use iced::{window, Element, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    toaster: IcedToaster,
    notifications: NotificationContext<IcedToaster>,
    // Dropped with the app, which ends the notification session.
    _provider: NotificationProvider<IcedToaster>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications)
            .field("visible_toasts", &self.toaster.visible_count())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(std::path::PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);
        let toaster = IcedToaster::new(config.toasts.clone());
        let provider = NotificationProvider::new(toaster.clone());
        let notifications = provider.context();

        notifications.subscribe(|entries| {
            tracing::debug!(active = entries.len(), "notifications changed");
        });

        let task = match config_warning {
            Some(key) => Task::perform(
                notifications.add_notification(ContentNotification::warning(
                    i18n.tr("demo-headline-warning"),
                    i18n.tr(&key),
                )),
                Message::Added,
            ),
            None => Task::none(),
        };

        let app = Self {
            i18n,
            toaster,
            notifications,
            _provider: provider,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toaster.has_toasts())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Add(kind) => self.add(kind.notification(&self.i18n)),
            Message::Added(result) => {
                if let Err(err) = result {
                    tracing::warn!(error = %err, "notification was not shown");
                }
                Task::none()
            }
            Message::CloseDemo => {
                self.notifications
                    .close_notification(&NotificationId::from(DEMO_ID));
                Task::none()
            }
            Message::Reset => {
                self.notifications.reset_notifications();
                Task::none()
            }
            Message::Toaster(toaster_message) => {
                self.toaster.handle_message(&toaster_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.toaster.handle_message(&toaster::Message::Tick);
                Task::none()
            }
        }
    }

    fn add(&self, notification: Notification) -> Task<Message> {
        Task::perform(
            self.notifications.add_notification(notification),
            Message::Added,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        let active = self.notifications.notifications();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toaster: &self.toaster,
            active: &active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_app() -> App {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };
        App::new(flags).0
    }

    #[tokio::test]
    async fn demo_toasts_replace_each_other() {
        let app = test_app();
        app.notifications
            .add_notification(DemoKind::Error.notification(&app.i18n))
            .await
            .unwrap();
        app.notifications
            .add_notification(DemoKind::Success.notification(&app.i18n))
            .await
            .unwrap();

        assert_eq!(app.notifications.notifications().len(), 1);
        assert_eq!(app.toaster.visible_count(), 1);
    }

    #[tokio::test]
    async fn close_demo_removes_toast_and_entry() {
        let mut app = test_app();
        app.notifications
            .add_notification(DemoKind::Info.notification(&app.i18n))
            .await
            .unwrap();

        let _ = app.update(Message::CloseDemo);

        assert!(app.notifications.notifications().is_empty());
        assert!(!app.toaster.has_toasts());
    }

    #[tokio::test]
    async fn reset_clears_status_and_toasts() {
        let mut app = test_app();
        app.notifications
            .add_notification(DemoKind::Rich.notification(&app.i18n))
            .await
            .unwrap();
        app.notifications
            .add_notification(DemoKind::Unauthorized.notification(&app.i18n))
            .await
            .unwrap();

        let _ = app.update(Message::Reset);

        assert!(app.notifications.notifications().is_empty());
        assert!(!app.toaster.has_toasts());
    }

    #[tokio::test]
    async fn dropping_app_closes_remaining_toasts() {
        let app = test_app();
        let toaster = app.toaster.clone();
        app.notifications
            .add_notification(DemoKind::Warning.notification(&app.i18n))
            .await
            .unwrap();
        assert!(toaster.has_toasts());

        drop(app);
        assert!(!toaster.has_toasts());
    }

    #[test]
    fn toaster_dismiss_message_is_routed() {
        let mut app = test_app();
        let _ = app.update(Message::Toaster(toaster::Message::Tick));
        assert!(!app.toaster.has_toasts());
    }
}
