// SPDX-License-Identifier: MPL-2.0
use iced_toast_context::config::{self, Config, GeneralConfig, ToastConfig};
use iced_toast_context::error::Error;
use iced_toast_context::i18n::fluent::I18n;
use iced_toast_context::notifications::{
    ContentNotification, NotificationId, NotificationProvider, StatusCode,
};
use iced_toast_context::ui::status_banner;
use iced_toast_context::ui::toaster::IcedToaster;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test]
async fn same_id_replaces_visible_toast() {
    let toaster = IcedToaster::default();
    let provider = NotificationProvider::new(toaster.clone());
    let notifications = provider.context();

    let first = notifications
        .add_notification(ContentNotification::info("Uploading", "1 of 2").with_id("upload"))
        .await
        .expect("first add should succeed")
        .expect("content notifications return a handle");
    notifications
        .add_notification(ContentNotification::info("Uploading", "2 of 2").with_id("upload"))
        .await
        .expect("second add should succeed");

    assert!(first.is_closed());
    assert_eq!(notifications.notifications().len(), 1);
    assert_eq!(toaster.visible_count(), 1);
}

#[tokio::test]
async fn forbidden_replaces_unauthorized_without_touching_toasts() {
    let toaster = IcedToaster::default();
    let provider = NotificationProvider::new(toaster.clone());
    let notifications = provider.context();

    notifications
        .add_notification(ContentNotification::success("Saved", "done"))
        .await
        .unwrap();
    let handle = notifications
        .add_notification(StatusCode::Unauthorized)
        .await
        .unwrap();
    assert!(handle.is_none());
    notifications
        .add_notification(StatusCode::Forbidden)
        .await
        .unwrap();

    let active = notifications.notifications();
    let statuses: Vec<StatusCode> = active
        .iter()
        .filter_map(|entry| entry.notification().status())
        .collect();
    assert_eq!(statuses, vec![StatusCode::Forbidden]);
    assert_eq!(active.len(), 2);
    assert_eq!(toaster.visible_count(), 1);
    assert_eq!(
        status_banner::active_status(&active),
        Some(StatusCode::Forbidden)
    );
}

#[tokio::test]
async fn closing_unknown_id_changes_nothing() {
    let provider = NotificationProvider::new(IcedToaster::default());
    let notifications = provider.context();
    notifications
        .add_notification(ContentNotification::warning("Disk", "almost full").with_id("disk"))
        .await
        .unwrap();

    assert!(!notifications.close_notification(&NotificationId::from("missing")));
    assert_eq!(notifications.notifications().len(), 1);

    assert!(notifications.close_notification(&NotificationId::from("disk")));
    assert!(notifications.notifications().is_empty());
}

#[tokio::test]
async fn reset_clears_list_and_overlay() {
    let toaster = IcedToaster::new(ToastConfig {
        max_visible: 1,
        ..ToastConfig::default()
    });
    let provider = NotificationProvider::new(toaster.clone());
    let notifications = provider.context();

    for headline in ["a", "b", "c"] {
        notifications
            .add_notification(ContentNotification::error(headline, "failed"))
            .await
            .unwrap();
    }
    notifications
        .add_notification(StatusCode::Unauthorized)
        .await
        .unwrap();
    assert_eq!(toaster.queued_count(), 2);

    notifications.reset_notifications();

    assert!(notifications.notifications().is_empty());
    assert!(!toaster.has_toasts());
}

#[tokio::test]
async fn dropping_provider_ends_session() {
    let toaster = IcedToaster::default();
    let provider = NotificationProvider::new(toaster.clone());
    let notifications = provider.context();
    notifications
        .add_notification(ContentNotification::info("Hello", "world"))
        .await
        .unwrap();

    drop(provider);

    assert!(!toaster.has_toasts());
    assert!(notifications.notifications().is_empty());
    assert_eq!(
        notifications
            .add_notification(ContentNotification::info("Late", "too late"))
            .await
            .unwrap_err(),
        Error::SessionEnded
    );
}

#[tokio::test]
async fn listeners_see_every_change() {
    let provider = NotificationProvider::new(IcedToaster::default());
    let notifications = provider.context();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let listener = notifications.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    notifications
        .add_notification(ContentNotification::info("One", "x").with_id("one"))
        .await
        .unwrap();
    notifications.close_notification(&NotificationId::from("one"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    assert!(notifications.unsubscribe(listener));
    notifications.reset_notifications();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_language_and_toast_settings_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        toasts: ToastConfig {
            max_visible: 5,
            ..ToastConfig::default()
        },
    };
    config::save_to_path(&french, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded, french);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let toaster = IcedToaster::new(loaded.toasts);
    assert!(!toaster.has_toasts());

    dir.close().expect("Failed to close temporary directory");
}
