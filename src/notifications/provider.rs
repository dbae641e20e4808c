// SPDX-License-Identifier: MPL-2.0
//! Session ownership for the notification store.
//!
//! A [`NotificationProvider`] owns the store for as long as its part of the
//! UI is alive and is the only way to obtain a [`NotificationContext`].
//! Dropping the provider tears the session down, so no toast outlives the
//! widgets that asked for it.

use super::notification::{Notification, NotificationId};
use super::store::{ActiveNotification, ListenerId, NotificationStore};
use super::toaster::{CloseHandle, Toaster};
use crate::error::Result;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub struct NotificationProvider<T: Toaster> {
    store: Arc<NotificationStore<T>>,
}

impl<T: Toaster> NotificationProvider<T> {
    pub fn new(toaster: T) -> Self {
        Self {
            store: Arc::new(NotificationStore::new(toaster)),
        }
    }

    /// Hands out a context for code nested under this provider.
    #[must_use]
    pub fn context(&self) -> NotificationContext<T> {
        NotificationContext {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Toaster> Drop for NotificationProvider<T> {
    fn drop(&mut self) {
        self.store.teardown();
    }
}

impl<T: Toaster> fmt::Debug for NotificationProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationProvider")
            .field("store", &self.store)
            .finish()
    }
}

/// Handle to the notification store, passed explicitly to the code that
/// raises or displays notifications.
pub struct NotificationContext<T: Toaster> {
    store: Arc<NotificationStore<T>>,
}

impl<T: Toaster> Clone for NotificationContext<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Toaster> NotificationContext<T> {
    #[must_use]
    pub fn notifications(&self) -> Vec<ActiveNotification> {
        self.store.notifications()
    }

    /// Shows a notification. The returned future owns the context, so it can
    /// be handed to an executor as is.
    pub fn add_notification(
        &self,
        notification: impl Into<Notification>,
    ) -> impl Future<Output = Result<Option<CloseHandle>>> + Send + 'static {
        self.add(notification.into())
    }

    fn add(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Option<CloseHandle>>> + Send + 'static {
        let store = Arc::clone(&self.store);
        async move { store.add_notification(notification).await }
    }

    pub fn close_notification(&self, id: &NotificationId) -> bool {
        self.store.close_notification(id)
    }

    pub fn reset_notifications(&self) {
        self.store.reset_notifications();
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&[ActiveNotification]) + Send + Sync + 'static,
    ) -> ListenerId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.store.unsubscribe(id)
    }

    #[must_use]
    pub fn store(&self) -> &NotificationStore<T> {
        &self.store
    }
}

impl<T: Toaster> fmt::Debug for NotificationContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationContext")
            .field("active", &self.store.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::notifications::{ContentNotification, StatusCode};
    use crate::test_utils::RecordingToaster;

    #[tokio::test]
    async fn contexts_share_the_provider_store() {
        let provider = NotificationProvider::new(RecordingToaster::immediate());
        let writer = provider.context();
        let reader = provider.context();

        writer
            .add_notification(ContentNotification::info("I", "x").with_id("i"))
            .await
            .unwrap();

        assert_eq!(reader.notifications().len(), 1);
        assert!(reader.close_notification(&"i".into()));
        assert!(writer.notifications().is_empty());
    }

    #[tokio::test]
    async fn dropping_provider_tears_down_once() {
        let toaster = Arc::new(RecordingToaster::immediate());
        let provider = NotificationProvider::new(Arc::clone(&toaster));
        let context = provider.context();
        context
            .add_notification(ContentNotification::info("I", "x"))
            .await
            .unwrap();

        drop(provider);

        assert!(context.notifications().is_empty());
        assert!(context.store().is_ended());
        assert_eq!(toaster.close_all_calls(), 1);

        // A second teardown is a no-op.
        assert!(!context.store().teardown());
        assert_eq!(toaster.close_all_calls(), 1);
    }

    #[tokio::test]
    async fn context_outliving_provider_rejects_adds() {
        let provider = NotificationProvider::new(RecordingToaster::immediate());
        let context = provider.context();
        drop(provider);

        let result = context.add_notification(StatusCode::Unauthorized).await;
        assert_eq!(result.unwrap_err(), Error::SessionEnded);
    }

    #[tokio::test]
    async fn add_future_can_be_spawned() {
        let provider = NotificationProvider::new(RecordingToaster::immediate());
        let context = provider.context();

        let handle = tokio::spawn(context.add_notification(ContentNotification::success("S", "x")))
            .await
            .unwrap()
            .unwrap();

        assert!(handle.is_some());
        assert_eq!(context.notifications().len(), 1);
    }
}
