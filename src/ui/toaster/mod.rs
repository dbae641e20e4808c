// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for Iced applications.
//!
//! [`IcedToaster`] is the window-wide toaster: it implements
//! [`Toaster`](crate::notifications::Toaster) on top of a shared [`Manager`]
//! and renders the visible toasts in the bottom-right corner.
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 by default (others are queued)
//! - Position: bottom-right corner

mod manager;
mod toast;

pub use manager::{Manager, Message, Toast, ToastId};
pub use toast::ToastView;

use crate::config::ToastConfig;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::notifications::{CloseHandle, ToastDescriptor, Toaster};
use iced::Element;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to the window's toast overlay. Clones share the same overlay.
#[derive(Debug, Clone, Default)]
pub struct IcedToaster {
    manager: Arc<Mutex<Manager>>,
}

impl IcedToaster {
    #[must_use]
    pub fn new(settings: ToastConfig) -> Self {
        Self {
            manager: Arc::new(Mutex::new(Manager::new(settings))),
        }
    }

    pub fn handle_message(&self, message: &Message) {
        self.lock().handle_message(message);
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.lock().visible_count()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.lock().queued_count()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.lock().has_toasts()
    }

    /// Labels of the visible toasts, newest first.
    #[must_use]
    pub fn visible_labels(&self) -> Vec<String> {
        self.lock()
            .visible()
            .map(|toast| toast.label().to_string())
            .collect()
    }

    /// Renders the overlay for the current frame.
    pub fn view_overlay<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        ToastView::view_overlay(&self.lock(), i18n)
    }

    fn lock(&self) -> MutexGuard<'_, Manager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Toaster for IcedToaster {
    fn enqueue(
        &self,
        descriptor: ToastDescriptor,
    ) -> impl Future<Output = Result<CloseHandle>> + Send {
        let id = self.lock().push(descriptor);
        let manager = Arc::downgrade(&self.manager);
        let handle = CloseHandle::new(move || {
            if let Some(manager) = manager.upgrade() {
                manager
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .dismiss(id);
            }
        });
        std::future::ready(Ok(handle))
    }

    fn close_all(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{describe, ContentNotification};

    #[tokio::test]
    async fn enqueue_shows_toast_and_handle_dismisses_it() {
        let toaster = IcedToaster::default();
        let handle = toaster
            .enqueue(describe(&ContentNotification::info("Hello", "world")))
            .await
            .unwrap();

        assert_eq!(toaster.visible_labels(), vec!["Hello"]);
        assert!(handle.close());
        assert!(!toaster.has_toasts());
    }

    #[tokio::test]
    async fn close_all_empties_queue_and_visible() {
        let toaster = IcedToaster::new(ToastConfig {
            max_visible: 1,
            ..ToastConfig::default()
        });
        for label in ["a", "b", "c"] {
            toaster
                .enqueue(describe(&ContentNotification::info(label, "x")))
                .await
                .unwrap();
        }
        assert_eq!(toaster.visible_count(), 1);
        assert_eq!(toaster.queued_count(), 2);

        toaster.close_all();
        assert!(!toaster.has_toasts());
    }

    #[tokio::test]
    async fn handle_outliving_toaster_is_harmless() {
        let toaster = IcedToaster::default();
        let handle = toaster
            .enqueue(describe(&ContentNotification::info("Gone", "x")))
            .await
            .unwrap();
        drop(toaster);

        assert!(handle.close());
    }
}
