// SPDX-License-Identifier: MPL-2.0
//! Notification context shared by an application's widgets.
//!
//! This module keeps the list of visible notifications consistent with what
//! a toaster renders. Callers raise notifications through a
//! [`NotificationContext`]; the [`NotificationStore`] behind it deduplicates
//! by identifier and forwards content to a [`Toaster`].
//!
//! # Components
//!
//! - [`notification`] - `Notification` data model with severity levels and status codes
//! - [`toaster`] - `Toaster` trait and the `CloseHandle` it returns
//! - [`bridge`] - Translation of notifications into toast descriptors
//! - [`store`] - `NotificationStore` holding the active list
//! - [`provider`] - `NotificationProvider` owning the store for one session
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast_context::notifications::{ContentNotification, NotificationProvider, StatusCode};
//! use iced_toast_context::ui::toaster::IcedToaster;
//!
//! let toaster = IcedToaster::default();
//! let provider = NotificationProvider::new(toaster.clone());
//! let notifications = provider.context();
//!
//! // Replaces any visible notification tagged "save"
//! let close = notifications
//!     .add_notification(ContentNotification::success("Saved", "All changes stored").with_id("save"))
//!     .await?;
//!
//! // Status notifications skip the toaster
//! notifications.add_notification(StatusCode::Unauthorized).await?;
//! ```

pub mod bridge;
pub mod notification;
pub mod provider;
pub mod store;
pub mod toaster;

pub use bridge::{describe, Mount, RenderRoot};
pub use notification::{
    Body, ContentNotification, Notification, NotificationId, RichContent, Severity, StatusCode,
};
pub use provider::{NotificationContext, NotificationProvider};
pub use store::{ActiveNotification, ListenerId, NotificationStore};
pub use toaster::{CloseHandle, RenderFn, ToastDescriptor, Toaster};
