// SPDX-License-Identifier: MPL-2.0
//! `iced_toast_context` keeps an application's visible notifications in sync
//! with a toast overlay.
//!
//! Widgets raise notifications through a [`notifications::NotificationContext`]
//! handed down from a [`notifications::NotificationProvider`]. The store behind
//! it deduplicates by identifier, tracks 401/403 status notifications, and
//! delegates rendering to a [`notifications::Toaster`] such as the Iced overlay
//! in [`ui::toaster`].

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
