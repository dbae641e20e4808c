// SPDX-License-Identifier: MPL-2.0
//! User interface components for the notification system.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`toaster`] - Toast overlay implementing the `Toaster` trait
//! - [`status_banner`] - Banner for 401/403 status notifications
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod status_banner;
pub mod toaster;
