// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast queue**: How many toasts are visible at once
//! - **Toast timing**: Auto-dismiss durations per severity

// ==========================================================================
// Toast Queue Defaults
// ==========================================================================

/// Default number of toasts visible at once (others are queued).
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum number of visible toasts.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum number of visible toasts.
pub const MAX_MAX_VISIBLE: usize = 10;

// ==========================================================================
// Toast Timing Defaults
// ==========================================================================

/// Auto-dismiss delay for success toasts (in seconds).
pub const DEFAULT_SUCCESS_SECS: u64 = 3;

/// Auto-dismiss delay for info toasts (in seconds).
pub const DEFAULT_INFO_SECS: u64 = 3;

/// Auto-dismiss delay for warning toasts (in seconds).
pub const DEFAULT_WARNING_SECS: u64 = 5;

/// Upper bound for any configured auto-dismiss delay (in seconds).
pub const MAX_DISMISS_SECS: u64 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_visible_bounds_are_ordered() {
        assert!(MIN_MAX_VISIBLE <= DEFAULT_MAX_VISIBLE);
        assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);
    }

    #[test]
    fn warning_lingers_longer_than_success() {
        assert!(DEFAULT_WARNING_SECS > DEFAULT_SUCCESS_SECS);
        assert!(DEFAULT_WARNING_SECS <= MAX_DISMISS_SECS);
    }
}
