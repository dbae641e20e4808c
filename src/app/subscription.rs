// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between auto-dismiss checks while toasts are on screen.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while the overlay has something to time out.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
