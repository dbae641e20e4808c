// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of toasts.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use crate::config::ToastConfig;
use crate::notifications::{Mount, Severity, ToastDescriptor};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Identifier the overlay assigns to each toast it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// A toast accepted by the overlay.
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    label: String,
    description: Option<String>,
    /// Container for a rich body, present when the descriptor had one.
    mount: Option<Mount>,
    /// When the toast became visible; `None` while queued.
    shown_at: Option<Instant>,
    dismiss_after: Option<Duration>,
}

impl Toast {
    fn from_descriptor(descriptor: ToastDescriptor, dismiss_after: Option<Duration>) -> Self {
        let ToastDescriptor {
            severity,
            label,
            description,
            render,
        } = descriptor;

        let mount = render.map(|render| {
            let mount = Mount::new();
            render(&mount);
            mount
        });

        Self {
            id: ToastId::next(),
            severity,
            label,
            description,
            mount,
            shown_at: None,
            dismiss_after,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn mount(&self) -> Option<&Mount> {
        self.mount.as_ref()
    }

    /// Whether the toast has been visible for longer than its timeout.
    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        match (self.shown_at, self.dismiss_after) {
            (Some(shown_at), Some(after)) => now.saturating_duration_since(shown_at) >= after,
            _ => false,
        }
    }

    fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    fn dispose(self) {
        if let Some(mount) = self.mount {
            mount.unmount();
        }
    }
}

/// Manages the toast queue and visible toasts.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Toast>,
    /// Queued toasts waiting to be displayed.
    queue: VecDeque<Toast>,
    settings: ToastConfig,
}

impl Manager {
    #[must_use]
    pub fn new(settings: ToastConfig) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            settings,
        }
    }

    /// Accepts a toast, mounting its rich body if it has one.
    ///
    /// If fewer than `max_visible` toasts are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, descriptor: ToastDescriptor) -> ToastId {
        let dismiss_after = self.settings.dismiss_after(descriptor.severity);
        let mut toast = Toast::from_descriptor(descriptor, dismiss_after);
        let id = toast.id();

        if self.visible.len() < self.settings.max_visible() {
            toast.show(Instant::now());
            self.visible.push_front(toast);
        } else {
            tracing::trace!(?id, "toast queued");
            self.queue.push_back(toast);
        }
        id
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            if let Some(toast) = self.visible.remove(pos) {
                toast.dispose();
            }
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|t| t.id() == id) {
            if let Some(toast) = self.queue.remove(pos) {
                toast.dispose();
            }
            return true;
        }

        false
    }

    /// Dismisses every visible toast whose timer ran out at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|t| t.should_auto_dismiss(now))
            .map(Toast::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick(Instant::now());
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes all toasts (visible and queued), disposing their mounts.
    pub fn clear(&mut self) {
        for toast in self.visible.drain(..).chain(self.queue.drain(..)) {
            toast.dispose();
        }
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.settings.max_visible() {
            let Some(mut toast) = self.queue.pop_front() else {
                break;
            };
            toast.show(now);
            self.visible.push_front(toast);
        }
    }
}
