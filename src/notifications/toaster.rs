// SPDX-License-Identifier: MPL-2.0
//! The seam between the notification store and whatever renders toasts.
//!
//! A [`Toaster`] accepts [`ToastDescriptor`]s and hands back a
//! [`CloseHandle`] once the toast is on screen.

use super::bridge::Mount;
use super::notification::Severity;
use crate::error::Result;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback invoked by the toaster with the container a rich body mounts into.
pub type RenderFn = Box<dyn FnOnce(&Mount) + Send>;

/// What the toaster needs to render one toast.
pub struct ToastDescriptor {
    pub severity: Severity,
    pub label: String,
    /// Plain-text body, when the notification has one.
    pub description: Option<String>,
    /// Mounts a rich body into the toast container.
    pub render: Option<RenderFn>,
}

impl fmt::Debug for ToastDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastDescriptor")
            .field("severity", &self.severity)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("render", &self.render.is_some())
            .finish()
    }
}

struct CloseInner {
    closed: AtomicBool,
    on_close: Box<dyn Fn() + Send + Sync>,
}

/// Handle that removes a rendered toast.
///
/// Clones share state: whichever clone closes first runs the callback and
/// every later call is a no-op.
#[derive(Clone)]
pub struct CloseHandle(Arc<CloseInner>);

impl CloseHandle {
    pub fn new(on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(CloseInner {
            closed: AtomicBool::new(false),
            on_close: Box::new(on_close),
        }))
    }

    /// Closes the toast. Returns `true` if this call ran the callback.
    pub fn close(&self) -> bool {
        if self.0.closed.swap(true, Ordering::AcqRel) {
            return false;
        }
        (self.0.on_close)();
        true
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.0.closed.load(Ordering::Acquire)
    }

    /// Whether both handles refer to the same toast.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseHandle")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// A toast renderer shared across the whole window.
pub trait Toaster: Send + Sync + 'static {
    /// Submits a toast, resolving once the toaster has accepted it.
    fn enqueue(
        &self,
        descriptor: ToastDescriptor,
    ) -> impl Future<Output = Result<CloseHandle>> + Send;

    /// Removes every toast this toaster is showing or holding back.
    fn close_all(&self);
}

impl<T: Toaster> Toaster for Arc<T> {
    fn enqueue(
        &self,
        descriptor: ToastDescriptor,
    ) -> impl Future<Output = Result<CloseHandle>> + Send {
        (**self).enqueue(descriptor)
    }

    fn close_all(&self) {
        (**self).close_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn close_runs_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handle = CloseHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handle.close());
        assert!(!handle.close());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_closed());
    }

    #[test]
    fn clones_share_closed_state() {
        let handle = CloseHandle::new(|| {});
        let clone = handle.clone();

        assert!(clone.close());
        assert!(handle.is_closed());
        assert!(!handle.close());
        assert!(handle.ptr_eq(&clone));
    }

    #[test]
    fn distinct_handles_are_not_ptr_eq() {
        let a = CloseHandle::new(|| {});
        let b = CloseHandle::new(|| {});
        assert!(!a.ptr_eq(&b));
    }
}
