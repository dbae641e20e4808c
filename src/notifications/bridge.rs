// SPDX-License-Identifier: MPL-2.0
//! Rendering bridge between notifications and the toaster.
//!
//! Plain text passes through as the toast description. Rich bodies become a
//! render callback: the toaster hands it a [`Mount`] (the toast's container)
//! and the callback attaches an isolated [`RenderRoot`] to it. The toaster
//! owns the mount and must [`Mount::unmount`] it when the toast goes away,
//! which disposes the root.

use super::notification::{Body, ContentNotification, RichContent};
use super::toaster::ToastDescriptor;
use iced::Element;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Rendering root scoped to a single toast container.
pub struct RenderRoot {
    content: RichContent,
}

impl RenderRoot {
    #[must_use]
    pub fn new(content: RichContent) -> Self {
        Self { content }
    }

    #[must_use]
    pub fn view(&self) -> Element<'static, ()> {
        self.content.view()
    }
}

impl Drop for RenderRoot {
    fn drop(&mut self) {
        tracing::trace!("rich toast root disposed");
    }
}

/// Container slot a toaster provides for one toast.
///
/// Clones point at the same slot.
#[derive(Clone, Default)]
pub struct Mount {
    root: Arc<Mutex<Option<RenderRoot>>>,
}

impl Mount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a root, disposing any root previously mounted here.
    pub fn attach(&self, root: RenderRoot) {
        let previous = self
            .root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(root);
        drop(previous);
    }

    /// Renders the mounted root, if any.
    #[must_use]
    pub fn view(&self) -> Option<Element<'static, ()>> {
        self.root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(RenderRoot::view)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Disposes the mounted root. Returns `true` if one was mounted.
    pub fn unmount(&self) -> bool {
        let root = self
            .root
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        root.is_some()
    }
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// Translates a content notification into what the toaster renders.
#[must_use]
pub fn describe(notification: &ContentNotification) -> ToastDescriptor {
    let (description, render) = match notification.body() {
        Body::Text(text) => (Some(text.clone()), None),
        Body::Rich(content) => {
            let content = content.clone();
            let render: super::toaster::RenderFn = Box::new(move |mount: &Mount| {
                mount.attach(RenderRoot::new(content));
            });
            (None, Some(render))
        }
    };

    ToastDescriptor {
        severity: notification.severity(),
        label: notification.headline().to_string(),
        description,
        render,
    }
}
