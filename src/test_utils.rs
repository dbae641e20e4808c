// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by the notification unit tests.
//!
//! [`RecordingToaster`] records every call it receives. In manual mode each
//! enqueue stays pending until the test resolves or rejects it, which lets
//! tests drive the order in which handshakes complete.

use crate::error::{Error, Result};
use crate::notifications::{CloseHandle, Mount, ToastDescriptor, Toaster};
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

struct Pending {
    descriptor: ToastDescriptor,
    respond: oneshot::Sender<Result<CloseHandle>>,
}

#[derive(Default)]
struct Recorded {
    pending: Vec<Pending>,
    enqueued: Vec<String>,
    closed: Vec<String>,
    mounts: Vec<Mount>,
    close_all_calls: usize,
}

enum Outcome {
    Ready(CloseHandle),
    Waiting(oneshot::Receiver<Result<CloseHandle>>),
}

pub struct RecordingToaster {
    recorded: Arc<Mutex<Recorded>>,
    manual: bool,
}

impl RecordingToaster {
    /// Accepts every toast as soon as it is enqueued.
    pub fn immediate() -> Self {
        Self {
            recorded: Arc::default(),
            manual: false,
        }
    }

    /// Holds every toast until [`resolve`](Self::resolve) or [`reject`](Self::reject).
    pub fn manual() -> Self {
        Self {
            recorded: Arc::default(),
            manual: true,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.recorded.lock().unwrap().pending.len()
    }

    /// Accepts the pending toast with the given label.
    pub fn resolve(&self, label: &str) {
        let pending = self.take_pending(label);
        let handle = self.accept(pending.descriptor);
        let _ = pending.respond.send(Ok(handle));
    }

    /// Fails the pending toast with the given label.
    pub fn reject(&self, label: &str, reason: &str) {
        let pending = self.take_pending(label);
        let _ = pending.respond.send(Err(Error::Toaster(reason.to_string())));
    }

    pub fn enqueued_labels(&self) -> Vec<String> {
        self.recorded.lock().unwrap().enqueued.clone()
    }

    pub fn closed_labels(&self) -> Vec<String> {
        self.recorded.lock().unwrap().closed.clone()
    }

    pub fn close_all_calls(&self) -> usize {
        self.recorded.lock().unwrap().close_all_calls
    }

    /// Containers handed to render callbacks, in enqueue order.
    pub fn mounts(&self) -> Vec<Mount> {
        self.recorded.lock().unwrap().mounts.clone()
    }

    fn take_pending(&self, label: &str) -> Pending {
        let mut recorded = self.recorded.lock().unwrap();
        let index = recorded
            .pending
            .iter()
            .position(|p| p.descriptor.label == label)
            .unwrap_or_else(|| panic!("no pending toast labelled {label}"));
        recorded.pending.remove(index)
    }

    fn accept(&self, descriptor: ToastDescriptor) -> CloseHandle {
        let ToastDescriptor { label, render, .. } = descriptor;
        if let Some(render) = render {
            let mount = Mount::new();
            render(&mount);
            self.recorded.lock().unwrap().mounts.push(mount);
        }

        let recorded = Arc::clone(&self.recorded);
        CloseHandle::new(move || {
            recorded.lock().unwrap().closed.push(label.clone());
        })
    }
}

impl Toaster for RecordingToaster {
    fn enqueue(
        &self,
        descriptor: ToastDescriptor,
    ) -> impl Future<Output = Result<CloseHandle>> + Send {
        self.recorded
            .lock()
            .unwrap()
            .enqueued
            .push(descriptor.label.clone());

        let outcome = if self.manual {
            let (respond, receiver) = oneshot::channel();
            self.recorded
                .lock()
                .unwrap()
                .pending
                .push(Pending { descriptor, respond });
            Outcome::Waiting(receiver)
        } else {
            Outcome::Ready(self.accept(descriptor))
        };

        async move {
            match outcome {
                Outcome::Ready(handle) => Ok(handle),
                Outcome::Waiting(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(Error::Toaster("toaster dropped".to_string()))),
            }
        }
    }

    fn close_all(&self) {
        self.recorded.lock().unwrap().close_all_calls += 1;
    }
}
