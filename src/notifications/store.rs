// SPDX-License-Identifier: MPL-2.0
//! The list of active notifications and the operations that change it.
//!
//! The store is the single owner of the active list. Content notifications
//! are handed to a [`Toaster`] and only become active once the toaster has
//! accepted them and returned a [`CloseHandle`]. Status-code notifications
//! never reach the toaster.
//!
//! Because `add_notification` awaits the toaster, two adds can complete in
//! any order. Reconciliation is keyed by identifier: whichever add completes
//! last replaces any entry with the same identifier.
//!
//! Listeners registered with [`NotificationStore::subscribe`] receive a
//! snapshot after every mutation, in registration order. Snapshots are
//! versioned: when mutations race, a snapshot older than one already
//! delivered is dropped, so the last snapshot a listener sees always matches
//! the store.

use super::bridge;
use super::notification::{ContentNotification, Notification, NotificationId, StatusCode};
use super::toaster::{CloseHandle, Toaster};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A notification that is currently visible.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    notification: Notification,
    close: Option<CloseHandle>,
}

impl ActiveNotification {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn id(&self) -> Option<&NotificationId> {
        self.notification.id()
    }

    /// Close handle from the toaster; `None` for status notifications.
    #[must_use]
    pub fn close_handle(&self) -> Option<&CloseHandle> {
        self.close.as_ref()
    }

    #[must_use]
    pub fn is_status(&self) -> bool {
        self.notification.is_status()
    }
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&[ActiveNotification]) + Send + Sync>;

#[derive(Default)]
struct State {
    entries: Vec<ActiveNotification>,
    ended: bool,
    version: u64,
}

impl State {
    /// Bumps the version and copies the list for delivery.
    fn snapshot(&mut self) -> Snapshot {
        self.version += 1;
        Snapshot {
            version: self.version,
            entries: self.entries.clone(),
        }
    }
}

struct Snapshot {
    version: u64,
    entries: Vec<ActiveNotification>,
}

/// Serializes listener calls across threads.
#[derive(Default)]
struct Delivery {
    running: bool,
    delivered: u64,
    pending: Option<Snapshot>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    registered: Vec<(ListenerId, Listener)>,
}

pub struct NotificationStore<T> {
    toaster: T,
    state: Mutex<State>,
    listeners: Mutex<Listeners>,
    delivery: Mutex<Delivery>,
}

impl<T: Toaster> NotificationStore<T> {
    pub fn new(toaster: T) -> Self {
        Self {
            toaster,
            state: Mutex::default(),
            listeners: Mutex::default(),
            delivery: Mutex::default(),
        }
    }

    /// Snapshot of the active notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<ActiveNotification> {
        self.lock_state().entries.clone()
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<ActiveNotification> {
        self.lock_state()
            .entries
            .iter()
            .find(|entry| entry.id() == Some(id))
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_state().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_state().entries.is_empty()
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.lock_state().ended
    }

    /// Shows a notification.
    ///
    /// Status notifications replace any active status notification and
    /// resolve to `Ok(None)` immediately. Content notifications resolve to
    /// the toaster's close handle once the toast is visible.
    ///
    /// # Errors
    ///
    /// Returns the toaster's error if it rejects the toast, and
    /// [`Error::SessionEnded`] if the store was torn down before the toast
    /// became visible. The active list is left unchanged in both cases: an
    /// entry with the same identifier stays listed even though its toast was
    /// already closed before the toaster was asked.
    pub async fn add_notification(
        &self,
        notification: impl Into<Notification>,
    ) -> Result<Option<CloseHandle>> {
        match notification.into() {
            Notification::Status(code) => {
                self.push_status(code)?;
                Ok(None)
            }
            Notification::Content(content) => self.push_content(content).await.map(Some),
        }
    }

    /// Closes the notification with the given identifier.
    ///
    /// Returns `false` (and changes nothing) when no such notification is
    /// active.
    pub fn close_notification(&self, id: &NotificationId) -> bool {
        let (removed, snapshot) = {
            let mut state = self.lock_state();
            let Some(index) = state.entries.iter().position(|entry| entry.id() == Some(id))
            else {
                return false;
            };
            let removed = state.entries.remove(index);
            (removed, state.snapshot())
        };

        tracing::debug!(%id, "closing notification");
        if let Some(handle) = removed.close_handle() {
            handle.close();
        }
        self.notify(snapshot);
        true
    }

    /// Closes every toast and clears the list, whatever it contains.
    pub fn reset_notifications(&self) {
        self.toaster.close_all();
        let (cleared, snapshot) = {
            let mut state = self.lock_state();
            let cleared = std::mem::take(&mut state.entries);
            (cleared, state.snapshot())
        };
        tracing::debug!(cleared = cleared.len(), "notifications reset");
        self.notify(snapshot);
    }

    /// Ends the session: closes every toast and clears the list.
    ///
    /// Only the first call has an effect. Adds still in flight when this runs
    /// close their toast on arrival and fail with [`Error::SessionEnded`].
    pub fn teardown(&self) -> bool {
        let snapshot = {
            let mut state = self.lock_state();
            if state.ended {
                return false;
            }
            state.ended = true;
            state.entries.clear();
            state.snapshot()
        };

        tracing::debug!("notification session torn down");
        self.toaster.close_all();
        self.notify(snapshot);
        true
    }

    /// Registers a listener called after every mutation.
    ///
    /// A listener may read or mutate the store; a mutation made from inside
    /// a listener is delivered once the current call returns.
    pub fn subscribe(
        &self,
        listener: impl Fn(&[ActiveNotification]) + Send + Sync + 'static,
    ) -> ListenerId {
        let mut listeners = self.lock_listeners();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.registered.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.registered.len();
        listeners.registered.retain(|(registered, _)| *registered != id);
        listeners.registered.len() != before
    }

    fn push_status(&self, code: StatusCode) -> Result<()> {
        let snapshot = {
            let mut state = self.lock_state();
            if state.ended {
                return Err(Error::SessionEnded);
            }
            state.entries.retain(|entry| !entry.is_status());
            state.entries.push(ActiveNotification {
                notification: Notification::Status(code),
                close: None,
            });
            state.snapshot()
        };

        tracing::debug!(status = code.code(), "status notification active");
        self.notify(snapshot);
        Ok(())
    }

    async fn push_content(&self, content: ContentNotification) -> Result<CloseHandle> {
        if self.is_ended() {
            return Err(Error::SessionEnded);
        }

        if let Some(id) = content.id() {
            if let Some(previous) = self.get(id).and_then(|entry| entry.close) {
                tracing::debug!(%id, "closing notification replaced by a newer one");
                previous.close();
            }
        }

        let descriptor = bridge::describe(&content);
        let handle = match self.toaster.enqueue(descriptor).await {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(
                    id = content.id().map(NotificationId::as_str),
                    error = %err,
                    "toaster rejected notification"
                );
                return Err(err);
            }
        };

        let (stale, snapshot) = {
            let mut state = self.lock_state();
            if state.ended {
                drop(state);
                handle.close();
                return Err(Error::SessionEnded);
            }

            let mut stale = Vec::new();
            if let Some(id) = content.id() {
                state.entries.retain(|entry| {
                    if entry.id() != Some(id) {
                        return true;
                    }
                    stale.extend(entry.close.clone());
                    false
                });
            }
            state.entries.push(ActiveNotification {
                notification: Notification::Content(content),
                close: Some(handle.clone()),
            });
            (stale, state.snapshot())
        };

        // Entries that completed earlier for the same id are superseded.
        for previous in stale.iter().filter(|previous| !previous.ptr_eq(&handle)) {
            previous.close();
        }
        self.notify(snapshot);
        Ok(handle)
    }

    /// Queues a snapshot for delivery. Whichever thread finds delivery idle
    /// drains the queue; the others return immediately.
    fn notify(&self, snapshot: Snapshot) {
        {
            let mut delivery = self.lock_delivery();
            let superseded = snapshot.version <= delivery.delivered
                || delivery
                    .pending
                    .as_ref()
                    .is_some_and(|pending| pending.version >= snapshot.version);
            if superseded {
                tracing::trace!(version = snapshot.version, "dropping stale snapshot");
                return;
            }
            delivery.pending = Some(snapshot);
            if delivery.running {
                return;
            }
            delivery.running = true;
        }

        loop {
            let snapshot = {
                let mut delivery = self.lock_delivery();
                let Some(snapshot) = delivery.pending.take() else {
                    delivery.running = false;
                    return;
                };
                delivery.delivered = snapshot.version;
                snapshot
            };

            let listeners: Vec<Listener> = self
                .lock_listeners()
                .registered
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();

            for listener in listeners {
                listener(&snapshot.entries);
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_delivery(&self) -> MutexGuard<'_, Delivery> {
        self.delivery.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for NotificationStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("NotificationStore")
            .field("entries", &state.entries)
            .field("ended", &state.ended)
            .finish_non_exhaustive()
    }
}
