//! Snapshot listeners and their unsubscribe handles

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::snapshot::Snapshot;

type Listener = Box<dyn FnMut(&Snapshot) + Send>;

/// Listeners registered on one controller
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// Set while listeners are detached from the registry for a notification
    notifying: bool,
    /// Ids unsubscribed while `notifying`
    detached: HashSet<u64>,
}

pub(crate) type SharedRegistry = Arc<Mutex<ListenerRegistry>>;

fn lock(registry: &Mutex<ListenerRegistry>) -> MutexGuard<'_, ListenerRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn register(registry: &SharedRegistry, listener: Listener) -> Subscription {
    let mut guard = lock(registry);
    let id = guard.next_id;
    guard.next_id += 1;
    guard.listeners.push((id, listener));

    Subscription {
        id,
        registry: Arc::downgrade(registry),
    }
}

pub(crate) fn listener_count(registry: &SharedRegistry) -> usize {
    lock(registry).listeners.len()
}

/// Listeners checked out of the registry for one notification
///
/// Dropping puts them back, including when a listener panics.
struct CheckedOut<'a> {
    registry: &'a SharedRegistry,
    listeners: Vec<(u64, Listener)>,
}

impl Drop for CheckedOut<'_> {
    fn drop(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        let mut guard = lock(self.registry);
        let detached = std::mem::take(&mut guard.detached);
        listeners.retain(|(id, _)| !detached.contains(id));
        listeners.append(&mut guard.listeners);
        guard.listeners = listeners;
        guard.notifying = false;
    }
}

/// Invoke every listener once, in subscription order
///
/// Listeners are moved out of the registry while they run so a listener may
/// drop its own subscription without deadlocking.
pub(crate) fn notify(registry: &SharedRegistry, snapshot: &Snapshot) {
    let mut checked_out = {
        let mut guard = lock(registry);
        guard.notifying = true;
        CheckedOut {
            registry,
            listeners: std::mem::take(&mut guard.listeners),
        }
    };

    for (_, listener) in checked_out.listeners.iter_mut() {
        listener(snapshot);
    }
}

/// Handle returned by `subscribe`
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    /// Remove the listener. Returns false if the controller is already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut guard = lock(&registry);

        let before = guard.listeners.len();
        guard.listeners.retain(|(id, _)| *id != self.id);
        if guard.listeners.len() != before {
            return true;
        }

        if guard.notifying {
            return guard.detached.insert(self.id);
        }
        false
    }
}
