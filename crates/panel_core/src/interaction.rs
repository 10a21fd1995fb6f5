//! Process-wide interaction stream with scoped listener registration.
//!
//! The bus is single-threaded: events are dispatched to completion on the
//! caller's thread. Listeners are held behind `Rc` so a dispatch can run against
//! a snapshot while listeners subscribe or cancel from inside a callback.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use serde::{Deserialize, Serialize};
use shared::domain::TargetId;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    PointerDown,
    PointerUp,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub target: TargetId,
}

impl InteractionEvent {
    pub fn pointer_down(target: TargetId) -> Self {
        Self {
            kind: InteractionKind::PointerDown,
            target,
        }
    }

    pub fn pointer_up(target: TargetId) -> Self {
        Self {
            kind: InteractionKind::PointerUp,
            target,
        }
    }

    pub fn click(target: TargetId) -> Self {
        Self {
            kind: InteractionKind::Click,
            target,
        }
    }
}

type Listener = Rc<dyn Fn(&InteractionEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Cloneable handle to one listener registry.
#[derive(Clone, Default)]
pub struct InteractionBus {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for InteractionBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl InteractionBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned guard is dropped or cancelled.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(&InteractionEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        trace!(listener = id, "interaction listener registered");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every registered listener and returns how many ran.
    ///
    /// A listener cancelled by an earlier listener of the same dispatch is
    /// skipped; listeners added during the dispatch only see later events.
    pub fn dispatch(&self, event: InteractionEvent) -> usize {
        let snapshot: Vec<(u64, Listener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut invoked = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().listeners.contains_key(&id) {
                continue;
            }
            listener(&event);
            invoked += 1;
        }
        invoked
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Registration guard returned by [`InteractionBus::subscribe`].
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let registry = registry.borrow();
        registry.listeners.contains_key(&self.id)
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // The removed listener is dropped after the borrow ends so its captures
        // may touch the bus again.
        let removed = registry.borrow_mut().listeners.remove(&self.id);
        if removed.is_some() {
            trace!(listener = self.id, "interaction listener released");
        }
        drop(removed);
    }
}

#[cfg(test)]
#[path = "tests/interaction_tests.rs"]
mod tests;
