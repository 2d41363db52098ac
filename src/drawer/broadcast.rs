//! In-process publish/subscribe for drawer toggles

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::types::SidebarToggle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(SidebarToggle)>;

#[derive(Default)]
struct Inner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

/// Synchronous broadcast of [`SidebarToggle`] notifications.
///
/// Cheap to clone; clones share one listener list. Delivery iterates over a
/// snapshot, so listeners may subscribe or unsubscribe while being notified.
#[derive(Clone, Default)]
pub struct ToggleBroadcast {
    inner: Rc<Inner>,
}

impl ToggleBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(SidebarToggle) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn notify(&self, is_open: bool) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        let event = SidebarToggle { is_open };
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl PartialEq for ToggleBroadcast {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listener_receives() {
        let bus = ToggleBroadcast::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..3 {
            let seen = seen.clone();
            bus.subscribe(move |e| seen.borrow_mut().push((tag, e.is_open)));
        }
        bus.notify(true);
        assert_eq!(*seen.borrow(), vec![(0, true), (1, true), (2, true)]);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = ToggleBroadcast::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let id = bus.subscribe(move |_| c.set(c.get() + 1));

        bus.notify(false);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.notify(false);
        assert_eq!(count.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_delivery() {
        let bus = ToggleBroadcast::new();
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let handle = bus.clone();
        let own = slot.clone();
        let id = bus.subscribe(move |_| {
            if let Some(id) = own.get() {
                handle.unsubscribe(id);
            }
        });
        slot.set(Some(id));

        bus.notify(true);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_clones_share_listeners() {
        let bus = ToggleBroadcast::new();
        let other = bus.clone();
        other.subscribe(|_| {});
        assert_eq!(bus.listener_count(), 1);
        assert!(bus == other);
    }
}
