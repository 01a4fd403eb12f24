//! Observable value container.
//!
//! # Design
//! The value lives in a sycamore `RcSignal`, which needs no reactive scope
//! and is `Rc` based like the rest of the store. Sycamore only notifies
//! effects created inside a scope, so plain callbacks are kept in a small
//! subscriber list next to it.
//!
//! A `Signal` is a shared handle: clones point at the same value and the same
//! subscriber list. `set`/`update` notify every subscriber registered at the
//! time of the write, in subscription order. The callbacks are cloned out of
//! the list before any of them runs, so a callback may read or write the
//! signal and may subscribe or unsubscribe (itself included).

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use sycamore_reactive::{create_rc_signal, RcSignal};

/// Handle returned by `Signal::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A reactive container exposing its current value and change notifications.
pub struct Signal<T: 'static> {
    value: RcSignal<T>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Subscriber<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: Rc::clone(&self.subscribers),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value.get_untracked())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: create_rc_signal(value),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        (*self.value.get_untracked()).clone()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.value.get_untracked())
    }

    pub fn set(&self, value: T) {
        self.value.set(value);
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Register `f` to run after every change. It is not called with the
    /// current value.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    /// Returns false if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }

    fn notify(&self) {
        let value = self.value.get_untracked();
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&*value);
        }
    }
}
