//! Synchronous observer plumbing shared by every stateful entity.
//!
//! Entities own an [`EventEmitter`] and implement [`Observable`] to expose it.
//! Handlers run in registration order on the caller's thread.

use std::fmt;

/// Handle returned by [`EventEmitter::on`], used to unregister the same handler later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Ordered list of handlers for one event type
pub struct EventEmitter<E> {
    handlers: Vec<(HandlerId, Handler<E>)>,
    next_id: u64,
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a handler; it will see every event fired from now on
    pub fn on(&mut self, handler: impl FnMut(&E) + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Unregister a handler. Returns false if it was not registered.
    pub fn off(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Invoke every handler with the event
    pub fn fire(&mut self, event: &E) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Capability to subscribe to an entity's change notifications
pub trait Observable {
    type Event;

    fn emitter(&mut self) -> &mut EventEmitter<Self::Event>;

    fn on(&mut self, handler: impl FnMut(&Self::Event) + 'static) -> HandlerId
    where
        Self: Sized,
    {
        self.emitter().on(handler)
    }

    fn off(&mut self, id: HandlerId) -> bool {
        self.emitter().off(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fire_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::<u32>::new();

        let first = Rc::clone(&seen);
        emitter.on(move |e| first.borrow_mut().push(("first", *e)));
        let second = Rc::clone(&seen);
        emitter.on(move |e| second.borrow_mut().push(("second", *e)));

        assert_eq!(emitter.len(), 2);
        emitter.fire(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_off_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = EventEmitter::<()>::new();

        let c = Rc::clone(&count);
        let id = emitter.on(move |_| *c.borrow_mut() += 1);
        emitter.fire(&());
        assert!(emitter.off(id));
        emitter.fire(&());

        assert_eq!(*count.borrow(), 1);
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_off_unknown_handler_is_noop() {
        let mut emitter = EventEmitter::<()>::new();
        let id = emitter.on(|_| {});
        assert!(emitter.off(id));
        assert!(!emitter.off(id));
    }
}
