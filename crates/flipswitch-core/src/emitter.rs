//! A minimal subscriber list for widget output events.

use std::fmt;

type ListenerFn<T> = Box<dyn FnMut(&T)>;

/// An ordered list of listeners notified on each emission.
///
/// Execution is single-threaded and synchronous; emission completes before
/// control returns to the caller.
pub struct EventEmitter<T> {
    listeners: Vec<ListenerFn<T>>,
}

impl<T> EventEmitter<T> {
    /// Create an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append a listener. Listeners are invoked in subscription order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Invoke every listener with `value`.
    pub fn emit(&mut self, value: &T) {
        for listener in &mut self.listeners {
            listener(value);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_with_no_listeners() {
        let mut emitter: EventEmitter<bool> = EventEmitter::new();
        emitter.emit(&true);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_emit_reaches_every_listener_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::new();

        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            emitter.subscribe(move |value: &bool| {
                log.borrow_mut().push((tag, *value));
            });
        }

        emitter.emit(&true);
        emitter.emit(&false);
        assert_eq!(
            *log.borrow(),
            vec![
                ("first", true),
                ("second", true),
                ("first", false),
                ("second", false)
            ]
        );
    }

    #[test]
    fn test_debug_shows_listener_count() {
        let mut emitter: EventEmitter<u32> = EventEmitter::default();
        emitter.subscribe(|_| {});
        assert_eq!(
            format!("{emitter:?}"),
            "EventEmitter { listeners: 1 }"
        );
    }
}
