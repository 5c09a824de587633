//! Scoped global listeners for one in-progress drag or resize.

use leptos::leptos_dom::helpers::WindowListenerHandle;

/// A global listener registration that can be detached exactly once.
pub trait DetachListener {
    fn detach(self);
}

impl DetachListener for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

/// Owns the window-level listeners of one gesture and detaches all of them when dropped.
///
/// Frames keep the scope in a slot that is cleared on pointer-up, pointer-cancel, window blur
/// and component cleanup, so every exit path releases the listeners.
pub struct GestureScope<H: DetachListener> {
    handles: Vec<H>,
}

impl<H: DetachListener> GestureScope<H> {
    pub fn new(handles: Vec<H>) -> Self {
        Self { handles }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<H: DetachListener> Drop for GestureScope<H> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    struct FakeListener {
        name: &'static str,
        detached: Rc<RefCell<Vec<&'static str>>>,
    }

    impl DetachListener for FakeListener {
        fn detach(self) {
            self.detached.borrow_mut().push(self.name);
        }
    }

    fn scope(log: &Rc<RefCell<Vec<&'static str>>>) -> GestureScope<FakeListener> {
        GestureScope::new(
            ["pointermove", "pointerup", "pointercancel", "blur"]
                .into_iter()
                .map(|name| FakeListener {
                    name,
                    detached: log.clone(),
                })
                .collect(),
        )
    }

    #[test]
    fn dropping_scope_detaches_every_listener_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let gesture = scope(&log);
        assert_eq!(gesture.len(), 4);
        assert!(log.borrow().is_empty());

        drop(gesture);

        assert_eq!(
            log.borrow().as_slice(),
            ["pointermove", "pointerup", "pointercancel", "blur"]
        );
    }

    #[test]
    fn clearing_a_slot_releases_the_scope() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Some(scope(&log));

        slot.take();
        slot.take();

        assert_eq!(log.borrow().len(), 4);
    }
}
