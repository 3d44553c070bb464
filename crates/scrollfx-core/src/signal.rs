use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct SubId;
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable value. Each write overwrites the previous one and is pushed to
/// subscribers; no history is kept.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T: 'static> {
    value: T,
    subs: SlotMap<SubId, Subscriber<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.0.borrow().value).finish()
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0.borrow_mut().subs.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }

    // Subscribers run after the borrow is released so they can read or write.
    fn notify(&self) {
        let (value, subs): (T, Vec<Subscriber<T>>) = {
            let inner = self.0.borrow();
            if inner.subs.is_empty() {
                return;
            }
            (inner.value.clone(), inner.subs.values().cloned().collect())
        };
        for s in subs {
            s(&value);
        }
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    /// Writes and notifies only when the value actually changes.
    pub fn set_if_changed(&self, v: T) -> bool {
        if self.0.borrow().value == v {
            return false;
        }
        self.set(v);
        true
    }
}

pub fn signal<T: Clone + 'static>(t: T) -> Signal<T> {
    Signal::new(t)
}
