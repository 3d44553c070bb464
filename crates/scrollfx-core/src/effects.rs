use std::cell::RefCell;
use std::rc::Rc;

/// One-shot cleanup shared between clones.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl std::fmt::Debug for Dispose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispose")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// A live listener registration. Released when dropped or cancelled; a host
/// hands one out for every scroll listener and intersection watcher.
#[must_use = "dropping a Subscription releases it immediately"]
#[derive(Debug)]
pub struct Subscription {
    release: Dispose,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Dispose::new(release),
        }
    }

    pub fn cancel(self) {
        self.release.run();
    }

    pub fn is_released(&self) -> bool {
        self.release.is_disposed()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release.run();
    }
}
