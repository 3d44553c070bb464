use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Weak<ScopeInner>>> = const { RefCell::new(None) };
}

/// Ownership region for observer registrations. Observers created while a
/// scope is current hand it their teardown; disposing the scope (or dropping
/// its last handle) releases them all.
#[derive(Clone)]
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    name: Cow<'static, str>,
    disposed: Cell<bool>,
    teardown: RefCell<Vec<Box<dyn FnOnce()>>>,
    children: RefCell<Vec<Scope>>,
}

impl ScopeInner {
    fn release(&self) {
        if self.disposed.replace(true) {
            return;
        }
        // children first, then own teardown in reverse registration order
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.inner.release();
        }
        let teardown = std::mem::take(&mut *self.teardown.borrow_mut());
        if !teardown.is_empty() {
            log::debug!("scope '{}': releasing {} registrations", self.name, teardown.len());
        }
        for f in teardown.into_iter().rev() {
            f();
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::named("scope")
    }
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// The name only shows up in logs.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                name: name.into(),
                disposed: Cell::new(false),
                teardown: RefCell::new(Vec::new()),
                children: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Makes this the current scope while `f` runs.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let prev = CURRENT_SCOPE.with(|cur| cur.borrow_mut().replace(Rc::downgrade(&self.inner)));
        let out = f();
        CURRENT_SCOPE.with(|cur| *cur.borrow_mut() = prev);
        out
    }

    /// Registers teardown. On an already disposed scope it runs at once.
    pub fn on_dispose(&self, f: impl FnOnce() + 'static) {
        if self.inner.disposed.get() {
            f();
            return;
        }
        self.inner.teardown.borrow_mut().push(Box::new(f));
    }

    /// A scope disposed together with (and before) this one.
    pub fn child(&self, name: impl Into<Cow<'static, str>>) -> Scope {
        let child = Scope::named(name);
        if self.inner.disposed.get() {
            child.dispose();
        } else {
            self.inner.children.borrow_mut().push(child.clone());
        }
        child
    }

    pub fn pending(&self) -> usize {
        self.inner.teardown.borrow().len()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Releases every registration; later calls do nothing.
    pub fn dispose(&self) {
        self.inner.release();
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.inner.name)
            .field("pending", &self.pending())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// The scope of the innermost enclosing [`Scope::run`], if it is still alive.
pub fn current_scope() -> Option<Scope> {
    CURRENT_SCOPE.with(|cur| {
        cur.borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Scope { inner })
    })
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.release();
    }
}
