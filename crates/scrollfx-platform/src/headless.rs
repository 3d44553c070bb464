//! A host with no window behind it. Scrolling and resizing happen when the
//! caller says so, and every event is dispatched synchronously before the
//! call returns.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use scrollfx_core::prelude::*;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    struct ListenerKey;
    struct WatcherKey;
}

struct Watcher {
    target: Rc<dyn ElementGeometry>,
    tracker: IntersectionTracker,
    callback: IntersectionCallback,
}

struct HostInner {
    viewport: Cell<Viewport>,
    listeners: RefCell<SlotMap<ListenerKey, ScrollListener>>,
    watchers: RefCell<SlotMap<WatcherKey, Watcher>>,
}

impl HostInner {
    fn dispatch_scroll(&self) {
        let keys: Vec<ListenerKey> = self.listeners.borrow().keys().collect();
        log::trace!("dispatching scroll to {} listeners", keys.len());
        for key in keys {
            // a listener released by an earlier one is skipped
            let Some(listener) = self.listeners.borrow().get(key).cloned() else {
                continue;
            };
            listener();
        }
    }

    fn evaluate_watchers(&self) {
        let keys: Vec<WatcherKey> = self.watchers.borrow().keys().collect();
        for key in keys {
            self.evaluate_watcher(key);
        }
    }

    fn evaluate_watcher(&self, key: WatcherKey) {
        let size = self.viewport.get().size();
        let fired = {
            let mut watchers = self.watchers.borrow_mut();
            let Some(w) = watchers.get_mut(key) else {
                return;
            };
            let rect = w.target.bounding_rect();
            w.tracker
                .observe(rect, size)
                .map(|entry| (w.callback.clone(), entry))
        };
        if let Some((callback, entry)) = fired {
            log::trace!(
                "intersection: intersecting={} ratio={:.3}",
                entry.is_intersecting,
                entry.intersection_ratio
            );
            callback(&entry);
        }
    }
}

/// Headless implementation of [`Host`]. Clones share the same viewport and
/// registrations.
#[derive(Clone)]
pub struct HeadlessHost {
    inner: Rc<HostInner>,
}

impl HeadlessHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            inner: Rc::new(HostInner {
                viewport: Cell::new(Viewport {
                    scroll_y: 0.0,
                    width: viewport.width,
                    height: viewport.height,
                }),
                listeners: RefCell::new(SlotMap::with_key()),
                watchers: RefCell::new(SlotMap::with_key()),
            }),
        }
    }

    /// Moves the page, then notifies scroll listeners followed by
    /// intersection watchers. Negative positions clamp to the top.
    pub fn scroll_to(&self, y: f32) {
        if !y.is_finite() {
            log::warn!("ignoring non-finite scroll position {y}");
            return;
        }
        let y = y.max(0.0);
        let mut vp = self.inner.viewport.get();
        if vp.scroll_y == y {
            return;
        }
        vp.scroll_y = y;
        self.inner.viewport.set(vp);

        self.inner.dispatch_scroll();
        self.inner.evaluate_watchers();
    }

    pub fn scroll_by(&self, dy: f32) {
        self.scroll_to(self.inner.viewport.get().scroll_y + dy);
    }

    /// Changes the viewport size and re-evaluates every watcher. Scroll
    /// listeners are not notified.
    pub fn resize(&self, width: f32, height: f32) {
        let mut vp = self.inner.viewport.get();
        vp.width = width.max(0.0);
        vp.height = height.max(0.0);
        self.inner.viewport.set(vp);
        log::debug!("viewport resized to {}x{}", vp.width, vp.height);
        self.inner.evaluate_watchers();
    }

    /// An element at `document_rect`, in page coordinates.
    pub fn create_element(&self, document_rect: Rect) -> Rc<HeadlessElement> {
        Rc::new(HeadlessElement {
            host: Rc::downgrade(&self.inner),
            document_rect: Cell::new(document_rect),
        })
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.borrow().len()
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.inner.viewport.get()
    }

    fn add_scroll_listener(
        &self,
        options: ListenerOptions,
        listener: ScrollListener,
    ) -> Subscription {
        if !options.contains(ListenerOptions::PASSIVE) {
            log::trace!("headless scroll is never cancelable; treating listener as passive");
        }
        let key = self.inner.listeners.borrow_mut().insert(listener);
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().remove(key);
            }
        })
    }

    fn observe_intersection(
        &self,
        target: Rc<dyn ElementGeometry>,
        options: IntersectionOptions,
        callback: IntersectionCallback,
    ) -> Subscription {
        let key = self.inner.watchers.borrow_mut().insert(Watcher {
            target,
            tracker: IntersectionTracker::new(options),
            callback,
        });
        // initial entry
        self.inner.evaluate_watcher(key);

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.watchers.borrow_mut().remove(key);
            }
        })
    }
}

/// Element positioned in page coordinates. Its bounding rect follows the
/// host's scroll position.
pub struct HeadlessElement {
    host: Weak<HostInner>,
    document_rect: Cell<Rect>,
}

impl HeadlessElement {
    pub fn document_rect(&self) -> Rect {
        self.document_rect.get()
    }

    /// Moves the element without notifying anyone; watchers pick the change
    /// up on the next scroll or resize.
    pub fn set_document_rect(&self, rect: Rect) {
        self.document_rect.set(rect);
    }
}

impl ElementGeometry for HeadlessElement {
    fn bounding_rect(&self) -> Rect {
        let scroll_y = self
            .host
            .upgrade()
            .map(|h| h.viewport.get().scroll_y)
            .unwrap_or(0.0);
        self.document_rect.get().translate(0.0, -scroll_y)
    }
}
