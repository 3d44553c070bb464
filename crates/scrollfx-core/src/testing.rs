//! Hand-driven host for unit tests: events fire only when the test says so.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{DefaultKey, SlotMap};

use crate::{
    ElementGeometry, Host, IntersectionCallback, IntersectionEntry, IntersectionOptions,
    ListenerOptions, Rect, ScrollListener, Subscription, Viewport,
};

#[derive(Default)]
struct FakeState {
    viewport: Viewport,
    listeners: SlotMap<DefaultKey, (ListenerOptions, ScrollListener)>,
    watchers: SlotMap<DefaultKey, (IntersectionOptions, IntersectionCallback)>,
    watchers_installed: usize,
    last_options: Option<IntersectionOptions>,
    last_listener: Option<ListenerOptions>,
}

pub(crate) struct FakeHost {
    state: Rc<RefCell<FakeState>>,
}

impl FakeHost {
    pub(crate) fn new(height: f32) -> Rc<Self> {
        let state = FakeState {
            viewport: Viewport {
                scroll_y: 0.0,
                width: 1000.0,
                height,
            },
            ..Default::default()
        };
        Rc::new(Self {
            state: Rc::new(RefCell::new(state)),
        })
    }

    pub(crate) fn set_scroll_y(&self, y: f32) {
        self.state.borrow_mut().viewport.scroll_y = y;
    }

    pub(crate) fn fire_scroll(&self) {
        let listeners: Vec<ScrollListener> = self
            .state
            .borrow()
            .listeners
            .values()
            .map(|(_, l)| l.clone())
            .collect();
        for l in listeners {
            l();
        }
    }

    pub(crate) fn scroll_to(&self, y: f32) {
        self.set_scroll_y(y);
        self.fire_scroll();
    }

    pub(crate) fn deliver_intersection(&self, is_intersecting: bool) {
        let callbacks: Vec<IntersectionCallback> = self
            .state
            .borrow()
            .watchers
            .values()
            .map(|(_, cb)| cb.clone())
            .collect();
        let entry = IntersectionEntry {
            is_intersecting,
            intersection_ratio: if is_intersecting { 1.0 } else { 0.0 },
            bounding_rect: Rect::default(),
            root_bounds: Rect::default(),
        };
        for cb in callbacks {
            cb(&entry);
        }
    }

    pub(crate) fn scroll_listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub(crate) fn watcher_count(&self) -> usize {
        self.state.borrow().watchers.len()
    }

    pub(crate) fn watchers_installed(&self) -> usize {
        self.state.borrow().watchers_installed
    }

    pub(crate) fn last_watcher_options(&self) -> Option<IntersectionOptions> {
        self.state.borrow().last_options
    }

    pub(crate) fn last_listener_was_passive(&self) -> bool {
        self.state
            .borrow()
            .last_listener
            .is_some_and(|o| o.contains(ListenerOptions::PASSIVE))
    }
}

impl Host for FakeHost {
    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn add_scroll_listener(
        &self,
        options: ListenerOptions,
        listener: ScrollListener,
    ) -> Subscription {
        let mut state = self.state.borrow_mut();
        state.last_listener = Some(options);
        let key = state.listeners.insert((options, listener));
        let weak: Weak<RefCell<FakeState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.remove(key);
            }
        })
    }

    fn observe_intersection(
        &self,
        _target: Rc<dyn ElementGeometry>,
        options: IntersectionOptions,
        callback: IntersectionCallback,
    ) -> Subscription {
        let mut state = self.state.borrow_mut();
        state.watchers_installed += 1;
        state.last_options = Some(options);
        let key = state.watchers.insert((options, callback));
        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().watchers.remove(key);
            }
        })
    }
}
