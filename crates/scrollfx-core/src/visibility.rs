//! Visibility-and-progress observer.
//!
//! `ScrollAnimation` watches one element and keeps two signals current:
//! whether the element meets its intersection threshold, and how far it has
//! travelled through the viewport. While mounted it owns exactly one
//! intersection watcher and one passive scroll listener; both are released
//! together by `unmount`, `unbind`, a config change, scope disposal or drop.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    ElementBinding, ElementGeometry, Host, IntersectionOptions, ListenerOptions, MarginLength,
    ObserverError, Rect, RootMargin, Signal, Subscription, Threshold, current_scope, signal,
};

/// How far `rect` has travelled through a viewport of `viewport_height`,
/// in `[0, 1]`.
///
/// With `top` and `bottom` measured from the viewport's top edge:
///
/// ```text
/// visible_bottom = min(vh, vh - bottom + height)
/// visible_height = max(0, visible_bottom - max(0, vh - top - height))
/// progress       = clamp(visible_height / vh, 0, 1)
/// ```
///
/// Elements taller than the viewport inherit the formula's quirks as is.
pub fn scroll_progress(rect: Rect, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let vh = viewport_height;
    let element_height = rect.h;

    let visible_bottom = vh.min(vh - rect.bottom() + element_height);
    let visible_height = (visible_bottom - (vh - rect.top() - element_height).max(0.0)).max(0.0);

    let progress = visible_height / vh;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityConfig {
    pub threshold: Threshold,
    pub root_margin: RootMargin,
}

impl Default for VisibilityConfig {
    /// Threshold `0.1`, root margin `0px 0px -10% 0px`.
    fn default() -> Self {
        Self {
            threshold: Threshold::new(0.1).unwrap_or_default(),
            root_margin: RootMargin {
                bottom: MarginLength::Percent(-10.0),
                ..RootMargin::default()
            },
        }
    }
}

impl VisibilityConfig {
    pub fn new(threshold: f32, root_margin: &str) -> Result<Self, ObserverError> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            root_margin: root_margin.parse()?,
        })
    }

    /// Default root margin with a custom threshold.
    pub fn with_threshold(threshold: f32) -> Result<Self, ObserverError> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            ..Self::default()
        })
    }

    pub fn intersection_options(&self) -> IntersectionOptions {
        IntersectionOptions {
            threshold: self.threshold,
            root_margin: self.root_margin,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibilityState {
    pub is_visible: bool,
    pub scroll_progress: f32,
}

struct Installed {
    _intersection: Subscription,
    _scroll: Subscription,
}

// `Installing` covers the initial callbacks fired while registering; an
// unmount from one of them resets the slot to `Idle`, and `mount` then drops
// what it registered instead of storing it.
enum Registration {
    Idle,
    Installing,
    Active(Installed),
}

type InstalledSlot = Rc<RefCell<Registration>>;

pub struct ScrollAnimation {
    host: Rc<dyn Host>,
    config: RefCell<VisibilityConfig>,
    binding: ElementBinding,
    is_visible: Signal<bool>,
    scroll_progress: Signal<f32>,
    installed: InstalledSlot,
}

impl ScrollAnimation {
    /// Creates an unmounted observer. When a scope is current, disposing it
    /// tears the observer down.
    pub fn new(host: Rc<dyn Host>, config: VisibilityConfig) -> Self {
        let installed: InstalledSlot = Rc::new(RefCell::new(Registration::Idle));
        if let Some(scope) = current_scope() {
            let installed = installed.clone();
            scope.on_dispose(move || release(&installed));
        }
        Self {
            host,
            config: RefCell::new(config),
            binding: ElementBinding::new(),
            is_visible: signal(false),
            scroll_progress: signal(0.0),
            installed,
        }
    }

    pub fn binding(&self) -> &ElementBinding {
        &self.binding
    }

    pub fn config(&self) -> VisibilityConfig {
        *self.config.borrow()
    }

    pub fn is_visible(&self) -> Signal<bool> {
        self.is_visible.clone()
    }

    pub fn scroll_progress(&self) -> Signal<f32> {
        self.scroll_progress.clone()
    }

    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            is_visible: self.is_visible.get(),
            scroll_progress: self.scroll_progress.get(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(*self.installed.borrow(), Registration::Active(_))
    }

    fn installing(&self) -> bool {
        matches!(*self.installed.borrow(), Registration::Installing)
    }

    /// Binds `element` and starts observing it.
    pub fn bind(&self, element: Rc<dyn ElementGeometry>) {
        self.unmount();
        self.binding.bind(element);
        self.mount();
    }

    /// Stops observing and releases the element.
    pub fn unbind(&self) {
        self.unmount();
        self.binding.unbind();
    }

    /// Starts observing the bound element. Without a bound element this does
    /// nothing and no state is reported.
    pub fn mount(&self) {
        let Some(element) = self.binding.get() else {
            log::trace!("scroll animation mounted without an element; skipping");
            return;
        };
        // at most one watcher/listener pair per observer
        self.unmount();

        let config = self.config();
        log::debug!(
            "observing element (threshold {}, root margin {})",
            config.threshold.get(),
            config.root_margin
        );
        *self.installed.borrow_mut() = Registration::Installing;

        let intersection = {
            let is_visible = self.is_visible.clone();
            self.host.observe_intersection(
                element,
                config.intersection_options(),
                Rc::new(move |entry| {
                    is_visible.set_if_changed(entry.is_intersecting);
                }),
            )
        };
        if !self.installing() {
            log::debug!("observer unmounted by its initial intersection entry");
            return;
        }

        let on_scroll: Rc<dyn Fn()> = {
            let host = Rc::downgrade(&self.host);
            let binding = self.binding.clone();
            let progress = self.scroll_progress.clone();
            Rc::new(move || {
                let Some(host) = host.upgrade() else {
                    return;
                };
                let Some(rect) = binding.bounding_rect() else {
                    return;
                };
                progress.set_if_changed(scroll_progress(rect, host.viewport().height));
            })
        };
        let scroll = self
            .host
            .add_scroll_listener(ListenerOptions::PASSIVE, on_scroll.clone());

        // establish a value before the first scroll
        on_scroll();
        if !self.installing() {
            log::debug!("observer unmounted by its initial progress update");
            return;
        }

        *self.installed.borrow_mut() = Registration::Active(Installed {
            _intersection: intersection,
            _scroll: scroll,
        });
    }

    /// Releases the watcher and listener; state keeps its last value.
    pub fn unmount(&self) {
        if self.is_active() {
            log::debug!("releasing scroll animation listeners");
        }
        release(&self.installed);
    }

    /// Replaces the configuration. A mounted observer is torn down fully
    /// before the new watcher is installed.
    pub fn set_config(&self, config: VisibilityConfig) {
        if *self.config.borrow() == config {
            return;
        }
        *self.config.borrow_mut() = config;
        if self.is_active() || self.installing() {
            self.unmount();
            self.mount();
        }
    }
}

impl Drop for ScrollAnimation {
    fn drop(&mut self) {
        release(&self.installed);
    }
}

fn release(slot: &InstalledSlot) {
    let previous = std::mem::replace(&mut *slot.borrow_mut(), Registration::Idle);
    drop(previous);
}
