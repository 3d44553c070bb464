use std::cell::Cell;
use std::rc::Rc;

use scrollfx_core::{ElementGeometry, Host, ObserverError, Scope, Signal};

use crate::*;

/// Hero, dark and transition sections stacked in that order.
pub struct LandingPage {
    scope: Scope,
    hero: HeroSection,
    dark: DarkSection,
    transition: TransitionSection,
    dirty: Rc<Cell<bool>>,
}

impl LandingPage {
    pub fn new(host: Rc<dyn Host>) -> Result<Self, ObserverError> {
        let scope = Scope::named("landing page");
        let (hero, dark, transition) = scope.run(|| -> Result<_, ObserverError> {
            Ok((
                HeroSection::new(host.clone())?,
                DarkSection::new(host.clone())?,
                TransitionSection::new(host)?,
            ))
        })?;
        let page = Self {
            scope,
            hero,
            dark,
            transition,
            dirty: Rc::new(Cell::new(true)),
        };

        for section in page.sections() {
            page.mark_dirty_on(&section.observer().is_visible());
            page.mark_dirty_on(&section.observer().scroll_progress());
        }
        page.mark_dirty_on(&page.dark.near_layer().offset());
        page.mark_dirty_on(&page.dark.far_layer().offset());
        Ok(page)
    }

    fn mark_dirty_on<T: Clone + 'static>(&self, signal: &Signal<T>) {
        let dirty = self.dirty.clone();
        let id = signal.subscribe(move |_| dirty.set(true));
        let signal = signal.clone();
        self.scope.on_dispose(move || {
            signal.unsubscribe(id);
        });
    }

    pub fn hero(&self) -> &HeroSection {
        &self.hero
    }

    pub fn dark(&self) -> &DarkSection {
        &self.dark
    }

    pub fn transition(&self) -> &TransitionSection {
        &self.transition
    }

    pub fn sections(&self) -> [&dyn PageSection; 3] {
        [&self.hero, &self.dark, &self.transition]
    }

    /// Binds each section to its rendered element, in page order.
    pub fn mount(&self, elements: [Rc<dyn ElementGeometry>; 3]) {
        for (section, element) in self.sections().into_iter().zip(elements) {
            section.mount(element);
        }
    }

    pub fn unmount(&self) {
        for section in self.sections() {
            section.unmount();
        }
    }

    /// Releases every observer registration and the page's own
    /// subscriptions. The page is not meant to be mounted again afterwards.
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    /// True when observer state changed since the last `render`.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn render(&self) -> View {
        self.dirty.set(false);
        Box(Modifier::new().class("min-h-screen")).child(
            self.sections()
                .iter()
                .map(|s| s.render())
                .collect::<Vec<_>>(),
        )
    }

    /// Advances every reveal tween; true while any is still running.
    pub fn tick(&self) -> bool {
        self.sections()
            .iter()
            .fold(false, |animating, s| s.tick() || animating)
    }
}
