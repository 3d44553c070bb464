use std::cell::RefCell;
use std::rc::Rc;

use scrollfx_core::{ElementGeometry, ScrollAnimation, Size, VisibilityState};

use crate::{RevealAnimator, View};

pub mod dark;
pub mod hero;
pub mod transition;

pub use dark::DarkSection;
pub use hero::HeroSection;
pub use transition::TransitionSection;

/// A full-height block of the landing page driven by one visibility observer.
pub trait PageSection {
    fn name(&self) -> &'static str;

    fn observer(&self) -> &ScrollAnimation;

    fn reveal(&self) -> &RefCell<RevealAnimator>;

    /// Pure function of the observer state.
    fn render(&self) -> View;

    /// Height the content needs beyond the viewport-height minimum.
    fn content_height(&self, _viewport: Size) -> f32 {
        0.0
    }

    fn mount(&self, element: Rc<dyn ElementGeometry>) {
        log::debug!("mounting {} section", self.name());
        self.observer().bind(element);
    }

    fn unmount(&self) {
        log::debug!("unmounting {} section", self.name());
        self.observer().unbind();
    }

    fn state(&self) -> VisibilityState {
        self.observer().state()
    }

    /// Advances the reveal tween; true while another frame is needed.
    fn tick(&self) -> bool {
        let visible = self.observer().is_visible().get();
        self.reveal().borrow_mut().sync(visible)
    }
}
