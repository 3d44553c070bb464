//! The platform services observers build on: a read-only viewport sample, a
//! global scroll event source and a viewport-intersection primitive.

use std::rc::Rc;

use bitflags::bitflags;

use crate::{ElementGeometry, IntersectionEntry, IntersectionOptions, Size, Subscription};

/// Global scroll position and viewport size at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerOptions: u8 {
        /// The listener never blocks the scroll it observes.
        const PASSIVE = 0b0000_0001;
    }
}

pub type ScrollListener = Rc<dyn Fn()>;
pub type IntersectionCallback = Rc<dyn Fn(&IntersectionEntry)>;

/// Implemented by whatever hosts the page. Reads never mutate, so any number
/// of observers may sample the same host within one turn.
pub trait Host {
    fn viewport(&self) -> Viewport;

    /// Invoked after every change of the global scroll position.
    fn add_scroll_listener(&self, options: ListenerOptions, listener: ScrollListener)
    -> Subscription;

    /// Delivers an entry once after registration and then on every threshold
    /// crossing of `target` against the margin-adjusted viewport.
    fn observe_intersection(
        &self,
        target: Rc<dyn ElementGeometry>,
        options: IntersectionOptions,
        callback: IntersectionCallback,
    ) -> Subscription;
}
