use std::cell::RefCell;
use std::rc::Rc;

use crate::Rect;

/// A rendered element the host can measure.
pub trait ElementGeometry {
    /// Border box relative to the viewport's top-left corner; `top` goes
    /// negative once the element is scrolled past the top edge.
    fn bounding_rect(&self) -> Rect;
}

/// Slot a view attaches to exactly one rendered element. Cloning shares the
/// slot, so an observer and its view see the same binding.
#[derive(Clone, Default)]
pub struct ElementBinding {
    slot: Rc<RefCell<Option<Rc<dyn ElementGeometry>>>>,
}

impl ElementBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously bound element.
    pub fn bind(&self, element: Rc<dyn ElementGeometry>) {
        *self.slot.borrow_mut() = Some(element);
    }

    pub fn unbind(&self) -> Option<Rc<dyn ElementGeometry>> {
        self.slot.borrow_mut().take()
    }

    pub fn get(&self) -> Option<Rc<dyn ElementGeometry>> {
        self.slot.borrow().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub fn bounding_rect(&self) -> Option<Rect> {
        self.get().map(|el| el.bounding_rect())
    }
}

impl std::fmt::Debug for ElementBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementBinding")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Fixed-geometry element; handy for hosts that know layout up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticElement(pub Rect);

impl ElementGeometry for StaticElement {
    fn bounding_rect(&self) -> Rect {
        self.0
    }
}
