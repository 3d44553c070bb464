use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    ElementBinding, Host, ListenerOptions, Rect, Signal, Subscription, css_number,
    current_scope, signal,
};

/// Displacement for a given page scroll. Unbounded; a negative speed moves
/// against the scroll direction.
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    scroll_y * speed
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub speed: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { speed: 0.5 }
    }
}

type ListenerSlot = Rc<RefCell<Option<Subscription>>>;

/// Parallax-offset observer: one passive scroll listener while started.
///
/// The offset starts at `0` and is first computed on the scroll event that
/// follows `start`.
pub struct ParallaxEffect {
    host: Rc<dyn Host>,
    speed: Cell<f32>,
    binding: ElementBinding,
    offset: Signal<f32>,
    listener: ListenerSlot,
}

impl ParallaxEffect {
    pub fn new(host: Rc<dyn Host>, config: ParallaxConfig) -> Self {
        let listener: ListenerSlot = Rc::new(RefCell::new(None));
        if let Some(scope) = current_scope() {
            let listener = listener.clone();
            scope.on_dispose(move || {
                let sub = listener.borrow_mut().take();
                drop(sub);
            });
        }
        Self {
            host,
            speed: Cell::new(config.speed),
            binding: ElementBinding::new(),
            offset: signal(0.0),
            listener,
        }
    }

    /// The element the caller attaches the offset to. It does not affect the
    /// computed offset.
    pub fn binding(&self) -> &ElementBinding {
        &self.binding
    }

    pub fn speed(&self) -> f32 {
        self.speed.get()
    }

    pub fn offset(&self) -> Signal<f32> {
        self.offset.clone()
    }

    pub fn current_offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn is_active(&self) -> bool {
        self.listener.borrow().is_some()
    }

    pub fn start(&self) {
        self.stop();
        let speed = self.speed.get();
        log::debug!("parallax listening (speed {speed})");

        let host = Rc::downgrade(&self.host);
        let offset = self.offset.clone();
        let sub = self.host.add_scroll_listener(
            ListenerOptions::PASSIVE,
            Rc::new(move || {
                if let Some(host) = host.upgrade() {
                    offset.set_if_changed(parallax_offset(host.viewport().scroll_y, speed));
                }
            }),
        );
        *self.listener.borrow_mut() = Some(sub);
    }

    pub fn stop(&self) {
        let sub = self.listener.borrow_mut().take();
        if sub.is_some() {
            log::debug!("parallax listener released");
        }
        drop(sub);
    }

    /// Changing the speed recreates the listener when started.
    pub fn set_speed(&self, speed: f32) {
        if self.speed.get() == speed {
            return;
        }
        self.speed.set(speed);
        if self.is_active() {
            self.start();
        }
    }

    /// Where a layer laid out at `rect` is drawn once displaced.
    pub fn displaced(&self, rect: Rect) -> Rect {
        rect.translate(0.0, self.current_offset())
    }

    /// CSS transform, e.g. `translateY(30px)`.
    pub fn style_transform(&self) -> String {
        format!("translateY({}px)", css_number(self.current_offset()))
    }
}

impl Drop for ParallaxEffect {
    fn drop(&mut self) {
        let sub = self.listener.borrow_mut().take();
        drop(sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;

    fn effect(host: &Rc<FakeHost>, speed: f32) -> ParallaxEffect {
        ParallaxEffect::new(host.clone(), ParallaxConfig { speed })
    }

    #[test]
    fn offset_is_scroll_times_speed() {
        let host = FakeHost::new(800.0);
        let slow = effect(&host, 0.3);
        let reverse = effect(&host, -0.2);
        slow.start();
        reverse.start();

        host.scroll_to(100.0);
        assert!((slow.current_offset() - 30.0).abs() < 1e-4);
        assert!((reverse.current_offset() + 20.0).abs() < 1e-4);

        host.scroll_to(12_000.0);
        assert!((slow.current_offset() - 3600.0).abs() < 1e-2);
        assert_eq!(slow.style_transform(), "translateY(3600px)");
        let layer = Rect::new(0.0, 500.0, 256.0, 256.0);
        assert_eq!(reverse.displaced(layer).y, 500.0 + reverse.current_offset());
    }

    #[test]
    fn offset_waits_for_first_scroll() {
        let host = FakeHost::new(800.0);
        host.set_scroll_y(500.0);
        let p = effect(&host, 0.5);
        p.start();
        assert_eq!(p.current_offset(), 0.0);
        host.fire_scroll();
        assert_eq!(p.current_offset(), 250.0);
    }

    #[test]
    fn stop_releases_listener() {
        let host = FakeHost::new(800.0);
        let p = effect(&host, 0.5);
        p.start();
        p.start();
        assert_eq!(host.scroll_listener_count(), 1);

        p.stop();
        assert_eq!(host.scroll_listener_count(), 0);
        host.scroll_to(100.0);
        assert_eq!(p.current_offset(), 0.0);
    }

    #[test]
    fn speed_change_recreates_listener() {
        let host = FakeHost::new(800.0);
        let p = effect(&host, 0.5);
        p.start();
        p.set_speed(-1.0);
        assert_eq!(host.scroll_listener_count(), 1);
        host.scroll_to(40.0);
        assert_eq!(p.current_offset(), -40.0);
        assert_eq!(p.style_transform(), "translateY(-40px)");
    }
}
