use scrollfx_core::animation::{AnimatedValue, AnimationSpec};

use crate::Modifier;
use crate::style::px;

/// Native counterpart of the `opacity-0 translate-y-10` → `animate-fade-up`
/// class swap: tweens opacity and vertical offset whenever visibility flips.
pub struct RevealAnimator {
    opacity: AnimatedValue<f32>,
    offset_y: AnimatedValue<f32>,
    shown: bool,
}

impl RevealAnimator {
    /// `translate-y-10`
    pub const RESTING_OFFSET: f32 = 40.0;

    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            opacity: AnimatedValue::new(0.0, spec),
            offset_y: AnimatedValue::new(Self::RESTING_OFFSET, spec),
            shown: false,
        }
    }

    /// Feeds the latest visibility and advances the tween. Returns true while
    /// a frame is still needed.
    pub fn sync(&mut self, visible: bool) -> bool {
        if visible != self.shown {
            self.shown = visible;
            let (alpha, offset) = if visible {
                (1.0, 0.0)
            } else {
                (0.0, Self::RESTING_OFFSET)
            };
            self.opacity.set_target(alpha);
            self.offset_y.set_target(offset);
        }
        let a = self.opacity.update();
        let b = self.offset_y.update();
        a || b
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn opacity(&self) -> f32 {
        *self.opacity.get()
    }

    pub fn offset_y(&self) -> f32 {
        *self.offset_y.get()
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.offset_y.is_animating()
    }

    /// Current values as inline style, for renderers without CSS animations.
    pub fn apply(&self, modifier: Modifier) -> Modifier {
        modifier
            .opacity(self.opacity())
            .translate_y(px(self.offset_y()))
    }
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new(AnimationSpec::reveal())
    }
}
