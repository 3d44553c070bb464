//! Tweens for renderers that cannot run CSS transitions themselves. Timing
//! follows the CSS timing-function keywords so a native reveal matches the
//! `transition-all duration-1000 ease-out` it stands in for.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

/// A CSS timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; `x1` and `x2` must lie in `[0, 1]`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    fn control_points(self) -> Option<[f32; 4]> {
        match self {
            Easing::Linear => None,
            Easing::Ease => Some([0.25, 0.1, 0.25, 1.0]),
            Easing::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
            Easing::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
            Easing::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
            Easing::CubicBezier(x1, y1, x2, y2) => Some([x1, y1, x2, y2]),
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some([x1, y1, x2, y2]) => {
                let s = solve_bezier_x(x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0), t);
                bezier(y1, y2, s)
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Ease => f.write_str("ease"),
            Easing::EaseIn => f.write_str("ease-in"),
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::CubicBezier(a, b, c, d) => write!(f, "cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

// One coordinate of a cubic bezier from 0 to 1 with inner control values a, b.
fn bezier(a: f32, b: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
}

fn bezier_slope(a: f32, b: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

// Parameter s with bezier(x1, x2, s) == x. Newton first, bisection if it
// stalls on a flat stretch.
fn solve_bezier_x(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return s;
        }
        let d = bezier_slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < 1e-6 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    /// CSS defaults for `transition`: 300ms (Tailwind's duration), `ease`.
    fn default() -> Self {
        Self::tween(Duration::from_millis(300), Easing::Ease)
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// `duration-1000 ease-out`, the section reveal.
    pub fn reveal() -> Self {
        Self::tween(Duration::from_millis(1000), Easing::EaseOut)
    }

    /// Eased progress `elapsed` after the tween was started.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if running >= self.duration {
            return 1.0;
        }
        self.easing
            .apply(running.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

pub trait Interpolate: Clone {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
}

/// Replaces the animation clock for the current thread. Windowed hosts keep
/// the system clock; the headless runner and tests install a `ManualClock`.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = clock);
}

pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

struct Tween<T> {
    from: T,
    started: Instant,
}

/// A value that eases toward its target on the animation clock.
pub struct AnimatedValue<T: Interpolate> {
    value: T,
    target: T,
    spec: AnimationSpec,
    tween: Option<Tween<T>>,
}

impl<T: Interpolate> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            value: initial.clone(),
            target: initial,
            spec,
            tween: None,
        }
    }

    /// Starts a tween from the current value. Retargeting mid-flight starts
    /// over from wherever the value is now.
    pub fn set_target(&mut self, target: T) {
        self.tween = Some(Tween {
            from: self.value.clone(),
            started: now(),
        });
        self.target = target;
    }

    pub fn snap_to(&mut self, value: T) {
        self.value = value.clone();
        self.target = value;
        self.tween = None;
    }

    /// Moves to the clock's current time; true while still animating.
    pub fn update(&mut self) -> bool {
        let Some(tween) = &self.tween else {
            return false;
        };
        let elapsed = now().saturating_duration_since(tween.started);
        if elapsed >= self.spec.total() {
            self.value = self.target.clone();
            self.tween = None;
            return false;
        }
        let p = self.spec.progress_at(elapsed);
        self.value = tween.from.interpolate(&self.target, p);
        true
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
