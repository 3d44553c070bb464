//! Viewport intersection math: root margins, thresholds and the per-watcher
//! state machine a host drives to deliver intersection callbacks.
//!
//! A watcher is either `Hidden` or `Visible`. It flips exactly when the
//! fraction of the target inside the (margin-adjusted) viewport crosses the
//! threshold, and a callback is only delivered on a flip, plus once when the
//! watcher is first evaluated.

use std::fmt;
use std::str::FromStr;

use crate::{Insets, ObserverError, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f32),
    Percent(f32),
}

impl MarginLength {
    pub fn resolve(self, basis: f32) -> f32 {
        match self {
            MarginLength::Px(v) => v,
            MarginLength::Percent(p) => basis * p / 100.0,
        }
    }

    fn parse(token: &str, whole: &str) -> Result<Self, ObserverError> {
        let (number, make): (&str, fn(f32) -> MarginLength) =
            if let Some(n) = token.strip_suffix("px") {
                (n, MarginLength::Px)
            } else if let Some(n) = token.strip_suffix('%') {
                (n, MarginLength::Percent)
            } else {
                (token, MarginLength::Px)
            };

        let value: f32 = number.parse().map_err(|_| {
            ObserverError::root_margin(whole, format!("{token:?} is not a length"))
        })?;
        if !value.is_finite() {
            return Err(ObserverError::root_margin(
                whole,
                format!("{token:?} is not finite"),
            ));
        }
        // Only zero may omit its unit.
        if number.len() == token.len() && value != 0.0 {
            return Err(ObserverError::root_margin(
                whole,
                format!("{token:?} must be in px or %"),
            ));
        }
        Ok(make(value))
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{v}px"),
            MarginLength::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// CSS-style four-sided margin applied to the viewport before intersecting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin::uniform(MarginLength::Px(0.0))
    }
}

impl RootMargin {
    pub fn uniform(len: MarginLength) -> Self {
        Self {
            top: len,
            right: len,
            bottom: len,
            left: len,
        }
    }

    /// Percentages on the vertical edges resolve against the viewport height,
    /// horizontal ones against its width.
    pub fn resolve(&self, viewport: Size) -> Insets {
        Insets {
            top: self.top.resolve(viewport.height),
            right: self.right.resolve(viewport.width),
            bottom: self.bottom.resolve(viewport.height),
            left: self.left.resolve(viewport.width),
        }
    }
}

impl FromStr for RootMargin {
    type Err = ObserverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|t| MarginLength::parse(t, s))
            .collect::<Result<Vec<_>, _>>()?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            [] => return Err(ObserverError::root_margin(s, "no values")),
            _ => return Err(ObserverError::root_margin(s, "more than four values")),
        };
        Ok(RootMargin {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    pub const ZERO: Threshold = Threshold(0.0);

    pub fn new(value: f32) -> Result<Self, ObserverError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Threshold(value))
        } else {
            Err(ObserverError::ThresholdOutOfRange(value))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionOptions {
    pub threshold: Threshold,
    pub root_margin: RootMargin,
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::ZERO
    }
}

impl IntersectionOptions {
    pub fn root_bounds(&self, viewport: Size) -> Rect {
        Rect::from_size(viewport).inset_by(self.root_margin.resolve(viewport))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f32,
    pub bounding_rect: Rect,
    pub root_bounds: Rect,
}

/// Fraction of `target`'s area inside `root`.
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f32 {
    let Some(overlap) = target.intersection(root) else {
        return 0.0;
    };
    let area = target.area();
    if area <= 0.0 {
        // a zero-area target that touches the root counts as fully inside
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Visible,
}

/// Tracks one watched element against one set of options.
#[derive(Clone, Debug)]
pub struct IntersectionTracker {
    options: IntersectionOptions,
    phase: Option<Phase>,
}

impl IntersectionTracker {
    pub fn new(options: IntersectionOptions) -> Self {
        Self {
            options,
            phase: None,
        }
    }

    pub fn options(&self) -> &IntersectionOptions {
        &self.options
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Evaluates the target's current box. Returns an entry on the first call
    /// and whenever the phase flips; `None` otherwise.
    pub fn observe(&mut self, target: Rect, viewport: Size) -> Option<IntersectionEntry> {
        let root = self.options.root_bounds(viewport);
        let ratio = intersection_ratio(&target, &root);
        let threshold = self.options.threshold.get();
        let meets = if threshold == 0.0 {
            target.intersection(&root).is_some()
        } else {
            ratio >= threshold
        };
        let next = if meets { Phase::Visible } else { Phase::Hidden };

        if self.phase == Some(next) {
            return None;
        }
        self.phase = Some(next);
        Some(IntersectionEntry {
            is_intersecting: meets,
            intersection_ratio: ratio,
            bounding_rect: target,
            root_bounds: root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(1000.0, 800.0)
    }

    fn options(threshold: f32, margin: &str) -> IntersectionOptions {
        IntersectionOptions {
            threshold: Threshold::new(threshold).unwrap(),
            root_margin: margin.parse().unwrap(),
        }
    }

    #[test]
    fn parses_css_shorthand() {
        let m: RootMargin = "0px 0px -10% 0px".parse().unwrap();
        assert_eq!(m.bottom, MarginLength::Percent(-10.0));
        assert_eq!(m.top, MarginLength::Px(0.0));

        let m: RootMargin = "5px 10%".parse().unwrap();
        assert_eq!(m.top, MarginLength::Px(5.0));
        assert_eq!(m.bottom, MarginLength::Px(5.0));
        assert_eq!(m.left, MarginLength::Percent(10.0));

        let m: RootMargin = "0".parse().unwrap();
        assert_eq!(m, RootMargin::default());
    }

    #[test]
    fn rejects_bad_margins() {
        assert!("".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
        assert!("10em".parse::<RootMargin>().is_err());
        assert!("12".parse::<RootMargin>().is_err());
        assert!(matches!(
            "abc".parse::<RootMargin>(),
            Err(ObserverError::InvalidRootMargin { .. })
        ));
    }

    #[test]
    fn threshold_is_validated() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(
            Threshold::new(1.5),
            Err(ObserverError::ThresholdOutOfRange(1.5))
        );
        assert!(Threshold::new(f32::NAN).is_err());
    }

    #[test]
    fn negative_bottom_margin_shrinks_root() {
        let root = options(0.1, "0px 0px -10% 0px").root_bounds(viewport());
        assert_eq!(root, Rect::new(0.0, 0.0, 1000.0, 720.0));
    }

    #[test]
    fn ratio_of_partially_visible_target() {
        let root = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let target = Rect::new(0.0, 600.0, 1000.0, 400.0);
        assert!((intersection_ratio(&target, &root) - 0.5).abs() < 1e-6);
        let below = Rect::new(0.0, 900.0, 1000.0, 400.0);
        assert_eq!(intersection_ratio(&below, &root), 0.0);
    }

    #[test]
    fn first_observation_always_reports() {
        let mut t = IntersectionTracker::new(options(0.3, "0px"));
        let entry = t.observe(Rect::new(0.0, 2000.0, 1000.0, 800.0), viewport());
        assert_eq!(entry.map(|e| e.is_intersecting), Some(false));
        assert_eq!(t.phase(), Some(Phase::Hidden));
    }

    #[test]
    fn reports_only_on_threshold_crossings() {
        let mut t = IntersectionTracker::new(options(0.5, "0px"));
        let vp = viewport();
        // 800px tall element; 400px visible is exactly 0.5
        assert!(t.observe(Rect::new(0.0, 800.0, 1000.0, 800.0), vp).is_some());
        assert!(t.observe(Rect::new(0.0, 500.0, 1000.0, 800.0), vp).is_none());

        let up = t.observe(Rect::new(0.0, 400.0, 1000.0, 800.0), vp).unwrap();
        assert!(up.is_intersecting);
        assert!(t.observe(Rect::new(0.0, 100.0, 1000.0, 800.0), vp).is_none());

        let down = t.observe(Rect::new(0.0, 401.0, 1000.0, 800.0), vp).unwrap();
        assert!(!down.is_intersecting);
    }

    #[test]
    fn zero_threshold_counts_touching_edges() {
        let mut t = IntersectionTracker::new(options(0.0, "0px"));
        let entry = t
            .observe(Rect::new(0.0, 800.0, 1000.0, 200.0), viewport())
            .unwrap();
        assert!(entry.is_intersecting);
        assert_eq!(entry.intersection_ratio, 0.0);
    }
}
