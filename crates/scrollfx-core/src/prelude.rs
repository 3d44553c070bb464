pub use crate::animation::{AnimatedValue, AnimationSpec, Easing, Interpolate};
pub use crate::color::{Color, Hsl};
pub use crate::css::css_number;
pub use crate::effects::{Dispose, Subscription};
pub use crate::element::{ElementBinding, ElementGeometry, StaticElement};
pub use crate::error::ObserverError;
pub use crate::geometry::{Insets, Rect, Size};
pub use crate::host::{Host, IntersectionCallback, ListenerOptions, ScrollListener, Viewport};
pub use crate::intersection::{
    IntersectionEntry, IntersectionOptions, IntersectionTracker, RootMargin, Threshold,
};
pub use crate::parallax::{ParallaxConfig, ParallaxEffect};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::visibility::{ScrollAnimation, VisibilityConfig, VisibilityState};
