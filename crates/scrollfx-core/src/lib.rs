//! # Scroll observers
//!
//! Scrollfx turns global scroll and viewport changes into a little bit of
//! derived state that presentational views can render from. There are two
//! observers:
//!
//! - `ScrollAnimation`: is an element on screen, and how far has it
//!   travelled through the viewport.
//! - `ParallaxEffect`: a displacement proportional to the page scroll.
//!
//! Both read platform services through an injected `Host` and publish their
//! results through `Signal`s:
//!
//! ```rust,ignore
//! use scrollfx_core::*;
//!
//! let hero = ScrollAnimation::new(host.clone(), VisibilityConfig::with_threshold(0.3)?);
//! hero.bind(section_element);
//!
//! hero.is_visible().subscribe(|v| log::info!("hero visible: {v}"));
//! let progress = hero.scroll_progress().get();
//! ```
//!
//! ## Lifecycle
//!
//! An observer holds at most one set of host registrations. Each registration
//! is a `Subscription` guard, so unmounting, changing the configuration,
//! dropping the observer or disposing the `Scope` it was created in always
//! releases every listener:
//!
//! ```rust,ignore
//! let scope = Scope::new();
//! let drift = scope.run(|| ParallaxEffect::new(host.clone(), ParallaxConfig { speed: -0.2 }));
//! drift.start();
//! scope.dispose(); // listener gone
//! ```
//!
//! Everything is single-threaded; handlers run to completion on the thread
//! that dispatches the host's events.

pub mod animation;
pub mod color;
pub mod css;
pub mod effects;
pub mod element;
pub mod error;
pub mod geometry;
pub mod host;
pub mod intersection;
pub mod parallax;
pub mod prelude;
pub mod scope;
pub mod signal;
pub mod visibility;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

pub use color::*;
pub use css::*;
pub use effects::*;
pub use element::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use intersection::*;
pub use parallax::*;
pub use scope::*;
pub use signal::*;
pub use visibility::*;
