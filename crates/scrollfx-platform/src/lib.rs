//! Headless platform for Scrollfx: a host that scrolls on command, taffy
//! stacking of page sections and a runner that records observer state.

pub mod error;
pub mod headless;
pub mod layout;
pub mod runner;

pub use error::PlatformError;
pub use headless::{HeadlessElement, HeadlessHost};
pub use layout::{document_height, stack_sections};
pub use runner::{
    FrameSnapshot, HeadlessConfig, HeadlessRunner, MAX_SWEEP_STOPS, ParallaxSnapshot,
    SectionSnapshot,
};
