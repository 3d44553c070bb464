use std::rc::Rc;

use scrollfx_core::animation::{ManualClock, set_clock};
use scrollfx_core::{ElementGeometry, Host, Rect, Size};
use scrollfx_ui::{LandingPage, PageSection, render_html};
use serde::Serialize;
use web_time::{Duration, Instant};

use crate::headless::{HeadlessElement, HeadlessHost};
use crate::{PlatformError, layout};

/// Upper bound on the frames a single [`HeadlessRunner::sweep`] produces.
pub const MAX_SWEEP_STOPS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessConfig {
    pub viewport: Size,
    /// Time spent at every stop of a sweep; reveal tweens advance by it.
    pub dwell: Duration,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 800.0),
            dwell: Duration::from_millis(250),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionSnapshot {
    pub name: &'static str,
    pub top: f32,
    pub height: f32,
    pub is_visible: bool,
    pub scroll_progress: f32,
    pub reveal_opacity: f32,
    pub reveal_offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParallaxSnapshot {
    pub near: f32,
    pub far: f32,
}

/// Observer state after one scroll step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub scroll_y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub sections: Vec<SectionSnapshot>,
    pub parallax: ParallaxSnapshot,
    pub transition_progress: f32,
    /// The transition section's blended background as `#rrggbb`.
    pub transition_background: String,
    /// Some reveal tween has not finished yet.
    pub animating: bool,
}

impl FrameSnapshot {
    pub fn section(&self, name: &str) -> Option<&SectionSnapshot> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// Drives a [`LandingPage`] through a [`HeadlessHost`].
pub struct HeadlessRunner {
    host: HeadlessHost,
    page: LandingPage,
    clock: ManualClock,
    dwell: Duration,
    sections: [Rc<HeadlessElement>; 3],
    near_orb: Rc<HeadlessElement>,
    far_orb: Rc<HeadlessElement>,
}

impl HeadlessRunner {
    pub fn new(config: HeadlessConfig) -> Result<Self, PlatformError> {
        let viewport = validate(config.viewport)?;
        let host = HeadlessHost::new(viewport);
        let page = LandingPage::new(Rc::new(host.clone()) as Rc<dyn Host>)?;

        let rects = section_rects(&page, viewport)?;
        let sections = rects.map(|r| host.create_element(r));
        let (near, far) = orb_rects(rects[1]);
        let near_orb = host.create_element(near);
        let far_orb = host.create_element(far);

        page.dark().bind_layers(near_orb.clone(), far_orb.clone());
        page.mount(sections.clone().map(|el| el as Rc<dyn ElementGeometry>));
        log::info!(
            "headless page ready: {}x{}, document height {}",
            viewport.width,
            viewport.height,
            rects[2].bottom()
        );

        let runner = Self {
            host,
            page,
            clock: ManualClock::new(Instant::now()),
            dwell: config.dwell,
            sections,
            near_orb,
            far_orb,
        };
        runner.tick();
        Ok(runner)
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn page(&self) -> &LandingPage {
        &self.page
    }

    pub fn document_height(&self) -> f32 {
        layout::document_height(&self.sections.each_ref().map(|s| s.document_rect()))
    }

    /// Largest scroll position that still fills the viewport.
    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.host.viewport().height).max(0.0)
    }

    /// Scrolls without moving the clock; reveals triggered here start at
    /// the current time.
    pub fn scroll_to(&self, y: f32) -> FrameSnapshot {
        self.host.scroll_to(y);
        self.tick();
        self.frame()
    }

    /// Moves the animation clock forward and advances the reveal tweens.
    pub fn advance(&self, dt: Duration) -> FrameSnapshot {
        self.clock.advance(dt);
        self.tick();
        self.frame()
    }

    // Other runners on this thread may have installed their own clock.
    fn tick(&self) {
        set_clock(Rc::new(self.clock.clone()));
        self.page.tick();
    }

    /// Re-lays the page out for the new size, then lets watchers re-evaluate.
    pub fn resize(&self, width: f32, height: f32) -> Result<FrameSnapshot, PlatformError> {
        let viewport = validate(Size::new(width, height))?;
        let rects = section_rects(&self.page, viewport)?;
        for (el, rect) in self.sections.iter().zip(rects) {
            el.set_document_rect(rect);
        }
        let (near, far) = orb_rects(rects[1]);
        self.near_orb.set_document_rect(near);
        self.far_orb.set_document_rect(far);

        self.host.resize(viewport.width, viewport.height);
        self.tick();
        Ok(self.frame())
    }

    /// Scrolls from the top to the bottom of the page in `step` increments,
    /// collecting a frame after dwelling at every stop. At most
    /// [`MAX_SWEEP_STOPS`] stops.
    pub fn sweep(&self, step: f32) -> Result<Vec<FrameSnapshot>, PlatformError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(PlatformError::InvalidStep(step));
        }
        let end = self.max_scroll();
        let stops = (end / step).ceil();
        if stops >= MAX_SWEEP_STOPS as f32 {
            return Err(PlatformError::SweepTooLong {
                step,
                stops,
                max: MAX_SWEEP_STOPS,
            });
        }
        // stops are computed from their index so a small step cannot stall
        Ok((0..=stops as usize)
            .map(|i| {
                self.scroll_to((i as f32 * step).min(end));
                self.advance(self.dwell)
            })
            .collect())
    }

    pub fn frame(&self) -> FrameSnapshot {
        let vp = self.host.viewport();
        let sections = self
            .page
            .sections()
            .iter()
            .zip(&self.sections)
            .map(|(section, el)| {
                let state = section.state();
                let rect = el.document_rect();
                let reveal = section.reveal().borrow();
                SectionSnapshot {
                    name: section.name(),
                    top: rect.top(),
                    height: rect.h,
                    is_visible: state.is_visible,
                    scroll_progress: state.scroll_progress,
                    reveal_opacity: reveal.opacity(),
                    reveal_offset: reveal.offset_y(),
                }
            })
            .collect();

        let transition = self.page.transition().styles();
        FrameSnapshot {
            scroll_y: vp.scroll_y,
            viewport_width: vp.width,
            viewport_height: vp.height,
            sections,
            parallax: ParallaxSnapshot {
                near: self.page.dark().near_layer().current_offset(),
                far: self.page.dark().far_layer().current_offset(),
            },
            transition_progress: transition.t,
            transition_background: transition.background.to_color().to_hex(),
            animating: self
                .page
                .sections()
                .iter()
                .any(|s| s.reveal().borrow().is_animating()),
        }
    }

    pub fn render_html(&self) -> String {
        render_html(&self.page.render())
    }
}

fn validate(viewport: Size) -> Result<Size, PlatformError> {
    let finite = viewport.width.is_finite() && viewport.height.is_finite();
    if finite && !viewport.is_empty() {
        Ok(viewport)
    } else {
        Err(PlatformError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

fn section_rects(page: &LandingPage, viewport: Size) -> Result<[Rect; 3], PlatformError> {
    let heights = page.sections().map(|s| s.content_height(viewport));
    let rects = layout::stack_sections(viewport, &heights)?;
    Ok([rects[0], rects[1], rects[2]])
}

/// `top-1/4 right-0 w-96 h-96` and `bottom-0 left-0 w-64 h-64` inside the
/// dark section.
fn orb_rects(dark: Rect) -> (Rect, Rect) {
    let near = Rect::new(dark.right() - 384.0, dark.top() + dark.h / 4.0, 384.0, 384.0);
    let far = Rect::new(dark.left(), dark.bottom() - 256.0, 256.0, 256.0);
    (near, far)
}
