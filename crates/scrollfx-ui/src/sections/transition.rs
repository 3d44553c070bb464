use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use scrollfx_core::animation::{AnimationSpec, Easing};
use scrollfx_core::{Host, Hsl, ObserverError, ScrollAnimation, VisibilityConfig};

use crate::*;

pub const TRANSITION_THRESHOLD: f32 = 0.1;

/// Colors at the two ends of the transition.
pub const LIGHT_BACKGROUND: Hsl = Hsl::new(0.0, 0.0, 100.0);
pub const DARK_BACKGROUND: Hsl = Hsl::new(222.2, 84.0, 4.9);
pub const LIGHT_TEXT: Hsl = Hsl::new(0.0, 0.0, 100.0);
pub const DARK_TEXT: Hsl = Hsl::new(0.0, 0.0, 0.0);

const LINES: usize = 8;

/// Maps scroll progress onto the transition: nothing happens in the first
/// fifth, the effect runs over the next three fifths and then holds.
pub fn transition_progress(scroll_progress: f32) -> f32 {
    ((scroll_progress - 0.2) / 0.6).clamp(0.0, 1.0)
}

/// Style parameters at transition progress `t`; every field is affine in `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionStyles {
    pub t: f32,
    pub background: Hsl,
    pub text: Hsl,
    pub line_scale_y: f32,
    pub line_opacity: f32,
    pub ring_scale: f32,
    /// Degrees.
    pub ring_rotation: f32,
    pub disc_scale: f32,
    pub disc_offset: f32,
    pub heading_opacity: f32,
    pub heading_scale: f32,
    pub column_shift: f32,
    pub column_opacity: f32,
    /// Percent.
    pub bar_width: f32,
}

impl TransitionStyles {
    pub fn at(t: f32) -> Self {
        Self {
            t,
            background: LIGHT_BACKGROUND.lerp(&DARK_BACKGROUND, t),
            text: LIGHT_TEXT.lerp(&DARK_TEXT, t),
            line_scale_y: 0.5 + t * 0.5,
            line_opacity: 0.1 + t * 0.2,
            ring_scale: 0.8 + t * 0.4,
            ring_rotation: t * 180.0,
            disc_scale: 1.2 - t * 0.4,
            disc_offset: t * 50.0,
            heading_opacity: 0.7 + t * 0.3,
            heading_scale: 0.9 + t * 0.1,
            column_shift: 20.0 - t * 20.0,
            column_opacity: 0.8 + t * 0.2,
            bar_width: t * 100.0,
        }
    }

    pub fn from_scroll_progress(scroll_progress: f32) -> Self {
        Self::at(transition_progress(scroll_progress))
    }
}

/// Section whose colors and geometry follow scroll progress continuously.
pub struct TransitionSection {
    animation: ScrollAnimation,
    reveal: RefCell<RevealAnimator>,
}

impl TransitionSection {
    pub fn new(host: Rc<dyn Host>) -> Result<Self, ObserverError> {
        Ok(Self {
            animation: ScrollAnimation::new(
                host,
                VisibilityConfig::with_threshold(TRANSITION_THRESHOLD)?,
            ),
            // duration-700
            reveal: RefCell::new(RevealAnimator::new(AnimationSpec::tween(
                Duration::from_millis(700),
                Easing::EaseOut,
            ))),
        })
    }

    pub fn styles(&self) -> TransitionStyles {
        TransitionStyles::from_scroll_progress(self.animation.scroll_progress().get())
    }

    fn column(s: &TransitionStyles, shift: f32, title: &'static str, body: &'static str) -> View {
        Box(Modifier::new()
            .class("space-y-6 text-left")
            .translate_x(px(shift))
            .opacity(s.column_opacity)
            .transition("transform 0.2s ease-out, opacity 0.2s ease-out"))
        .child((
            Heading(3, Modifier::new().class("text-2xl font-semibold mb-4")).child(Text(title)),
            Paragraph(Modifier::new().class("text-lg leading-relaxed opacity-90"))
                .child(Text(body)),
            Box(Modifier::new().class("w-16 h-1 bg-current opacity-60")),
        ))
    }
}

impl PageSection for TransitionSection {
    fn name(&self) -> &'static str {
        "transition"
    }

    fn observer(&self) -> &ScrollAnimation {
        &self.animation
    }

    fn reveal(&self) -> &RefCell<RevealAnimator> {
        &self.reveal
    }

    fn render(&self) -> View {
        let visible = self.animation.is_visible().get();
        let s = self.styles();

        let lines: Vec<View> = (0..LINES)
            .map(|i| {
                let i_f = i as f32;
                Box(Modifier::new()
                    .key(i as u64)
                    .class("absolute bg-current opacity-10")
                    .width(px(2.0))
                    .height(percent(20.0 + i_f * 10.0))
                    .left(percent(10.0 + i_f * 12.0))
                    .top(percent(50.0))
                    .translate_y(percent(-50.0))
                    .rotate(i_f * 15.0)
                    .scale_y(s.line_scale_y)
                    .opacity(s.line_opacity)
                    .transition("transform 0.3s ease-out, opacity 0.3s ease-out"))
            })
            .collect();

        let ring = Box(Modifier::new()
            .class("absolute w-64 h-64 rounded-full border border-current opacity-20")
            .top(percent(20.0))
            .right(percent(10.0))
            .scale(s.ring_scale)
            .rotate(s.ring_rotation)
            .transition("transform 0.2s ease-out"));

        let disc = Box(Modifier::new()
            .class("absolute w-32 h-32 rounded-full bg-current opacity-10")
            .bottom(percent(30.0))
            .left(percent(15.0))
            .scale(s.disc_scale)
            .translate_y(px(s.disc_offset))
            .transition("transform 0.2s ease-out"));

        let heading = Heading(
            2,
            Modifier::new()
                .class("text-display mb-8 font-bold")
                .opacity(s.heading_opacity)
                .scale(s.heading_scale)
                .transition("opacity 0.2s ease-out, transform 0.2s ease-out"),
        )
        .child((
            Text("The Magic of"),
            LineBreak(),
            Span(Modifier::new().class("text-glow")).child(Text("Seamless Transition")),
        ));

        let columns = Box(Modifier::new()
            .class("max-w-4xl mx-auto grid md:grid-cols-2 gap-12 items-center"))
        .child((
            Self::column(
                &s,
                -s.column_shift,
                "Advanced CSS Techniques",
                "Leveraging hardware-accelerated transforms, intersection observers, \
                 and scroll-based animations to create fluid visual experiences.",
            ),
            Self::column(
                &s,
                s.column_shift,
                "React Integration",
                "Custom hooks and component architecture that maintain 60fps performance \
                 while delivering sophisticated visual effects.",
            ),
        ));

        let progress_bar = Box(Modifier::new().class("mt-16 flex justify-center")).child(
            Box(Modifier::new().class("w-64 h-2 bg-current/20 rounded-full overflow-hidden"))
                .child(Box(Modifier::new()
                    .class("h-full bg-current rounded-full transition-all duration-300 ease-out")
                    .width(percent(s.bar_width))
                    .opacity(0.7))),
        );

        Section(
            Modifier::new()
                .class("relative min-h-screen flex items-center justify-center overflow-hidden")
                .background_color(s.background)
                .color(s.text)
                .transition("background-color 0.1s ease-out, color 0.1s ease-out"),
        )
        .child((
            Box(Modifier::new().class("absolute inset-0 pointer-events-none"))
                .child((lines, ring, disc)),
            Box(Modifier::new().class("container mx-auto px-6 text-center relative z-10")).child(
                Box(Modifier::new()
                    .class("transition-all duration-700")
                    .reveal(visible, "animate-fade-up", "opacity-0"))
                .child((heading, columns, progress_bar)),
            ),
        ))
    }
}
