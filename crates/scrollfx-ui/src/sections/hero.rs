use std::cell::RefCell;
use std::rc::Rc;

use scrollfx_core::{Host, ObserverError, ScrollAnimation, VisibilityConfig};

use crate::*;

pub const HERO_THRESHOLD: f32 = 0.3;

/// Opening section on a light geometric background.
pub struct HeroSection {
    animation: ScrollAnimation,
    reveal: RefCell<RevealAnimator>,
}

impl HeroSection {
    pub fn new(host: Rc<dyn Host>) -> Result<Self, ObserverError> {
        Ok(Self {
            animation: ScrollAnimation::new(
                host,
                VisibilityConfig::with_threshold(HERO_THRESHOLD)?,
            ),
            reveal: RefCell::new(RevealAnimator::default()),
        })
    }
}

impl PageSection for HeroSection {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn observer(&self) -> &ScrollAnimation {
        &self.animation
    }

    fn reveal(&self) -> &RefCell<RevealAnimator> {
        &self.reveal
    }

    fn render(&self) -> View {
        let visible = self.animation.is_visible().get();

        let backdrop = Box(Modifier::new().class("absolute inset-0 pointer-events-none")).child((
            Box(Modifier::new().class(
                "absolute top-1/4 left-1/4 w-32 h-32 rounded-full bg-gradient-to-r \
                 from-primary/10 to-accent-bright/20 animate-float",
            )),
            Box(Modifier::new()
                .class(
                    "absolute top-3/4 right-1/4 w-24 h-24 rounded-full bg-gradient-to-l \
                     from-accent-bright/15 to-primary/10 animate-float",
                )
                .animation_delay(2.0)),
        ));

        let headline = Heading(1, Modifier::new().class("text-hero mb-6 font-extrabold")).child((
            Span(Modifier::new().class("block")).child(Text("Sophisticated")),
            Span(Modifier::new().class("block text-glow")).child(Text("Section Transitions")),
        ));

        let intro = Paragraph(
            Modifier::new()
                .class(
                    "text-xl md:text-2xl text-muted-foreground mb-12 max-w-3xl mx-auto \
                     leading-relaxed",
                )
                .reveal(visible, "animate-fade-in-delayed", "opacity-0"),
        )
        .child(Text(
            "Experience seamless visual storytelling through advanced CSS animations \
             and React component architecture",
        ));

        let actions = Box(Modifier::new()
            .class("flex flex-col sm:flex-row gap-6 justify-center items-center")
            .reveal(visible, "animate-scale-in", "opacity-0")
            .animation_delay(0.6))
        .child((
            Button(
                "Explore Transitions",
                ButtonVariant::Default,
                ButtonSize::Lg,
                Modifier::new().class(
                    "text-lg px-8 py-4 shadow-lg hover:shadow-xl transition-all duration-300 \
                     transform hover:scale-105",
                ),
            ),
            Button(
                "View Demo",
                ButtonVariant::Outline,
                ButtonSize::Lg,
                Modifier::new().class(
                    "text-lg px-8 py-4 border-2 hover:bg-primary hover:text-primary-foreground \
                     transition-all duration-300",
                ),
            ),
        ));

        let scroll_hint = Box(Modifier::new()
            .class("absolute bottom-12 left-1/2 transform -translate-x-1/2")
            .reveal(visible, "animate-fade-in-delayed", "opacity-0")
            .animation_delay(1.0))
        .child(
            Box(Modifier::new().class("flex flex-col items-center space-y-2 text-muted-foreground"))
                .child((
                    Span(Modifier::new().class("text-sm font-medium uppercase tracking-wider"))
                        .child(Text("Scroll to Experience")),
                    Box(Modifier::new().class(
                        "w-px h-12 bg-gradient-to-b from-primary to-transparent animate-pulse",
                    )),
                )),
        );

        Section(Modifier::new().class(
            "section-light geometric-pattern min-h-screen flex items-center justify-center \
             relative overflow-hidden",
        ))
        .child((
            backdrop,
            Box(Modifier::new().class("container mx-auto px-6 text-center relative z-10")).child((
                Box(Modifier::new()
                    .class("transition-all duration-1000")
                    .reveal(visible, "animate-fade-up", "opacity-0 translate-y-10"))
                .child((headline, intro, actions)),
                scroll_hint,
            )),
        ))
    }
}
