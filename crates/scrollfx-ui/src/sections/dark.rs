use std::cell::RefCell;
use std::rc::Rc;

use scrollfx_core::{
    ElementGeometry, Host, ObserverError, ParallaxConfig, ParallaxEffect, ScrollAnimation,
    VisibilityConfig,
};

use crate::*;

pub const DARK_THRESHOLD: f32 = 0.2;
pub const NEAR_LAYER_SPEED: f32 = 0.3;
pub const FAR_LAYER_SPEED: f32 = -0.2;

const FLOATING_DIAMONDS: usize = 6;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Performance Optimized",
        description: "Hardware-accelerated animations ensuring smooth 60fps experiences across all devices",
        icon: "⚡",
    },
    Feature {
        title: "Responsive Design",
        description: "Fluid transitions that adapt beautifully to any screen size or orientation",
        icon: "📱",
    },
    Feature {
        title: "Cross-Browser Compatible",
        description: "Graceful fallbacks and progressive enhancement for universal compatibility",
        icon: "🌐",
    },
];

const GRID_PATTERN: &str = "linear-gradient(hsl(var(--foreground-light)) 1px, transparent 1px), \
     linear-gradient(90deg, hsl(var(--foreground-light)) 1px, transparent 1px)";

/// Dark feature section with two background layers drifting at independent
/// parallax speeds.
pub struct DarkSection {
    animation: ScrollAnimation,
    near: ParallaxEffect,
    far: ParallaxEffect,
    reveal: RefCell<RevealAnimator>,
}

impl DarkSection {
    pub fn new(host: Rc<dyn Host>) -> Result<Self, ObserverError> {
        Ok(Self {
            animation: ScrollAnimation::new(
                host.clone(),
                VisibilityConfig::with_threshold(DARK_THRESHOLD)?,
            ),
            near: ParallaxEffect::new(host.clone(), ParallaxConfig { speed: NEAR_LAYER_SPEED }),
            far: ParallaxEffect::new(host, ParallaxConfig { speed: FAR_LAYER_SPEED }),
            reveal: RefCell::new(RevealAnimator::default()),
        })
    }

    /// Top-right orb, drifting with the scroll.
    pub fn near_layer(&self) -> &ParallaxEffect {
        &self.near
    }

    /// Bottom-left orb, drifting against the scroll.
    pub fn far_layer(&self) -> &ParallaxEffect {
        &self.far
    }

    /// Attaches the two orbs' rendered elements to their parallax bindings.
    pub fn bind_layers(&self, near: Rc<dyn ElementGeometry>, far: Rc<dyn ElementGeometry>) {
        self.near.binding().bind(near);
        self.far.binding().bind(far);
    }

    fn feature_card(index: usize, feature: &Feature) -> View {
        Box(Modifier::new()
            .key(index as u64)
            .class(
                "p-6 rounded-xl bg-foreground-light/5 backdrop-blur-sm border \
                 border-foreground-light/10 hover:bg-foreground-light/10 transition-all \
                 duration-300 animate-slide-in-left",
            )
            .animation_delay(0.6 + index as f32 * 0.2))
        .child((
            Box(Modifier::new().class("text-4xl mb-4 animate-glow-pulse"))
                .child(Text(feature.icon)),
            Heading(3, Modifier::new().class("text-xl font-semibold mb-3 text-foreground-light"))
                .child(Text(feature.title)),
            Paragraph(Modifier::new().class("text-foreground-light/70 leading-relaxed"))
                .child(Text(feature.description)),
        ))
    }

    fn divider(side: &'static str) -> View {
        Box(Modifier::new()
            .class("absolute top-1/2 transform -translate-y-1/2 hidden lg:block")
            .class(side))
        .child(Box(Modifier::new().class(
            "w-px h-32 bg-gradient-to-b from-transparent via-foreground-light/30 to-transparent",
        )))
    }
}

impl PageSection for DarkSection {
    fn name(&self) -> &'static str {
        "dark"
    }

    fn observer(&self) -> &ScrollAnimation {
        &self.animation
    }

    fn reveal(&self) -> &RefCell<RevealAnimator> {
        &self.reveal
    }

    fn content_height(&self, viewport: scrollfx_core::Size) -> f32 {
        // feature cards stack on narrow screens
        if viewport.width < 768.0 { 1400.0 } else { 0.0 }
    }

    fn mount(&self, element: Rc<dyn ElementGeometry>) {
        log::debug!("mounting dark section");
        self.animation.bind(element);
        self.near.start();
        self.far.start();
    }

    fn unmount(&self) {
        log::debug!("unmounting dark section");
        self.animation.unbind();
        self.near.stop();
        self.far.stop();
    }

    fn render(&self) -> View {
        let visible = self.animation.is_visible().get();

        let diamonds: Vec<View> = (0..FLOATING_DIAMONDS)
            .map(|i| {
                let i_f = i as f32;
                Box(Modifier::new()
                    .key(i as u64)
                    .class(
                        "absolute w-4 h-4 border border-accent-bright/30 transform rotate-45 \
                         animate-float",
                    )
                    .top(percent(20.0 + i_f * 15.0))
                    .left(percent(10.0 + i_f * 15.0))
                    .animation_delay(i_f * 0.5)
                    .animation_duration(8.0))
            })
            .collect();

        let backdrop = Box(Modifier::new().class("absolute inset-0 pointer-events-none")).child((
            Box(Modifier::new()
                .class(
                    "absolute top-1/4 right-0 w-96 h-96 rounded-full bg-gradient-to-l \
                     from-accent-bright/20 to-transparent blur-3xl",
                )
                .translate_y(px(self.near.current_offset()))),
            Box(Modifier::new()
                .class(
                    "absolute bottom-0 left-0 w-64 h-64 rounded-full bg-gradient-to-r \
                     from-primary-glow/30 to-transparent blur-2xl",
                )
                .translate_y(px(self.far.current_offset()))),
            Box(Modifier::new().class("absolute inset-0 opacity-5")).child(Box(Modifier::new()
                .class("w-full h-full")
                .background_image(GRID_PATTERN)
                .background_size("40px 40px"))),
            diamonds,
        ));

        let headline = Heading(2, Modifier::new().class("text-hero mb-8 font-extrabold")).child((
            Span(Modifier::new().class("block opacity-90")).child(Text("Immersive")),
            Span(Modifier::new().class("block text-glow")).child(Text("Dark Experience")),
        ));

        let intro = Paragraph(
            Modifier::new()
                .class(
                    "text-xl md:text-2xl text-foreground-light/80 mb-12 max-w-4xl mx-auto \
                     leading-relaxed",
                )
                .reveal(visible, "animate-fade-in-delayed", "opacity-0"),
        )
        .child(Text(
            "Where sophisticated design meets cutting-edge technology. \
             Each transition tells a story through motion, color, and interaction.",
        ));

        let features = Box(Modifier::new()
            .class("grid md:grid-cols-3 gap-8 mb-12 max-w-5xl mx-auto")
            .reveal(visible, "animate-scale-in", "opacity-0")
            .animation_delay(0.4))
        .child(
            FEATURES
                .iter()
                .enumerate()
                .map(|(i, f)| Self::feature_card(i, f))
                .collect::<Vec<_>>(),
        );

        let actions = Box(Modifier::new()
            .class("flex flex-col sm:flex-row gap-6 justify-center items-center")
            .reveal(visible, "animate-scale-in", "opacity-0")
            .animation_delay(1.0))
        .child((
            Button(
                "Get Started",
                ButtonVariant::Secondary,
                ButtonSize::Lg,
                Modifier::new().class(
                    "text-lg px-8 py-4 bg-foreground-light text-background-dark \
                     hover:bg-foreground-light/90 shadow-lg hover:shadow-xl transition-all \
                     duration-300 transform hover:scale-105",
                ),
            ),
            Button(
                "Learn More",
                ButtonVariant::Outline,
                ButtonSize::Lg,
                Modifier::new().class(
                    "text-lg px-8 py-4 border-2 border-foreground-light/30 text-foreground-light \
                     hover:bg-foreground-light/10 transition-all duration-300",
                ),
            ),
        ));

        Section(Modifier::new().class(
            "section-dark min-h-screen flex items-center justify-center relative overflow-hidden",
        ))
        .child((
            backdrop,
            Box(Modifier::new().class("container mx-auto px-6 text-center relative z-10")).child((
                Box(Modifier::new()
                    .class("transition-all duration-1000")
                    .reveal(visible, "animate-fade-up", "opacity-0 translate-y-10"))
                .child((headline, intro, features, actions)),
                Self::divider("left-8"),
                Self::divider("right-8"),
            )),
        ))
    }
}
