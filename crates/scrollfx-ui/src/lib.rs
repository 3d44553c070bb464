#![allow(non_snake_case)]
//! Views, reveal styling and the scroll-reactive landing page sections.
//!
//! Sections are pure functions of observer state: each one owns a
//! `ScrollAnimation` (and, for the dark section, two `ParallaxEffect`s) and
//! `render()` maps the current state onto classes and inline style.

pub mod html;
pub mod modifier;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod style;
pub mod view;

pub use html::render_html;
pub use modifier::Modifier;
pub use page::LandingPage;
pub use reveal::RevealAnimator;
pub use sections::{DarkSection, HeroSection, PageSection, TransitionSection};
pub use style::{Length, Style, TransformOp, percent, px};
pub use view::{ButtonSize, ButtonVariant, View, ViewKind};

pub fn Section(modifier: Modifier) -> View {
    View::new(ViewKind::Section).modifier(modifier)
}

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Heading(level: u8, modifier: Modifier) -> View {
    View::new(ViewKind::Heading {
        level: level.clamp(1, 6),
    })
    .modifier(modifier)
}

pub fn Paragraph(modifier: Modifier) -> View {
    View::new(ViewKind::Paragraph).modifier(modifier)
}

pub fn Span(modifier: Modifier) -> View {
    View::new(ViewKind::Span).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text { text: text.into() })
}

pub fn LineBreak() -> View {
    View::new(ViewKind::LineBreak)
}

pub fn Button(
    text: impl Into<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    modifier: Modifier,
) -> View {
    View::new(ViewKind::Button {
        text: text.into(),
        variant,
        size,
    })
    .modifier(modifier)
}

/// Appends children in order; accepts a view, a vec, an array or a tuple.
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
