//! Typed inline style. Declarations render in a fixed order so the same state
//! always produces the same `style` attribute.

use std::fmt;

use scrollfx_core::{Hsl, css_number};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", css_number(*v)),
            Length::Percent(v) => write!(f, "{}%", css_number(*v)),
        }
    }
}

pub fn px(v: f32) -> Length {
    Length::Px(v)
}

pub fn percent(v: f32) -> Length {
    Length::Percent(v)
}

/// One CSS transform function; ops apply in the order they were added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    TranslateX(Length),
    TranslateY(Length),
    /// Degrees.
    Rotate(f32),
    Scale(f32),
    ScaleY(f32),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::TranslateX(l) => write!(f, "translateX({l})"),
            TransformOp::TranslateY(l) => write!(f, "translateY({l})"),
            TransformOp::Rotate(deg) => write!(f, "rotate({}deg)", css_number(*deg)),
            TransformOp::Scale(s) => write!(f, "scale({})", css_number(*s)),
            TransformOp::ScaleY(s) => write!(f, "scaleY({})", css_number(*s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
    pub opacity: Option<f32>,
    pub transform: SmallVec<[TransformOp; 3]>,
    pub background_color: Option<Hsl>,
    pub color: Option<Hsl>,
    pub background_image: Option<String>,
    pub background_size: Option<String>,
    /// Seconds.
    pub animation_delay: Option<f32>,
    /// Seconds.
    pub animation_duration: Option<f32>,
    pub transition: Option<String>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    pub fn transform_css(&self) -> Option<String> {
        if self.transform.is_empty() {
            return None;
        }
        Some(
            self.transform
                .iter()
                .map(|op| op.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn to_css(&self) -> String {
        let mut decls: Vec<(&str, String)> = Vec::new();
        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ];
        for (name, len) in lengths {
            if let Some(len) = len {
                decls.push((name, len.to_string()));
            }
        }
        if let Some(o) = self.opacity {
            decls.push(("opacity", css_number(o)));
        }
        if let Some(t) = self.transform_css() {
            decls.push(("transform", t));
        }
        if let Some(c) = self.background_color {
            decls.push(("background-color", c.to_string()));
        }
        if let Some(c) = self.color {
            decls.push(("color", c.to_string()));
        }
        if let Some(img) = &self.background_image {
            decls.push(("background-image", img.clone()));
        }
        if let Some(size) = &self.background_size {
            decls.push(("background-size", size.clone()));
        }
        if let Some(d) = self.animation_delay {
            decls.push(("animation-delay", format!("{}s", css_number(d))));
        }
        if let Some(d) = self.animation_duration {
            decls.push(("animation-duration", format!("{}s", css_number(d))));
        }
        if let Some(t) = &self.transition {
            decls.push(("transition", t.clone()));
        }

        decls
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
