use std::borrow::Cow;

use scrollfx_core::Hsl;
use smallvec::SmallVec;

use crate::style::{Length, Style, TransformOp};

pub type ClassList = SmallVec<[Cow<'static, str>; 8]>;

/// Utility classes plus typed inline style for one view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub key: Option<u64>,
    pub classes: ClassList,
    pub style: Style,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: u64) -> Self {
        self.key = Some(key);
        self
    }

    /// Appends one or more whitespace-separated classes.
    pub fn class(mut self, classes: impl Into<Cow<'static, str>>) -> Self {
        match classes.into() {
            Cow::Borrowed(s) => self
                .classes
                .extend(s.split_whitespace().map(Cow::Borrowed)),
            Cow::Owned(s) => self
                .classes
                .extend(s.split_whitespace().map(|c| Cow::Owned(c.to_string()))),
        }
        self
    }

    /// Revealed classes once `visible`, resting classes until then.
    pub fn reveal(self, visible: bool, revealed: &'static str, resting: &'static str) -> Self {
        self.class(if visible { revealed } else { resting })
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn width(mut self, w: Length) -> Self {
        self.style.width = Some(w);
        self
    }

    pub fn height(mut self, h: Length) -> Self {
        self.style.height = Some(h);
        self
    }

    pub fn top(mut self, v: Length) -> Self {
        self.style.top = Some(v);
        self
    }

    pub fn right(mut self, v: Length) -> Self {
        self.style.right = Some(v);
        self
    }

    pub fn bottom(mut self, v: Length) -> Self {
        self.style.bottom = Some(v);
        self
    }

    pub fn left(mut self, v: Length) -> Self {
        self.style.left = Some(v);
        self
    }

    pub fn opacity(mut self, alpha: f32) -> Self {
        self.style.opacity = Some(alpha);
        self
    }

    pub fn transform(mut self, op: TransformOp) -> Self {
        self.style.transform.push(op);
        self
    }

    pub fn translate_x(self, v: Length) -> Self {
        self.transform(TransformOp::TranslateX(v))
    }

    pub fn translate_y(self, v: Length) -> Self {
        self.transform(TransformOp::TranslateY(v))
    }

    pub fn rotate(self, degrees: f32) -> Self {
        self.transform(TransformOp::Rotate(degrees))
    }

    pub fn scale(self, s: f32) -> Self {
        self.transform(TransformOp::Scale(s))
    }

    pub fn scale_y(self, s: f32) -> Self {
        self.transform(TransformOp::ScaleY(s))
    }

    pub fn background_color(mut self, c: Hsl) -> Self {
        self.style.background_color = Some(c);
        self
    }

    pub fn color(mut self, c: Hsl) -> Self {
        self.style.color = Some(c);
        self
    }

    pub fn background_image(mut self, image: impl Into<String>) -> Self {
        self.style.background_image = Some(image.into());
        self
    }

    pub fn background_size(mut self, size: impl Into<String>) -> Self {
        self.style.background_size = Some(size.into());
        self
    }

    /// Seconds.
    pub fn animation_delay(mut self, secs: f32) -> Self {
        self.style.animation_delay = Some(secs);
        self
    }

    /// Seconds.
    pub fn animation_duration(mut self, secs: f32) -> Self {
        self.style.animation_duration = Some(secs);
        self
    }

    pub fn transition(mut self, t: impl Into<String>) -> Self {
        self.style.transition = Some(t.into());
        self
    }
}
