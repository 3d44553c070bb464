use std::fmt;

use crate::css_number;

/// 8-bit RGBA, what native renderers and snapshot consumers want.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);

    /// `#rrggbb` or `#rrggbbaa`; anything else is black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize| s.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
        let parsed = match s.len() {
            6 => channel(0)
                .zip(channel(2))
                .zip(channel(4))
                .map(|((r, g), b)| Color(r, g, b, 255)),
            8 => channel(0)
                .zip(channel(2))
                .zip(channel(4))
                .zip(channel(6))
                .map(|(((r, g), b), a)| Color(r, g, b, a)),
            _ => None,
        };
        parsed.unwrap_or(Color::BLACK)
    }

    /// `#rrggbb`, with an alpha byte only when not opaque.
    pub fn to_hex(self) -> String {
        let Color(r, g, b, a) = self;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Channel-wise linear interpolation; `t` is not clamped.
    pub fn lerp(&self, to: &Hsl, t: f32) -> Hsl {
        Hsl {
            h: self.h + (to.h - self.h) * t,
            s: self.s + (to.s - self.s) * t,
            l: self.l + (to.l - self.l) * t,
        }
    }

    pub fn to_color(&self) -> Color {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Color(v, v, v, 255);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |mut t: f32| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round() as u8
        };
        Color(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
            255,
        )
    }
}

/// Formats as a CSS `hsl()` value, numbers rounded to three decimals.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            css_number(self.h),
            css_number(self.s),
            css_number(self.l)
        )
    }
}
