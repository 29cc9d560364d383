//! Color tokens used inside style specs.
//!
//! A style spec names colors in one of three ways:
//!
//! - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `purple`, `cyan`, `white`
//! - Bright variants: `bright-red`, `bright-blue`, ...
//! - RGB hex: `#ff6b35` (exactly six digits)
//!
//! Names are matched case-insensitively. Anything else is not a color; the
//! codec may still resolve it through a [`Palette`](crate::Palette).
//!
//! # Example
//!
//! ```rust
//! use shipwright_style::{Color, Layer, NamedColor, Rgb};
//!
//! assert_eq!(Color::parse("red"), Some(Color::Named(NamedColor::Red)));
//! assert_eq!(Color::parse("#ff6b35"), Some(Color::Rgb(Rgb(255, 107, 53))));
//! assert_eq!(Color::parse("bright-cyan").unwrap().sgr_params(Layer::Background), "106");
//! assert_eq!(Color::parse("orange"), None);
//! ```

use serde::{Deserialize, Serialize};

/// The eight base terminal colors, in ANSI index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl NamedColor {
    /// All named colors, ordered by ANSI index (0–7).
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Purple,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// ANSI palette index (0–7).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The canonical style-spec name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Purple => "purple",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }

    /// Looks up a color by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

/// Which half of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#rrggbb` literal. Three-digit shorthand is not accepted.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb(r, g, b))
    }

    /// Formats the color as a lowercase `#rrggbb` literal.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn relative_luminance(self) -> f64 {
        0.2126 * srgb_to_linear(self.0)
            + 0.7152 * srgb_to_linear(self.1)
            + 0.0722 * srgb_to_linear(self.2)
    }

    /// WCAG contrast ratio against `other`, in `1.0..=21.0`.
    pub fn contrast_ratio(self, other: Rgb) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Result of a WCAG contrast check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast {
    /// Contrast ratio (1.0 for identical colors, 21.0 for black on white).
    pub ratio: f64,
    /// Passes WCAG AA for normal text (ratio >= 4.5).
    pub aa: bool,
    /// Passes WCAG AAA for normal text (ratio >= 7.0).
    pub aaa: bool,
}

/// Checks the contrast of a foreground color against a background color.
pub fn check_contrast(foreground: Rgb, background: Rgb) -> Contrast {
    let ratio = foreground.contrast_ratio(background);
    Contrast {
        ratio,
        aa: ratio >= 4.5,
        aaa: ratio >= 7.0,
    }
}

/// A color the codec knows how to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// One of the eight base colors (SGR 30–37 / 40–47).
    Named(NamedColor),
    /// Bright variant of a base color (SGR 90–97 / 100–107).
    Bright(NamedColor),
    /// 24-bit truecolor.
    Rgb(Rgb),
}

impl Color {
    /// Parses a color token. Returns `None` for anything that is not a
    /// builtin name, a `bright-` name or a six-digit hex literal.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.starts_with('#') {
            return Rgb::from_hex(token).map(Color::Rgb);
        }
        if let Some(base) = strip_prefix_ignore_case(token, "bright-") {
            return NamedColor::from_name(base).map(Color::Bright);
        }
        NamedColor::from_name(token).map(Color::Named)
    }

    /// SGR parameters for this color, without the `ESC[` prefix or `m` suffix.
    pub fn sgr_params(self, layer: Layer) -> String {
        let (base, bright, truecolor) = match layer {
            Layer::Foreground => (30, 90, 38),
            Layer::Background => (40, 100, 48),
        };
        match self {
            Color::Named(c) => (base + c.index() as u16).to_string(),
            Color::Bright(c) => (bright + c.index() as u16).to_string(),
            Color::Rgb(Rgb(r, g, b)) => format!("{};2;{};{};{}", truecolor, r, g, b),
        }
    }
}

/// Strips an ASCII prefix case-insensitively.
pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
