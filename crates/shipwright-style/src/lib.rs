//! Style specs for Starship-style prompt themes.
//!
//! A style spec is the small whitespace-token language used in prompt
//! configuration to describe how text looks: `bold bg:blue yellow`,
//! `italic #ff6b35`, `dimmed bright-purple`. This crate converts between
//! three forms of the same information:
//!
//! - the spec text itself, as written in a theme file,
//! - a structured [`StyleRecord`] for editing UIs ([`decode`] / [`compose`]),
//! - terminal escape sequences ([`encode`] / [`encode_joined`]).
//!
//! # Quick Start
//!
//! ```rust
//! use shipwright_style::{encode_joined, Palette, StyleCodec, RESET};
//!
//! let escaped = format!("{}main{}", encode_joined("bold purple"), RESET);
//! assert_eq!(escaped, "\x1b[1;35mmain\x1b[0m");
//!
//! // Theme palettes add named colors on top of the builtin eight.
//! let codec = StyleCodec::with_palette(Palette::new().with("accent", "#ff79c6"));
//! assert_eq!(codec.encode_joined("accent"), "\x1b[38;2;255;121;198m");
//! ```
//!
//! # Failure Model
//!
//! Nothing in this crate returns an error. Specs are edited live, so an
//! unknown token simply encodes to nothing and decodes to a foreground
//! string that the codec will not be able to encode.
//!
//! # Contrast
//!
//! [`check_contrast`] computes WCAG contrast ratios between two RGB colors,
//! used by theme validation to flag hard-to-read styles.

mod codec;
mod color;
mod palette;

pub use codec::{
    compose, decode, encode, encode_joined, EscapeMode, Modifier, StyleCodec, StyleRecord, RESET,
};
pub use color::{check_contrast, Color, Contrast, Layer, NamedColor, Rgb};
pub use palette::Palette;
