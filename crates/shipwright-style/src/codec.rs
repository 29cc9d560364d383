//! Conversion between style specs, structured records and ANSI escapes.
//!
//! A style spec is a whitespace-separated list of tokens:
//!
//! | Token | Meaning | SGR |
//! |-------|---------|-----|
//! | `bold` | bold | 1 |
//! | `dimmed` | faint | 2 |
//! | `italic` | italic | 3 |
//! | `underline` | underline | 4 |
//! | `inverted` | reverse video | 7 |
//! | `bg:<color>` | background color | 40–47, 100–107, 48;2;r;g;b |
//! | `fg:<color>` or `<color>` | foreground color | 30–37, 90–97, 38;2;r;g;b |
//!
//! Unrecognized tokens produce no output.
//!
//! Two escape encodings exist. [`StyleCodec::encode`] emits one complete
//! `ESC[<n>m` sequence per token, in token order. [`StyleCodec::encode_joined`]
//! emits a single sequence whose parameters are the modifiers (in the fixed
//! order bold, dimmed, italic, underline, inverted), then the background,
//! then the foreground. Both agree on every numeric code.
//!
//! # Example
//!
//! ```rust
//! use shipwright_style::{compose, decode, encode, encode_joined, Modifier};
//!
//! assert_eq!(encode("bold red"), "\x1b[1m\x1b[31m");
//! assert_eq!(encode_joined("bold red"), "\x1b[1;31m");
//! assert_eq!(encode("bg:blue"), "\x1b[44m");
//! assert_eq!(encode(""), "");
//!
//! let record = decode("red  italic bg:#101010");
//! assert!(record.has(Modifier::Italic));
//! assert_eq!(compose(&record), "italic bg:#101010 red");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::color::{strip_prefix_ignore_case, Layer};
use crate::palette::Palette;

/// The "clear all attributes" escape sequence.
pub const RESET: &str = "\x1b[0m";

/// Boolean text attributes.
///
/// Variants are declared in canonical emission order, which is also their
/// `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Bold,
    Dimmed,
    Italic,
    Underline,
    Inverted,
}

impl Modifier {
    /// All modifiers in canonical order.
    pub const ALL: [Modifier; 5] = [
        Modifier::Bold,
        Modifier::Dimmed,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Inverted,
    ];

    /// Matches a style-spec token, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(token))
    }

    /// The style-spec keyword for this modifier.
    pub fn name(self) -> &'static str {
        match self {
            Modifier::Bold => "bold",
            Modifier::Dimmed => "dimmed",
            Modifier::Italic => "italic",
            Modifier::Underline => "underline",
            Modifier::Inverted => "inverted",
        }
    }

    /// The SGR parameter for this modifier.
    pub fn sgr_code(self) -> u8 {
        match self {
            Modifier::Bold => 1,
            Modifier::Dimmed => 2,
            Modifier::Italic => 3,
            Modifier::Underline => 4,
            Modifier::Inverted => 7,
        }
    }
}

/// Structured form of a style spec, as edited by a style picker.
///
/// Color fields keep the text of the token (a builtin name, a hex literal or
/// a palette name) so that editing never loses information the codec does
/// not understand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Returns true if `modifier` is set.
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Returns true if no modifier and no color is set.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
            && self.background.as_deref().map_or(true, str::is_empty)
            && self.foreground.as_deref().map_or(true, str::is_empty)
    }
}

/// Which escape encoding to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// One `ESC[...m` sequence with `;`-joined parameters.
    #[default]
    Joined,
    /// One `ESC[<n>m` sequence per token, in token order.
    PerToken,
}

/// Classification of a single style-spec token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Modifier(Modifier),
    Background(&'a str),
    Foreground(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    if let Some(modifier) = Modifier::from_token(token) {
        return Token::Modifier(modifier);
    }
    if let Some(color) = strip_prefix_ignore_case(token, "bg:") {
        return Token::Background(color);
    }
    if let Some(color) = strip_prefix_ignore_case(token, "fg:") {
        return Token::Foreground(color);
    }
    Token::Foreground(token)
}

fn escape(params: &str) -> String {
    format!("\x1b[{}m", params)
}

/// Encodes style specs into ANSI escape sequences.
///
/// The codec carries an optional [`Palette`] used to resolve theme-defined
/// color names. The free functions [`encode`], [`encode_joined`] use an
/// empty palette.
#[derive(Debug, Clone, Default)]
pub struct StyleCodec {
    palette: Palette,
}

impl StyleCodec {
    /// Creates a codec that only knows builtin colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec that also resolves names from `palette`.
    pub fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Encodes using the given [`EscapeMode`].
    pub fn encode_with(&self, spec: &str, mode: EscapeMode) -> String {
        match mode {
            EscapeMode::Joined => self.encode_joined(spec),
            EscapeMode::PerToken => self.encode(spec),
        }
    }

    /// Emits one escape sequence per recognized token, in token order.
    pub fn encode(&self, spec: &str) -> String {
        let mut out = String::new();
        for token in spec.split_whitespace() {
            match classify(token) {
                Token::Modifier(m) => out.push_str(&escape(&m.sgr_code().to_string())),
                Token::Background(color) => {
                    if let Some(params) = self.color_params(color, Layer::Background) {
                        out.push_str(&escape(&params));
                    }
                }
                Token::Foreground(color) => {
                    if let Some(params) = self.color_params(color, Layer::Foreground) {
                        out.push_str(&escape(&params));
                    }
                }
            }
        }
        out
    }

    /// Emits a single escape sequence: modifiers, background, foreground.
    ///
    /// When several background or foreground tokens are recognized, the last
    /// one wins. Returns an empty string if nothing was recognized.
    pub fn encode_joined(&self, spec: &str) -> String {
        let mut modifiers = BTreeSet::new();
        let mut background = None;
        let mut foreground = None;

        for token in spec.split_whitespace() {
            match classify(token) {
                Token::Modifier(m) => {
                    modifiers.insert(m);
                }
                Token::Background(color) => {
                    if let Some(params) = self.color_params(color, Layer::Background) {
                        background = Some(params);
                    }
                }
                Token::Foreground(color) => {
                    if let Some(params) = self.color_params(color, Layer::Foreground) {
                        foreground = Some(params);
                    }
                }
            }
        }

        let mut params: Vec<String> = modifiers
            .into_iter()
            .map(|m| m.sgr_code().to_string())
            .collect();
        params.extend(background);
        params.extend(foreground);

        if params.is_empty() {
            String::new()
        } else {
            escape(&params.join(";"))
        }
    }

    fn color_params(&self, token: &str, layer: Layer) -> Option<String> {
        match self.palette.resolve(token) {
            Some(color) => Some(color.sgr_params(layer)),
            None => {
                tracing::trace!(token, "unrecognized color token");
                None
            }
        }
    }
}

/// Per-token encoding with builtin colors only.
pub fn encode(spec: &str) -> String {
    StyleCodec::new().encode(spec)
}

/// Joined encoding with builtin colors only.
pub fn encode_joined(spec: &str) -> String {
    StyleCodec::new().encode_joined(spec)
}

/// Parses a style spec into a [`StyleRecord`].
///
/// Later foreground tokens overwrite earlier ones, as do later background
/// tokens. Empty `bg:`/`fg:` tokens are ignored.
pub fn decode(spec: &str) -> StyleRecord {
    let mut record = StyleRecord::default();
    for token in spec.split_whitespace() {
        match classify(token) {
            Token::Modifier(m) => {
                record.modifiers.insert(m);
            }
            Token::Background(color) if !color.is_empty() => {
                record.background = Some(color.to_string());
            }
            Token::Foreground(color) if !color.is_empty() => {
                record.foreground = Some(color.to_string());
            }
            _ => {}
        }
    }
    record
}

/// Renders a [`StyleRecord`] back into a canonical style spec.
///
/// Modifiers come first in canonical order, then `bg:<color>`, then the
/// foreground. A foreground that would otherwise read as a modifier or a
/// prefixed token is written with an explicit `fg:` prefix.
pub fn compose(record: &StyleRecord) -> String {
    let mut parts: Vec<String> = record
        .modifiers
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    if let Some(bg) = record.background.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("bg:{}", bg));
    }

    if let Some(fg) = record.foreground.as_deref().filter(|c| !c.is_empty()) {
        if classify(fg) == Token::Foreground(fg) {
            parts.push(fg.to_string());
        } else {
            parts.push(format!("fg:{}", fg));
        }
    }

    parts.join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn known_token() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "bold", "dimmed", "italic", "underline", "inverted", "red", "green", "purple",
            "bright-blue", "bg:black", "bg:#0a0b0c", "#ffffff", "fg:cyan", "BOLD",
        ])
        .prop_map(String::from)
    }

    fn any_token() -> impl Strategy<Value = String> {
        prop_oneof![known_token(), "(bg:|fg:)?[a-z#0-9:]{1,8}"]
    }

    fn spec() -> impl Strategy<Value = String> {
        prop::collection::vec(any_token(), 0..8).prop_map(|tokens| tokens.join(" "))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn decode_compose_roundtrip(s in spec()) {
            let record = decode(&s);
            prop_assert_eq!(decode(&compose(&record)), record);
        }

        #[test]
        fn compose_has_no_stray_whitespace(s in spec()) {
            let composed = compose(&decode(&s));
            prop_assert_eq!(composed.trim(), composed.as_str());
            prop_assert!(!composed.contains("  "));
        }

        #[test]
        fn per_token_emits_one_fragment_per_known_token(
            tokens in prop::collection::vec(known_token(), 0..6)
        ) {
            let expected: String = tokens.iter().map(|t| encode(t)).collect();
            prop_assert_eq!(encode(&tokens.join(" ")), expected);
        }

        #[test]
        fn joined_is_empty_or_single_sequence(s in spec()) {
            let out = encode_joined(&s);
            if !out.is_empty() {
                prop_assert!(out.starts_with("\x1b["));
                prop_assert!(out.ends_with('m'));
                prop_assert_eq!(out.matches('\x1b').count(), 1);
            }
        }
    }
}
