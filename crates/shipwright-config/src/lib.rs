//! Theme configuration trees for a Starship prompt editor.
//!
//! A theme's configuration is a nested table: global settings such as
//! `format` and `add_newline` at the top, one sub-table per prompt module,
//! user-defined modules under `custom`, and named colors under `palettes`.
//! This crate owns that tree and everything done to it short of rendering:
//!
//! - [`Config`]: immutable, shareable handle with TOML/JSON I/O,
//! - [`merge`]: overlay one tree onto another, ignoring [`RESERVED_KEYS`],
//! - [`Config::starship_default`]: the starting point for new themes,
//! - [`validate`]: advisory checks shown next to the editor,
//! - [`catalog`]: the prompt modules the editor knows,
//! - [`schemes`]: named color schemes that fill in a palette.
//!
//! # Example
//!
//! ```rust
//! use shipwright_config::{find_scheme, validate, Config};
//!
//! let edited = Config::starship_default()
//!     .merge(&Config::from_toml("[directory]\nstyle = \"bold primary\"").unwrap())
//!     .merge(&find_scheme("Nord").unwrap().to_palette_patch());
//!
//! assert_eq!(edited.active_palette().get("primary"), Some("#88C0D0"));
//! assert!(validate(&edited).is_valid());
//! ```

pub mod catalog;
mod config;
mod defaults;
mod error;
mod merge;
pub mod schemes;
mod validate;

pub use catalog::{find_module, is_known_module, ModuleCategory, ModuleInfo, MODULES};
pub use config::{Config, DEFAULT_PALETTE};
pub use error::{ConfigError, Result};
pub use merge::{is_reserved_key, merge, merge_tables, sanitize, RESERVED_KEYS};
pub use schemes::{find_scheme, ColorScheme, COLOR_SCHEMES};
pub use validate::{
    check_color_contrast, estimate_render_time, validate, Issue, IssueKind, Severity,
    ValidationReport, RENDER_TIME_WARNING_MS,
};
