//! Starship prompt theme editor.
//!
//! `shipwright` ties the workspace together: an [`EditorSession`] holds the
//! [`Theme`] being edited, records every change in a bounded
//! [`HistoryStack`] so it can be undone, and previews the prompt through a
//! [`FormatEngine`].
//!
//! The lower layers are re-exported under their own names:
//!
//! - [`style`]: style specs to terminal escape sequences,
//! - [`config`]: configuration trees, safe merging and validation,
//! - [`render`]: the format-string engine and mock scenarios.
//!
//! # Example
//!
//! ```rust
//! use shipwright::{EditorSession, MetadataPatch};
//! use shipwright::render::find_scenario;
//!
//! let mut session = EditorSession::new();
//! session.update_metadata(MetadataPatch::name("Arctic"));
//! session.apply_color_scheme("Nord").unwrap();
//! session
//!     .import_toml("[directory]\nstyle = \"bold primary\"")
//!     .unwrap();
//!
//! let prompt = session.preview(find_scenario("dev").unwrap());
//! assert!(prompt.contains("\x1b[1;38;2;136;192;208m~/work/api-service"));
//!
//! while session.undo() {}
//! assert_eq!(session.current().name(), "Untitled Theme");
//! ```

mod error;
mod history;
mod presets;
mod session;
mod theme;

pub use error::{Result, SessionError};
pub use history::{HistoryStack, HISTORY_LIMIT};
pub use presets::{find_preset, preset_themes};
pub use session::EditorSession;
pub use theme::{MetadataPatch, Theme, ThemeMetadata, UNTITLED};

pub use shipwright_config as config;
pub use shipwright_render as render;
pub use shipwright_style as style;

pub use shipwright_render::FormatEngine;
