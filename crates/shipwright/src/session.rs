//! The editor session: the theme being edited, its undo history, and the
//! user's saved themes.
//!
//! Every edit goes through [`EditorSession`]. Edits that change the theme
//! record the previous theme in a [`HistoryStack`], so they can be undone:
//!
//! | operation                | undoable | notes                                 |
//! |--------------------------|----------|---------------------------------------|
//! | `update_config`          | yes      | deep merge; no-op edits are skipped   |
//! | `update_metadata`        | yes      |                                       |
//! | `import_toml`            | yes      | parsed, then merged like an update    |
//! | `apply_color_scheme`     | yes      | writes the scheme into the palette    |
//! | `reset_theme`            | yes      | back to an untitled default theme     |
//! | `load_theme`             | no       | clears history                        |
//! | `save_theme`, `delete_theme`, `select_module` | no | do not touch the current theme |
//!
//! ```rust
//! use shipwright::EditorSession;
//! use shipwright_config::Config;
//! use serde_json::json;
//!
//! let mut session = EditorSession::new();
//! let patch = Config::from_value(json!({"directory": {"style": "bold blue"}})).unwrap();
//!
//! assert!(session.update_config(&patch));
//! assert_eq!(session.config().module_str("directory", "style"), Some("bold blue"));
//!
//! session.undo();
//! assert_eq!(session.config().module_str("directory", "style"), None);
//! ```

use shipwright_config::{find_scheme, validate, Config, Issue, IssueKind, ValidationReport};
use shipwright_render::{FormatEngine, Scenario};

use crate::error::{Result, SessionError};
use crate::history::HistoryStack;
use crate::presets::find_preset;
use crate::theme::{MetadataPatch, Theme};

#[derive(Debug, Default)]
pub struct EditorSession {
    current: Theme,
    saved: Vec<Theme>,
    selected_module: Option<String>,
    history: HistoryStack<Theme>,
    engine: FormatEngine,
}

impl EditorSession {
    /// A session editing a fresh untitled theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session editing `theme`, with empty history.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            current: theme,
            ..Self::default()
        }
    }

    /// Replaces the preview engine, e.g. to register extra module renderers.
    pub fn with_engine(mut self, engine: FormatEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn current(&self) -> &Theme {
        &self.current
    }

    pub fn config(&self) -> &Config {
        &self.current.config
    }

    pub fn engine(&self) -> &FormatEngine {
        &self.engine
    }

    pub fn history(&self) -> &HistoryStack<Theme> {
        &self.history
    }

    pub fn saved_themes(&self) -> &[Theme] {
        &self.saved
    }

    pub fn selected_module(&self) -> Option<&str> {
        self.selected_module.as_deref()
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Deep-merges `patch` into the current configuration.
    ///
    /// Returns `false` without touching history when the merge leaves the
    /// configuration unchanged.
    pub fn update_config(&mut self, patch: &Config) -> bool {
        let next = self.current.config.merge(patch);
        self.commit(next)
    }

    /// Updates the fields set in `patch` and records the change.
    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        self.history.record(self.current.clone());
        self.current.metadata.apply(patch);
    }

    /// Parses Starship TOML and merges it into the current configuration.
    ///
    /// On a parse error nothing changes. A successful import clears the
    /// module selection.
    pub fn import_toml(&mut self, text: &str) -> Result<bool> {
        let imported = Config::from_toml(text)?;
        tracing::debug!(keys = imported.len(), "importing TOML");
        let changed = self.update_config(&imported);
        self.selected_module = None;
        Ok(changed)
    }

    /// The current configuration as Starship TOML.
    pub fn export_toml(&self) -> Result<String> {
        Ok(self.current.config.to_toml()?)
    }

    /// Installs a named color scheme as the `global` palette.
    pub fn apply_color_scheme(&mut self, name: &str) -> Result<bool> {
        let scheme =
            find_scheme(name).ok_or_else(|| SessionError::UnknownScheme(name.to_string()))?;
        Ok(self.update_config(&scheme.to_palette_patch()))
    }

    /// Starts over from an untitled default theme. Undoable.
    pub fn reset_theme(&mut self) {
        let fresh = Theme::untitled();
        let previous = std::mem::replace(&mut self.current, fresh);
        self.history.record(previous);
        self.selected_module = None;
    }

    fn commit(&mut self, config: Config) -> bool {
        if config == self.current.config {
            return false;
        }
        self.history.record(self.current.clone());
        self.current.config = config;
        self.current.metadata.touch();
        true
    }

    // =========================================================================
    // Theme library
    // =========================================================================

    /// Switches to editing `theme`. History does not carry across themes.
    pub fn load_theme(&mut self, theme: Theme) {
        tracing::debug!(id = theme.id(), name = theme.name(), "loading theme");
        self.current = theme;
        self.selected_module = None;
        self.history.clear();
    }

    /// Loads a saved theme, or a preset, by id.
    pub fn load_theme_by_id(&mut self, id: &str) -> Result<()> {
        let theme = self
            .saved
            .iter()
            .find(|theme| theme.id() == id)
            .or_else(|| find_preset(id))
            .cloned()
            .ok_or_else(|| SessionError::ThemeNotFound(id.to_string()))?;
        self.load_theme(theme);
        Ok(())
    }

    /// Saves the current theme, replacing any saved theme with the same id.
    pub fn save_theme(&mut self) {
        match self.saved.iter_mut().find(|t| t.id() == self.current.id()) {
            Some(existing) => *existing = self.current.clone(),
            None => self.saved.push(self.current.clone()),
        }
    }

    /// Removes a saved theme and returns it.
    pub fn delete_theme(&mut self, id: &str) -> Result<Theme> {
        let index = self
            .saved
            .iter()
            .position(|theme| theme.id() == id)
            .ok_or_else(|| SessionError::ThemeNotFound(id.to_string()))?;
        Ok(self.saved.remove(index))
    }

    pub fn select_module(&mut self, module: Option<&str>) {
        self.selected_module = module.map(str::to_string);
    }

    // =========================================================================
    // History
    // =========================================================================

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.current)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.current)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // =========================================================================
    // Preview
    // =========================================================================

    /// Renders the current theme's prompt for `scenario`.
    pub fn preview(&self, scenario: &Scenario) -> String {
        self.engine.render_prompt(&self.current.config, scenario)
    }

    /// Validates the current configuration and metadata.
    pub fn validate(&self) -> ValidationReport {
        let mut report = validate(&self.current.config);
        if self.current.name().trim().is_empty() {
            report.push(
                Issue::warning(IssueKind::Config, "Theme has no name")
                    .with_fix("Add a name in the theme settings"),
            );
        }
        report
    }
}
