//! Editing sessions driven through many edits, undos and redos.

use serde_json::json;
use shipwright::config::Config;
use shipwright::{EditorSession, MetadataPatch, HISTORY_LIMIT};

fn style_patch(n: usize) -> Config {
    Config::from_value(json!({"directory": {"style": format!("#{:06x}", n)}})).unwrap()
}

fn directory_style(session: &EditorSession) -> Option<String> {
    session
        .config()
        .module_str("directory", "style")
        .map(str::to_string)
}

#[test]
fn undo_walks_back_through_every_edit() {
    let mut session = EditorSession::new();
    for n in 1..=5 {
        assert!(session.update_config(&style_patch(n)));
    }

    for n in (1..5).rev() {
        assert!(session.undo());
        assert_eq!(directory_style(&session), Some(format!("#{:06x}", n)));
    }
    assert!(session.undo());
    assert_eq!(directory_style(&session), None);
    assert!(!session.undo());
}

#[test]
fn redo_after_undo_restores_exact_theme() {
    let mut session = EditorSession::new();
    session.update_config(&style_patch(1));
    session.update_metadata(MetadataPatch::name("Tweaked").with_tags(["dark"]));
    let edited = session.current().clone();

    session.undo();
    session.undo();
    session.redo();
    session.redo();

    assert_eq!(session.current(), &edited);
    assert!(!session.can_redo());
}

#[test]
fn history_is_capped() {
    let mut session = EditorSession::new();
    let edits = HISTORY_LIMIT + 15;
    for n in 1..=edits {
        session.update_config(&style_patch(n));
    }

    let mut undone = 0;
    while session.undo() {
        undone += 1;
    }
    assert_eq!(undone, HISTORY_LIMIT);
    assert_eq!(directory_style(&session), Some(format!("#{:06x}", edits - HISTORY_LIMIT)));
}

#[test]
fn new_edit_after_undo_discards_redo() {
    let mut session = EditorSession::new();
    session.update_config(&style_patch(1));
    session.update_config(&style_patch(2));
    session.undo();
    assert!(session.can_redo());

    session.update_config(&style_patch(3));
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(directory_style(&session), Some("#000003".to_string()));
}

#[test]
fn import_and_scheme_are_undoable_steps() {
    let mut session = EditorSession::new();
    session.import_toml("format = \"$directory$character\"").unwrap();
    session.apply_color_scheme("Dracula").unwrap();
    assert_eq!(session.config().format(), Some("$directory$character"));
    assert!(session.config().get("palettes").is_some());

    session.undo();
    assert!(session.config().get("palettes").is_none());
    session.undo();
    assert_eq!(session.config(), &Config::starship_default());
}

#[test]
fn loading_a_preset_starts_fresh_history() {
    let mut session = EditorSession::new();
    session.update_config(&style_patch(1));
    session.load_theme_by_id("preset-clean").unwrap();

    assert!(!session.can_undo());
    assert_eq!(session.config().format(), Some("$directory$git_branch$character"));

    session.update_config(&style_patch(2));
    session.undo();
    assert_eq!(directory_style(&session), Some("bold cyan".to_string()));
}
