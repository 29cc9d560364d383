//! Full-prompt rendering against the default theme and mock scenarios.

use serde_json::json;
use shipwright_config::Config;
use shipwright_render::{find_scenario, mock_scenarios, render, FormatEngine, Scenario};

fn engine() -> FormatEngine {
    FormatEngine::new()
}

#[test]
fn character_glyph_appears_in_output() {
    let scenario = Scenario::from_values([("character", "❯")]);
    let out = render("$character", &Config::starship_default(), &scenario);
    assert!(out.contains('❯'));
}

#[test]
fn literal_red_group_is_escaped_then_reset() {
    let out = render("[text](red)", &Config::default(), &Scenario::default());
    let text_at = out.find("text").unwrap();
    let red_at = out.find("\x1b[31m").unwrap();
    let reset_at = out.rfind("\x1b[0m").unwrap();
    assert!(red_at < text_at);
    assert!(reset_at > text_at);
}

#[test]
fn every_mock_scenario_renders_default_prompt() {
    let config = Config::starship_default();
    for scenario in mock_scenarios() {
        let plain = engine().render_plain(config.format().unwrap(), &config, scenario);
        let character = scenario.value("character").unwrap();
        assert!(plain.contains(character), "{}: {:?}", scenario.id, plain);
        let directory = scenario.value("directory").unwrap();
        assert!(plain.contains(directory), "{}: {:?}", scenario.id, plain);
    }
}

#[test]
fn error_scenario_uses_error_symbol_style() {
    let config = Config::starship_default();
    let failed = find_scenario("error").unwrap();
    let clean = find_scenario("clean").unwrap();

    let failed_char = engine().render("$character", &config, failed);
    let clean_char = engine().render("$character", &config, clean);

    assert_eq!(failed_char, "\x1b[1;31m✖\x1b[0m ");
    assert_eq!(clean_char, "\x1b[1;32m❯\x1b[0m ");
}

#[test]
fn devops_scenario_shows_cloud_modules_with_generic_template() {
    let config = Config::default();
    let devops = find_scenario("devops").unwrap();
    let plain = engine().render_plain("$aws$kubernetes", &config, devops);
    assert_eq!(plain, "via us-west-2 via prod-cluster-us-east ");
}

#[test]
fn disabling_a_module_hides_it() {
    let config = Config::starship_default()
        .merge(&Config::from_value(json!({"git_branch": {"disabled": true}})).unwrap());
    let clean = find_scenario("clean").unwrap();
    let plain = engine().render_plain("$git_branch$character", &config, clean);
    assert_eq!(plain, "❯ ");
}

#[test]
fn newline_module_sequence_in_format() {
    let scenario = Scenario::from_values([("directory", "~"), ("character", ">")]);
    let plain = engine().render_plain("$directory\\n$character", &Config::default(), &scenario);
    assert_eq!(plain, "~ \n> ");
}

#[test]
fn color_scheme_palette_reaches_the_codec() {
    let config = Config::from_value(json!({
        "directory": {"style": "bold primary"},
        "palettes": {"global": {"primary": "#88C0D0"}}
    }))
    .unwrap();
    let scenario = Scenario::from_values([("directory", "~")]);
    let out = engine().render("$directory", &config, &scenario);
    assert_eq!(out, "\x1b[1;38;2;136;192;208m~\x1b[0m ");
}
