use pitstop::prefs::ThemePreference;
use pitstop::tabs::TabLayout;
use pitstop::theme::EffectiveMode;

use super::*;

fn layout() -> TabLayout {
    TabLayout::from_sections(vec!["dashboard".to_owned(), "assets".to_owned(), "settings".to_owned()])
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_auto_light() {
    let state = UiState::default();
    assert_eq!(state.theme.preference, ThemePreference::Auto);
    assert_eq!(state.theme.mode, EffectiveMode::Light);
}

#[test]
fn ui_state_default_units_are_miles() {
    assert_eq!(UiState::default().units, Units::Miles);
}

#[test]
fn ui_state_default_has_no_active_tab() {
    let state = UiState::default();
    assert!(!state.tab_active("dashboard"));
    assert_eq!(state.aria_selected("dashboard"), "false");
}

// =============================================================
// Tab queries
// =============================================================

#[test]
fn tab_queries_follow_selection() {
    let state = UiState { tabs: layout().select("assets"), ..UiState::default() };
    assert!(state.tab_active("assets"));
    assert!(!state.tab_active("dashboard"));
    assert!(state.tab_selected("assets"));
    assert_eq!(state.aria_selected("assets"), "true");
    assert_eq!(state.aria_selected("settings"), "false");
}
