#![cfg(not(feature = "csr"))]

use leptos::prelude::*;

use super::*;

#[test]
fn fragment_is_empty_outside_the_browser() {
    assert_eq!(BrowserHistory.fragment(), "");
}

#[test]
fn push_fails_outside_the_browser() {
    assert!(BrowserHistory.push_fragment("assets").is_err());
}

#[test]
fn startup_shows_home_tab() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        tab_router(&ShellConfig::default(), ui).sync_from_fragment();
        let state = ui.get_untracked();
        assert!(state.tab_active("dashboard"));
        assert_eq!(state.aria_selected("dashboard"), "true");
        assert_eq!(state.aria_selected("settings"), "false");
    });
}

#[test]
fn navigate_updates_ui_even_when_history_rejects() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let router = tab_router(&ShellConfig::default(), ui);
        router.navigate("settings");
        assert!(ui.get_untracked().tab_active("settings"));
        assert!(!ui.get_untracked().tab_active("dashboard"));
    });
}

#[test]
fn watch_is_noop_but_callable() {
    watch_hash_changes(|| {});
}
