#![cfg(not(feature = "csr"))]

use leptos::prelude::*;
use pitstop::prefs::ThemePreference;
use pitstop::theme::EffectiveMode;

use super::*;

#[test]
fn system_reports_light_outside_the_browser() {
    assert!(!BrowserAppearance.prefers_dark());
}

#[test]
fn render_mirrors_view_into_ui_state() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let view = ThemeView::resolve(ThemePreference::Dark, false);
        DocumentTheme { ui }.render(&view);
        assert_eq!(ui.get_untracked().theme, view);
    });
}

#[test]
fn resolver_init_renders_auto_as_light() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let view = theme_resolver(&ShellConfig::default(), ui).init();
        assert_eq!(view.preference, ThemePreference::Auto);
        assert_eq!(view.mode, EffectiveMode::Light);
        assert_eq!(ui.get_untracked().theme.glyph(), "\u{2600}\u{FE0F}");
    });
}

#[test]
fn explicit_choice_renders_even_without_storage() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let view = theme_resolver(&ShellConfig::default(), ui).apply(ThemePreference::Dark, false);
        assert_eq!(view.mode, EffectiveMode::Dark);
        assert_eq!(ui.get_untracked().theme.preference, ThemePreference::Dark);
    });
}

#[test]
fn watch_is_noop_but_callable() {
    watch_system_appearance(|| {});
}
