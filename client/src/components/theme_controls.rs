//! Theme selection control and quick toggle.
//!
//! Both read the rendered [`UiState`] for display and go through a fresh
//! resolver for every change, so the stored preference stays authoritative.

use leptos::prelude::*;
use pitstop::config::ShellConfig;
use pitstop::prefs::ThemePreference;

use crate::state::ui::UiState;
use crate::util::dark_mode::theme_resolver;

/// `<select id="theme-select">` offering auto/dark/light.
///
/// Shows the stored preference, never the effective mode.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoredValue<ShellConfig>>();

    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match raw.parse::<ThemePreference>() {
            Ok(pref) => {
                config.with_value(|cfg| theme_resolver(cfg, ui).apply(pref, false));
            }
            Err(e) => log::warn!("theme select: {e}"),
        }
    };

    view! {
        <label class="settings__field">
            <span class="settings__label">"Theme"</span>
            <select
                id="theme-select"
                prop:value=move || ui.with(|s| s.theme.preference.as_str())
                on:change=on_change
            >
                {ThemePreference::ALL
                    .into_iter()
                    .map(|pref| view! { <option value=pref.as_str()>{pref.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// `<button id="quick-theme-toggle">` cycling auto -> dark -> light.
#[component]
pub fn QuickThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoredValue<ShellConfig>>();

    let on_click = move |_| {
        config.with_value(|cfg| theme_resolver(cfg, ui).cycle());
    };
    let title = move || format!("Theme: {}", ui.with(|s| s.theme.preference.label()));

    view! {
        <button id="quick-theme-toggle" class="btn toolbar__theme" title=title on:click=on_click>
            {move || ui.with(|s| s.theme.glyph())}
        </button>
    }
}
