//! Measurement units control.

use leptos::prelude::*;
use pitstop::config::ShellConfig;
use pitstop::prefs::{Preferences, Units};

use crate::state::ui::UiState;
use crate::util::storage::LocalStore;

/// `<select id="units-select">`, initialized from the store and written
/// back on every change.
#[component]
pub fn UnitsSelect() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoredValue<ShellConfig>>();
    let prefs = move || config.with_value(|cfg| Preferences::new(LocalStore, cfg.storage.clone()));

    let stored = prefs().units();
    ui.update(|s| s.units = stored.clone());

    // A stored value outside the offered list still gets an option so the
    // control can display it.
    let mut options = Units::OFFERED.to_vec();
    if !options.contains(&stored) {
        options.push(stored);
    }

    let on_change = move |ev: leptos::ev::Event| {
        let units = Units::from(event_target_value(&ev).as_str());
        if let Err(e) = prefs().set_units(&units) {
            log::warn!("units preference not persisted: {e}");
        }
        ui.update(|s| s.units = units);
    };

    view! {
        <label class="settings__field">
            <span class="settings__label">"Units"</span>
            <select
                id="units-select"
                prop:value=move || ui.with(|s| s.units.as_str().to_owned())
                on:change=on_change
            >
                {options
                    .into_iter()
                    .map(|units| {
                        let value = units.as_str().to_owned();
                        let label = units.label().to_owned();
                        view! { <option value=value>{label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
