//! Settings section: theme and units preferences.

use leptos::prelude::*;

use crate::components::theme_controls::ThemeSelect;
use crate::components::units_select::UnitsSelect;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <ThemeSelect/>
            <UnitsSelect/>
        </div>
    }
}
