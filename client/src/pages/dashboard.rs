//! Dashboard section: overview of the current preferences.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let mode = move || ui.with(|s| s.theme.mode.as_str());
    let units = move || ui.with(|s| s.units.label().to_owned());

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <dl class="dashboard-page__summary">
                <dt>"Appearance"</dt>
                <dd>{mode}</dd>
                <dt>"Units"</dt>
                <dd>{units}</dd>
            </dl>
        </div>
    }
}
