//! Top bar with the app title and the quick theme toggle.

use leptos::prelude::*;

use crate::components::theme_controls::QuickThemeToggle;

#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Pitstop"</span>
            <span class="toolbar__spacer"></span>
            <QuickThemeToggle/>
        </header>
    }
}
