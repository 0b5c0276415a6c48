//! Tab navigation buttons.

use leptos::prelude::*;
use pitstop::config::ShellConfig;

use crate::state::ui::UiState;
use crate::util::hash_route::tab_router;

/// One `.tab-button` per configured section.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoredValue<ShellConfig>>();
    let sections = config.with_value(|cfg| cfg.tabs.sections.clone());

    view! {
        <nav class="tab-bar" role="tablist">
            {sections
                .into_iter()
                .map(|section| {
                    let target = section.id;
                    let on_click = {
                        let target = target.clone();
                        move |_| {
                            config.with_value(|cfg| tab_router(cfg, ui).navigate(&target));
                        }
                    };
                    let selected = {
                        let target = target.clone();
                        move || ui.with(|s| s.tab_selected(&target))
                    };
                    let aria = {
                        let target = target.clone();
                        move || ui.with(|s| s.aria_selected(&target))
                    };
                    view! {
                        <button
                            class="tab-button"
                            class:active=selected
                            role="tab"
                            data-target=target
                            aria-selected=aria
                            on:click=on_click
                        >
                            {section.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
