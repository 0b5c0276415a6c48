//! Root application component.
//!
//! Startup order matters: the stored theme is applied once before any
//! listener is attached, so no user or system event can race the initial
//! render.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::tab_bar::TabBar;
use crate::components::toast_container::ToastContainer;
use crate::components::toolbar::Toolbar;
use crate::pages::section_view;
use crate::state::ui::UiState;
use crate::util::config::load as load_config;
use crate::util::dark_mode::{theme_resolver, watch_system_appearance};
use crate::util::hash_route::{tab_router, watch_hash_changes};
use crate::util::service_worker;

/// Root application component.
///
/// Provides the shell config and UI state, applies the stored theme, syncs
/// the active tab from the address fragment, then wires the system and
/// history listeners and registers the offline worker.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoredValue::new(load_config());
    let ui = RwSignal::new(UiState::default());
    provide_context(config);
    provide_context(ui);

    config.with_value(|cfg| {
        theme_resolver(cfg, ui).init();
        tab_router(cfg, ui).sync_from_fragment();
    });

    watch_system_appearance(move || {
        config.with_value(|cfg| theme_resolver(cfg, ui).on_system_change());
    });
    watch_hash_changes(move || {
        config.with_value(|cfg| tab_router(cfg, ui).sync_from_fragment());
    });
    config.with_value(|cfg| service_worker::register(&cfg.offline.script));

    let sections = config.with_value(|cfg| cfg.tabs.section_ids());

    view! {
        <Stylesheet id="pitstop" href="/styles.css"/>
        <Title text="Pitstop"/>

        <Toolbar/>
        <TabBar/>
        <main class="shell">
            {sections
                .into_iter()
                .map(|id| {
                    let active = {
                        let id = id.clone();
                        move || ui.with(|s| s.tab_active(&id))
                    };
                    let body = section_view(&id);
                    view! {
                        <section id=id class="tab-content" class:active=active role="tabpanel">
                            {body}
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </main>
        <ToastContainer/>
    }
}
