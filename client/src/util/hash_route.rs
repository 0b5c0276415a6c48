//! Fragment routing glue for the tab router.
//!
//! `#name` in the address bar selects the tab. Navigation pushes a history
//! entry with `pushState` so the page never reloads; `hashchange` (manual
//! edits, back/forward) re-syncs the tabs from the fragment.

use leptos::prelude::*;
use pitstop::config::ShellConfig;
use pitstop::tabs::{History, NavError, TabLayout, TabRouter, TabSelection, TabSurface};

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(test)]
#[path = "hash_route_test.rs"]
mod hash_route_test;

pub type BrowserTabRouter = TabRouter<BrowserHistory, SignalTabs>;

/// Build a router over the configured sections.
pub fn tab_router(config: &ShellConfig, ui: RwSignal<UiState>) -> BrowserTabRouter {
    let layout = TabLayout::from_sections(config.tabs.section_ids());
    TabRouter::new(layout, config.tabs.home.clone(), BrowserHistory, SignalTabs { ui })
}

/// `window.location` / `window.history`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn fragment(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn push_fragment(&self, name: &str) -> Result<(), NavError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or_else(|| NavError("no window".to_owned()))?;
            let history = window.history().map_err(|e| NavError(format!("{e:?}")))?;
            history
                .push_state_with_url(&JsValue::NULL, "", Some(&format!("#{name}")))
                .map_err(|e| NavError(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            Err(NavError("history unavailable outside the browser".to_owned()))
        }
    }
}

/// Publishes tab selections to [`UiState`]; sections and buttons bind to it.
#[derive(Clone, Copy, Debug)]
pub struct SignalTabs {
    ui: RwSignal<UiState>,
}

impl TabSurface for SignalTabs {
    fn render(&self, selection: &TabSelection) {
        let selection = selection.clone();
        self.ui.update(|s| s.tabs = selection);
    }
}

/// Call `on_change` on every `hashchange` event.
pub fn watch_hash_changes(on_change: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| on_change());
        if let Err(e) = window.add_event_listener_with_callback("hashchange", cb.as_ref().unchecked_ref()) {
            log::warn!("hashchange listener not attached: {e:?}");
            return;
        }
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
