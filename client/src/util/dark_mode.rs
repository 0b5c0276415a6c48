//! Theme glue between the core resolver and the browser.
//!
//! Reads the system appearance through `matchMedia`, writes the effective
//! mode to the `data-theme` attribute on `<html>` and the
//! `dark-preferred`/`light-preferred` classes on `<body>`, and mirrors the
//! rendered view into [`UiState`] so the selection control and quick toggle
//! update reactively.
//!
//! TRADE-OFFS
//! ==========
//! The media-query listener lives for the page's lifetime, so its closure is
//! leaked on purpose. Without `csr` the system is reported as light and the
//! document writes no-op.

use leptos::prelude::*;
use pitstop::config::ShellConfig;
use pitstop::theme::{SystemAppearance, ThemeResolver, ThemeSurface, ThemeView};

use crate::state::ui::UiState;
use crate::util::storage::LocalStore;

#[cfg(feature = "csr")]
use pitstop::theme::DARK_SCHEME_QUERY;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Resolver wired to `localStorage`, `matchMedia` and the document.
pub type BrowserThemeResolver = ThemeResolver<LocalStore, BrowserAppearance, DocumentTheme>;

/// Build a resolver for one interaction. Cheap: every part is a handle.
pub fn theme_resolver(config: &ShellConfig, ui: RwSignal<UiState>) -> BrowserThemeResolver {
    ThemeResolver::new(LocalStore, config.storage.clone(), BrowserAppearance, DocumentTheme { ui })
}

#[cfg(feature = "csr")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// `prefers-color-scheme` as reported by the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAppearance;

impl SystemAppearance for BrowserAppearance {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            dark_scheme_query().map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

/// Writes theme views to `<html>`, `<body>` and the shared UI state.
#[derive(Clone, Copy, Debug)]
pub struct DocumentTheme {
    ui: RwSignal<UiState>,
}

impl ThemeSurface for DocumentTheme {
    fn render(&self, view: &ThemeView) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(root) = doc.document_element() {
                    if let Err(e) = root.set_attribute("data-theme", view.mode.as_str()) {
                        log::warn!("data-theme not set: {e:?}");
                    }
                }
                if let Some(body) = doc.body() {
                    let classes = body.class_list();
                    for (class, enabled) in view.body_classes() {
                        if let Err(e) = classes.toggle_with_force(class, enabled) {
                            log::warn!("body class {class} not toggled: {e:?}");
                        }
                    }
                }
            }
        }
        let view = *view;
        self.ui.update(|s| s.theme = view);
    }
}

/// Call `on_change` whenever the system color scheme flips.
pub fn watch_system_appearance(on_change: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(mq) = dark_scheme_query() else {
            log::warn!("matchMedia unavailable; theme will not follow the system");
            return;
        };
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| on_change());
        if let Err(e) = mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()) {
            log::warn!("color-scheme listener not attached: {e:?}");
            return;
        }
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
