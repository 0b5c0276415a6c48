//! Offline worker registration.
//!
//! Registration failure is logged and otherwise ignored: the page works the
//! same online, it just will not load offline.

#[cfg(feature = "csr")]
use wasm_bindgen::JsValue;
#[cfg(feature = "csr")]
use wasm_bindgen_futures::JsFuture;

/// Register the worker script at `script` if the browser supports it.
pub fn register(script: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
        if !supported {
            log::info!("service workers unsupported; offline cache disabled");
            return;
        }
        let promise = navigator.service_worker().register(script);
        let script = script.to_owned();
        leptos::task::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::info!("service worker registered: {script}"),
                Err(err) => log::error!("Service worker registration failed: {err:?}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = script;
    }
}
