//! Shell configuration loading.
//!
//! The page may embed overrides as
//! `<script type="application/json" id="pitstop-config">{...}</script>`.
//! A missing block means defaults; an invalid one is logged and ignored.

use pitstop::config::{ConfigError, ShellConfig};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONFIG_ELEMENT_ID: &str = "pitstop-config";

/// Resolve the config from an optional inline document.
pub fn config_from_inline(raw: Option<&str>) -> ShellConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return ShellConfig::default();
    };
    match ShellConfig::from_json(raw) {
        Ok(config) => {
            if config.offline.overrides_worker() {
                log::warn!(
                    "#{CONFIG_ELEMENT_ID}: offline cache_name, assets and fallback are fixed in the worker; only offline.script applies"
                );
            }
            config
        }
        Err(e) => {
            log_rejected(&e);
            ShellConfig::default()
        }
    }
}

fn log_rejected(err: &ConfigError) {
    log::error!("#{CONFIG_ELEMENT_ID} ignored, using defaults: {err}");
}

/// Load the config from the current document.
pub fn load() -> ShellConfig {
    #[cfg(feature = "csr")]
    {
        let inline = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        config_from_inline(inline.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        config_from_inline(None)
    }
}
