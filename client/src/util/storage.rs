//! `localStorage`-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the browser-only read/write glue so theme and units controls
//! share one [`PreferenceStore`] implementation. Without `csr` reads find
//! nothing and writes report the store as unavailable.

use pitstop::prefs::{PreferenceStore, PrefsError};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Handle to `window.localStorage`. Holds nothing; every call goes to the
/// browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(PrefsError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| PrefsError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(PrefsError::Unavailable)
        }
    }
}
