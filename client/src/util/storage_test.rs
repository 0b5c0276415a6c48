#![cfg(not(feature = "csr"))]

use pitstop::config::StorageKeys;
use pitstop::prefs::{Preferences, ThemePreference, Units};

use super::*;

#[test]
fn reads_find_nothing_outside_the_browser() {
    assert_eq!(LocalStore.get("pitstop-theme"), None);
}

#[test]
fn writes_report_unavailable_outside_the_browser() {
    let err = LocalStore.set("pitstop-theme", "dark").expect_err("no storage");
    assert!(matches!(err, PrefsError::Unavailable));
}

#[test]
fn typed_reads_fall_back_to_defaults() {
    let prefs = Preferences::new(LocalStore, StorageKeys::default());
    assert_eq!(prefs.theme(), ThemePreference::Auto);
    assert_eq!(prefs.units(), Units::Miles);
}
