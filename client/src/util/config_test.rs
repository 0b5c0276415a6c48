use super::*;

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(config_from_inline(None), ShellConfig::default());
}

#[test]
fn blank_block_uses_defaults() {
    assert_eq!(config_from_inline(Some("  \n ")), ShellConfig::default());
}

#[test]
fn valid_block_overrides_defaults() {
    let cfg = config_from_inline(Some(r#"{"toast": {"duration_ms": 5000}}"#));
    assert_eq!(cfg.toast.duration_ms, 5000);
    assert_eq!(cfg.tabs.home, "dashboard");
}

#[test]
fn invalid_block_falls_back_to_defaults() {
    let cfg = config_from_inline(Some(r#"{"tabs": {"home": "nowhere"}}"#));
    assert_eq!(cfg, ShellConfig::default());
}

#[test]
fn offline_override_is_kept_but_flagged() {
    let cfg = config_from_inline(Some(
        r#"{"offline": {"cache_name": "pitstop-cache-v2", "script": "/worker.js"}}"#,
    ));
    assert_eq!(cfg.offline.script, "/worker.js");
    assert!(cfg.offline.overrides_worker());
}

#[test]
fn load_outside_browser_is_default() {
    assert_eq!(load(), ShellConfig::default());
}
