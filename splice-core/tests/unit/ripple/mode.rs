use super::*;

#[test]
fn defaults_are_off() {
    let mode = RippleMode::default();
    assert!(!mode.is_enabled());
    assert!(!mode.all_tracks);
}

#[test]
fn toggle_flips_enabled() {
    let mut mode = RippleMode::default();
    mode.toggle();
    assert!(mode.is_enabled());
    mode.toggle();
    assert!(!mode.is_enabled());
}

#[test]
fn set_enabled_is_idempotent() {
    let mut mode = RippleMode::default();
    mode.set_enabled(true);
    mode.set_enabled(true);
    assert!(mode.is_enabled());
    mode.set_enabled(false);
    assert!(!mode.is_enabled());
}

#[test]
fn serde_shape_is_camel_case() {
    let mode = RippleMode {
        enabled: true,
        all_tracks: true,
    };
    let json = serde_json::to_string(&mode).unwrap();
    assert_eq!(json, r#"{"enabled":true,"allTracks":true}"#);
}
