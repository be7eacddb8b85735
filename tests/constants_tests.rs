// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_thresholds_are_ordered() {
    // Phase split sits strictly inside the timeline
    assert!(PHASE_SPLIT > 0.0 && PHASE_SPLIT < 1.0);

    // Object fades before content starts to show
    assert!(OBJECT_FADE_START > 0.0);
    assert!(CONTENT_REVEAL_START > OBJECT_FADE_START);
    assert!(CONTENT_REVEAL_START < 1.0);

    // Content grows into place
    assert!(CONTENT_SCALE_START > 0.0 && CONTENT_SCALE_START < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flight_path_moves_forward() {
    assert!(OBJECT_Z_START < OBJECT_Z_PORTAL);
    assert!(OBJECT_Z_PORTAL < OBJECT_Z_END);
    assert!(CAMERA_Z_END < CAMERA_Z_START);

    // Object ends up behind the camera once it has been flown through
    assert!(OBJECT_Z_END > CAMERA_Z_END);
    assert!(OBJECT_SCALE_GROWTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_usable() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);

    // The whole flight stays within the far plane
    let deepest = (CAMERA_Z_START - OBJECT_Z_START) as f32;
    assert!(deepest < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glitch_timing_is_consistent() {
    assert!(GLITCH_HOLD_MS > 0.0);
    assert!(GLITCH_HOLD_MS < GLITCH_INTERVAL_MS);
    assert!(GLITCH_CHANCE > 0.0 && GLITCH_CHANCE < 1.0);
    assert!(GLITCH_MAX_OFFSET_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_wiring_defaults() {
    let ids = [CANVAS_ID, TRACK_ID, HERO_ID, CONTENT_ID, HERO_TITLE_ID, INDICATOR_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    for attr in [SCRUB_ATTR, START_ATTR, END_ATTR] {
        assert!(attr.starts_with("data-"));
    }
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(DEFAULT_SCRUB_SEC > 0.0);
}
