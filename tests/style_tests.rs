// Host-side tests for CSS value formatting and the hero glitch timer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod glitch {
    include!("../src/core/glitch.rs");
}
mod style {
    include!("../src/core/style.rs");
}

use glitch::Glitch;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hero_transform_uses_fixed_perspective() {
    assert_eq!(
        style::hero_transform(250.0),
        "perspective(1000px) translateZ(250px)"
    );
    assert_eq!(style::hero_transform(0.0), "perspective(1000px) translateZ(0px)");
}

#[test]
fn filters_and_scales() {
    assert_eq!(style::blur_filter(5.0), "blur(5px)");
    assert_eq!(style::blur_filter(2.5), "blur(2.5px)");
    assert_eq!(style::scale_transform(0.95), "scale(0.95)");
    assert_eq!(style::scale_transform(1.0), "scale(1)");
}

#[test]
fn opacity_is_clamped_to_unit_range() {
    assert_eq!(style::opacity(0.875), "0.875");
    assert_eq!(style::opacity(1.0), "1");
    assert_eq!(style::opacity(1.2), "1");
    assert_eq!(style::opacity(-0.1), "0");
}

#[test]
fn pointer_events_follow_the_gate() {
    assert_eq!(style::pointer_events(true), "auto");
    assert_eq!(style::pointer_events(false), "none");
}

#[test]
fn glitch_shadow_splits_colours() {
    assert_eq!(style::glitch_text_shadow(None), "0 0 20px #00ffff");
    assert_eq!(
        style::glitch_text_shadow(Some((2.0, -3.0))),
        "2px -3px 0 #ff00ff, -2px 3px 0 #00ffff"
    );
}

#[test]
fn glitch_is_quiet_before_the_first_interval() {
    let mut g = Glitch::new(0.0);
    let mut rng = StdRng::seed_from_u64(7);
    for ms in (0..2000).step_by(16) {
        assert_eq!(g.advance(ms as f64, &mut rng), None);
    }
    assert_eq!(g.offset(), None);
}

#[test]
fn glitch_offsets_are_bounded_and_short_lived() {
    let mut g = Glitch::new(0.0);
    let mut rng = StdRng::seed_from_u64(1);
    let mut hits = 0;
    let mut now = 0.0;
    // five simulated minutes at ~60 fps
    while now < 300_000.0 {
        now += 16.0;
        if let Some(Some((x, y))) = g.advance(now, &mut rng) {
            hits += 1;
            assert!((-5.0..5.0).contains(&x) && (-5.0..5.0).contains(&y));
            // cleared within the hold window
            let mut t = now;
            loop {
                t += 16.0;
                if let Some(change) = g.advance(t, &mut rng) {
                    assert_eq!(change, None);
                    break;
                }
            }
            assert!(t - now <= 50.0 + 16.0);
            now = t;
        }
    }
    // ~150 rolls at 20%: comfortably between these
    assert!(hits > 10 && hits < 70, "hits = {hits}");
}

#[test]
fn stalled_clock_rolls_once() {
    let mut g = Glitch::new(0.0);
    let mut rng = StdRng::seed_from_u64(3);
    // a long stall must not replay every missed interval
    let _ = g.advance(60_000.0, &mut rng);
    assert_eq!(g.advance(60_016.0, &mut rng).flatten(), None);
    for ms in (60_100..61_900).step_by(100) {
        assert_eq!(g.advance(ms as f64, &mut rng).flatten(), None);
    }
}
