// Host-side tests for scroll markers, progress measurement and scrub smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

const VIEWPORT: f64 = 1000.0;
const TRACK: f64 = 4000.0;

fn rect(scrolled: f64) -> TriggerRect {
    TriggerRect {
        top: -scrolled,
        height: TRACK,
    }
}

fn default_progress(scrolled: f64) -> f64 {
    measure_progress(
        rect(scrolled),
        VIEWPORT,
        ScrollMarker::TOP_TOP,
        ScrollMarker::BOTTOM_BOTTOM,
    )
}

#[test]
fn marker_parsing() {
    assert_eq!(ScrollMarker::parse("top top"), Some(ScrollMarker::TOP_TOP));
    assert_eq!(
        ScrollMarker::parse("  bottom   bottom "),
        Some(ScrollMarker::BOTTOM_BOTTOM)
    );
    assert_eq!(
        ScrollMarker::parse("center bottom"),
        Some(ScrollMarker {
            trigger: Edge::Center,
            viewport: Edge::Bottom,
        })
    );
    assert_eq!(ScrollMarker::parse("top"), None);
    assert_eq!(ScrollMarker::parse("top top top"), None);
    assert_eq!(ScrollMarker::parse("left top"), None);
    assert_eq!(ScrollMarker::parse(""), None);
}

#[test]
fn top_top_to_bottom_bottom_spans_track_minus_viewport() {
    assert_eq!(default_progress(0.0), 0.0);
    assert_eq!(default_progress(1500.0), 0.5);
    assert_eq!(default_progress(3000.0), 1.0);
}

#[test]
fn progress_is_clamped_outside_the_range() {
    assert_eq!(default_progress(-200.0), 0.0);
    assert_eq!(default_progress(3500.0), 1.0);
}

#[test]
fn custom_markers_shift_the_range() {
    // starts when the track top reaches the viewport bottom,
    // ends when the track bottom reaches the viewport top
    let start = ScrollMarker::parse("top bottom").unwrap();
    let end = ScrollMarker::parse("bottom top").unwrap();
    let p = |scrolled: f64| measure_progress(rect(scrolled), VIEWPORT, start, end);
    assert_eq!(p(-1000.0), 0.0);
    assert_eq!(p(1500.0), 0.5);
    assert_eq!(p(4000.0), 1.0);
}

#[test]
fn empty_range_is_all_or_nothing() {
    // track shorter than the viewport: end is reached before start
    let short = TriggerRect {
        top: 0.0,
        height: 500.0,
    };
    let p = measure_progress(
        short,
        VIEWPORT,
        ScrollMarker::TOP_TOP,
        ScrollMarker::BOTTOM_BOTTOM,
    );
    assert_eq!(p, 1.0);
    let below = TriggerRect {
        top: 10.0,
        height: 500.0,
    };
    let p = measure_progress(
        below,
        VIEWPORT,
        ScrollMarker::TOP_TOP,
        ScrollMarker::BOTTOM_BOTTOM,
    );
    assert_eq!(p, 0.0);
}

#[test]
fn first_advance_emits_the_initial_target() {
    let mut s = Scrub::new(1.0);
    assert_eq!(s.current(), None);
    assert_eq!(s.advance(0.016), Some(0.0));
    assert_eq!(s.advance(0.016), None);
}

#[test]
fn snap_sets_both_target_and_current() {
    let mut s = Scrub::new(1.0);
    assert_eq!(s.snap(0.4), 0.4);
    assert_eq!(s.current(), Some(0.4));
    assert_eq!(s.target(), 0.4);
    assert_eq!(s.advance(0.016), None);
}

#[test]
fn scrubbed_progress_lags_then_converges() {
    let mut s = Scrub::new(1.0);
    s.snap(0.0);
    assert_eq!(s.set_target(1.0), None);

    let first = s.advance(0.016).expect("moved");
    assert!(first > 0.0 && first < 0.2, "first step {first}");

    let mut last = first;
    let mut elapsed = 0.016;
    while let Some(p) = s.advance(0.016) {
        assert!(p >= last, "scrub went backwards");
        last = p;
        elapsed += 0.016;
        assert!(elapsed < 5.0, "scrub never settled");
    }
    assert_eq!(s.current(), Some(1.0));
    // roughly one scrub period to settle
    assert!(elapsed > 0.5 && elapsed < 3.0, "settled after {elapsed}s");
}

#[test]
fn scrub_follows_reversals() {
    let mut s = Scrub::new(1.0);
    s.snap(0.8);
    s.set_target(0.2);
    let p = s.advance(0.1).expect("moved");
    assert!(p < 0.8 && p > 0.2);
}

#[test]
fn immediate_scrub_emits_on_set_target() {
    let mut s = Scrub::new(0.0);
    s.snap(0.0);
    assert_eq!(s.set_target(0.3), Some(0.3));
    assert_eq!(s.set_target(0.3), None);
    assert_eq!(s.advance(0.016), None);
}

#[test]
fn negative_scrub_is_immediate() {
    assert!(Scrub::new(-1.0).is_immediate());
}

#[test]
fn zero_dt_does_not_move() {
    let mut s = Scrub::new(1.0);
    s.snap(0.0);
    s.set_target(1.0);
    assert_eq!(s.advance(0.0), None);
}

#[test]
fn targets_are_clamped() {
    let mut s = Scrub::new(0.0);
    s.snap(0.5);
    assert_eq!(s.set_target(2.0), Some(1.0));
    assert_eq!(s.set_target(-1.0), Some(0.0));
}

#[test]
fn config_defaults_and_overrides() {
    let c = ScrollConfig::default();
    assert_eq!(c.start, ScrollMarker::TOP_TOP);
    assert_eq!(c.end, ScrollMarker::BOTTOM_BOTTOM);
    assert_eq!(c.scrub_sec, constants::DEFAULT_SCRUB_SEC);

    let c = ScrollConfig::default().with_overrides(Some(" 0.5 "), Some("center center"), None);
    assert_eq!(c.scrub_sec, 0.5);
    assert_eq!(c.start, ScrollMarker::parse("center center").unwrap());
    assert_eq!(c.end, ScrollMarker::BOTTOM_BOTTOM);
}

#[test]
fn bad_overrides_are_ignored() {
    let c = ScrollConfig::default().with_overrides(Some("fast"), Some("sideways"), Some("-"));
    assert_eq!(c, ScrollConfig::default());
    let c = ScrollConfig::default().with_overrides(Some("-2"), None, None);
    assert_eq!(c.scrub_sec, constants::DEFAULT_SCRUB_SEC);
}
