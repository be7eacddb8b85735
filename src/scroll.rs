use crate::constants::{END_ATTR, SCRUB_ATTR, START_ATTR};
use crate::core::{measure_progress, ScrollConfig, Scrub, TriggerRect};
use crate::dom;
use web_sys as web;

/// Turns the track element's position in the viewport into timeline progress.
pub struct ScrollDriver {
    track: web::HtmlElement,
    config: ScrollConfig,
    scrub: Scrub,
}

impl ScrollDriver {
    pub fn new(track: web::HtmlElement) -> Self {
        let config = ScrollConfig::default().with_overrides(
            track.get_attribute(SCRUB_ATTR).as_deref(),
            track.get_attribute(START_ATTR).as_deref(),
            track.get_attribute(END_ATTR).as_deref(),
        );
        log::debug!(
            "[scroll] start={:?} end={:?} scrub={}s",
            config.start,
            config.end,
            config.scrub_sec
        );
        Self {
            track,
            scrub: Scrub::new(config.scrub_sec),
            config,
        }
    }

    fn measure(&self) -> f64 {
        let rect = self.track.get_bounding_client_rect();
        measure_progress(
            TriggerRect {
                top: rect.top(),
                height: rect.height(),
            },
            dom::viewport_height(),
            self.config.start,
            self.config.end,
        )
    }

    /// Initial progress, emitted unconditionally on setup.
    pub fn setup(&mut self) -> f64 {
        let p = self.measure();
        self.scrub.snap(p)
    }

    /// Scroll or resize happened. Returns progress to apply now when unscrubbed.
    pub fn on_scroll(&mut self) -> Option<f64> {
        let p = self.measure();
        self.scrub.set_target(p)
    }

    /// Per-frame catch-up of a scrubbed progress.
    pub fn advance(&mut self, dt_sec: f64) -> Option<f64> {
        self.scrub.advance(dt_sec)
    }
}
