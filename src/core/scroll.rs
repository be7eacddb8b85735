use super::constants::DEFAULT_SCRUB_SEC;
use std::str::FromStr;

/// Vertical anchor on either the trigger element or the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    #[inline]
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

impl FromStr for Edge {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            _ => Err(()),
        }
    }
}

/// A scroll position expressed as "<trigger edge> meets <viewport edge>",
/// e.g. `"top top"` or `"bottom bottom"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollMarker {
    pub trigger: Edge,
    pub viewport: Edge,
}

impl ScrollMarker {
    pub const TOP_TOP: ScrollMarker = ScrollMarker {
        trigger: Edge::Top,
        viewport: Edge::Top,
    };
    pub const BOTTOM_BOTTOM: ScrollMarker = ScrollMarker {
        trigger: Edge::Bottom,
        viewport: Edge::Bottom,
    };

    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let trigger = parts.next()?.parse().ok()?;
        let viewport = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { trigger, viewport })
    }

    /// Scroll distance past the trigger's top at which this marker is reached.
    #[inline]
    fn offset(self, trigger_height: f64, viewport_height: f64) -> f64 {
        self.trigger.fraction() * trigger_height - self.viewport.fraction() * viewport_height
    }
}

/// Trigger element geometry in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRect {
    pub top: f64,
    pub height: f64,
}

/// Progress through `[start, end]` for the current trigger position, clamped to `[0, 1]`.
pub fn measure_progress(
    rect: TriggerRect,
    viewport_height: f64,
    start: ScrollMarker,
    end: ScrollMarker,
) -> f64 {
    let a = start.offset(rect.height, viewport_height);
    let b = end.offset(rect.height, viewport_height);
    let scrolled = -rect.top;
    let span = b - a;
    if span <= 0.0 {
        return if scrolled >= a { 1.0 } else { 0.0 };
    }
    ((scrolled - a) / span).clamp(0.0, 1.0)
}

// Below this distance the scrub snaps onto its target
const SCRUB_SNAP_EPS: f64 = 1e-4;

/// Lagged follower that binds emitted progress to the measured scroll target.
///
/// `scrub_sec` is roughly how long it takes to catch up; zero disables lag.
#[derive(Clone, Debug)]
pub struct Scrub {
    scrub_sec: f64,
    target: f64,
    current: Option<f64>,
}

impl Scrub {
    pub fn new(scrub_sec: f64) -> Self {
        Self {
            scrub_sec: scrub_sec.max(0.0),
            target: 0.0,
            current: None,
        }
    }

    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.scrub_sec == 0.0
    }

    #[inline]
    pub fn current(&self) -> Option<f64> {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Jump straight to `target`, returning it. Used on setup and in immediate mode.
    pub fn snap(&mut self, target: f64) -> f64 {
        let t = target.clamp(0.0, 1.0);
        self.target = t;
        self.current = Some(t);
        t
    }

    /// Record a new target. Returns the progress to emit right away when the
    /// scrub is immediate and the value changed.
    pub fn set_target(&mut self, target: f64) -> Option<f64> {
        let t = target.clamp(0.0, 1.0);
        self.target = t;
        if self.is_immediate() {
            if self.current == Some(t) {
                return None;
            }
            self.current = Some(t);
            return Some(t);
        }
        None
    }

    /// Advance the follower by `dt_sec`. Returns the new progress only when it moved.
    pub fn advance(&mut self, dt_sec: f64) -> Option<f64> {
        let cur = match self.current {
            Some(c) => c,
            None => return Some(self.snap(self.target)),
        };
        if cur == self.target {
            return None;
        }
        let next = if self.is_immediate() {
            self.target
        } else {
            let tau = self.scrub_sec / 4.0;
            let alpha = 1.0 - (-dt_sec.max(0.0) / tau).exp();
            let n = cur + (self.target - cur) * alpha;
            if (self.target - n).abs() < SCRUB_SNAP_EPS {
                self.target
            } else {
                n
            }
        };
        if next == cur {
            return None;
        }
        self.current = Some(next);
        Some(next)
    }
}

/// Scroll observation settings: where the tracked region starts and ends and
/// how much the emitted progress lags behind the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub start: ScrollMarker,
    pub end: ScrollMarker,
    pub scrub_sec: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            start: ScrollMarker::TOP_TOP,
            end: ScrollMarker::BOTTOM_BOTTOM,
            scrub_sec: DEFAULT_SCRUB_SEC,
        }
    }
}

impl ScrollConfig {
    /// Apply page-supplied overrides. Unparseable values keep the current setting.
    pub fn with_overrides(
        mut self,
        scrub: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Self {
        if let Some(s) = scrub.and_then(|s| s.trim().parse::<f64>().ok()) {
            if s.is_finite() && s >= 0.0 {
                self.scrub_sec = s;
            }
        }
        if let Some(m) = start.and_then(ScrollMarker::parse) {
            self.start = m;
        }
        if let Some(m) = end.and_then(ScrollMarker::parse) {
            self.end = m;
        }
        self
    }
}
