use super::constants::*;
use rand::Rng;

/// Text-shadow offset for the hero title; `None` means the steady glow.
pub type GlitchOffset = Option<(f32, f32)>;

/// Periodic chromatic "glitch" on the hero title.
///
/// Every interval it rolls once; a hit shows an offset for a short hold and
/// then clears. Time is supplied by the caller in milliseconds.
#[derive(Clone, Debug)]
pub struct Glitch {
    next_roll_ms: f64,
    clear_at_ms: Option<f64>,
    offset: GlitchOffset,
}

impl Glitch {
    pub fn new(now_ms: f64) -> Self {
        Self {
            next_roll_ms: now_ms + GLITCH_INTERVAL_MS,
            clear_at_ms: None,
            offset: None,
        }
    }

    #[inline]
    pub fn offset(&self) -> GlitchOffset {
        self.offset
    }

    /// Advance to `now_ms`. Returns the new offset when it changed.
    pub fn advance<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> Option<GlitchOffset> {
        let mut changed = false;
        if let Some(t) = self.clear_at_ms {
            if now_ms >= t {
                self.clear_at_ms = None;
                self.offset = None;
                changed = true;
            }
        }
        if now_ms >= self.next_roll_ms {
            // a stalled tab may skip many intervals; roll once and resync
            self.next_roll_ms = now_ms + GLITCH_INTERVAL_MS;
            if rng.gen::<f64>() < GLITCH_CHANCE {
                let x = rng.gen_range(-GLITCH_MAX_OFFSET_PX..GLITCH_MAX_OFFSET_PX);
                let y = rng.gen_range(-GLITCH_MAX_OFFSET_PX..GLITCH_MAX_OFFSET_PX);
                self.offset = Some((x, y));
                self.clear_at_ms = Some(now_ms + GLITCH_HOLD_MS);
                changed = true;
            }
        }
        changed.then_some(self.offset)
    }
}
