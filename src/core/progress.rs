use super::constants::*;
use super::scene::SceneState;

/// Style targets for the hero layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub translate_z: f64,
    pub opacity: f64,
    pub blur_px: f64,
}

/// Style targets for the content layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentStyle {
    pub opacity: f64,
    pub scale: f64,
}

/// Everything derived from a single progress value.
///
/// `passed_portal` gates pointer hit-testing on the content layer. It is part
/// of the same value as the styles so callers apply both in one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub scene: SceneState,
    pub hero: HeroStyle,
    pub content: ContentStyle,
    pub passed_portal: bool,
}

impl Default for VisualState {
    fn default() -> Self {
        map_progress(0.0)
    }
}

/// Which half of the timeline a progress value falls in, with its local
/// parameter renormalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Hero flies at the viewer, object drifts closer. `t ∈ [0, 1)`.
    Approach { t: f64 },
    /// Camera and object cross, content fades in at the end. `u ∈ [0, 1]`.
    Transit { u: f64 },
}

impl Phase {
    pub fn of(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        if p < PHASE_SPLIT {
            Phase::Approach { t: p * 2.0 }
        } else {
            Phase::Transit {
                u: (p - PHASE_SPLIT) * 2.0,
            }
        }
    }
}

/// Map scroll progress to the full visual state.
///
/// Pure and total: the same input always yields a bit-identical result, and
/// every field is recomputed, so reversing the scroll never leaves stale values
/// behind. The jump at the phase split is part of the choreography.
pub fn map_progress(progress: f64) -> VisualState {
    match Phase::of(progress) {
        Phase::Approach { t } => approach(t),
        Phase::Transit { u } => transit(u),
    }
}

fn approach(t: f64) -> VisualState {
    VisualState {
        scene: SceneState {
            object_z: OBJECT_Z_START + t * (OBJECT_Z_PORTAL - OBJECT_Z_START),
            ..SceneState::default()
        },
        hero: HeroStyle {
            translate_z: t * HERO_TRANSLATE_Z_MAX,
            // cubic: barely fades early, drops sharply near the split
            opacity: 1.0 - t * t * t,
            blur_px: t * HERO_BLUR_MAX,
        },
        content: hidden_content(),
        passed_portal: false,
    }
}

fn transit(u: f64) -> VisualState {
    // Tail ramps are written as (1 - u) / 0.4 and 5u - 4 rather than
    // 1 - (u - 0.6) * 2.5 and (u - 0.8) * 5 so u = 1 lands on 0 and 1 exactly.
    let object_opacity = if u > OBJECT_FADE_START {
        (1.0 - u) / (1.0 - OBJECT_FADE_START)
    } else {
        1.0
    };
    let passed_portal = u > CONTENT_REVEAL_START;
    let content = if passed_portal {
        let fade = u * 5.0 - 4.0;
        ContentStyle {
            opacity: fade,
            scale: 1.0 - (1.0 - fade) * (1.0 - CONTENT_SCALE_START),
        }
    } else {
        hidden_content()
    };

    VisualState {
        scene: SceneState {
            object_z: OBJECT_Z_PORTAL + u * (OBJECT_Z_END - OBJECT_Z_PORTAL),
            object_scale: 1.0 + u * OBJECT_SCALE_GROWTH,
            object_opacity,
            camera_z: CAMERA_Z_START + u * (CAMERA_Z_END - CAMERA_Z_START),
        },
        hero: HeroStyle {
            translate_z: HERO_TRANSLATE_Z_MAX,
            opacity: 0.0,
            blur_px: HERO_BLUR_MAX,
        },
        content,
        passed_portal,
    }
}

#[inline]
fn hidden_content() -> ContentStyle {
    ContentStyle {
        opacity: 0.0,
        scale: CONTENT_SCALE_START,
    }
}
