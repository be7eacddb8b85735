use super::constants::HERO_PERSPECTIVE_PX;
use super::glitch::GlitchOffset;

// CSS values written onto the hero/content layers.

#[inline]
pub fn hero_transform(translate_z: f64) -> String {
    format!(
        "perspective({}px) translateZ({}px)",
        HERO_PERSPECTIVE_PX, translate_z
    )
}

#[inline]
pub fn blur_filter(blur_px: f64) -> String {
    format!("blur({}px)", blur_px)
}

#[inline]
pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}

#[inline]
pub fn opacity(value: f64) -> String {
    format!("{}", value.clamp(0.0, 1.0))
}

#[inline]
pub fn pointer_events(interactive: bool) -> &'static str {
    if interactive {
        "auto"
    } else {
        "none"
    }
}

pub fn glitch_text_shadow(offset: GlitchOffset) -> String {
    match offset {
        Some((x, y)) => format!(
            "{}px {}px 0 #ff00ff, {}px {}px 0 #00ffff",
            x, y, -x, -y
        ),
        None => "0 0 20px #00ffff".to_string(),
    }
}
