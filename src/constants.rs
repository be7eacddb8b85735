// Page wiring. Element ids form the contract with the host page; scroll
// defaults can be overridden per page with `data-*` attributes on the track.

// Required mounting surfaces
pub const CANVAS_ID: &str = "portal-canvas";
pub const TRACK_ID: &str = "scroll-track";
pub const HERO_ID: &str = "hero-layer";
pub const CONTENT_ID: &str = "content-layer";

// Optional decorations
pub const HERO_TITLE_ID: &str = "hero-title";
pub const INDICATOR_ID: &str = "scroll-indicator";

// Scroll observation overrides on the track element
pub const SCRUB_ATTR: &str = "data-scrub";
pub const START_ATTR: &str = "data-start";
pub const END_ATTR: &str = "data-end";

// Raster
pub const MAX_PIXEL_RATIO: f64 = 2.0;
