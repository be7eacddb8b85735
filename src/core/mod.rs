pub mod camera;
pub mod constants;
pub mod geometry;
pub mod glitch;
pub mod mount;
pub mod progress;
pub mod scene;
pub mod scroll;
pub mod style;

pub use camera::PerspectiveCamera;
pub use geometry::{particle_field, torus_knot_wireframe, LineVertex, TorusKnotParams, Wireframe};
pub use glitch::{Glitch, GlitchOffset};
pub use mount::MountSlot;
pub use progress::{map_progress, ContentStyle, HeroStyle, Phase, VisualState};
pub use scene::{IdleSpin, SceneState};
pub use scroll::{measure_progress, ScrollConfig, ScrollMarker, Scrub, TriggerRect};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
