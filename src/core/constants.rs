// Timeline and scene tuning shared by the mapper, the render loop and the tests.

// Phase split: below this the hero approaches, at or above it the object is flown through
pub const PHASE_SPLIT: f64 = 0.5;

// Seconds the emitted progress takes to catch up with the scroll position
pub const DEFAULT_SCRUB_SEC: f64 = 1.0;

// Initial scene pose
pub const OBJECT_Z_START: f64 = -200.0;
pub const OBJECT_Z_PORTAL: f64 = -100.0; // object z where transit begins
pub const OBJECT_Z_END: f64 = 100.0;
pub const CAMERA_Z_START: f64 = 50.0;
pub const CAMERA_Z_END: f64 = -50.0;
pub const OBJECT_SCALE_GROWTH: f64 = 2.0; // scale = 1 + u * growth

// Hero flight (phase A)
pub const HERO_TRANSLATE_Z_MAX: f64 = 500.0; // px
pub const HERO_BLUR_MAX: f64 = 10.0; // px
pub const HERO_PERSPECTIVE_PX: f64 = 1000.0;

// Transit thresholds (phase B, in local u)
pub const OBJECT_FADE_START: f64 = 0.6;
pub const CONTENT_REVEAL_START: f64 = 0.8;
pub const CONTENT_SCALE_START: f64 = 0.9;

// Idle rotation per display frame (radians)
pub const KNOT_SPIN_PER_FRAME: f32 = 0.005;
pub const PARTICLE_SPIN_PER_FRAME: f32 = -0.002;

// Torus knot wireframe
pub const KNOT_RADIUS: f32 = 10.0;
pub const KNOT_TUBE: f32 = 3.0;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;
pub const KNOT_COLOR: [f32; 3] = [0.0, 1.0, 1.0]; // #00ffff

// Particle field
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_SPREAD: f32 = 100.0; // cube edge, centred on origin
pub const PARTICLE_SEED: u64 = 42;
pub const PARTICLE_COLOR: [f32; 3] = [1.0, 0.0, 1.0]; // #ff00ff

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Hero glitch
pub const GLITCH_INTERVAL_MS: f64 = 2000.0;
pub const GLITCH_HOLD_MS: f64 = 50.0;
pub const GLITCH_CHANCE: f64 = 0.2;
pub const GLITCH_MAX_OFFSET_PX: f32 = 5.0;
