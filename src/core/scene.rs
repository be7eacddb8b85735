use super::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::TAU;

/// Progress-driven pose of the portal object and the camera.
///
/// Written only by the progress mapper; the render loop reads it every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneState {
    pub object_z: f64,
    pub object_scale: f64,
    pub object_opacity: f64,
    pub camera_z: f64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            object_z: OBJECT_Z_START,
            object_scale: 1.0,
            object_opacity: 1.0,
            camera_z: CAMERA_Z_START,
        }
    }
}

impl SceneState {
    /// Model matrix for the knot: scroll-driven translation and scale, idle-driven rotation.
    pub fn knot_model(&self, spin: &IdleSpin) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.object_scale as f32),
            Quat::from_euler(EulerRot::XYZ, spin.knot_x, spin.knot_y, 0.0),
            Vec3::new(0.0, 0.0, self.object_z as f32),
        )
    }
}

/// Idle rotation accumulated once per display frame, independent of scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdleSpin {
    pub knot_x: f32,
    pub knot_y: f32,
    pub particles_y: f32,
}

impl IdleSpin {
    pub fn step(&mut self) {
        self.knot_x = wrap_angle(self.knot_x + KNOT_SPIN_PER_FRAME);
        self.knot_y = wrap_angle(self.knot_y + KNOT_SPIN_PER_FRAME);
        self.particles_y = wrap_angle(self.particles_y + PARTICLE_SPIN_PER_FRAME);
    }

    pub fn particles_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.particles_y)
    }
}

#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if w >= TAU {
        0.0
    } else {
        w
    }
}
