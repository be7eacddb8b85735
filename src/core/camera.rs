use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z_START};
use glam::{Mat4, Vec3};

/// Perspective camera on the Z axis looking down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub z: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_DEG,
            aspect: sanitize_aspect(aspect),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            z: CAMERA_Z_START as f32,
        }
    }

    /// Update aspect from a raster size. Safe to call repeatedly.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = sanitize_aspect(width as f32 / height.max(1) as f32);
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.z)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
