use glam::Vec3;

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Owns the camera and knows where "home" is.
///
/// The camera always looks at the origin; the molecule rotates, the camera
/// does not.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// Current camera state.
    pub camera: Camera,
    home_distance: f32,
}

impl CameraController {
    /// Camera at its home position for a `width` x `height` viewport.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, options.home_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            camera,
            home_distance: options.home_distance,
        }
    }

    /// Move the camera back to `(0, 0, home_distance)` looking at the
    /// origin. Projection parameters are untouched.
    pub fn reset(&mut self) {
        self.camera.eye = Vec3::new(0.0, 0.0, self.home_distance);
        self.camera.target = Vec3::ZERO;
        self.camera.up = Vec3::Y;
    }

    /// Recompute the aspect ratio. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = aspect_ratio(width, height);
        }
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
