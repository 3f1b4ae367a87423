//! Camera, lights, rotation flag and the frame loop.

use glam::{Mat4, Vec2};

use super::frame::FrameView;
use crate::camera::controller::CameraController;
use crate::camera::core::CameraUniform;
use crate::catalog::Color;
use crate::options::Options;
use crate::scene::SceneGroup;
use crate::util::lighting::LightingUniform;

/// Explicit lifecycle for the per-frame loop.
///
/// Hosts drive the loop from their own refresh callback; a stopped loop
/// performs no steps and requests no rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    /// A running loop with no frames elapsed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    /// Resume stepping.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop stepping until [`start`](Self::start) is called again.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether frames are currently stepped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames stepped so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn tick(&mut self) -> bool {
        if self.running {
            self.frames += 1;
        }
        self.running
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the camera, the light rig and the rotation flag, and advances the
/// active group's tumble once per frame.
#[derive(Debug, Clone)]
pub struct ViewportController {
    camera: CameraController,
    lighting: LightingUniform,
    clear_color: [f32; 3],
    rotating: bool,
    /// Radians per frame: x = horizontal axis, y = vertical axis.
    rotation_speed: Vec2,
    frame_loop: FrameLoop,
    size: (u32, u32),
}

impl ViewportController {
    /// Viewport for a `width` x `height` surface.
    #[must_use]
    pub fn new(options: &Options, width: u32, height: u32) -> Self {
        Self {
            camera: CameraController::new(&options.camera, width, height),
            lighting: LightingUniform::from_options(&options.lighting),
            clear_color: Color(options.lighting.clear_color).to_linear_f32(),
            rotating: options.animation.rotate_on_start,
            rotation_speed: Vec2::new(
                options.animation.rotation_speed_x,
                options.animation.rotation_speed_y,
            ),
            frame_loop: FrameLoop::new(),
            size: (width.max(1), height.max(1)),
        }
    }

    /// Advance one frame.
    ///
    /// Rotates `group` when rotation is enabled. Returns `false` without
    /// touching anything when the loop is stopped.
    pub fn step(&mut self, group: Option<&mut SceneGroup>) -> bool {
        if !self.frame_loop.tick() {
            return false;
        }
        if self.rotating {
            if let Some(group) = group {
                group.rotate_by(self.rotation_speed);
            }
        }
        true
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn frame_view<'a>(
        &self,
        group: Option<&'a SceneGroup>,
        generation: u64,
    ) -> FrameView<'a> {
        let mut camera = CameraUniform::new();
        camera.update_view_proj(&self.camera.camera);
        FrameView {
            camera,
            lighting: self.lighting,
            clear_color: self.clear_color,
            size: self.size,
            group,
            model: group.map_or(Mat4::IDENTITY, SceneGroup::transform),
            generation,
        }
    }

    /// React to a container resize: new aspect ratio, new surface size.
    /// Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.resize(width, height);
        self.size = (width, height);
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Move the camera back to its home position.
    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    /// Flip the rotation flag; takes effect on the next frame. Returns the
    /// new state.
    pub fn toggle_rotation(&mut self) -> bool {
        self.rotating = !self.rotating;
        self.rotating
    }

    /// Whether the tumble rotation is enabled.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Resume the frame loop.
    pub fn start(&mut self) {
        self.frame_loop.start();
    }

    /// Stop the frame loop; [`step`](Self::step) becomes a no-op.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }

    /// Whether the frame loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// The frame loop lifecycle.
    #[must_use]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera controller.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// Current surface size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}
