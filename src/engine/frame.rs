//! Per-frame snapshot handed from the viewer to a renderer.

use glam::Mat4;

use crate::camera::core::CameraUniform;
use crate::scene::SceneGroup;
use crate::util::lighting::LightingUniform;

/// Everything a renderer needs to draw one frame.
///
/// Produced every frame, whether or not a molecule is shown.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Camera matrices.
    pub camera: CameraUniform,
    /// Light rig.
    pub lighting: LightingUniform,
    /// Background color (linear RGB).
    pub clear_color: [f32; 3],
    /// Viewport size in physical pixels.
    pub size: (u32, u32),
    /// The displayed molecule, if any.
    pub group: Option<&'a SceneGroup>,
    /// Group-to-world transform (identity when no group is shown).
    pub model: Mat4,
    /// Bumped every time the displayed group is replaced or removed.
    pub generation: u64,
}

impl FrameView<'_> {
    /// Number of primitives to draw.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.group.map_or(0, SceneGroup::len)
    }
}

/// Something that can draw a [`FrameView`]: the wgpu renderer, or a
/// recording stand-in in tests.
pub trait FrameRenderer {
    /// Error produced when a frame cannot be drawn.
    type Error;

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Implementation-specific; the wgpu renderer reports surface errors.
    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;
}
