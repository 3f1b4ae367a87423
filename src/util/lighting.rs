use glam::Vec3;

use crate::catalog::Color;
use crate::options::LightingOptions;

/// Lighting shared by the sphere and cylinder shaders.
/// NOTE: Must match WGSL struct layout exactly (48 bytes)
///
/// WGSL layout (auto-padded):
///   ambient: vec3<f32>        (offset 0,  align 16)
///   specular: f32             (offset 12)
///   light_color: vec3<f32>    (offset 16, align 16)
///   shininess: f32            (offset 28)
///   light_dir: vec3<f32>      (offset 32, align 16)
///   _pad: f32                 (offset 44)
///   Total: 48 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Ambient light color (linear).
    pub ambient: [f32; 3],
    /// Specular strength.
    pub specular: f32,
    /// Directional light color premultiplied by its intensity (linear).
    pub light_color: [f32; 3],
    /// Phong shininess exponent.
    pub shininess: f32,
    /// Unit vector pointing from the scene toward the light.
    pub light_dir: [f32; 3],
    pub(crate) _pad: f32,
}

impl LightingUniform {
    /// Derive the uniform from user options.
    ///
    /// A light positioned at the origin falls back to shining straight
    /// down the view axis.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let light_dir = Vec3::from_array(options.light_position)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let light_color = Vec3::from_array(Color(options.light_color).to_linear_f32())
            * options.light_intensity;
        Self {
            ambient: Color(options.ambient_color).to_linear_f32(),
            specular: options.specular,
            light_color: light_color.to_array(),
            shininess: options.shininess,
            light_dir: light_dir.to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_48_bytes() {
        assert_eq!(size_of::<LightingUniform>(), 48);
    }

    #[test]
    fn default_light_comes_from_upper_right_front() {
        let uniform = LightingUniform::default();
        let expected = Vec3::ONE.normalize().to_array();
        for (a, b) in uniform.light_dir.iter().zip(expected) {
            assert!((a - b).abs() < 1e-6);
        }
        assert_eq!(uniform.light_color, [1.0, 1.0, 1.0]);
        assert!(uniform.ambient[0] > 0.0 && uniform.ambient[0] < 0.1);
    }

    #[test]
    fn light_at_origin_falls_back_to_view_axis() {
        let options = LightingOptions {
            light_position: [0.0, 0.0, 0.0],
            ..LightingOptions::default()
        };
        assert_eq!(LightingUniform::from_options(&options).light_dir, [0.0, 0.0, 1.0]);
    }
}
