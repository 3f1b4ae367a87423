use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Ambient plus one directional light, Phong-shaded.
pub struct LightingOptions {
    /// Ambient light color as `0xRRGGBB`.
    #[schemars(skip)]
    pub ambient_color: u32,
    /// Directional light color as `0xRRGGBB`.
    #[schemars(skip)]
    pub light_color: u32,
    /// Directional light intensity.
    #[schemars(title = "Light Intensity", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub light_intensity: f32,
    /// Position of the directional light; it shines toward the origin.
    #[schemars(skip)]
    pub light_position: [f32; 3],
    /// Specular strength of the Phong material.
    #[schemars(title = "Specular", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub specular: f32,
    /// Phong shininess exponent.
    #[schemars(title = "Shininess", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub shininess: f32,
    /// Background color as `0xRRGGBB`.
    #[schemars(skip)]
    pub clear_color: u32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_color: 0x40_40_40,
            light_color: 0xff_ff_ff,
            light_intensity: 1.0,
            light_position: [1.0, 1.0, 1.0],
            specular: 0.067,
            shininess: 30.0,
            clear_color: 0x00_00_00,
        }
    }
}
