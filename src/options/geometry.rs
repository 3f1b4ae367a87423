use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizes, bond color and tessellation of ball-and-stick primitives.
pub struct GeometryOptions {
    /// Sphere radius for every element except hydrogen.
    #[schemars(title = "Atom Radius", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub atom_radius: f32,
    /// Sphere radius for hydrogen.
    #[schemars(title = "Hydrogen Radius", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub hydrogen_radius: f32,
    /// Bond cylinder radius.
    #[schemars(title = "Bond Radius", range(min = 0.01, max = 0.3), extend("step" = 0.01))]
    pub bond_radius: f32,
    /// Bond color as `0xRRGGBB`.
    #[schemars(skip)]
    pub bond_color: u32,
    /// Sphere segments around the equator.
    #[schemars(skip)]
    pub sphere_width_segments: u32,
    /// Sphere segments from pole to pole.
    #[schemars(skip)]
    pub sphere_height_segments: u32,
    /// Cylinder segments around the axis.
    #[schemars(skip)]
    pub cylinder_radial_segments: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            atom_radius: 0.3,
            hydrogen_radius: 0.2,
            bond_radius: 0.05,
            bond_color: 0x88_88_88,
            sphere_width_segments: 32,
            sphere_height_segments: 16,
            cylinder_radial_segments: 32,
        }
    }
}
