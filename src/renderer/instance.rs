//! GPU instance records built from scene primitives.

use glam::{Mat3, Mat4};

use crate::scene::Primitive;

/// Per-instance data for one atom sphere or bond cylinder.
/// NOTE: Must match `InstanceInput` in `ball_and_stick.wgsl` (128 bytes).
///
///   model:  4 x vec4<f32>  (locations 2-5)
///   normal: 3 x vec4<f32>  (locations 6-8, w unused)
///   color:  vec4<f32>      (location 9, linear RGB, a = 1)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PrimitiveInstance {
    /// Unit-mesh-to-group transform, column-major.
    pub model: [[f32; 4]; 4],
    /// Normal matrix columns.
    pub normal: [[f32; 4]; 3],
    /// Linear RGBA.
    pub color: [f32; 4],
}

impl PrimitiveInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4, 8 => Float32x4,
        9 => Float32x4
    ];

    /// Per-instance buffer layout at slot 1.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    /// Instance placing the unit mesh for `primitive`.
    #[must_use]
    pub fn from_primitive(primitive: &Primitive) -> Self {
        let model = primitive.model_matrix();
        let normal = normal_matrix(&model);
        let [r, g, b] = primitive.color.to_linear_f32();
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
            color: [r, g, b, 1.0],
        }
    }
}

/// Inverse-transpose of the upper 3x3, so normals survive the cylinders'
/// non-uniform scale.
fn normal_matrix(model: &Mat4) -> Mat3 {
    let m = Mat3::from_mat4(*model);
    if m.determinant().abs() <= f32::EPSILON {
        return Mat3::IDENTITY;
    }
    m.inverse().transpose()
}
