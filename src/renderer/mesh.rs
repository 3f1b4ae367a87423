//! Unit meshes shared by every atom and bond instance.
//!
//! Both meshes are closed, wound counter-clockwise when seen from outside,
//! and carry per-vertex normals. Instances scale them into place.

use std::f32::consts::{PI, TAU};

/// Vertex of a unit mesh.
/// NOTE: Must match `VertexInput` in `ball_and_stick.wgsl` (24 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Per-vertex buffer layout at slot 0.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex list.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list, three indices per face.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Radius 1 sphere centered on the origin, as a latitude/longitude grid.
///
/// `width_segments` is clamped to at least 3 and `height_segments` to at
/// least 2. The seam column is duplicated so every ring has
/// `width_segments + 1` vertices; degenerate pole triangles are skipped.
#[must_use]
pub fn unit_sphere(width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let ring = w + 1;

    let mut vertices = Vec::with_capacity((ring * (h + 1)) as usize);
    for iy in 0..=h {
        let theta = iy as f32 / h as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for ix in 0..=w {
            let phi = ix as f32 / w as f32 * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let p = [-cos_p * sin_t, cos_t, sin_p * sin_t];
            vertices.push(MeshVertex {
                position: p,
                normal: p,
            });
        }
    }

    let mut indices = Vec::with_capacity((w * (2 * h - 2) * 3) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * ring + ix + 1;
            let b = iy * ring + ix;
            let c = (iy + 1) * ring + ix;
            let d = (iy + 1) * ring + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

/// Radius 1, height 1 capped cylinder centered on the origin with its
/// axis along +Y.
///
/// `radial_segments` is clamped to at least 3.
#[must_use]
pub fn unit_cylinder(radial_segments: u32) -> MeshData {
    let n = radial_segments.max(3);
    let ring = n + 1;
    let mut mesh = MeshData::default();

    // Side: a top ring then a bottom ring, with outward normals.
    for y in [0.5_f32, -0.5] {
        for ix in 0..=n {
            let (sin, cos) = (ix as f32 / n as f32 * TAU).sin_cos();
            mesh.vertices.push(MeshVertex {
                position: [sin, y, cos],
                normal: [sin, 0.0, cos],
            });
        }
    }
    for ix in 0..n {
        let a = ix;
        let b = ring + ix;
        let c = ring + ix + 1;
        let d = ix + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    // Caps get their own vertices so their normals stay flat.
    for y in [0.5_f32, -0.5] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(MeshVertex {
            position: [0.0, y, 0.0],
            normal: [0.0, y.signum(), 0.0],
        });
        for ix in 0..=n {
            let (sin, cos) = (ix as f32 / n as f32 * TAU).sin_cos();
            mesh.vertices.push(MeshVertex {
                position: [sin, y, cos],
                normal: [0.0, y.signum(), 0.0],
            });
        }
        for ix in 0..n {
            let p0 = center + 1 + ix;
            let p1 = p0 + 1;
            if y > 0.0 {
                mesh.indices.extend_from_slice(&[center, p0, p1]);
            } else {
                mesh.indices.extend_from_slice(&[center, p1, p0]);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn triangles(mesh: &MeshData) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        mesh.indices.chunks_exact(3).map(|t| {
            let p = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);
            [p(t[0]), p(t[1]), p(t[2])]
        })
    }

    /// Signed volume by the divergence theorem; only matches the solid's
    /// volume when the surface is closed and consistently wound outward.
    fn signed_volume(mesh: &MeshData) -> f32 {
        triangles(mesh)
            .map(|[a, b, c]| a.dot(b.cross(c)) / 6.0)
            .sum()
    }

    fn assert_outward(mesh: &MeshData) {
        for [a, b, c] in triangles(mesh) {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward face at {centroid}");
        }
    }

    fn assert_indices_in_range(mesh: &MeshData) {
        let n = mesh.vertices.len() as u32;
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn sphere_counts() {
        let mesh = unit_sphere(32, 16);
        assert_eq!(mesh.vertices.len(), 33 * 17);
        assert_eq!(mesh.triangle_count(), 32 * (2 * 16 - 2));
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn sphere_vertices_lie_on_unit_sphere() {
        let mesh = unit_sphere(12, 8);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn sphere_is_closed_and_outward() {
        let mesh = unit_sphere(32, 16);
        assert_outward(&mesh);
        let volume = signed_volume(&mesh);
        let exact = 4.0 / 3.0 * PI;
        assert!(volume > 0.95 * exact && volume < exact, "volume {volume}");
    }

    #[test]
    fn cylinder_counts() {
        let mesh = unit_cylinder(32);
        assert_eq!(mesh.vertices.len(), 2 * 33 + 2 * 34);
        assert_eq!(mesh.triangle_count(), 32 * 2 + 2 * 32);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn cylinder_spans_unit_height_along_y() {
        let mesh = unit_cylinder(16);
        let (min, max) = mesh.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from_array(v.position);
                (lo.min(p), hi.max(p))
            },
        );
        assert!((min.y + 0.5).abs() < 1e-6 && (max.y - 0.5).abs() < 1e-6);
        assert!((max.x - 1.0).abs() < 1e-5 && (max.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn cylinder_is_closed_and_outward() {
        let mesh = unit_cylinder(32);
        assert_outward(&mesh);
        // Polygonal cross-section area: n/2 * sin(2π/n).
        let expected = 16.0 * (TAU / 32.0).sin();
        assert!((signed_volume(&mesh) - expected).abs() < 1e-3);
    }

    #[test]
    fn segment_counts_are_clamped() {
        assert_eq!(unit_sphere(0, 0).vertices.len(), 4 * 3);
        assert_eq!(unit_cylinder(1).triangle_count(), 3 * 4);
    }
}
