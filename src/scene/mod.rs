//! Scene groups: the renderable primitives of one molecule.
//!
//! A [`SceneGroup`] is built in one go by [`builder::SceneBuilder`] and is
//! replaced wholesale whenever the selection changes. Its only mutable
//! state is the group rotation driven by the viewport.

pub mod builder;

use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::catalog::Color;

/// Shape and size of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Atom sphere.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Bond cylinder, long axis along local +Y, centered on its position.
    Cylinder {
        /// Cylinder radius.
        radius: f32,
        /// Cylinder length.
        length: f32,
    },
}

/// A single renderable shape in group-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    /// Shape and size.
    pub shape: Shape,
    /// Center in group-local space.
    pub position: Vec3,
    /// Orientation in group-local space.
    pub rotation: Quat,
    /// Surface color.
    pub color: Color,
}

impl Primitive {
    /// Whether this primitive is an atom sphere.
    #[must_use]
    pub fn is_sphere(&self) -> bool {
        matches!(self.shape, Shape::Sphere { .. })
    }

    /// Whether this primitive is a bond cylinder.
    #[must_use]
    pub fn is_cylinder(&self) -> bool {
        matches!(self.shape, Shape::Cylinder { .. })
    }

    /// Scale applied to the unit mesh (radius 1 sphere, or radius 1,
    /// height 1 cylinder).
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        match self.shape {
            Shape::Sphere { radius } => Vec3::splat(radius),
            Shape::Cylinder { radius, length } => {
                Vec3::new(radius, length, radius)
            }
        }
    }

    /// Local-to-group transform of the unit mesh.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale(),
            self.rotation,
            self.position,
        )
    }
}

/// The primitives of one molecule, added to and removed from the scene as
/// a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGroup {
    molecule_id: String,
    primitives: Vec<Primitive>,
    /// Euler angles: x = horizontal axis, y = vertical axis, in `[0, 2π)`.
    rotation: Vec2,
}

impl SceneGroup {
    /// An unrotated group for `molecule_id`.
    #[must_use]
    pub fn new(molecule_id: impl Into<String>, primitives: Vec<Primitive>) -> Self {
        Self {
            molecule_id: molecule_id.into(),
            primitives,
            rotation: Vec2::ZERO,
        }
    }

    /// Identifier of the molecule this group shows.
    #[must_use]
    pub fn molecule_id(&self) -> &str {
        &self.molecule_id
    }

    /// All primitives, atoms first.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Atom spheres.
    pub fn spheres(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.is_sphere())
    }

    /// Bond cylinders.
    pub fn cylinders(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.is_cylinder())
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the group holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Current `(x, y)` Euler rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Add `delta` to the rotation, wrapping each angle into `[0, 2π)`.
    pub fn rotate_by(&mut self, delta: Vec2) {
        let next = self.rotation + delta;
        self.rotation = Vec2::new(wrap_angle(next.x), wrap_angle(next.y));
    }

    /// Group-to-world transform (X then Y rotation, about the origin).
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

/// `angle` in `[0, 2π)`. `rem_euclid` rounds tiny negative angles up to
/// exactly `TAU`, which counts as a full turn.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(position: Vec3) -> Primitive {
        Primitive {
            shape: Shape::Sphere { radius: 0.3 },
            position,
            rotation: Quat::IDENTITY,
            color: Color(0xff0000),
        }
    }

    #[test]
    fn rotation_wraps_into_full_turn() {
        let mut group = SceneGroup::new("test", vec![sphere_at(Vec3::ZERO)]);
        group.rotate_by(Vec2::new(TAU + 0.5, 3.0 * TAU + 0.25));
        assert!((group.rotation().x - 0.5).abs() < 1e-5);
        assert!((group.rotation().y - 0.25).abs() < 1e-5);
    }

    #[test]
    fn tiny_negative_rotation_stays_below_full_turn() {
        let mut group = SceneGroup::new("test", vec![sphere_at(Vec3::ZERO)]);
        group.rotate_by(Vec2::new(-1e-9, -1e-9));
        assert!(group.rotation().x >= 0.0 && group.rotation().x < TAU);
        assert!(group.rotation().y >= 0.0 && group.rotation().y < TAU);

        group.rotate_by(Vec2::new(-0.5, -TAU - 0.25));
        assert!((group.rotation().x - (TAU - 0.5)).abs() < 1e-5);
        assert!((group.rotation().y - (TAU - 0.25)).abs() < 1e-5);
    }

    #[test]
    fn transform_of_unrotated_group_is_identity() {
        let group = SceneGroup::new("test", Vec::new());
        assert!(group.transform().abs_diff_eq(Mat4::IDENTITY, 1e-6));
        assert!(group.is_empty());
    }

    #[test]
    fn quarter_turn_about_y_moves_x_to_minus_z() {
        let mut group = SceneGroup::new("test", Vec::new());
        group.rotate_by(Vec2::new(0.0, std::f32::consts::FRAC_PI_2));
        let moved = group.transform().transform_point3(Vec3::X);
        assert!(moved.abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn cylinder_scale_stretches_along_y() {
        let bond = Primitive {
            shape: Shape::Cylinder {
                radius: 0.05,
                length: 2.0,
            },
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::IDENTITY,
            color: Color(0x888888),
        };
        let top = bond.model_matrix().transform_point3(Vec3::new(0.0, 0.5, 0.0));
        assert!(top.abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-6));
        assert!(bond.is_cylinder());
        assert!(!bond.is_sphere());
    }
}
