//! Turns a [`MoleculeRecord`] into a [`SceneGroup`].
//!
//! Atoms become spheres at their coordinates. Each bond becomes a cylinder
//! whose local +Y axis is rotated onto the bond direction and whose center
//! sits at the bond midpoint.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use super::{Primitive, SceneGroup, Shape};
use crate::catalog::{Color, MoleculeRecord};
use crate::error::RecordError;
use crate::options::GeometryOptions;

/// Placement of a bond cylinder between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondPlacement {
    /// Midpoint of the two endpoints.
    pub center: Vec3,
    /// Distance between the endpoints.
    pub length: f32,
    /// Rotation taking local +Y onto the normalized bond direction.
    pub rotation: Quat,
}

impl BondPlacement {
    /// Place a cylinder from `start` to `end`.
    ///
    /// Returns `None` when the endpoints coincide, since the direction is
    /// undefined.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3) -> Option<Self> {
        let direction = end - start;
        let length = direction.length();
        if length <= f32::EPSILON {
            return None;
        }
        let axis = direction / length;
        // Straight down has no unique shortest arc; flip about X.
        let rotation = if axis.dot(Vec3::Y) <= -1.0 + 1e-6 {
            Quat::from_rotation_x(PI)
        } else {
            Quat::from_rotation_arc(Vec3::Y, axis)
        };
        Some(Self {
            center: start + 0.5 * direction,
            length,
            rotation,
        })
    }
}

/// Builds scene groups using the configured primitive sizes.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    geometry: GeometryOptions,
}

impl SceneBuilder {
    /// Builder with the given geometry options.
    #[must_use]
    pub fn new(geometry: GeometryOptions) -> Self {
        Self { geometry }
    }

    /// Geometry options in use.
    #[must_use]
    pub fn geometry(&self) -> &GeometryOptions {
        &self.geometry
    }

    /// Build a fresh group for `record`: one sphere per atom, then one
    /// cylinder per bond.
    ///
    /// Bonds between coincident atoms are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if a bond references a missing atom or
    /// bonds an atom to itself.
    pub fn build(
        &self,
        record: &MoleculeRecord,
    ) -> Result<SceneGroup, RecordError> {
        record.validate()?;

        let mut primitives =
            Vec::with_capacity(record.atoms.len() + record.bonds.len());

        for atom in &record.atoms {
            let radius = if atom.is_hydrogen() {
                self.geometry.hydrogen_radius
            } else {
                self.geometry.atom_radius
            };
            primitives.push(Primitive {
                shape: Shape::Sphere { radius },
                position: atom.position,
                rotation: Quat::IDENTITY,
                color: atom.color,
            });
        }

        let bond_color = Color(self.geometry.bond_color);
        for (i, bond) in record.bonds.iter().enumerate() {
            let start = record.atoms[bond.a].position;
            let end = record.atoms[bond.b].position;
            let Some(placement) = BondPlacement::between(start, end) else {
                log::warn!(
                    "{}: skipping zero-length bond {i} ({} - {})",
                    record.id,
                    bond.a,
                    bond.b
                );
                continue;
            };
            primitives.push(Primitive {
                shape: Shape::Cylinder {
                    radius: self.geometry.bond_radius,
                    length: placement.length,
                },
                position: placement.center,
                rotation: placement.rotation,
                color: bond_color,
            });
        }

        log::debug!(
            "built {}: {} primitives ({} atoms, {} bonds)",
            record.id,
            primitives.len(),
            record.atoms.len(),
            record.bonds.len()
        );

        Ok(SceneGroup::new(record.id.clone(), primitives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Atom, Bond, MoleculeCatalog, MoleculeInfo};

    fn record(atoms: Vec<Atom>, bonds: Vec<Bond>) -> MoleculeRecord {
        MoleculeRecord {
            id: "test".into(),
            name: "Test".into(),
            atoms,
            bonds,
            info: MoleculeInfo::Summary("test molecule".into()),
        }
    }

    #[test]
    fn one_primitive_per_atom_and_bond() {
        let catalog = MoleculeCatalog::builtin();
        let builder = SceneBuilder::default();
        for rec in catalog.iter() {
            let group = builder.build(rec).unwrap();
            assert_eq!(group.spheres().count(), rec.atoms.len(), "{}", rec.id);
            assert_eq!(group.cylinders().count(), rec.bonds.len(), "{}", rec.id);
            assert_eq!(group.len(), rec.atoms.len() + rec.bonds.len());
            assert_eq!(group.molecule_id(), rec.id);
        }
    }

    #[test]
    fn cylinders_span_their_bond() {
        let catalog = MoleculeCatalog::builtin();
        let builder = SceneBuilder::default();
        for rec in catalog.iter() {
            let group = builder.build(rec).unwrap();
            for (bond, cyl) in rec.bonds.iter().zip(group.cylinders()) {
                let a = rec.atoms[bond.a].position;
                let b = rec.atoms[bond.b].position;
                let Shape::Cylinder { length, .. } = cyl.shape else {
                    unreachable!("cylinders() yielded a sphere");
                };
                assert!((length - a.distance(b)).abs() < 1e-5);
                assert!(cyl.position.abs_diff_eq((a + b) * 0.5, 1e-5));
                let axis = cyl.rotation * Vec3::Y;
                assert!(axis.abs_diff_eq((b - a).normalize(), 1e-5));
            }
        }
    }

    #[test]
    fn water_uses_hydrogen_radius() {
        let catalog = MoleculeCatalog::builtin();
        let water = catalog.lookup("water").unwrap();
        let group = SceneBuilder::default().build(water).unwrap();

        let radii: Vec<f32> = group
            .spheres()
            .map(|p| match p.shape {
                Shape::Sphere { radius } => radius,
                Shape::Cylinder { .. } => 0.0,
            })
            .collect();
        assert_eq!(radii, [0.3, 0.2, 0.2]);
        assert_eq!(group.cylinders().count(), 2);
        assert!(group
            .cylinders()
            .all(|c| c.color == Color(0x888888)));
        assert_eq!(group.primitives()[0].color, Color(0xff0000));
    }

    #[test]
    fn antiparallel_bond_points_down() {
        let placement =
            BondPlacement::between(Vec3::ZERO, Vec3::new(0.0, -2.0, 0.0))
                .unwrap();
        let axis = placement.rotation * Vec3::Y;
        assert!(axis.abs_diff_eq(Vec3::NEG_Y, 1e-5));
        assert!(placement.rotation.is_normalized());
        assert!((placement.length - 2.0).abs() < 1e-6);
        assert!(placement.center.abs_diff_eq(Vec3::new(0.0, -1.0, 0.0), 1e-6));
    }

    #[test]
    fn zero_length_bond_is_skipped() {
        let rec = record(
            vec![
                Atom::new("C", [1.0, 1.0, 1.0], 0x808080),
                Atom::new("C", [1.0, 1.0, 1.0], 0x808080),
                Atom::new("H", [2.0, 1.0, 1.0], 0xffffff),
            ],
            vec![Bond::new(0, 1), Bond::new(0, 2)],
        );
        let group = SceneBuilder::default().build(&rec).unwrap();
        assert_eq!(group.spheres().count(), 3);
        assert_eq!(group.cylinders().count(), 1);
    }

    #[test]
    fn malformed_bond_fails_fast() {
        let rec = record(
            vec![Atom::new("O", [0.0; 3], 0xff0000)],
            vec![Bond::new(0, 3)],
        );
        let err = SceneBuilder::default().build(&rec).unwrap_err();
        assert!(matches!(
            err,
            RecordError::BondIndexOutOfRange { index: 3, atom_count: 1, .. }
        ));
    }

    #[test]
    fn custom_geometry_changes_sizes() {
        let catalog = MoleculeCatalog::builtin();
        let geometry = GeometryOptions {
            atom_radius: 0.5,
            bond_radius: 0.1,
            ..GeometryOptions::default()
        };
        let group = SceneBuilder::new(geometry)
            .build(catalog.lookup("carbonDioxide").unwrap())
            .unwrap();
        assert!(group
            .spheres()
            .all(|p| p.shape == Shape::Sphere { radius: 0.5 }));
        assert!(group
            .cylinders()
            .all(|p| matches!(p.shape, Shape::Cylinder { radius, .. } if radius == 0.1)));
    }
}
