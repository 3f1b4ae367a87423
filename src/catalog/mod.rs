//! Compiled-in molecule definitions.
//!
//! A [`MoleculeCatalog`] maps identifiers such as `"water"` to a
//! [`MoleculeRecord`]: the atoms with their coordinates and colors, the
//! bonds between them, and a [`MoleculeInfo`] block describing the
//! molecule. The catalog is fixed once constructed.

mod builtin;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::RecordError;

/// A 24-bit `0xRRGGBB` color in sRGB space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Red, green and blue channels as sRGB floats in `[0, 1]`.
    #[must_use]
    pub fn to_srgb_f32(self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b]
    }

    /// Channels converted to linear space for shading.
    #[must_use]
    pub fn to_linear_f32(self) -> [f32; 3] {
        self.to_srgb_f32().map(srgb_to_linear)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// One atom of a molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Chemical symbol, e.g. `"O"` or `"H"`.
    pub element: String,
    /// Coordinate in model space.
    pub position: Vec3,
    /// Display color.
    pub color: Color,
}

impl Atom {
    /// Build an atom from a symbol, `[x, y, z]` coordinate and hex color.
    #[must_use]
    pub fn new(element: &str, position: [f32; 3], color: u32) -> Self {
        Self {
            element: element.to_owned(),
            position: Vec3::from_array(position),
            color: Color(color),
        }
    }

    /// Whether this atom is hydrogen (drawn with the smaller radius).
    #[must_use]
    pub fn is_hydrogen(&self) -> bool {
        self.element == "H"
    }
}

/// An edge between two atoms, as zero-based indices into the owning
/// record's atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// First atom index.
    pub a: usize,
    /// Second atom index.
    pub b: usize,
}

impl Bond {
    /// Bond between atoms `a` and `b`.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// Descriptive text attached to a molecule.
///
/// Some records carry a single free-text summary, others a structured
/// block. Both are turned into the same [`InfoFields`](crate::info::InfoFields)
/// by [`MoleculeInfo::fields`], so presentation never branches on the
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoleculeInfo {
    /// Free-text description.
    Summary(String),
    /// Formula, geometry, bond angle and a list of notable properties.
    Structured {
        /// Chemical formula, e.g. `"H₂O"`.
        formula: String,
        /// Geometry name, e.g. `"Bent geometry"`.
        structure: String,
        /// Characteristic bond angle, e.g. `"104.5°"`.
        bond_angle: String,
        /// Notable properties, in display order.
        properties: Vec<String>,
    },
}

/// Everything the viewer knows about one molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeRecord {
    /// Catalog key, e.g. `"carbonDioxide"`.
    pub id: String,
    /// Human-readable name, e.g. `"Carbon Dioxide"`.
    pub name: String,
    /// Atoms in definition order. Bond indices refer to this order.
    pub atoms: Vec<Atom>,
    /// Bonds between atoms.
    pub bonds: Vec<Bond>,
    /// Descriptive metadata.
    pub info: MoleculeInfo,
}

impl MoleculeRecord {
    /// Check that every bond references two distinct, existing atoms.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] found.
    pub fn validate(&self) -> Result<(), RecordError> {
        let atom_count = self.atoms.len();
        for (i, bond) in self.bonds.iter().enumerate() {
            for index in [bond.a, bond.b] {
                if index >= atom_count {
                    return Err(RecordError::BondIndexOutOfRange {
                        molecule: self.id.clone(),
                        bond: i,
                        index,
                        atom_count,
                    });
                }
            }
            if bond.a == bond.b {
                return Err(RecordError::SelfBond {
                    molecule: self.id.clone(),
                    bond: i,
                    index: bond.a,
                });
            }
        }
        Ok(())
    }
}

/// Read-only table of molecule records keyed by identifier.
///
/// Iteration follows definition order, which is also the order the hosts
/// offer molecules in.
#[derive(Debug, Clone)]
pub struct MoleculeCatalog {
    records: Vec<MoleculeRecord>,
    index: FxHashMap<String, usize>,
}

impl MoleculeCatalog {
    /// Build a catalog, validating every record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] for a malformed bond or a repeated id.
    pub fn from_records(
        records: Vec<MoleculeRecord>,
    ) -> Result<Self, RecordError> {
        let mut index = FxHashMap::default();
        for (i, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id.clone(), i).is_some() {
                return Err(RecordError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// The compiled-in dataset: water, methane, ethanol, ammonia and
    /// carbon dioxide.
    #[must_use]
    pub fn builtin() -> Self {
        let records = builtin::records();
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Look up a record by identifier.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&MoleculeRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Position of `id` in definition order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Record at `position` in definition order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&MoleculeRecord> {
        self.records.get(position)
    }

    /// Identifiers in definition order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Records in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &MoleculeRecord> {
        self.records.iter()
    }

    /// Number of molecules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no molecules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MoleculeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diatomic(id: &str, bonds: Vec<Bond>) -> MoleculeRecord {
        MoleculeRecord {
            id: id.into(),
            name: id.into(),
            atoms: vec![
                Atom::new("H", [0.0, 0.0, 0.0], 0xffffff),
                Atom::new("H", [0.74, 0.0, 0.0], 0xffffff),
            ],
            bonds,
            info: MoleculeInfo::Summary("Hydrogen gas".into()),
        }
    }

    #[test]
    fn builtin_records_are_valid() {
        let catalog = MoleculeCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        for record in catalog.iter() {
            assert!(record.validate().is_ok(), "{} is malformed", record.id);
        }
        let rebuilt =
            MoleculeCatalog::from_records(catalog.iter().cloned().collect());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn ids_follow_definition_order() {
        let catalog = MoleculeCatalog::builtin();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(
            ids,
            ["water", "methane", "ethanol", "ammonia", "carbonDioxide"]
        );
        assert_eq!(catalog.position("ammonia"), Some(3));
        assert_eq!(catalog.get(4).map(|r| r.name.as_str()), Some("Carbon Dioxide"));
    }

    #[test]
    fn lookup_unknown_is_absent() {
        let catalog = MoleculeCatalog::builtin();
        assert!(catalog.lookup("unobtainium").is_none());
        assert!(catalog.lookup("").is_none());
        assert_eq!(catalog.lookup("water").map(|r| r.atoms.len()), Some(3));
    }

    #[test]
    fn out_of_range_bond_is_rejected() {
        let record = diatomic("h2", vec![Bond::new(0, 2)]);
        assert_eq!(
            record.validate(),
            Err(RecordError::BondIndexOutOfRange {
                molecule: "h2".into(),
                bond: 0,
                index: 2,
                atom_count: 2,
            })
        );
    }

    #[test]
    fn self_bond_is_rejected() {
        let record = diatomic("h2", vec![Bond::new(0, 1), Bond::new(1, 1)]);
        assert_eq!(
            record.validate(),
            Err(RecordError::SelfBond {
                molecule: "h2".into(),
                bond: 1,
                index: 1,
            })
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let records = vec![
            diatomic("h2", vec![Bond::new(0, 1)]),
            diatomic("h2", vec![Bond::new(0, 1)]),
        ];
        assert!(matches!(
            MoleculeCatalog::from_records(records),
            Err(RecordError::DuplicateId(id)) if id == "h2"
        ));
    }

    #[test]
    fn color_channels_unpack() {
        assert_eq!(Color(0xff0000).to_srgb_f32(), [1.0, 0.0, 0.0]);
        assert_eq!(Color(0xffffff).to_linear_f32(), [1.0, 1.0, 1.0]);
        let grey = Color(0x808080).to_linear_f32();
        assert!((grey[0] - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn hydrogen_detection_uses_symbol() {
        assert!(Atom::new("H", [0.0; 3], 0xffffff).is_hydrogen());
        assert!(!Atom::new("He", [0.0; 3], 0xffffff).is_hydrogen());
    }
}
