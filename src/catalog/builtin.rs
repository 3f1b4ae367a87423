use super::{Atom, Bond, MoleculeInfo, MoleculeRecord};

const OXYGEN: u32 = 0xff0000;
const HYDROGEN: u32 = 0xffffff;
const CARBON: u32 = 0x808080;
const NITROGEN: u32 = 0x0000ff;
// Methane's carbon is drawn blue rather than grey.
const METHANE_CARBON: u32 = 0x0000ff;

fn structured(
    formula: &str,
    structure: &str,
    bond_angle: &str,
    properties: &[&str],
) -> MoleculeInfo {
    MoleculeInfo::Structured {
        formula: formula.to_owned(),
        structure: structure.to_owned(),
        bond_angle: bond_angle.to_owned(),
        properties: properties.iter().map(|&p| p.to_owned()).collect(),
    }
}

fn bonds(pairs: &[(usize, usize)]) -> Vec<Bond> {
    pairs.iter().map(|&(a, b)| Bond::new(a, b)).collect()
}

fn record(
    id: &str,
    name: &str,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    info: MoleculeInfo,
) -> MoleculeRecord {
    MoleculeRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        atoms,
        bonds,
        info,
    }
}

pub(super) fn records() -> Vec<MoleculeRecord> {
    vec![water(), methane(), ethanol(), ammonia(), carbon_dioxide()]
}

fn water() -> MoleculeRecord {
    record(
        "water",
        "Water",
        vec![
            Atom::new("O", [0.0, 0.0, 0.0], OXYGEN),
            Atom::new("H", [-0.8, 0.6, 0.0], HYDROGEN),
            Atom::new("H", [0.8, 0.6, 0.0], HYDROGEN),
        ],
        bonds(&[(0, 1), (0, 2)]),
        structured(
            "H₂O",
            "Bent geometry",
            "104.5°",
            &[
                "Universal solvent",
                "High heat capacity",
                "Essential for life",
                "Forms hydrogen bonds",
                "Polar molecule",
            ],
        ),
    )
}

fn methane() -> MoleculeRecord {
    record(
        "methane",
        "Methane",
        vec![
            Atom::new("C", [0.0, 0.0, 0.0], METHANE_CARBON),
            Atom::new("H", [0.8, 0.8, 0.8], HYDROGEN),
            Atom::new("H", [-0.8, -0.8, 0.8], HYDROGEN),
            Atom::new("H", [0.8, -0.8, -0.8], HYDROGEN),
            Atom::new("H", [-0.8, 0.8, -0.8], HYDROGEN),
        ],
        bonds(&[(0, 1), (0, 2), (0, 3), (0, 4)]),
        structured(
            "CH₄",
            "Tetrahedral",
            "109.5°",
            &[
                "Simplest hydrocarbon",
                "Greenhouse gas",
                "Natural gas component",
                "Used in fuel production",
                "Nonpolar molecule",
            ],
        ),
    )
}

fn ethanol() -> MoleculeRecord {
    record(
        "ethanol",
        "Ethanol",
        vec![
            Atom::new("C", [0.0, 0.0, 0.0], CARBON),
            Atom::new("C", [1.54, 0.0, 0.0], CARBON),
            Atom::new("O", [2.8, 0.0, 0.0], OXYGEN),
            Atom::new("H", [-0.4, 0.9, 0.0], HYDROGEN),
            Atom::new("H", [-0.4, -0.9, 0.0], HYDROGEN),
            Atom::new("H", [1.94, 0.9, 0.0], HYDROGEN),
            Atom::new("H", [1.94, -0.9, 0.0], HYDROGEN),
            Atom::new("H", [3.2, 0.9, 0.0], HYDROGEN),
        ],
        bonds(&[(0, 1), (1, 2), (0, 3), (0, 4), (1, 5), (1, 6), (2, 7)]),
        structured(
            "C₂H₅OH",
            "Tetrahedral with C-C single bond",
            "109.5° (C-C-O)",
            &[
                "Common alcohol",
                "Used as a solvent",
                "Biofuel component",
                "Antiseptic properties",
                "Important industrial chemical",
            ],
        ),
    )
}

fn ammonia() -> MoleculeRecord {
    record(
        "ammonia",
        "Ammonia",
        vec![
            Atom::new("N", [0.0, 0.0, 0.0], NITROGEN),
            Atom::new("H", [0.8, 0.6, 0.0], HYDROGEN),
            Atom::new("H", [-0.4, 0.6, 0.7], HYDROGEN),
            Atom::new("H", [-0.4, 0.6, -0.7], HYDROGEN),
        ],
        bonds(&[(0, 1), (0, 2), (0, 3)]),
        structured(
            "NH₃",
            "Pyramidal",
            "107°",
            &[
                "Used in fertilizer production",
                "Common cleaning agent",
                "Industrial refrigerant",
                "Polar molecule",
                "Hydrogen bond donor",
            ],
        ),
    )
}

fn carbon_dioxide() -> MoleculeRecord {
    record(
        "carbonDioxide",
        "Carbon Dioxide",
        vec![
            Atom::new("C", [0.0, 0.0, 0.0], CARBON),
            Atom::new("O", [1.2, 0.0, 0.0], OXYGEN),
            Atom::new("O", [-1.2, 0.0, 0.0], OXYGEN),
        ],
        bonds(&[(0, 1), (0, 2)]),
        structured(
            "CO₂",
            "Linear",
            "180°",
            &[
                "Greenhouse gas",
                "Used in carbonated beverages",
                "Product of combustion",
                "Critical in photosynthesis",
                "Nonpolar molecule",
            ],
        ),
    )
}
