//! Presentation of molecule metadata.
//!
//! A [`MoleculeInfo`] is flattened into [`InfoFields`] and pushed into an
//! [`InfoSink`]. The native viewer uses the in-memory [`InfoPanel`]; the
//! web host writes into DOM elements instead (see `web::DomInfoPanel`).

use crate::catalog::MoleculeInfo;

/// Text shown in an output that has nothing to display.
pub const PLACEHOLDER: &str = "-";

/// Display-ready metadata for one molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoFields {
    /// Chemical formula.
    pub formula: String,
    /// Geometry name.
    pub structure: String,
    /// Characteristic bond angle.
    pub bond_angle: String,
    /// Items of the property list, in display order.
    pub properties: Vec<String>,
}

impl InfoFields {
    /// The cleared state: placeholder text and an empty list.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            formula: PLACEHOLDER.to_owned(),
            structure: PLACEHOLDER.to_owned(),
            bond_angle: PLACEHOLDER.to_owned(),
            properties: Vec::new(),
        }
    }

    /// Whether every output holds its cleared value.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl Default for InfoFields {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl MoleculeInfo {
    /// Flatten into display fields.
    ///
    /// A free-text summary becomes a one-item property list with
    /// placeholder text fields.
    #[must_use]
    pub fn fields(&self) -> InfoFields {
        match self {
            Self::Summary(text) => InfoFields {
                properties: vec![text.clone()],
                ..InfoFields::placeholder()
            },
            Self::Structured {
                formula,
                structure,
                bond_angle,
                properties,
            } => InfoFields {
                formula: formula.clone(),
                structure: structure.clone(),
                bond_angle: bond_angle.clone(),
                properties: properties.clone(),
            },
        }
    }
}

/// Destination for molecule metadata.
///
/// `present` replaces every output, including the whole property list;
/// nothing is appended across calls.
pub trait InfoSink {
    /// Show `fields`.
    fn present(&mut self, fields: &InfoFields);
    /// Reset every output to its placeholder state.
    fn clear(&mut self);
}

/// In-memory info display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanel {
    fields: InfoFields,
}

impl InfoPanel {
    /// A cleared panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed fields.
    #[must_use]
    pub fn fields(&self) -> &InfoFields {
        &self.fields
    }

    /// Currently displayed formula.
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.fields.formula
    }

    /// Currently displayed geometry name.
    #[must_use]
    pub fn structure(&self) -> &str {
        &self.fields.structure
    }

    /// Currently displayed bond angle.
    #[must_use]
    pub fn bond_angle(&self) -> &str {
        &self.fields.bond_angle
    }

    /// Currently displayed property list.
    #[must_use]
    pub fn properties(&self) -> &[String] {
        &self.fields.properties
    }

    /// Whether the panel shows nothing.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.fields.is_placeholder()
    }

    /// One-line summary, e.g. `"H₂O | Bent geometry | 104.5°"`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.fields.formula, self.fields.structure, self.fields.bond_angle
        )
    }
}

impl InfoSink for InfoPanel {
    fn present(&mut self, fields: &InfoFields) {
        self.fields.clone_from(fields);
    }

    fn clear(&mut self) {
        self.fields = InfoFields::placeholder();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MoleculeCatalog;

    #[test]
    fn structured_info_maps_field_by_field() {
        let catalog = MoleculeCatalog::builtin();
        let water = catalog.lookup("water").unwrap();
        let fields = water.info.fields();
        assert_eq!(fields.formula, "H₂O");
        assert_eq!(fields.structure, "Bent geometry");
        assert_eq!(fields.bond_angle, "104.5°");
        assert_eq!(fields.properties.len(), 5);
        assert_eq!(fields.properties[0], "Universal solvent");
    }

    #[test]
    fn summary_becomes_single_property() {
        let info = MoleculeInfo::Summary(
            "Bent molecule with a 104.5° H-O-H angle".into(),
        );
        let fields = info.fields();
        assert_eq!(fields.formula, PLACEHOLDER);
        assert_eq!(fields.properties.len(), 1);
        assert!(fields.properties[0].contains("Bent"));
        assert!(fields.properties[0].contains("104.5"));
    }

    #[test]
    fn present_replaces_list_instead_of_appending() {
        let catalog = MoleculeCatalog::builtin();
        let mut panel = InfoPanel::new();
        assert!(panel.is_cleared());

        panel.present(&catalog.lookup("water").unwrap().info.fields());
        panel.present(&catalog.lookup("carbonDioxide").unwrap().info.fields());

        assert_eq!(panel.formula(), "CO₂");
        assert_eq!(panel.structure(), "Linear");
        assert_eq!(panel.bond_angle(), "180°");
        assert_eq!(panel.properties().len(), 5);
        assert!(!panel.properties().iter().any(|p| p == "Universal solvent"));
    }

    #[test]
    fn clear_resets_to_placeholder() {
        let catalog = MoleculeCatalog::builtin();
        let mut panel = InfoPanel::new();
        panel.present(&catalog.lookup("ammonia").unwrap().info.fields());
        assert_eq!(panel.summary_line(), "NH₃ | Pyramidal | 107°");

        panel.clear();
        assert!(panel.is_cleared());
        assert_eq!(panel.formula(), "-");
        assert!(panel.properties().is_empty());
    }
}
