//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Integrity violations in a molecule record.
///
/// The built-in catalog never produces these; they exist so that a bad
/// record fails loudly instead of drawing nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A bond references an atom index past the end of the atom list.
    BondIndexOutOfRange {
        /// Molecule identifier.
        molecule: String,
        /// Position of the bond in the record's bond list.
        bond: usize,
        /// The offending atom index.
        index: usize,
        /// Number of atoms in the record.
        atom_count: usize,
    },
    /// A bond connects an atom to itself.
    SelfBond {
        /// Molecule identifier.
        molecule: String,
        /// Position of the bond in the record's bond list.
        bond: usize,
        /// The atom index used on both ends.
        index: usize,
    },
    /// Two records share the same identifier.
    DuplicateId(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BondIndexOutOfRange {
                molecule,
                bond,
                index,
                atom_count,
            } => write!(
                f,
                "{molecule}: bond {bond} references atom {index} but only \
                 {atom_count} atoms exist"
            ),
            Self::SelfBond {
                molecule,
                bond,
                index,
            } => {
                write!(f, "{molecule}: bond {bond} connects atom {index} to itself")
            }
            Self::DuplicateId(id) => write!(f, "duplicate molecule id: {id}"),
        }
    }
}

impl std::error::Error for RecordError {}

/// Errors produced by the molview crate.
#[derive(Debug)]
pub enum MolviewError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// A molecule record failed its integrity check.
    Record(RecordError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop or host failure.
    Viewer(String),
}

impl fmt::Display for MolviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Record(e) => write!(f, "malformed molecule record: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for MolviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Record(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for MolviewError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<RecordError> for MolviewError {
    fn from(e: RecordError) -> Self {
        Self::Record(e)
    }
}

impl From<std::io::Error> for MolviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_error_message_names_molecule_and_bond() {
        let err = MolviewError::from(RecordError::BondIndexOutOfRange {
            molecule: "water".into(),
            bond: 1,
            index: 7,
            atom_count: 3,
        });
        let msg = err.to_string();
        assert!(msg.contains("water"));
        assert!(msg.contains("bond 1"));
        assert!(msg.contains("atom 7"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn options_error_has_no_source() {
        let err = MolviewError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");
        assert!(std::error::Error::source(&err).is_none());
    }
}
