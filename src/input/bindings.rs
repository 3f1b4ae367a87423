//! Converts physical key presses into viewer commands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::command::ViewerCommand;

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Start or stop the tumble rotation.
    ToggleRotation,
    /// Move the camera back to its home position.
    ResetCamera,
    /// Show the next molecule in catalog order.
    NextMolecule,
    /// Show the previous molecule in catalog order.
    PreviousMolecule,
    /// Show no molecule.
    ClearSelection,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewerCommand`].
    fn to_command(self) -> ViewerCommand {
        match self {
            Self::ToggleRotation => ViewerCommand::ToggleRotation,
            Self::ResetCamera => ViewerCommand::ResetCamera,
            Self::NextMolecule => ViewerCommand::NextMolecule,
            Self::PreviousMolecule => ViewerCommand::PreviousMolecule,
            Self::ClearSelection => ViewerCommand::ClearSelection,
        }
    }
}

/// Maps physical key strings to [`ViewerCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"ArrowRight"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyCommandTag::ToggleRotation),
            ("KeyC".into(), KeyCommandTag::ResetCamera),
            ("ArrowRight".into(), KeyCommandTag::NextMolecule),
            ("ArrowLeft".into(), KeyCommandTag::PreviousMolecule),
            ("Escape".into(), KeyCommandTag::ClearSelection),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}
