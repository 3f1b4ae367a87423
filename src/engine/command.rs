//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a web
//! control or a programmatic call, is a `ViewerCommand` passed to
//! [`MoleculeViewer::execute`](super::MoleculeViewer::execute).

/// A discrete or parameterized operation the viewer can perform.
///
/// ```ignore
/// viewer.execute(ViewerCommand::Select(Some("water".into())))?;
/// viewer.execute(ViewerCommand::ToggleRotation)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Show the molecule with this id; `None`, an empty string or an
    /// unknown id shows nothing.
    Select(Option<String>),

    /// Show the next molecule in catalog order (wraps around).
    NextMolecule,

    /// Show the previous molecule in catalog order (wraps around).
    PreviousMolecule,

    /// Show nothing.
    ClearSelection,

    // ── Viewport ────────────────────────────────────────────────────
    /// Start or stop the tumble rotation.
    ToggleRotation,

    /// Move the camera back to its home position.
    ResetCamera,

    /// The render surface's container changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
