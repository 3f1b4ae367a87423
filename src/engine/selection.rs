//! Selection handling: which molecule is shown, and its scene group.

use crate::catalog::MoleculeCatalog;
use crate::error::RecordError;
use crate::info::InfoSink;
use crate::scene::builder::SceneBuilder;
use crate::scene::SceneGroup;

/// Owns the active scene group and swaps it on every selection change.
///
/// Two states: nothing shown, or one molecule shown. Every transition,
/// including re-selecting the molecule already shown, discards the old
/// group and builds a new one.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    builder: SceneBuilder,
    active: Option<SceneGroup>,
    /// Monotonically increasing; bumped whenever `active` is replaced or
    /// removed.
    generation: u64,
}

impl SelectionController {
    /// Controller with no molecule shown.
    #[must_use]
    pub fn new(builder: SceneBuilder) -> Self {
        Self {
            builder,
            active: None,
            generation: 0,
        }
    }

    /// Show the molecule `id` from `catalog`, or nothing.
    ///
    /// `None`, an empty id and ids missing from the catalog all clear the
    /// display. Returns whether a molecule is now shown.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the catalog record is malformed. The
    /// previous group is already discarded and the info display cleared
    /// by then.
    pub fn on_select(
        &mut self,
        catalog: &MoleculeCatalog,
        id: Option<&str>,
        sink: &mut dyn InfoSink,
    ) -> Result<bool, RecordError> {
        if let Some(old) = self.active.take() {
            log::debug!("discarding scene group for {}", old.molecule_id());
            self.generation += 1;
        }

        let Some(record) = id
            .filter(|id| !id.is_empty())
            .and_then(|id| catalog.lookup(id))
        else {
            if let Some(unknown) = id.filter(|id| !id.is_empty()) {
                log::warn!("unknown molecule {unknown:?}; showing nothing");
            }
            sink.clear();
            return Ok(false);
        };

        let group = match self.builder.build(record) {
            Ok(group) => group,
            Err(e) => {
                sink.clear();
                return Err(e);
            }
        };
        self.active = Some(group);
        self.generation += 1;
        sink.present(&record.info.fields());
        Ok(true)
    }

    /// The displayed group, if any.
    #[must_use]
    pub fn active(&self) -> Option<&SceneGroup> {
        self.active.as_ref()
    }

    /// Mutable access to the displayed group, for the per-frame rotation.
    pub fn active_mut(&mut self) -> Option<&mut SceneGroup> {
        self.active.as_mut()
    }

    /// Identifier of the displayed molecule, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(SceneGroup::molecule_id)
    }

    /// Counter that changes whenever the displayed group is replaced.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
