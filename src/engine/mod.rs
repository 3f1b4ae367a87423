//! The molecule viewer: selection, viewport and info display in one
//! owner.
//!
//! [`MoleculeViewer`] holds all mutable state of one viewer instance, so
//! any number of viewers can coexist and tests can drive one without a
//! rendering surface. Hosts feed it [`ViewerCommand`]s and call
//! [`frame`](MoleculeViewer::frame) from their refresh callback.

pub mod command;
pub mod frame;
pub mod selection;
pub mod viewport;

use self::command::ViewerCommand;
use self::frame::{FrameRenderer, FrameView};
use self::selection::SelectionController;
use self::viewport::ViewportController;
use crate::catalog::MoleculeCatalog;
use crate::error::MolviewError;
use crate::info::{InfoPanel, InfoSink};
use crate::options::Options;
use crate::scene::builder::SceneBuilder;

/// One viewer instance.
///
/// Generic over the info display so the native host can keep metadata in
/// memory while the web host writes straight into the page.
pub struct MoleculeViewer<S: InfoSink = InfoPanel> {
    catalog: MoleculeCatalog,
    viewport: ViewportController,
    selection: SelectionController,
    info: S,
    options: Options,
}

impl MoleculeViewer<InfoPanel> {
    /// Viewer over the built-in catalog with an in-memory info panel.
    #[must_use]
    pub fn with_builtin(options: Options, size: (u32, u32)) -> Self {
        Self::new(MoleculeCatalog::builtin(), options, InfoPanel::new(), size)
    }
}

impl<S: InfoSink> MoleculeViewer<S> {
    /// Viewer showing nothing, with a cleared info display.
    #[must_use]
    pub fn new(
        catalog: MoleculeCatalog,
        options: Options,
        mut info: S,
        (width, height): (u32, u32),
    ) -> Self {
        info.clear();
        Self {
            catalog,
            viewport: ViewportController::new(&options, width, height),
            selection: SelectionController::new(SceneBuilder::new(
                options.geometry.clone(),
            )),
            info,
            options,
        }
    }

    /// Perform one command.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Record`] if the selected molecule's record
    /// is malformed.
    pub fn execute(&mut self, command: ViewerCommand) -> Result<(), MolviewError> {
        match command {
            ViewerCommand::Select(id) => {
                let _ = self.select(id.as_deref())?;
            }
            ViewerCommand::NextMolecule => self.cycle(1)?,
            ViewerCommand::PreviousMolecule => self.cycle(-1)?,
            ViewerCommand::ClearSelection => {
                let _ = self.select(None)?;
            }
            ViewerCommand::ToggleRotation => {
                let rotating = self.viewport.toggle_rotation();
                log::debug!("rotation {}", if rotating { "on" } else { "off" });
            }
            ViewerCommand::ResetCamera => self.viewport.reset_camera(),
            ViewerCommand::Resize { width, height } => {
                self.viewport.resize(width, height);
            }
        }
        Ok(())
    }

    /// Show molecule `id`, or nothing. Returns whether a molecule is now
    /// shown.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Record`] if the record is malformed.
    pub fn select(&mut self, id: Option<&str>) -> Result<bool, MolviewError> {
        let shown = self
            .selection
            .on_select(&self.catalog, id, &mut self.info)?;
        Ok(shown)
    }

    /// Step `offset` molecules through the catalog from the current one.
    ///
    /// With nothing shown, forward starts at the first molecule and
    /// backward at the last.
    fn cycle(&mut self, offset: isize) -> Result<(), MolviewError> {
        let len = self.catalog.len();
        if len == 0 {
            return Ok(());
        }
        let current = self
            .selection
            .active_id()
            .and_then(|id| self.catalog.position(id));
        let next = match current {
            Some(pos) => (pos as isize + offset).rem_euclid(len as isize) as usize,
            None if offset >= 0 => 0,
            None => len - 1,
        };
        let id = self.catalog.get(next).map(|r| r.id.clone());
        let _ = self.select(id.as_deref())?;
        Ok(())
    }

    /// Advance one frame and draw it.
    ///
    /// Returns `Ok(false)` without drawing when the frame loop is stopped.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's error.
    pub fn frame<R: FrameRenderer>(
        &mut self,
        renderer: &mut R,
    ) -> Result<bool, R::Error> {
        if !self.viewport.step(self.selection.active_mut()) {
            return Ok(false);
        }
        renderer.render(&self.frame_view())?;
        Ok(true)
    }

    /// Snapshot of the current state without advancing.
    #[must_use]
    pub fn frame_view(&self) -> FrameView<'_> {
        self.viewport
            .frame_view(self.selection.active(), self.selection.generation())
    }

    /// Resume the frame loop.
    pub fn start(&mut self) {
        self.viewport.start();
    }

    /// Stop the frame loop; [`frame`](Self::frame) becomes a no-op.
    pub fn stop(&mut self) {
        self.viewport.stop();
    }

    /// The molecule catalog.
    #[must_use]
    pub fn catalog(&self) -> &MoleculeCatalog {
        &self.catalog
    }

    /// The viewport controller.
    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    /// The selection controller.
    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// The info display.
    #[must_use]
    pub fn info(&self) -> &S {
        &self.info
    }

    /// Options this viewer was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use glam::Vec3;

    use super::*;
    use crate::scene::Shape;

    /// Records what each frame would draw.
    #[derive(Default)]
    struct RecordingRenderer {
        frames: usize,
        primitive_counts: Vec<usize>,
        generations: Vec<u64>,
    }

    impl FrameRenderer for RecordingRenderer {
        type Error = Infallible;

        fn render(&mut self, frame: &FrameView<'_>) -> Result<(), Infallible> {
            self.frames += 1;
            self.primitive_counts.push(frame.primitive_count());
            self.generations.push(frame.generation);
            Ok(())
        }
    }

    fn viewer() -> MoleculeViewer {
        MoleculeViewer::with_builtin(Options::default(), (800, 600))
    }

    #[test]
    fn water_scenario() {
        let mut v = viewer();
        v.execute(ViewerCommand::Select(Some("water".into()))).unwrap();

        let group = v.selection().active().unwrap();
        let radii: Vec<f32> = group
            .spheres()
            .filter_map(|p| match p.shape {
                Shape::Sphere { radius } => Some(radius),
                Shape::Cylinder { .. } => None,
            })
            .collect();
        assert_eq!(radii.len(), 3);
        assert_eq!(radii.iter().filter(|&&r| r == 0.3).count(), 1);
        assert_eq!(radii.iter().filter(|&&r| r == 0.2).count(), 2);
        assert_eq!(group.cylinders().count(), 2);

        assert_eq!(v.info().formula(), "H₂O");
        assert_eq!(v.info().structure(), "Bent geometry");
        assert_eq!(v.info().bond_angle(), "104.5°");
    }

    #[test]
    fn renders_every_frame_even_when_empty() {
        let mut v = viewer();
        let mut renderer = RecordingRenderer::default();

        for _ in 0..3 {
            assert!(v.frame(&mut renderer).unwrap());
        }
        v.execute(ViewerCommand::Select(Some("methane".into()))).unwrap();
        assert!(v.frame(&mut renderer).unwrap());
        v.execute(ViewerCommand::ToggleRotation).unwrap();
        assert!(v.frame(&mut renderer).unwrap());

        assert_eq!(renderer.frames, 5);
        assert_eq!(renderer.primitive_counts, [0, 0, 0, 9, 9]);
    }

    #[test]
    fn stopped_viewer_draws_nothing() {
        let mut v = viewer();
        let mut renderer = RecordingRenderer::default();
        v.stop();
        assert!(!v.frame(&mut renderer).unwrap());
        assert_eq!(renderer.frames, 0);
        v.start();
        assert!(v.frame(&mut renderer).unwrap());
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn frames_rotate_active_group() {
        let mut v = viewer();
        let mut renderer = RecordingRenderer::default();
        v.execute(ViewerCommand::Select(Some("carbonDioxide".into())))
            .unwrap();
        for _ in 0..10 {
            let _ = v.frame(&mut renderer).unwrap();
        }
        let rot = v.selection().active().unwrap().rotation();
        assert!((rot.y - 0.1).abs() < 1e-5);
        assert!((rot.x - 0.05).abs() < 1e-5);
        assert_eq!(v.frame_view().model, v.selection().active().unwrap().transform());
    }

    #[test]
    fn clearing_after_selection_empties_scene_and_info() {
        let mut v = viewer();
        let mut renderer = RecordingRenderer::default();
        v.execute(ViewerCommand::Select(Some("ammonia".into()))).unwrap();
        let _ = v.frame(&mut renderer).unwrap();
        v.execute(ViewerCommand::Select(Some("not-a-molecule".into())))
            .unwrap();
        let _ = v.frame(&mut renderer).unwrap();

        assert!(v.selection().active().is_none());
        assert!(v.info().is_cleared());
        assert_eq!(renderer.primitive_counts, [7, 0]);
        assert!(renderer.generations[1] > renderer.generations[0]);
    }

    #[test]
    fn cycling_walks_catalog_order_and_wraps() {
        let mut v = viewer();
        v.execute(ViewerCommand::NextMolecule).unwrap();
        assert_eq!(v.selection().active_id(), Some("water"));
        v.execute(ViewerCommand::NextMolecule).unwrap();
        assert_eq!(v.selection().active_id(), Some("methane"));
        v.execute(ViewerCommand::PreviousMolecule).unwrap();
        v.execute(ViewerCommand::PreviousMolecule).unwrap();
        assert_eq!(v.selection().active_id(), Some("carbonDioxide"));
        v.execute(ViewerCommand::ClearSelection).unwrap();
        v.execute(ViewerCommand::PreviousMolecule).unwrap();
        assert_eq!(v.selection().active_id(), Some("carbonDioxide"));
    }

    #[test]
    fn resize_and_reset_reach_the_camera() {
        let mut v = viewer();
        v.execute(ViewerCommand::Resize {
            width: 300,
            height: 300,
        })
        .unwrap();
        assert_eq!(v.frame_view().size, (300, 300));
        assert!((v.viewport().camera().camera.aspect - 1.0).abs() < 1e-6);

        v.execute(ViewerCommand::ResetCamera).unwrap();
        assert_eq!(v.viewport().camera().camera.eye, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn independent_viewers_do_not_share_state() {
        let mut a = viewer();
        let b = viewer();
        a.execute(ViewerCommand::Select(Some("ethanol".into()))).unwrap();
        a.execute(ViewerCommand::ToggleRotation).unwrap();
        assert!(b.selection().active().is_none());
        assert!(b.viewport().is_rotating());
        assert!(!a.viewport().is_rotating());
    }
}
