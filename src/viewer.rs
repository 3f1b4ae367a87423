//! Standalone viewer window backed by winit.
//!
//! The window title doubles as the info display: it names the shown
//! molecule and its formula, geometry and bond angle. Every selection is
//! also logged at info level.
//!
//! ```no_run
//! # use molview::Viewer;
//! Viewer::builder()
//!     .with_molecule("ethanol")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::{command::ViewerCommand, MoleculeViewer},
    error::MolviewError,
    info::PLACEHOLDER,
    options::Options,
    renderer::BallAndStickRenderer,
    util::frame_timing::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    molecule: Option<String>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            molecule: None,
            options: None,
            title: "Molview".into(),
        }
    }

    /// Molecule to show once the window opens.
    #[must_use]
    pub fn with_molecule(mut self, id: impl Into<String>) -> Self {
        self.molecule = Some(id.into());
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the base window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            molecule: self.molecule,
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing one molecule at a time.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run).
pub struct Viewer {
    molecule: Option<String>,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Viewer`] if the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), MolviewError> {
        let event_loop =
            EventLoop::new().map_err(|e| MolviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            renderer: None,
            viewer: None,
            timing: FrameTiming::new(self.options.animation.target_fps),
            molecule: self.molecule,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| MolviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    renderer: Option<BallAndStickRenderer>,
    viewer: Option<MoleculeViewer>,
    timing: FrameTiming,
    /// Initial selection, consumed on first resume.
    molecule: Option<String>,
    /// Consumed when the viewer is created.
    options: Option<Options>,
    title: String,
}

fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// `"Ammonia | NH₃ | Pyramidal | 107°"`, or the first property
/// when the record has no structured facts.
fn selection_label(viewer: &MoleculeViewer) -> Option<String> {
    let record = viewer
        .selection()
        .active_id()
        .and_then(|id| viewer.catalog().lookup(id))?;
    let fields = viewer.info().fields();
    let detail = if fields.formula == PLACEHOLDER {
        fields.properties.first().cloned().unwrap_or_default()
    } else {
        viewer.info().summary_line()
    };
    Some(format!("{} | {detail}", record.name))
}

fn window_title(base: &str, label: Option<&str>) -> String {
    label.map_or_else(|| base.to_owned(), |label| format!("{base} - {label}"))
}

/// Run `command` and mirror any selection change into the title and log.
fn apply(
    window: &Window,
    viewer: &mut MoleculeViewer,
    base_title: &str,
    command: ViewerCommand,
) {
    let selects = matches!(
        command,
        ViewerCommand::Select(_)
            | ViewerCommand::NextMolecule
            | ViewerCommand::PreviousMolecule
            | ViewerCommand::ClearSelection
    );
    if let Err(e) = viewer.execute(command) {
        log::error!("{e}");
    }
    if selects {
        let label = selection_label(viewer);
        match &label {
            Some(label) => {
                log::info!("showing {label}");
                for property in viewer.info().properties() {
                    log::debug!("  {property}");
                }
            }
            None => log::info!("showing nothing"),
        }
        window.set_title(&window_title(base_title, label.as_deref()));
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let options = self.options.take().unwrap_or_default();

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        let size = viewport_size(window.inner_size());

        let renderer = match pollster::block_on(BallAndStickRenderer::new(
            window.clone(),
            size,
            &options.geometry,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut viewer = MoleculeViewer::with_builtin(options, size);
        if let Some(id) = self.molecule.take() {
            apply(&window, &mut viewer, &self.title, ViewerCommand::Select(Some(id)));
        }

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.viewer = Some(viewer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(viewer), Some(renderer)) =
            (&self.window, &mut self.viewer, &mut self.renderer)
        else {
            if matches!(event, WindowEvent::CloseRequested) {
                event_loop.exit();
            }
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                viewer.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(inner) => {
                let (width, height) = viewport_size(inner);
                apply(window, viewer, &self.title, ViewerCommand::Resize { width, height });
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let (width, height) = viewport_size(window.inner_size());
                apply(window, viewer, &self.title, ViewerCommand::Resize { width, height });
            }

            WindowEvent::RedrawRequested => {
                if self.timing.should_render() {
                    match viewer.frame(renderer) {
                        Ok(true) => self.timing.end_frame(),
                        Ok(false) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => renderer.reconfigure(),
                        Err(e) => log::error!("render error: {e:?}"),
                    }
                }
                window.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key = format!("{code:?}");
                if let Some(command) = viewer.options().keybindings.lookup(&key)
                {
                    apply(window, viewer, &self.title, command);
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_without_selection_is_base() {
        assert_eq!(window_title("Molview", None), "Molview");
    }

    #[test]
    fn title_names_selection() {
        let mut viewer = MoleculeViewer::with_builtin(Options::default(), (10, 10));
        let _ = viewer.select(Some("ammonia")).unwrap();
        let label = selection_label(&viewer).unwrap();
        assert_eq!(label, "Ammonia | NH₃ | Pyramidal | 107°");
        assert_eq!(
            window_title("Molview", Some(&label)),
            "Molview - Ammonia | NH₃ | Pyramidal | 107°"
        );
    }

    #[test]
    fn no_label_when_nothing_shown() {
        let viewer = MoleculeViewer::with_builtin(Options::default(), (10, 10));
        assert!(selection_label(&viewer).is_none());
    }

    #[test]
    fn default_keys_map_to_commands() {
        let options = Options::default();
        assert_eq!(
            options.keybindings.lookup("KeyR"),
            Some(ViewerCommand::ToggleRotation)
        );
        assert_eq!(
            options.keybindings.lookup("ArrowRight"),
            Some(ViewerCommand::NextMolecule)
        );
    }
}
