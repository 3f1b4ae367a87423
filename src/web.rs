//! Browser host: a wgpu canvas plus DOM info panel, driven from
//! JavaScript.
//!
//! The page owns the `<select>` control and the `requestAnimationFrame`
//! loop; it forwards changes to [`WebViewer::select`] and calls
//! [`WebViewer::frame`] once per animation frame.

use std::fmt::Display;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::{
    catalog::MoleculeCatalog,
    engine::{command::ViewerCommand, MoleculeViewer},
    info::{InfoFields, InfoSink, PLACEHOLDER},
    options::Options,
    renderer::BallAndStickRenderer,
};

/// Element ids the info panel writes to.
const FORMULA_ID: &str = "formula";
const STRUCTURE_ID: &str = "structure";
const ANGLES_ID: &str = "angles";
const APPLICATIONS_ID: &str = "applications";

fn to_js(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Install the panic hook and console logger once per page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

// ── Info panel ───────────────────────────────────────────────────────────

/// Info display backed by page elements.
///
/// Missing elements are skipped with a warning.
pub struct DomInfoPanel {
    document: Document,
}

impl DomInfoPanel {
    /// Panel writing into `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::warn!("info element #{id} not found"),
        }
    }

    fn set_list(&self, id: &str, items: &[String]) {
        let Some(list) = self.document.get_element_by_id(id) else {
            log::warn!("info element #{id} not found");
            return;
        };
        list.set_inner_html("");
        for item in items {
            let li = match self.document.create_element("li") {
                Ok(li) => li,
                Err(e) => {
                    log::warn!("cannot create list item: {e:?}");
                    return;
                }
            };
            li.set_text_content(Some(item));
            if let Err(e) = list.append_child(&li) {
                log::warn!("cannot append list item: {e:?}");
            }
        }
    }
}

impl InfoSink for DomInfoPanel {
    fn present(&mut self, fields: &InfoFields) {
        self.set_text(FORMULA_ID, &fields.formula);
        self.set_text(STRUCTURE_ID, &fields.structure);
        self.set_text(ANGLES_ID, &fields.bond_angle);
        self.set_list(APPLICATIONS_ID, &fields.properties);
    }

    fn clear(&mut self) {
        self.set_text(FORMULA_ID, PLACEHOLDER);
        self.set_text(STRUCTURE_ID, PLACEHOLDER);
        self.set_text(ANGLES_ID, PLACEHOLDER);
        self.set_list(APPLICATIONS_ID, &[]);
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// One viewer bound to a page canvas.
#[wasm_bindgen]
pub struct WebViewer {
    viewer: MoleculeViewer<DomInfoPanel>,
    renderer: BallAndStickRenderer,
}

#[wasm_bindgen]
impl WebViewer {
    /// Attach to the `<canvas>` with id `canvas_id`, showing nothing.
    ///
    /// # Errors
    ///
    /// Rejects if the canvas is missing or no GPU backend is available.
    pub async fn create(canvas_id: String) -> Result<WebViewer, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(&canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let size = (canvas.width().max(1), canvas.height().max(1));

        let options = Options::default();
        let renderer = BallAndStickRenderer::new(
            wgpu::SurfaceTarget::Canvas(canvas),
            size,
            &options.geometry,
        )
        .await
        .map_err(to_js)?;
        let viewer = MoleculeViewer::new(
            MoleculeCatalog::builtin(),
            options,
            DomInfoPanel::new(document),
            size,
        );
        log::info!("viewer attached to #{canvas_id} at {}x{}", size.0, size.1);
        Ok(Self { viewer, renderer })
    }

    /// Show molecule `id`; an empty or unknown id shows nothing. Returns
    /// whether a molecule is now shown.
    ///
    /// # Errors
    ///
    /// Rejects if the record is malformed.
    pub fn select(&mut self, id: &str) -> Result<bool, JsValue> {
        self.viewer.select(Some(id)).map_err(to_js)
    }

    /// Flip the tumble rotation. Returns the new state.
    pub fn toggle_rotation(&mut self) -> bool {
        if let Err(e) = self.viewer.execute(ViewerCommand::ToggleRotation) {
            log::error!("{e}");
        }
        self.viewer.viewport().is_rotating()
    }

    /// Move the camera back home.
    pub fn reset_camera(&mut self) {
        if let Err(e) = self.viewer.execute(ViewerCommand::ResetCamera) {
            log::error!("{e}");
        }
    }

    /// React to a container resize; the drawing surface follows on the
    /// next frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.viewer.execute(ViewerCommand::Resize { width, height }) {
            log::error!("{e}");
        }
    }

    /// Advance and draw one frame. Returns `false` when nothing was drawn.
    ///
    /// # Errors
    ///
    /// Rejects on unrecoverable surface errors.
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        match self.viewer.frame(&mut self.renderer) {
            Ok(drawn) => Ok(drawn),
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                self.renderer.reconfigure();
                Ok(false)
            }
            Err(e) => Err(to_js(e)),
        }
    }

    /// Resume the frame loop.
    pub fn start(&mut self) {
        self.viewer.start();
    }

    /// Stop the frame loop; [`frame`](Self::frame) draws nothing until
    /// restarted.
    pub fn stop(&mut self) {
        self.viewer.stop();
    }

    /// JSON Schema of the viewer options, for building a settings form.
    ///
    /// # Errors
    ///
    /// Rejects if the schema cannot be serialized.
    pub fn options_schema() -> Result<String, JsValue> {
        Options::schema_json().map_err(to_js)
    }

    /// Catalog ids in display order, for the select control.
    #[must_use]
    pub fn molecule_ids(&self) -> js_sys::Array {
        self.viewer.catalog().ids().map(JsValue::from_str).collect()
    }

    /// Display name for `id`.
    #[must_use]
    pub fn molecule_name(&self, id: &str) -> Option<String> {
        self.viewer.catalog().lookup(id).map(|r| r.name.clone())
    }
}
