// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (default thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Ball-and-stick viewer for small molecules, built on wgpu.
//!
//! Molview shows one molecule at a time from a fixed catalog: atoms as
//! colored spheres, bonds as grey cylinders, the whole group slowly
//! tumbling under a perspective camera. Next to the 3D view it presents
//! the molecule's chemistry facts (formula, shape, bond angle, uses).
//!
//! # Key entry points
//!
//! - [`engine::MoleculeViewer`] - one viewer instance: selection, viewport
//!   and info display
//! - [`catalog::MoleculeCatalog`] - the molecule records
//! - [`scene::builder::SceneBuilder`] - turns a record into primitives
//! - [`renderer::BallAndStickRenderer`] - draws frames with wgpu
//! - [`options::Options`] - runtime configuration (camera, lighting,
//!   geometry, animation, key bindings)
//!
//! # Architecture
//!
//! All viewer state lives in [`engine::MoleculeViewer`], which hosts drive
//! with [`engine::command::ViewerCommand`]s and a per-frame
//! [`frame`](engine::MoleculeViewer::frame) call. Each frame produces an
//! [`engine::frame::FrameView`] snapshot that any
//! [`engine::frame::FrameRenderer`] can draw, so everything above the GPU
//! layer runs headless in tests. Two hosts ship with the crate: a winit
//! window (`viewer` feature) and a browser canvas (`web` feature).

pub mod camera;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod info;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use catalog::MoleculeCatalog;
pub use engine::command::ViewerCommand;
pub use engine::MoleculeViewer;
pub use error::MolviewError;
pub use options::Options;
pub use renderer::BallAndStickRenderer;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
