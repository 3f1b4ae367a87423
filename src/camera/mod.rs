//! Camera for viewing the molecule scene.
//!
//! Provides a fixed perspective camera that looks at the origin, with
//! reset and viewport-resize handling.

/// Camera controller owning the camera state and its reset position.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
