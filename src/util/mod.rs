//! Small shared utilities.

/// Frame pacing and FPS readout.
pub mod frame_timing;
/// Light rig uniform.
pub mod lighting;
