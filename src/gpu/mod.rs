//! GPU resource management: device and surface setup, growable buffers.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, queue and depth target.
pub mod render_context;
