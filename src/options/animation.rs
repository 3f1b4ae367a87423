use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Tumble rotation applied to the displayed molecule every frame.
pub struct AnimationOptions {
    /// Radians added around the horizontal (X) axis per frame.
    #[schemars(title = "Tumble Speed", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub rotation_speed_x: f32,
    /// Radians added around the vertical (Y) axis per frame.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub rotation_speed_y: f32,
    /// Whether rotation is enabled when the viewer starts.
    #[schemars(title = "Rotate on Start")]
    pub rotate_on_start: bool,
    /// Frame cap for the native viewer (0 = follow the display).
    #[schemars(skip)]
    pub target_fps: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            rotation_speed_x: 0.005,
            rotation_speed_y: 0.01,
            rotate_on_start: true,
            target_fps: 0,
        }
    }
}
