use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Device detection and on-screen joystick layout.
pub struct InputOptions {
    /// Viewports this wide or narrower are treated as mobile.
    #[schemars(skip)]
    pub mobile_breakpoint: f32,
    /// Farthest the joystick knob travels from its origin, in pixels.
    #[schemars(skip)]
    pub joystick_max_radius: f32,
    /// Joystick widget as `[left, bottom, width, height]` in pixels; the
    /// offsets are from the bottom-left corner of the viewport.
    #[schemars(skip)]
    pub joystick_bounds: [f32; 4],
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            joystick_max_radius: 40.0,
            joystick_bounds: [20.0, 20.0, 120.0, 120.0],
        }
    }
}
