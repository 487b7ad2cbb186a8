use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Free-movement parameters for the per-frame integrator.
pub struct MovementOptions {
    /// World units moved per frame at full intent.
    #[schemars(title = "Walk Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub speed: f32,
    /// Lowest camera height; the floor clamp pins `y` here.
    #[schemars(skip)]
    pub min_height: f32,
    /// Joystick values with magnitude at or below this are ignored.
    #[schemars(title = "Joystick Deadzone", range(min = 0.0, max = 0.5), extend("step" = 0.05))]
    pub joystick_deadzone: f32,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self {
            speed: 0.1,
            min_height: 1.0,
            joystick_deadzone: 0.1,
        }
    }
}
