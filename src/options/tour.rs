use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tour", inline)]
#[serde(default)]
/// Scripted waypoint transitions and on-screen hints.
pub struct TourOptions {
    /// Seconds a waypoint transition takes.
    #[schemars(title = "Transition Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub transition_duration: f32,
    /// Easing curve applied to transition progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Seconds the controls hint stays on screen after start.
    #[schemars(title = "Hint Duration", range(min = 0.0, max = 30.0), extend("step" = 1.0))]
    pub hint_duration: f32,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            transition_duration: 1.5,
            easing: EasingFunction::QuadraticInOut,
            hint_duration: 8.0,
        }
    }
}
