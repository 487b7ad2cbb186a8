use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Collision", inline)]
#[serde(default)]
/// Ray-probe collision parameters.
pub struct CollisionOptions {
    /// A surface closer than this along the move direction blocks the move.
    #[schemars(title = "Safety Distance", range(min = 0.1, max = 3.0), extend("step" = 0.1))]
    pub safety_distance: f32,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        Self {
            safety_distance: 0.8,
        }
    }
}
