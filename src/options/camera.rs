use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit/look control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 30.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Radians of orbit per pixel of drag.
    #[schemars(title = "Look Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Fractional distance change per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the camera may orbit to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the camera may orbit from its target.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Largest polar angle from straight up, in radians. π/2 keeps the
    /// camera from looking up through the floor.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Whether orbit motion coasts to a stop.
    #[schemars(title = "Smooth Look")]
    pub enable_damping: bool,
    /// Fraction of remaining orbit motion consumed per update.
    #[schemars(skip)]
    pub damping_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 200.0,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 10.0,
            max_polar_angle: FRAC_PI_2,
            enable_damping: true,
            damping_factor: 0.05,
        }
    }
}
