//! Guided tour: waypoints, eased camera flights, and the navigator that
//! cycles through them.

/// Tour stepping and the single active flight.
pub mod navigator;
/// Eased camera flight toward a waypoint.
pub mod transition;
/// Waypoints and the ordered tour.
pub mod waypoint;

pub use navigator::{NavigatorState, WaypointNavigator};
pub use transition::CameraTransition;
pub use waypoint::{Tour, Waypoint};
