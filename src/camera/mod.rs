//! Camera pose and the orbit/look controller seam.
//!
//! The walkthrough owns a [`Pose`]; an [`OrbitController`] lets the user
//! look around it. [`OrbitCamera`] is the bundled controller.

/// Orbit controller trait and the spherical orbit camera.
pub mod controller;
/// Projection camera and matrix construction.
pub mod core;
/// Camera position plus orbit target.
pub mod pose;

pub use controller::{OrbitCamera, OrbitController};
pub use pose::Pose;
