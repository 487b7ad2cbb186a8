// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person navigation and collision core for the ArtVistas exhibit
//! walkthrough.
//!
//! A visitor walks a 3D gallery with WASD (or an on-screen joystick on
//! narrow screens), looks around with pointer drags, and can fly between
//! scripted points of interest. Ray probes keep the camera from walking
//! through walls once scene geometry has loaded.
//!
//! # Key entry points
//!
//! - [`walkthrough::Walkthrough`] - per-frame façade owning the camera pose
//! - [`input::InputAggregator`] - raw events to movement intent and commands
//! - [`collision::CollisionProber`] - fail-open ray probes against the scene
//! - [`movement::MovementIntegrator`] - per-axis blocked ground movement
//! - [`tour::WaypointNavigator`] - eased flights between [`tour::Waypoint`]s
//! - [`camera::OrbitController`] - look-around adapter seam
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame order
//!
//! Input handlers only record state. [`walkthrough::Walkthrough::frame`]
//! reads back orbit changes, then either advances the active waypoint
//! flight or integrates movement, then pushes the pose to the orbit
//! controller and lets it update.

pub mod camera;
pub mod collision;
pub mod error;
pub mod input;
pub mod movement;
pub mod options;
pub mod scene;
pub mod tour;
pub mod util;
pub mod walkthrough;

pub use camera::{OrbitCamera, OrbitController, Pose};
pub use error::NavError;
pub use input::InputEvent;
pub use options::Options;
pub use tour::{Tour, Waypoint};
pub use walkthrough::{NavCommand, Walkthrough};
