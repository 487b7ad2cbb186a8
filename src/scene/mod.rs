//! Read-only view of the loaded museum model.
//!
//! The rendering engine owns the real scene graph. The navigation core only
//! needs "report intersections along a ray", expressed by
//! [`SceneProvider`]. [`SceneGeometry`] is the triangle-mesh implementation
//! used by the demo and tests, and [`SceneHandle`] is the weak reference the
//! collision prober holds.

/// Nested collidable meshes.
pub mod geometry;
/// Scene capability trait and the weak handle to it.
pub mod provider;
/// Rays, hits, triangles, and bounding boxes.
pub mod ray;

pub use geometry::{Mesh, SceneGeometry, SceneNode};
pub use provider::{SceneHandle, SceneProvider};
pub use ray::{Aabb, Ray, RayHit, Triangle};
