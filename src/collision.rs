//! Ray-based proximity blocking against the loaded scene.
//!
//! The prober answers one question per candidate move: is there a surface
//! closer than the safety distance along this direction? Everything that
//! could go wrong (no geometry yet, geometry dropped, degenerate direction)
//! answers "not blocked".

use std::rc::Rc;

use glam::Vec3;

use crate::options::CollisionOptions;
use crate::scene::{Ray, SceneHandle, SceneProvider};

/// Result of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionQuery {
    /// Whether movement along the probed direction is blocked.
    pub blocked: bool,
    /// Distance to the nearest surface, if one was hit at any range.
    pub distance: Option<f32>,
}

impl CollisionQuery {
    /// The fail-open answer: nothing known, nothing blocked.
    pub const CLEAR: Self = Self {
        blocked: false,
        distance: None,
    };
}

/// Per-axis probe results for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisProbes {
    /// Probe along the signed forward direction, if that axis moved.
    pub forward: Option<CollisionQuery>,
    /// Probe along the signed strafe direction, if that axis moved.
    pub strafe: Option<CollisionQuery>,
}

/// Casts rays against scene geometry to block movement near surfaces.
#[derive(Debug, Clone)]
pub struct CollisionProber {
    scene: SceneHandle,
    safety_distance: f32,
}

impl CollisionProber {
    /// Prober with no geometry attached.
    #[must_use]
    pub fn new(options: &CollisionOptions) -> Self {
        Self {
            scene: SceneHandle::empty(),
            safety_distance: options.safety_distance,
        }
    }

    /// Apply updated collision options.
    pub fn apply_options(&mut self, options: &CollisionOptions) {
        self.safety_distance = options.safety_distance;
    }

    /// Scene geometry finished loading.
    pub fn attach_scene(&mut self, geometry: &Rc<dyn SceneProvider>) {
        self.scene.attach(geometry);
    }

    /// Drop the reference to scene geometry.
    pub fn detach_scene(&mut self) {
        self.scene.detach();
    }

    /// Whether probes currently consult real geometry.
    #[must_use]
    pub fn has_scene(&self) -> bool {
        self.scene.is_ready()
    }

    /// Distance under which a hit blocks movement.
    #[must_use]
    pub fn safety_distance(&self) -> f32 {
        self.safety_distance
    }

    /// Probe from `origin` along `direction`.
    ///
    /// Blocked iff the nearest intersection is closer than the safety
    /// distance. Fails open when geometry is missing or the direction is
    /// degenerate.
    #[must_use]
    pub fn probe(&self, origin: Vec3, direction: Vec3) -> CollisionQuery {
        let Some(scene) = self.scene.get() else {
            return CollisionQuery::CLEAR;
        };
        let Some(ray) = Ray::new(origin, direction) else {
            return CollisionQuery::CLEAR;
        };
        match scene.nearest(&ray) {
            Some(hit) => CollisionQuery {
                blocked: hit.distance < self.safety_distance,
                distance: Some(hit.distance),
            },
            None => CollisionQuery::CLEAR,
        }
    }

    /// Shorthand for `probe(..).blocked`.
    #[must_use]
    pub fn is_blocked(&self, origin: Vec3, direction: Vec3) -> bool {
        self.probe(origin, direction).blocked
    }

    /// Probe both movement axes in one call, upgrading the scene reference
    /// once. `None` directions are skipped.
    #[must_use]
    pub fn probe_axes(
        &self,
        origin: Vec3,
        forward: Option<Vec3>,
        strafe: Option<Vec3>,
    ) -> AxisProbes {
        let Some(scene) = self.scene.get() else {
            return AxisProbes {
                forward: forward.map(|_| CollisionQuery::CLEAR),
                strafe: strafe.map(|_| CollisionQuery::CLEAR),
            };
        };
        let probe_one = |direction: Vec3| {
            Ray::new(origin, direction)
                .and_then(|ray| scene.nearest(&ray))
                .map_or(CollisionQuery::CLEAR, |hit| CollisionQuery {
                    blocked: hit.distance < self.safety_distance,
                    distance: Some(hit.distance),
                })
        };
        AxisProbes {
            forward: forward.map(probe_one),
            strafe: strafe.map(probe_one),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Mesh, SceneGeometry, SceneNode};

    fn prober() -> CollisionProber {
        CollisionProber::new(&CollisionOptions::default())
    }

    /// Wall whose near face sits at z = -0.5 in front of the origin.
    fn near_wall() -> Rc<dyn SceneProvider> {
        Rc::new(SceneGeometry::new(vec![SceneNode::group(
            "room",
            vec![SceneNode::with_mesh(
                "wall",
                Mesh::cuboid(
                    Vec3::new(-3.0, 0.0, -0.7),
                    Vec3::new(3.0, 3.0, -0.5),
                ),
            )],
        )]))
    }

    #[test]
    fn fails_open_before_geometry_loads() {
        let prober = prober();
        for dir in [Vec3::X, Vec3::NEG_Z, Vec3::new(1.0, 0.0, 1.0)] {
            let q = prober.probe(Vec3::new(0.0, 1.6, 0.0), dir);
            assert_eq!(q, CollisionQuery::CLEAR);
        }
        assert!(!prober.has_scene());
    }

    #[test]
    fn blocks_within_safety_distance() {
        let mut prober = prober();
        let scene = near_wall();
        prober.attach_scene(&scene);

        let q = prober.probe(Vec3::new(0.1, 1.6, 0.0), Vec3::NEG_Z);
        assert!(q.blocked);
        assert!((q.distance.unwrap() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn far_surfaces_report_distance_but_do_not_block() {
        let mut prober = prober();
        let scene = near_wall();
        prober.attach_scene(&scene);

        let q = prober.probe(Vec3::new(0.1, 1.6, 2.0), Vec3::NEG_Z);
        assert!(!q.blocked);
        assert!((q.distance.unwrap() - 2.5).abs() < 1e-5);

        let away = prober.probe(Vec3::new(0.1, 1.6, 0.0), Vec3::Z);
        assert_eq!(away, CollisionQuery::CLEAR);
    }

    #[test]
    fn dropped_geometry_fails_open_again() {
        let mut prober = prober();
        let scene = near_wall();
        prober.attach_scene(&scene);
        drop(scene);
        assert!(!prober.is_blocked(Vec3::new(0.1, 1.6, 0.0), Vec3::NEG_Z));
    }

    #[test]
    fn degenerate_direction_is_clear() {
        let mut prober = prober();
        let scene = near_wall();
        prober.attach_scene(&scene);
        assert_eq!(
            prober.probe(Vec3::new(0.1, 1.6, 0.0), Vec3::ZERO),
            CollisionQuery::CLEAR
        );
    }

    #[test]
    fn batched_probe_matches_single_probes() {
        let mut prober = prober();
        let scene = near_wall();
        prober.attach_scene(&scene);
        let origin = Vec3::new(0.1, 1.6, 0.0);

        let both = prober.probe_axes(origin, Some(Vec3::NEG_Z), Some(Vec3::X));
        assert_eq!(both.forward, Some(prober.probe(origin, Vec3::NEG_Z)));
        assert_eq!(both.strafe, Some(prober.probe(origin, Vec3::X)));

        let none = prober.probe_axes(origin, None, None);
        assert_eq!(none, AxisProbes::default());
    }
}
