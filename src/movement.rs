//! Per-frame free movement on the ground plane.
//!
//! Each tick walks the camera along its horizontal forward and right
//! vectors, asking the [`CollisionProber`] once per active axis whether
//! that axis may move. A blocked axis is dropped for the tick while the
//! other still applies, so the visitor slides along walls.

use glam::Vec3;

use crate::camera::Pose;
use crate::collision::CollisionProber;
use crate::input::AxisIntent;
use crate::options::MovementOptions;

/// Outcome of one movement tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Whether the position changed.
    pub moved: bool,
    /// Forward/backward motion was requested but blocked.
    pub blocked_forward: bool,
    /// Strafe motion was requested but blocked.
    pub blocked_strafe: bool,
}

/// Integrates movement intent into the camera pose.
#[derive(Debug, Clone)]
pub struct MovementIntegrator {
    speed: f32,
    min_height: f32,
}

impl MovementIntegrator {
    /// Integrator using the given movement options.
    #[must_use]
    pub fn new(options: &MovementOptions) -> Self {
        Self {
            speed: options.speed,
            min_height: options.min_height,
        }
    }

    /// Apply updated movement options.
    pub fn apply_options(&mut self, options: &MovementOptions) {
        self.speed = options.speed;
        self.min_height = options.min_height;
    }

    /// World units moved per tick at full intent.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Lowest allowed camera height.
    #[must_use]
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Advance `pose` by one tick of `axes`.
    ///
    /// With no active axis the pose is untouched. Otherwise the net
    /// unblocked displacement is applied, `y` is pinned to at least
    /// `min_height`, and the orbit target is re-placed one unit along the
    /// pre-move facing so pitch survives the move.
    pub fn tick(
        &self,
        pose: &mut Pose,
        axes: AxisIntent,
        prober: &CollisionProber,
    ) -> TickReport {
        if !axes.is_active() || !pose.is_finite() {
            return TickReport::default();
        }

        let facing = pose.facing();
        let forward = pose.horizontal_forward();
        let right = pose.horizontal_right();

        let forward_dir =
            (axes.forward != 0.0).then(|| forward * axes.forward.signum());
        let strafe_dir =
            (axes.strafe != 0.0).then(|| right * axes.strafe.signum());
        let probes =
            prober.probe_axes(pose.position, forward_dir, strafe_dir);

        let blocked_forward = probes.forward.is_some_and(|q| q.blocked);
        let blocked_strafe = probes.strafe.is_some_and(|q| q.blocked);

        let mut displacement = Vec3::ZERO;
        if forward_dir.is_some() && !blocked_forward {
            displacement += forward * (axes.forward * self.speed);
        }
        if strafe_dir.is_some() && !blocked_strafe {
            displacement += right * (axes.strafe * self.speed);
        }

        if blocked_forward || blocked_strafe {
            log::trace!(
                "Movement blocked (forward: {blocked_forward}, strafe: \
                 {blocked_strafe}) at {:?}",
                pose.position
            );
        }

        let before = pose.position;
        let mut position = before + displacement;
        position.y = position.y.max(self.min_height);
        pose.position = position;
        pose.orbit_target = position + facing;

        TickReport {
            moved: position != before,
            blocked_forward,
            blocked_strafe,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::options::CollisionOptions;
    use crate::scene::{Mesh, SceneGeometry, SceneNode, SceneProvider};

    const EPS: f32 = 1e-5;

    fn integrator() -> MovementIntegrator {
        MovementIntegrator::new(&MovementOptions::default())
    }

    fn open_floor() -> CollisionProber {
        CollisionProber::new(&CollisionOptions::default())
    }

    fn entrance() -> Pose {
        Pose::new(Vec3::new(0.0, 1.6, 5.0), Vec3::new(0.0, 1.6, 0.0))
    }

    fn forward() -> AxisIntent {
        AxisIntent {
            forward: 1.0,
            strafe: 0.0,
        }
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    /// Wall at z in [-0.7, -0.5] spanning x in [-3, 3].
    fn wall_ahead() -> Rc<dyn SceneProvider> {
        Rc::new(SceneGeometry::new(vec![SceneNode::with_mesh(
            "wall",
            Mesh::cuboid(Vec3::new(-3.0, 0.0, -0.7), Vec3::new(3.0, 3.0, -0.5)),
        )]))
    }

    #[test]
    fn walks_forward_one_step() {
        let mut pose = entrance();
        let report = integrator().tick(&mut pose, forward(), &open_floor());
        assert!(report.moved);
        assert!(approx(pose.position, Vec3::new(0.0, 1.6, 4.9)));
        assert!(approx(pose.orbit_target, Vec3::new(0.0, 1.6, 3.9)));
    }

    #[test]
    fn idle_tick_is_a_no_op() {
        let mut pose = Pose::new(Vec3::new(1.0, 0.2, 1.0), Vec3::new(3.0, 0.0, 0.0));
        let before = pose;
        let report = integrator().tick(&mut pose, AxisIntent::NONE, &open_floor());
        assert_eq!(report, TickReport::default());
        assert_eq!(pose, before);
    }

    #[test]
    fn strafe_right_follows_facing() {
        let mut pose = entrance();
        let axes = AxisIntent {
            forward: 0.0,
            strafe: 1.0,
        };
        let _ = integrator().tick(&mut pose, axes, &open_floor());
        assert!(approx(pose.position, Vec3::new(0.1, 1.6, 5.0)));

        let axes = AxisIntent {
            forward: 0.0,
            strafe: -1.0,
        };
        let _ = integrator().tick(&mut pose, axes, &open_floor());
        assert!(approx(pose.position, Vec3::new(0.0, 1.6, 5.0)));
    }

    #[test]
    fn diagonal_combines_both_axes() {
        let mut pose = entrance();
        let axes = AxisIntent {
            forward: -1.0,
            strafe: -1.0,
        };
        let _ = integrator().tick(&mut pose, axes, &open_floor());
        assert!(approx(pose.position, Vec3::new(-0.1, 1.6, 5.1)));
    }

    #[test]
    fn joystick_magnitude_scales_step() {
        let mut pose = entrance();
        let axes = AxisIntent {
            forward: 0.5,
            strafe: 0.0,
        };
        let _ = integrator().tick(&mut pose, axes, &open_floor());
        assert!(approx(pose.position, Vec3::new(0.0, 1.6, 4.95)));
    }

    #[test]
    fn pitch_does_not_change_height_but_is_preserved() {
        let start = Vec3::new(0.0, 1.6, 5.0);
        let mut pose = Pose::new(start, start + Vec3::new(0.0, -1.0, -1.0));
        let facing = pose.facing();
        let _ = integrator().tick(&mut pose, forward(), &open_floor());
        assert!((pose.position.y - 1.6).abs() < EPS);
        assert!((pose.position.z - 4.9).abs() < EPS);
        assert!(approx(pose.facing(), facing));
    }

    #[test]
    fn floor_clamp_pins_height() {
        let mut pose = Pose::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.5, -1.0));
        let _ = integrator().tick(&mut pose, forward(), &open_floor());
        assert_eq!(pose.position.y, 1.0);
        assert!((pose.position.z + 0.1).abs() < EPS);
    }

    #[test]
    fn blocked_axis_is_suppressed_and_other_axis_moves() {
        let scene = wall_ahead();
        let mut prober = open_floor();
        prober.attach_scene(&scene);

        let mut pose = Pose::new(Vec3::new(0.1, 1.6, 0.0), Vec3::new(0.1, 1.6, -1.0));
        let axes = AxisIntent {
            forward: 1.0,
            strafe: 1.0,
        };
        let report = integrator().tick(&mut pose, axes, &prober);
        assert!(report.blocked_forward);
        assert!(!report.blocked_strafe);
        assert!(report.moved);
        assert!(approx(pose.position, Vec3::new(0.2, 1.6, 0.0)));
    }

    #[test]
    fn blocked_tick_is_idempotent() {
        let scene = wall_ahead();
        let mut prober = open_floor();
        prober.attach_scene(&scene);

        let mut pose = Pose::new(Vec3::new(0.1, 1.6, 0.0), Vec3::new(0.1, 1.6, -1.0));
        let first = integrator().tick(&mut pose, forward(), &prober);
        let after_first = pose;
        let second = integrator().tick(&mut pose, forward(), &prober);
        assert!(!first.moved && first.blocked_forward);
        assert_eq!(first, second);
        assert_eq!(pose, after_first);
        assert!(approx(pose.position, Vec3::new(0.1, 1.6, 0.0)));
    }

    #[test]
    fn backing_away_from_wall_is_allowed() {
        let scene = wall_ahead();
        let mut prober = open_floor();
        prober.attach_scene(&scene);

        let mut pose = Pose::new(Vec3::new(0.1, 1.6, 0.0), Vec3::new(0.1, 1.6, -1.0));
        let axes = AxisIntent {
            forward: -1.0,
            strafe: 0.0,
        };
        let report = integrator().tick(&mut pose, axes, &prober);
        assert!(!report.blocked_forward);
        assert!(approx(pose.position, Vec3::new(0.1, 1.6, 0.1)));
    }

    #[test]
    fn walks_until_wall_then_stops() {
        let scene = wall_ahead();
        let mut prober = open_floor();
        prober.attach_scene(&scene);

        let mut pose = Pose::new(Vec3::new(0.1, 1.6, 3.0), Vec3::new(0.1, 1.6, 2.0));
        for _ in 0..100 {
            let _ = integrator().tick(&mut pose, forward(), &prober);
        }
        // Stops at the first position within the safety distance.
        let gap = pose.position.z - (-0.5);
        assert!(gap < 0.8 + EPS);
        assert!(gap > 0.8 - 0.1 - EPS);
    }
}
