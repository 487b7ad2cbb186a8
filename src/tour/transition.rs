use glam::Vec3;

use crate::camera::Pose;
use crate::util::easing::EasingFunction;

/// Eased flight of the camera from its current position to a waypoint.
///
/// Position interpolates from `start` to `target`; the orbit target sits on
/// `look_at` for the whole flight so the view swings toward it.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    /// Waypoint index being flown to.
    pub waypoint: usize,
    start: Vec3,
    target: Vec3,
    look_at: Vec3,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl CameraTransition {
    /// Flight from `start` to `target` over `duration` seconds.
    #[must_use]
    pub fn new(
        waypoint: usize,
        start: Vec3,
        target: Vec3,
        look_at: Vec3,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            waypoint,
            start,
            target,
            look_at,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Progress in [0, 1] before easing.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Whether the flight has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Pose at the current progress. Exactly the destination once
    /// complete.
    #[must_use]
    pub fn pose(&self) -> Pose {
        if self.is_complete() {
            return Pose::new(self.target, self.look_at);
        }
        let t = self.easing.evaluate(self.progress());
        Pose::new(self.start.lerp(self.target, t), self.look_at)
    }

    /// Advance by `dt` seconds and return the new pose.
    pub fn advance(&mut self, dt: f32) -> Pose {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.pose()
    }
}
