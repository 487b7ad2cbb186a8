use glam::Vec3;

/// Camera position plus the point it orbits/looks at.
///
/// The walkthrough owns the authoritative pose; orbit controllers receive
/// it every frame and report back any look-around changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Camera position in world units.
    pub position: Vec3,
    /// Point the camera faces.
    pub orbit_target: Vec3,
}

impl Pose {
    /// Pose at `position` looking at `orbit_target`.
    #[must_use]
    pub fn new(position: Vec3, orbit_target: Vec3) -> Self {
        Self {
            position,
            orbit_target,
        }
    }

    /// Unit view direction. Falls back to −Z when the target coincides
    /// with the position.
    #[must_use]
    pub fn facing(&self) -> Vec3 {
        (self.orbit_target - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// Facing projected onto the ground plane. Falls back to −Z when
    /// looking straight up or down.
    #[must_use]
    pub fn horizontal_forward(&self) -> Vec3 {
        let facing = self.facing();
        Vec3::new(facing.x, 0.0, facing.z).normalize_or(Vec3::NEG_Z)
    }

    /// Ground-plane right vector, perpendicular to
    /// [`horizontal_forward`](Self::horizontal_forward).
    #[must_use]
    pub fn horizontal_right(&self) -> Vec3 {
        let forward = self.horizontal_forward();
        Vec3::new(-forward.z, 0.0, forward.x)
    }

    /// Whether both points are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orbit_target.is_finite()
    }
}
