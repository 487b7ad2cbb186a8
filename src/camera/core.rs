use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Set the aspect ratio from a viewport size. Degenerate sizes are
    /// ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 1.6, 5.0),
            target: Vec3::new(0.0, 1.6, 0.0),
            up: Vec3::Y,
            aspect: 1.5,
            fovy: 60.0,
            znear: 0.1,
            zfar: 200.0,
        }
    }

    #[test]
    fn target_projects_to_screen_center() {
        let clip = camera().build_matrix()
            * Vec4::new(0.0, 1.6, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut cam = camera();
        cam.resize(800.0, 0.0);
        assert_eq!(cam.aspect, 1.5);
        cam.resize(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
