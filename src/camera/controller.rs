use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::camera::pose::Pose;
use crate::options::CameraOptions;

/// Smallest polar angle kept away from the poles so the view basis stays
/// well defined.
const POLE_EPSILON: f32 = 1e-6;

/// Pending orbit motion below this is dropped.
const SETTLE_EPSILON: f32 = 1e-7;

/// Look-around controller driven by the walkthrough.
///
/// The walkthrough pushes its pose with [`set_pose`](Self::set_pose) each
/// frame, forwards drags and scrolls, then calls [`update`](Self::update).
/// Whatever the controller does to the pose in `update` is read back with
/// [`pose`](Self::pose) at the start of the next frame.
pub trait OrbitController {
    /// Current camera position and orbit target.
    fn pose(&self) -> Pose;
    /// Overwrite camera position and orbit target.
    fn set_pose(&mut self, pose: &Pose);
    /// Orbit around the target by a pointer delta in pixels.
    fn rotate(&mut self, delta: Vec2);
    /// Move toward (positive) or away from (negative) the target.
    fn zoom(&mut self, delta: f32);
    /// Apply pending motion and constraints.
    fn update(&mut self);
    /// The viewport changed size (logical pixels).
    fn resize(&mut self, _width: f32, _height: f32) {}
}

/// Orbit camera around a target point, in spherical coordinates.
///
/// Distance to the target is clamped to `[min_distance, max_distance]` and
/// the polar angle (measured from straight up) to `[0, max_polar_angle]`.
/// With damping enabled, each `update` applies `damping_factor` of the
/// pending rotation and keeps the rest, so the view coasts to a stop.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Projection camera, rebuilt on every update.
    pub camera: Camera,
    view_proj: Mat4,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
    max_polar_angle: f32,
    enable_damping: bool,
    damping_factor: f32,
}

impl OrbitCamera {
    /// Create an orbit camera at `pose` for a viewport of `aspect` ratio.
    #[must_use]
    pub fn new(options: &CameraOptions, pose: Pose, aspect: f32) -> Self {
        let camera = Camera {
            eye: pose.position,
            target: pose.orbit_target,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        let view_proj = camera.build_matrix();
        let mut orbit = Self {
            camera,
            view_proj,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            rotate_speed: 0.0,
            zoom_speed: 0.0,
            min_distance: 0.0,
            max_distance: 0.0,
            max_polar_angle: 0.0,
            enable_damping: false,
            damping_factor: 0.0,
        };
        orbit.apply_options(options);
        orbit
    }

    /// Apply camera options (speeds, limits, damping, projection).
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
        self.zoom_speed = options.zoom_speed;
        self.min_distance = options.min_distance.max(0.0);
        self.max_distance = options.max_distance.max(self.min_distance);
        self.max_polar_angle = options.max_polar_angle.clamp(0.0, PI);
        self.enable_damping = options.enable_damping;
        self.damping_factor = options.damping_factor.clamp(0.0, 1.0);
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
    }

    /// View-projection matrix as of the last update.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.view_proj
    }

    /// Current eye-to-target distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.camera.eye.distance(self.camera.target)
    }

    /// Whether rotation or zoom is still pending.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending_theta != 0.0
            || self.pending_phi != 0.0
            || self.pending_scale != 1.0
    }

    fn settle(&mut self) {
        if self.enable_damping {
            let keep = 1.0 - self.damping_factor;
            self.pending_theta *= keep;
            self.pending_phi *= keep;
            if self.pending_theta.abs() < SETTLE_EPSILON {
                self.pending_theta = 0.0;
            }
            if self.pending_phi.abs() < SETTLE_EPSILON {
                self.pending_phi = 0.0;
            }
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }
        self.pending_scale = 1.0;
    }
}

impl OrbitController for OrbitCamera {
    fn pose(&self) -> Pose {
        Pose::new(self.camera.eye, self.camera.target)
    }

    fn set_pose(&mut self, pose: &Pose) {
        if !pose.is_finite() {
            return;
        }
        self.camera.eye = pose.position;
        self.camera.target = pose.orbit_target;
    }

    fn rotate(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.pending_theta -= delta.x * self.rotate_speed;
        self.pending_phi -= delta.y * self.rotate_speed;
    }

    fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.pending_scale *= (1.0 - delta * self.zoom_speed).max(0.1);
    }

    fn update(&mut self) {
        let offset = self.camera.eye - self.camera.target;
        let radius = offset.length();
        if radius > f32::EPSILON {
            let theta = offset.x.atan2(offset.z);
            let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

            let fraction = if self.enable_damping {
                self.damping_factor
            } else {
                1.0
            };
            let new_theta = theta + self.pending_theta * fraction;
            let new_phi = (phi + self.pending_phi * fraction).clamp(
                POLE_EPSILON,
                self.max_polar_angle.max(POLE_EPSILON),
            );
            let new_radius = (radius * self.pending_scale)
                .clamp(self.min_distance, self.max_distance);

            // Leave the eye untouched when nothing moves it, so a pose
            // pushed by the walkthrough reads back bit-for-bit.
            if new_theta != theta || new_phi != phi || new_radius != radius {
                let (sin_phi, cos_phi) = new_phi.sin_cos();
                let (sin_theta, cos_theta) = new_theta.sin_cos();
                self.camera.eye = self.camera.target
                    + Vec3::new(
                        new_radius * sin_phi * sin_theta,
                        new_radius * cos_phi,
                        new_radius * sin_phi * cos_theta,
                    );
            }
        }
        self.settle();
        self.view_proj = self.camera.build_matrix();
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
        self.view_proj = self.camera.build_matrix();
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn entrance() -> Pose {
        Pose::new(Vec3::new(0.0, 1.6, 5.0), Vec3::new(0.0, 1.6, 0.0))
    }

    fn undamped() -> CameraOptions {
        CameraOptions {
            enable_damping: false,
            ..CameraOptions::default()
        }
    }

    #[test]
    fn pose_round_trips_without_input() {
        let mut orbit = OrbitCamera::new(&CameraOptions::default(), entrance(), 1.5);
        let moved = Pose::new(Vec3::new(0.0, 1.6, 4.9), Vec3::new(0.0, 1.6, 3.9));
        orbit.set_pose(&moved);
        orbit.update();
        assert_eq!(orbit.pose(), moved);
        assert!(!orbit.is_settling());
    }

    #[test]
    fn rotate_keeps_distance() {
        let mut orbit = OrbitCamera::new(&undamped(), entrance(), 1.5);
        orbit.rotate(Vec2::new(200.0, 0.0));
        orbit.update();
        assert!((orbit.distance() - 5.0).abs() < 1e-4);
        assert!(orbit.pose().position.x.abs() > 0.1);
        assert!((orbit.pose().position.y - 1.6).abs() < 1e-4);
    }

    #[test]
    fn polar_angle_never_passes_horizontal() {
        let mut orbit = OrbitCamera::new(&undamped(), entrance(), 1.5);
        // Dragging up raises the polar angle (camera dips below target).
        orbit.rotate(Vec2::new(0.0, -1000.0));
        orbit.update();
        let pose = orbit.pose();
        assert!(pose.position.y >= pose.orbit_target.y - 1e-4);

        orbit.rotate(Vec2::new(0.0, 100.0));
        orbit.update();
        let offset = orbit.pose().position - orbit.pose().orbit_target;
        let phi = (offset.y / offset.length()).acos();
        assert!(phi <= FRAC_PI_2 + 1e-4);
        assert!(orbit.pose().position.y > 1.6);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut orbit = OrbitCamera::new(&undamped(), entrance(), 1.5);
        for _ in 0..50 {
            orbit.zoom(5.0);
            orbit.update();
        }
        assert!((orbit.distance() - 1.0).abs() < 1e-4);
        for _ in 0..50 {
            orbit.zoom(-5.0);
            orbit.update();
        }
        assert!((orbit.distance() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn damping_coasts_toward_full_rotation() {
        let mut damped = OrbitCamera::new(&CameraOptions::default(), entrance(), 1.5);
        let mut direct = OrbitCamera::new(&undamped(), entrance(), 1.5);
        damped.rotate(Vec2::new(100.0, 0.0));
        direct.rotate(Vec2::new(100.0, 0.0));
        direct.update();

        damped.update();
        assert!(damped.is_settling());
        let first = damped.pose().position;
        assert!(first.x.abs() < direct.pose().position.x.abs());

        for _ in 0..400 {
            damped.update();
        }
        assert!(!damped.is_settling());
        assert!((damped.pose().position - direct.pose().position).length() < 1e-3);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut orbit = OrbitCamera::new(&undamped(), entrance(), 1.5);
        orbit.rotate(Vec2::new(f32::NAN, 0.0));
        orbit.zoom(f32::INFINITY);
        orbit.set_pose(&Pose::new(Vec3::splat(f32::NAN), Vec3::ZERO));
        orbit.update();
        assert_eq!(orbit.pose(), entrance());
    }

    #[test]
    fn resize_updates_projection_aspect() {
        let mut orbit = OrbitCamera::new(&undamped(), entrance(), 1.5);
        let before = orbit.view_proj();
        orbit.resize(800.0, 800.0);
        assert_eq!(orbit.camera.aspect, 1.0);
        assert_ne!(orbit.view_proj(), before);
        assert_eq!(orbit.view_proj(), orbit.camera.build_matrix());

        orbit.resize(800.0, 0.0);
        assert_eq!(orbit.camera.aspect, 1.0);
        assert_eq!(orbit.pose(), entrance());
    }
}
