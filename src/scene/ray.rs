use glam::Vec3;

/// Rays shorter than this are treated as degenerate.
const DIRECTION_EPSILON: f32 = 1e-6;
/// Determinant threshold below which a ray is parallel to a triangle.
const PARALLEL_EPSILON: f32 = 1e-7;

/// A half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// Returns `None` for a zero-length or non-finite direction, or a
    /// non-finite origin.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !origin.is_finite() || !direction.is_finite() {
            return None;
        }
        if direction.length_squared() < DIRECTION_EPSILON * DIRECTION_EPSILON
        {
            return None;
        }
        Some(Self {
            origin,
            direction: direction.normalize(),
        })
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A single ray/surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space intersection point.
    pub point: Vec3,
}

/// A world-space triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Vec3,
    /// Second vertex.
    pub b: Vec3,
    /// Third vertex.
    pub c: Vec3,
}

impl Triangle {
    /// Triangle from three vertices.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Double-sided Möller–Trumbore intersection. Returns the hit distance.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;
        let p = ray.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = ray.origin - self.a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = ray.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        (t > PARALLEL_EPSILON).then_some(t)
    }
}

/// Axis-aligned bounding box used to skip whole meshes cheaply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box containing every point, or `None` for no points.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) =
            iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    /// Distance at which the ray enters the box (0 when it starts inside),
    /// or `None` when it misses.
    #[must_use]
    pub fn ray_entry(&self, ray: &Ray) -> Option<f32> {
        let mut t_enter = 0.0_f32;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if dir.abs() < DIRECTION_EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let (t0, t1) = {
                let a = (lo - origin) * inv;
                let b = (hi - origin) * inv;
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            };
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }
        Some(t_enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn degenerate_directions_are_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
        assert!(Ray::new(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)).is_none());
        assert!(Ray::new(Vec3::splat(f32::INFINITY), Vec3::X).is_none());
    }

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0)).unwrap();
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn triangle_hit_from_either_side() {
        let tri = floor_triangle();
        let down = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y).unwrap();
        let up = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y).unwrap();
        assert!((tri.intersect(&down).unwrap() - 2.0).abs() < 1e-5);
        assert!((tri.intersect(&up).unwrap() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn triangle_miss_behind_and_beside() {
        let tri = floor_triangle();
        let away = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y).unwrap();
        let beside = Ray::new(Vec3::new(5.0, 2.0, 0.0), Vec3::NEG_Y).unwrap();
        let parallel = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::X).unwrap();
        assert!(tri.intersect(&away).is_none());
        assert!(tri.intersect(&beside).is_none());
        assert!(tri.intersect(&parallel).is_none());
    }

    #[test]
    fn aabb_entry_distance() {
        let bounds =
            Aabb::from_points([Vec3::new(-1.0, 0.0, -6.0), Vec3::new(1.0, 3.0, -4.0)])
                .unwrap();
        let forward = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z).unwrap();
        let backward = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::Z).unwrap();
        let inside = Ray::new(Vec3::new(0.0, 1.0, -5.0), Vec3::X).unwrap();
        assert!((bounds.ray_entry(&forward).unwrap() - 4.0).abs() < 1e-5);
        assert!(bounds.ray_entry(&backward).is_none());
        assert_eq!(bounds.ray_entry(&inside), Some(0.0));
    }

    #[test]
    fn aabb_axis_parallel_ray_outside_slab_misses() {
        let bounds = Aabb::from_points([Vec3::ZERO, Vec3::ONE]).unwrap();
        let ray = Ray::new(Vec3::new(2.0, 0.5, -1.0), Vec3::Z).unwrap();
        assert!(bounds.ray_entry(&ray).is_none());
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }
}
