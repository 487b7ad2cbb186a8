use glam::Vec3;

use super::provider::SceneProvider;
use super::ray::{Aabb, Ray, RayHit, Triangle};

/// A collidable triangle mesh in world space, with cached bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
    bounds: Option<Aabb>,
}

impl Mesh {
    /// Build a mesh from world-space triangles.
    #[must_use]
    pub fn new(triangles: Vec<Triangle>) -> Self {
        let bounds = Aabb::from_points(
            triangles.iter().flat_map(|t| [t.a, t.b, t.c]),
        );
        Self { triangles, bounds }
    }

    /// Closed box between two opposite corners (12 triangles).
    #[must_use]
    pub fn cuboid(corner_a: Vec3, corner_b: Vec3) -> Self {
        let lo = corner_a.min(corner_b);
        let hi = corner_a.max(corner_b);
        let v = [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ];
        // Two triangles per face: -z, +z, -x, +x, -y, +y
        const FACES: [[usize; 4]; 6] = [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 4, 7, 3],
            [1, 5, 6, 2],
            [0, 1, 5, 4],
            [3, 2, 6, 7],
        ];
        let triangles = FACES
            .iter()
            .flat_map(|&[a, b, c, d]| {
                [
                    Triangle::new(v[a], v[b], v[c]),
                    Triangle::new(v[a], v[c], v[d]),
                ]
            })
            .collect();
        Self::new(triangles)
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Cached bounds (`None` for an empty mesh).
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// Append every hit of `ray` against this mesh to `hits`.
    fn collect_hits(&self, ray: &Ray, hits: &mut Vec<RayHit>) {
        let Some(bounds) = self.bounds else {
            return;
        };
        if bounds.ray_entry(ray).is_none() {
            return;
        }
        hits.extend(self.triangles.iter().filter_map(|tri| {
            tri.intersect(ray).map(|distance| RayHit {
                distance,
                point: ray.at(distance),
            })
        }));
    }
}

/// A node of the loaded model: an optional mesh plus nested children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneNode {
    /// Node name from the model file, used only for diagnostics.
    pub name: String,
    /// Geometry attached to this node, if any.
    pub mesh: Option<Mesh>,
    /// Child nodes (searched recursively).
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Named node carrying a mesh and no children.
    #[must_use]
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh: Some(mesh),
            children: Vec::new(),
        }
    }

    /// Named group node with children and no mesh.
    #[must_use]
    pub fn group(name: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            children,
        }
    }

    fn collect_hits(&self, ray: &Ray, hits: &mut Vec<RayHit>) {
        if let Some(mesh) = &self.mesh {
            mesh.collect_hits(ray, hits);
        }
        for child in &self.children {
            child.collect_hits(ray, hits);
        }
    }

    fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
            + self.children.iter().map(SceneNode::mesh_count).sum::<usize>()
    }
}

/// The set of collidable meshes in a loaded model.
///
/// Owned by the asset side; the navigation core only ever reads it through
/// [`SceneProvider`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneGeometry {
    roots: Vec<SceneNode>,
}

impl SceneGeometry {
    /// Geometry from top-level nodes.
    #[must_use]
    pub fn new(roots: Vec<SceneNode>) -> Self {
        Self { roots }
    }

    /// Top-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[SceneNode] {
        &self.roots
    }

    /// Total meshes across all nesting levels.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.roots.iter().map(SceneNode::mesh_count).sum()
    }
}

impl SceneProvider for SceneGeometry {
    fn intersect(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for root in &self.roots {
            root.collect_hits(ray, &mut hits);
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> SceneGeometry {
        // A plinth 3 m ahead nested two levels deep, a wall 6 m ahead at the
        // top level.
        let plinth = Mesh::cuboid(
            Vec3::new(-0.5, 0.0, -3.5),
            Vec3::new(0.5, 1.0, -3.0),
        );
        let wall =
            Mesh::cuboid(Vec3::new(-5.0, 0.0, -6.2), Vec3::new(5.0, 4.0, -6.0));
        SceneGeometry::new(vec![
            SceneNode::group(
                "exhibits",
                vec![SceneNode::group(
                    "modern",
                    vec![SceneNode::with_mesh("plinth", plinth)],
                )],
            ),
            SceneNode::with_mesh("north_wall", wall),
        ])
    }

    #[test]
    fn cuboid_has_twelve_triangles() {
        let mesh = Mesh::cuboid(Vec3::ONE, Vec3::ZERO);
        assert_eq!(mesh.triangle_count(), 12);
        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::ONE);
    }

    #[test]
    fn hits_are_sorted_nearest_first_across_nesting() {
        let scene = gallery();
        assert_eq!(scene.mesh_count(), 2);
        let ray = Ray::new(Vec3::new(0.2, 0.3, 0.0), Vec3::NEG_Z).unwrap();
        let hits = scene.intersect(&ray);
        // Near and far faces of the plinth, then of the wall.
        assert_eq!(hits.len(), 4);
        assert!((hits[0].distance - 3.0).abs() < 1e-5);
        assert!((hits[1].distance - 3.5).abs() < 1e-5);
        assert!((hits[2].distance - 6.0).abs() < 1e-5);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn ray_above_plinth_only_reaches_wall() {
        let scene = gallery();
        let ray = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z).unwrap();
        let nearest = scene.nearest(&ray).unwrap();
        assert!((nearest.distance - 6.0).abs() < 1e-5);
        assert!((nearest.point.z + 6.0).abs() < 1e-5);
    }

    #[test]
    fn empty_geometry_reports_nothing() {
        let scene = SceneGeometry::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        assert!(scene.intersect(&ray).is_empty());
        assert_eq!(scene.mesh_count(), 0);
    }
}
