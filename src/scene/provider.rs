use std::rc::{Rc, Weak};

use super::ray::{Ray, RayHit};

/// Ray-intersection capability of the rendering/asset side.
///
/// Implementors report every surface the ray crosses, sorted nearest first.
/// The navigation core never mutates a provider.
pub trait SceneProvider {
    /// All hits along `ray`, nearest first.
    fn intersect(&self, ray: &Ray) -> Vec<RayHit>;

    /// The nearest hit along `ray`, if any.
    fn nearest(&self, ray: &Ray) -> Option<RayHit> {
        self.intersect(ray).into_iter().next()
    }
}

/// Non-owning reference to loaded scene geometry.
///
/// Empty until the asset finishes loading; also reads as empty once the
/// owner drops the geometry.
#[derive(Default, Clone)]
pub struct SceneHandle {
    geometry: Option<Weak<dyn SceneProvider>>,
}

impl SceneHandle {
    /// A handle with no geometry yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Point the handle at freshly loaded geometry.
    pub fn attach(&mut self, geometry: &Rc<dyn SceneProvider>) {
        self.geometry = Some(Rc::downgrade(geometry));
    }

    /// Forget the geometry (e.g. when the model is unloaded).
    pub fn detach(&mut self) {
        self.geometry = None;
    }

    /// Upgrade to the live geometry, if it is loaded and still alive.
    #[must_use]
    pub fn get(&self) -> Option<Rc<dyn SceneProvider>> {
        self.geometry.as_ref().and_then(Weak::upgrade)
    }

    /// Whether live geometry is available right now.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.geometry
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

impl std::fmt::Debug for SceneHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}
