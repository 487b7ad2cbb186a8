use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::camera::Pose;
use crate::error::NavError;

/// A named point of interest the camera can fly to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Stable identifier (e.g. `"entrance"`).
    pub id: String,
    /// Display name for the info panel.
    pub name: String,
    /// Camera position on arrival.
    pub position: Vec3,
    /// Point the camera faces on arrival.
    pub look_at: Vec3,
    /// Display description for the info panel.
    #[serde(default)]
    pub description: String,
}

impl Waypoint {
    /// Waypoint with the given fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Vec3,
        look_at: Vec3,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            look_at,
            description: description.into(),
        }
    }

    /// The camera pose at this waypoint.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.look_at)
    }
}

/// On-disk layout of a tour file.
#[derive(Serialize, Deserialize)]
struct TourFile {
    waypoints: Vec<Waypoint>,
}

/// Ordered, non-empty, cyclic list of waypoints.
#[derive(Debug, Clone)]
pub struct Tour {
    waypoints: Vec<Waypoint>,
    by_id: FxHashMap<String, usize>,
}

impl Tour {
    /// Build a tour. Fails on an empty list or a non-finite waypoint.
    /// When ids repeat, [`index_of`](Self::index_of) resolves to the first.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, NavError> {
        if waypoints.is_empty() {
            return Err(NavError::EmptyTour);
        }
        let mut by_id = FxHashMap::default();
        for (index, waypoint) in waypoints.iter().enumerate() {
            if !(waypoint.position.is_finite() && waypoint.look_at.is_finite())
            {
                return Err(NavError::InvalidWaypoint(waypoint.id.clone()));
            }
            if by_id.contains_key(&waypoint.id) {
                log::warn!("Duplicate waypoint id '{}'", waypoint.id);
                continue;
            }
            let _ = by_id.insert(waypoint.id.clone(), index);
        }
        Ok(Self { waypoints, by_id })
    }

    /// The three-stop museum tour: entrance, modern art, classical art.
    #[must_use]
    pub fn default_museum() -> Self {
        let waypoints = vec![
            Waypoint::new(
                "entrance",
                "Museum Entrance",
                Vec3::new(0.0, 1.6, 5.0),
                Vec3::new(0.0, 1.6, 0.0),
                "Welcome to the virtual museum entrance. Explore the gallery \
                 with interactive navigation.",
            ),
            Waypoint::new(
                "modernArt",
                "Modern Art Section",
                Vec3::new(4.0, 1.6, -2.0),
                Vec3::new(0.0, 1.6, -2.0),
                "Contemporary art installations showcasing innovative \
                 techniques and thought-provoking concepts.",
            ),
            Waypoint::new(
                "classicalArt",
                "Classical Art Wing",
                Vec3::new(-4.0, 1.6, -2.0),
                Vec3::new(-4.0, 1.6, -5.0),
                "Historical masterpieces from renowned artists throughout \
                 the centuries.",
            ),
        ];
        let by_id = waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| (w.id.clone(), i))
            .collect();
        Self { waypoints, by_id }
    }

    /// Parse a tour from TOML (`[[waypoints]]` tables).
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        let file: TourFile = toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        Self::new(file.waypoints)
    }

    /// Serialize the tour to TOML.
    pub fn to_toml(&self) -> Result<String, NavError> {
        let file = TourFile {
            waypoints: self.waypoints.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Load a tour from a TOML file.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let tour = Self::from_toml(&content)?;
        log::info!(
            "Loaded tour with {} waypoints from {}",
            tour.len(),
            path.display()
        );
        Ok(tour)
    }

    /// Number of waypoints (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; tours are non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// All waypoints in order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Waypoint at `index` reduced modulo the tour length.
    #[must_use]
    pub fn get(&self, index: usize) -> &Waypoint {
        &self.waypoints[index % self.waypoints.len()]
    }

    /// Index of the waypoint with `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Index after `index`, wrapping to the start.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index % self.len() + 1) % self.len()
    }

    /// Index before `index`, wrapping to the end.
    #[must_use]
    pub fn previous_index(&self, index: usize) -> usize {
        let count = self.len();
        (index % count + count - 1) % count
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::default_museum()
    }
}
