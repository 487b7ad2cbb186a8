use crate::camera::Pose;
use crate::error::NavError;
use crate::options::TourOptions;
use crate::tour::transition::CameraTransition;
use crate::tour::waypoint::{Tour, Waypoint};
use crate::util::easing::EasingFunction;

/// Whether the camera is free or flying to a waypoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavigatorState {
    /// Free movement drives the pose.
    #[default]
    Free,
    /// A scripted flight drives the pose.
    Transitioning(CameraTransition),
}

/// Steps through a [`Tour`], flying the camera between waypoints.
///
/// Holds at most one [`CameraTransition`]. A new request replaces the
/// active flight and starts from wherever the camera is at that moment.
#[derive(Debug, Clone)]
pub struct WaypointNavigator {
    tour: Tour,
    current: usize,
    state: NavigatorState,
    duration: f32,
    easing: EasingFunction,
}

impl WaypointNavigator {
    /// Navigator at the first waypoint of `tour`.
    #[must_use]
    pub fn new(tour: Tour, options: &TourOptions) -> Self {
        Self {
            tour,
            current: 0,
            state: NavigatorState::Free,
            duration: options.transition_duration,
            easing: options.easing,
        }
    }

    /// Apply updated transition timing. An active flight keeps its timing.
    pub fn apply_options(&mut self, options: &TourOptions) {
        self.duration = options.transition_duration;
        self.easing = options.easing;
    }

    /// The tour being navigated.
    #[must_use]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Index of the current (or in-flight destination) waypoint.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current (or in-flight destination) waypoint.
    #[must_use]
    pub fn current_waypoint(&self) -> &Waypoint {
        self.tour.get(self.current)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// Whether a flight is in progress.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, NavigatorState::Transitioning(_))
    }

    /// Fly to the next waypoint, wrapping at the end.
    pub fn next(&mut self, from: &Pose) -> usize {
        let index = self.tour.next_index(self.current);
        self.go_to(index, from)
    }

    /// Fly to the previous waypoint, wrapping at the start.
    pub fn previous(&mut self, from: &Pose) -> usize {
        let index = self.tour.previous_index(self.current);
        self.go_to(index, from)
    }

    /// Fly to the waypoint with `id`.
    pub fn go_to_id(&mut self, id: &str, from: &Pose) -> Result<usize, NavError> {
        let index = self
            .tour
            .index_of(id)
            .ok_or_else(|| NavError::UnknownWaypoint(id.to_owned()))?;
        Ok(self.go_to(index, from))
    }

    /// Fly to waypoint `index` (reduced modulo the tour length) starting
    /// from `from`. Returns the resolved index.
    pub fn go_to(&mut self, index: usize, from: &Pose) -> usize {
        let index = index % self.tour.len();
        let waypoint = self.tour.get(index);
        if let NavigatorState::Transitioning(active) = &self.state {
            log::debug!(
                "Transition to waypoint {} superseded by '{}'",
                active.waypoint,
                waypoint.id
            );
        } else {
            log::debug!("Transition to waypoint '{}' started", waypoint.id);
        }
        self.state = NavigatorState::Transitioning(CameraTransition::new(
            index,
            from.position,
            waypoint.position,
            waypoint.look_at,
            self.duration,
            self.easing,
        ));
        self.current = index;
        index
    }

    /// Advance the active flight by `dt` seconds.
    ///
    /// Returns the pose the camera should take, or `None` when free. On
    /// the completing frame the pose is the destination exactly and the
    /// navigator returns to [`NavigatorState::Free`].
    pub fn advance(&mut self, dt: f32) -> Option<Pose> {
        let NavigatorState::Transitioning(transition) = &mut self.state else {
            return None;
        };
        let pose = transition.advance(dt);
        if transition.is_complete() {
            log::debug!(
                "Transition to waypoint '{}' completed",
                self.tour.get(transition.waypoint).id
            );
            self.state = NavigatorState::Free;
        }
        Some(pose)
    }

    /// Abandon any flight where it is.
    pub fn cancel(&mut self) {
        self.state = NavigatorState::Free;
    }
}
