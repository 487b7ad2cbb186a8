//! The walkthrough's discrete interactive vocabulary.
//!
//! Key presses, pointer gestures, UI buttons, and programmatic calls all
//! become a `NavCommand` passed to
//! [`Walkthrough::execute`](super::Walkthrough::execute).

use glam::Vec2;

/// A discrete operation on the walkthrough.
///
/// ```ignore
/// walkthrough.execute(NavCommand::NextWaypoint);
/// walkthrough.execute(NavCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    // ── Tour ────────────────────────────────────────────────────────
    /// Fly to the next waypoint, wrapping at the end.
    NextWaypoint,

    /// Fly to the previous waypoint, wrapping at the start.
    PreviousWaypoint,

    /// Fly to a waypoint by position in the tour.
    GoToWaypoint {
        /// Tour index, reduced modulo the tour length.
        index: usize,
    },

    // ── Look ────────────────────────────────────────────────────────
    /// Orbit the view by `delta` pixels of pointer movement.
    RotateView {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the view (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}

impl NavCommand {
    /// Whether the command starts a waypoint flight.
    #[must_use]
    pub fn is_tour_step(&self) -> bool {
        matches!(
            self,
            Self::NextWaypoint
                | Self::PreviousWaypoint
                | Self::GoToWaypoint { .. }
        )
    }
}
