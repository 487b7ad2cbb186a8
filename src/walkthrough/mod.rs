//! The walkthrough: one object tying input, movement, collision, the tour,
//! and the orbit controller together behind a per-frame API.
//!
//! ```ignore
//! let mut walk = Walkthrough::new(Options::default(), Tour::default(), viewport);
//! walk.attach_orbit(Box::new(orbit_camera));
//! walk.scene_loaded(&scene);
//! // Event loop:
//! walk.handle_event(&event);
//! let report = walk.frame(dt);
//! ```

mod command;

use std::rc::Rc;

use glam::Vec2;

pub use self::command::NavCommand;
use crate::camera::{OrbitController, Pose};
use crate::collision::CollisionProber;
use crate::error::NavError;
use crate::input::{InputAggregator, InputEvent, InputMode};
use crate::movement::{MovementIntegrator, TickReport};
use crate::options::Options;
use crate::scene::SceneProvider;
use crate::tour::{Tour, Waypoint, WaypointNavigator};

/// First-person exhibit walkthrough.
///
/// Owns the authoritative camera [`Pose`]. Each [`frame`](Self::frame)
/// reads back look-around changes from the orbit controller, then either
/// advances the active waypoint flight or integrates free movement, and
/// finally pushes the pose to the controller.
pub struct Walkthrough {
    options: Options,
    pose: Pose,
    input: InputAggregator,
    prober: CollisionProber,
    integrator: MovementIntegrator,
    navigator: WaypointNavigator,
    orbit: Option<Box<dyn OrbitController>>,
    scene_ready: bool,
    hint_elapsed: f32,
    last_tick: TickReport,
}

impl Walkthrough {
    /// Walkthrough standing at the tour's first waypoint, for a viewport of
    /// the given logical size.
    #[must_use]
    pub fn new(options: Options, tour: Tour, viewport: Vec2) -> Self {
        let pose = tour.get(0).pose();
        let input = InputAggregator::new(
            options.input.clone(),
            options.keybindings.clone(),
            viewport,
        );
        log::debug!("Walkthrough starting in {} mode", input.mode());
        Self {
            pose,
            input,
            prober: CollisionProber::new(&options.collision),
            integrator: MovementIntegrator::new(&options.movement),
            navigator: WaypointNavigator::new(tour, &options.tour),
            orbit: None,
            scene_ready: false,
            hint_elapsed: 0.0,
            last_tick: TickReport::default(),
            options,
        }
    }

    // ── Wiring ──────────────────────────────────────────────────────

    /// Mount an orbit controller and hand it the current pose.
    pub fn attach_orbit(&mut self, mut orbit: Box<dyn OrbitController>) {
        orbit.set_pose(&self.pose);
        self.orbit = Some(orbit);
    }

    /// Unmount the orbit controller. Waypoint requests are ignored until
    /// one is attached again.
    pub fn detach_orbit(&mut self) -> Option<Box<dyn OrbitController>> {
        self.orbit.take()
    }

    /// The mounted orbit controller.
    #[must_use]
    pub fn orbit(&self) -> Option<&dyn OrbitController> {
        self.orbit.as_deref()
    }

    /// Scene geometry became available. Collision starts using it; the
    /// walkthrough only keeps a weak reference.
    pub fn scene_loaded(&mut self, geometry: &Rc<dyn SceneProvider>) {
        self.prober.attach_scene(geometry);
        if !self.scene_ready {
            log::info!("Scene geometry ready; collision enabled");
            self.scene_ready = true;
        }
    }

    /// Replace all options, propagating them to every subsystem.
    pub fn apply_options(&mut self, options: Options) {
        self.input
            .apply_options(options.input.clone(), options.keybindings.clone());
        self.prober.apply_options(&options.collision);
        self.integrator.apply_options(&options.movement);
        self.navigator.apply_options(&options.tour);
        self.options = options;
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Feed a raw input event, executing any command it produces.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if let InputEvent::Resize { width, height } = *event {
            if width.is_finite() && height.is_finite() {
                if let Some(orbit) = self.orbit.as_mut() {
                    orbit.resize(width, height);
                }
            }
        }
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: NavCommand) {
        if command.is_tour_step() && self.orbit.is_none() {
            log::debug!("Ignoring {command:?}: no orbit controller mounted");
            return;
        }
        match command {
            NavCommand::NextWaypoint => {
                let _ = self.navigator.next(&self.pose);
            }
            NavCommand::PreviousWaypoint => {
                let _ = self.navigator.previous(&self.pose);
            }
            NavCommand::GoToWaypoint { index } => {
                let _ = self.navigator.go_to(index, &self.pose);
            }
            NavCommand::RotateView { delta } => {
                if let Some(orbit) = self.orbit.as_mut() {
                    orbit.rotate(delta);
                }
            }
            NavCommand::Zoom { delta } => {
                if let Some(orbit) = self.orbit.as_mut() {
                    orbit.zoom(delta);
                }
            }
        }
    }

    /// Fly to the waypoint with `id`.
    ///
    /// Returns `Ok(false)` when the request was ignored because no orbit
    /// controller is mounted.
    pub fn go_to_waypoint(&mut self, id: &str) -> Result<bool, NavError> {
        let index = self
            .navigator
            .tour()
            .index_of(id)
            .ok_or_else(|| NavError::UnknownWaypoint(id.to_owned()))?;
        self.execute(NavCommand::GoToWaypoint { index });
        Ok(self.orbit.is_some())
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Run one frame of `dt` seconds.
    ///
    /// Free movement steps a fixed distance per frame; `dt` drives the
    /// waypoint flight and the hint timer.
    pub fn frame(&mut self, dt: f32) -> TickReport {
        if dt.is_finite() && dt > 0.0 {
            self.hint_elapsed += dt;
        }

        if let Some(orbit) = self.orbit.as_ref() {
            let pose = orbit.pose();
            if pose.is_finite() {
                self.pose = pose;
            }
        }

        let report = if let Some(pose) = self.navigator.advance(dt) {
            self.pose = pose;
            TickReport::default()
        } else {
            let axes = self
                .input
                .axis_intent(self.options.movement.joystick_deadzone);
            self.integrator.tick(&mut self.pose, axes, &self.prober)
        };

        if let Some(orbit) = self.orbit.as_mut() {
            orbit.set_pose(&self.pose);
            orbit.update();
        }

        self.last_tick = report;
        report
    }

    // ── Presentation state ──────────────────────────────────────────

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Whether scene geometry has not arrived yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.scene_ready
    }

    /// Active input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Input state (held keys, joystick).
    #[must_use]
    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    /// On-screen control instructions for the active input mode.
    #[must_use]
    pub fn controls_hint(&self) -> &'static str {
        self.input.mode().controls_hint()
    }

    /// Whether the controls hint should still be shown.
    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_elapsed < self.options.tour.hint_duration
    }

    /// Current waypoint, for the info panel.
    #[must_use]
    pub fn current_waypoint(&self) -> &Waypoint {
        self.navigator.current_waypoint()
    }

    /// Tour navigator state.
    #[must_use]
    pub fn navigator(&self) -> &WaypointNavigator {
        &self.navigator
    }

    /// Report from the most recent frame.
    #[must_use]
    pub fn last_tick(&self) -> TickReport {
        self.last_tick
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
