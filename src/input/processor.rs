//! Folds raw platform events into movement intent and walkthrough commands.
//!
//! The `InputAggregator` owns all transient input state (held keys, the
//! joystick, pointer capture, viewport size, device mode) and the key
//! binding map. It never fails: malformed events are dropped.

use glam::Vec2;

use super::event::InputEvent;
use super::intent::{AxisIntent, DirectionalIntent, JoystickVector};
use super::joystick::{ScreenRect, VirtualJoystick};
use super::keyboard::{normalize_key, KeyAction};
use super::mode::InputMode;
use super::mouse::{PointerCapture, PointerState};
use crate::options::{InputOptions, KeybindingOptions};
use crate::walkthrough::NavCommand;

/// Converts raw input events into a [`DirectionalIntent`] snapshot plus
/// discrete [`NavCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event handler:
/// if let Some(cmd) = aggregator.handle_event(&event) {
///     walkthrough.execute(cmd);
/// }
/// // Once per frame:
/// let axes = aggregator.axis_intent(deadzone);
/// ```
#[derive(Debug, Clone)]
pub struct InputAggregator {
    /// Held movement keys.
    keys: DirectionalIntent,
    /// Discrete actions whose key is currently down (repeat suppression).
    next_held: bool,
    previous_held: bool,
    /// On-screen joystick (only listened to in mobile mode).
    joystick: VirtualJoystick,
    /// Pointer tracking and press ownership.
    pointer: PointerState,
    /// Current device mode.
    mode: InputMode,
    /// Viewport size in logical pixels.
    viewport: Vec2,
    /// Device and joystick layout.
    options: InputOptions,
    /// Key string → action mapping.
    keybindings: KeybindingOptions,
}

impl InputAggregator {
    /// Create an aggregator for a viewport of the given size.
    #[must_use]
    pub fn new(
        options: InputOptions,
        keybindings: KeybindingOptions,
        viewport: Vec2,
    ) -> Self {
        let mode = InputMode::from_viewport_width(
            viewport.x,
            options.mobile_breakpoint,
        );
        Self {
            keys: DirectionalIntent::default(),
            next_held: false,
            previous_held: false,
            joystick: VirtualJoystick::new(options.joystick_max_radius),
            pointer: PointerState::default(),
            mode,
            viewport,
            options,
            keybindings,
        }
    }

    /// Replace layout options and bindings, re-resolving the mode.
    pub fn apply_options(
        &mut self,
        options: InputOptions,
        keybindings: KeybindingOptions,
    ) {
        self.joystick.set_max_radius(options.joystick_max_radius);
        self.options = options;
        self.keybindings = keybindings;
        self.resolve_mode();
    }

    /// Current device mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Held movement keys.
    #[must_use]
    pub fn intent(&self) -> DirectionalIntent {
        self.keys
    }

    /// Current joystick deflection.
    #[must_use]
    pub fn joystick_value(&self) -> JoystickVector {
        self.joystick.value()
    }

    /// Joystick knob displacement for drawing, or `None` when the
    /// joystick is not shown (desktop mode).
    #[must_use]
    pub fn joystick_knob(&self) -> Option<Vec2> {
        (self.mode == InputMode::Mobile).then(|| self.joystick.knob_offset())
    }

    /// Screen rectangle occupied by the joystick widget.
    #[must_use]
    pub fn joystick_rect(&self) -> ScreenRect {
        let [left, bottom, width, height] = self.options.joystick_bounds;
        let max_y = self.viewport.y - bottom;
        ScreenRect {
            min: Vec2::new(left, max_y - height),
            max: Vec2::new(left + width, max_y),
        }
    }

    /// The movement request for this frame, read from the surface the
    /// current mode listens to.
    #[must_use]
    pub fn axis_intent(&self, deadzone: f32) -> AxisIntent {
        match self.mode {
            InputMode::Desktop => AxisIntent::from_flags(&self.keys),
            InputMode::Mobile => {
                AxisIntent::from_joystick(self.joystick.value(), deadzone)
            }
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<NavCommand> {
        match *event {
            InputEvent::Key { ref code, pressed } => {
                self.handle_key(code, pressed)
            }
            InputEvent::PointerDown { x, y } => {
                self.handle_pointer_down(Vec2::new(x, y));
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.handle_pointer_move(Vec2::new(x, y))
            }
            InputEvent::PointerUp => {
                if self.pointer.release() == PointerCapture::Joystick {
                    self.joystick.release();
                }
                None
            }
            InputEvent::Scroll { delta } => {
                delta.is_finite().then_some(NavCommand::Zoom { delta })
            }
            InputEvent::Resize { width, height } => {
                self.handle_resize(width, height);
                None
            }
            InputEvent::FocusLost => {
                self.release_all();
                None
            }
        }
    }

    /// Drop every held key, the joystick, and the pointer capture.
    pub fn release_all(&mut self) {
        self.keys = DirectionalIntent::default();
        self.next_held = false;
        self.previous_held = false;
        self.joystick.release();
        let _ = self.pointer.release();
    }

    fn handle_key(&mut self, code: &str, pressed: bool) -> Option<NavCommand> {
        let action = self.keybindings.lookup(&normalize_key(code))?;
        if action.is_continuous() {
            let flag = match action {
                KeyAction::MoveForward => &mut self.keys.forward,
                KeyAction::MoveBackward => &mut self.keys.backward,
                KeyAction::StrafeLeft => &mut self.keys.left,
                _ => &mut self.keys.right,
            };
            *flag = pressed;
            return None;
        }
        let (held, command) = if action == KeyAction::NextWaypoint {
            (&mut self.next_held, NavCommand::NextWaypoint)
        } else {
            (&mut self.previous_held, NavCommand::PreviousWaypoint)
        };
        // Auto-repeat presses arrive while the key is already held.
        let fire = pressed && !*held;
        *held = pressed;
        fire.then_some(command)
    }

    fn handle_pointer_down(&mut self, position: Vec2) {
        if !position.is_finite() {
            return;
        }
        let on_joystick = self.mode == InputMode::Mobile
            && self.joystick_rect().contains(position);
        if on_joystick {
            self.joystick.press(position);
            self.pointer.press(position, PointerCapture::Joystick);
        } else {
            self.pointer.press(position, PointerCapture::Orbit);
        }
    }

    fn handle_pointer_move(&mut self, position: Vec2) -> Option<NavCommand> {
        if !position.is_finite() {
            return None;
        }
        match self.pointer.capture {
            PointerCapture::Idle => {
                let _ = self.pointer.move_to(position);
                None
            }
            PointerCapture::Joystick => {
                let _ = self.pointer.move_to(position);
                let _ = self.joystick.drag(position);
                None
            }
            PointerCapture::Orbit => {
                let delta = self.pointer.move_to(position);
                (delta != Vec2::ZERO)
                    .then_some(NavCommand::RotateView { delta })
            }
        }
    }

    fn handle_resize(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite())
            || width <= 0.0
            || height <= 0.0
        {
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.resolve_mode();
    }

    fn resolve_mode(&mut self) {
        let mode = InputMode::from_viewport_width(
            self.viewport.x,
            self.options.mobile_breakpoint,
        );
        if mode == self.mode {
            return;
        }
        log::debug!("Input mode {} -> {mode}", self.mode);
        self.mode = mode;
        // The joystick is not shown on desktop; a press it owned is void.
        if mode == InputMode::Desktop && self.joystick.is_active() {
            self.joystick.release();
            let _ = self.pointer.release();
        }
    }
}
