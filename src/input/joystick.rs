use glam::Vec2;

use super::intent::JoystickVector;

/// Rectangular on-screen region in top-left-origin pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl ScreenRect {
    /// Whether `point` lies inside (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// On-screen joystick: press records an origin, drags publish a clamped,
/// normalized deflection, release snaps back to center.
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    max_radius: f32,
    origin: Option<Vec2>,
    knob_offset: Vec2,
    value: JoystickVector,
}

impl VirtualJoystick {
    /// Joystick whose knob travels at most `max_radius` pixels.
    #[must_use]
    pub fn new(max_radius: f32) -> Self {
        Self {
            max_radius: max_radius.max(f32::EPSILON),
            origin: None,
            knob_offset: Vec2::ZERO,
            value: JoystickVector::ZERO,
        }
    }

    /// Start a drag at `position`.
    pub fn press(&mut self, position: Vec2) {
        self.origin = Some(position);
        self.knob_offset = Vec2::ZERO;
        self.value = JoystickVector::ZERO;
    }

    /// Follow the pointer. Ignored unless pressed.
    ///
    /// Displacement beyond the maximum radius is scaled back onto the rim,
    /// then divided by the radius so each axis lands in [-1, 1].
    pub fn drag(&mut self, position: Vec2) -> JoystickVector {
        let Some(origin) = self.origin else {
            return self.value;
        };
        let offset = (position - origin).clamp_length_max(self.max_radius);
        self.knob_offset = offset;
        self.value = JoystickVector::from_vec2(offset / self.max_radius);
        self.value
    }

    /// End the drag and snap the knob back to center.
    pub fn release(&mut self) {
        self.origin = None;
        self.knob_offset = Vec2::ZERO;
        self.value = JoystickVector::ZERO;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Current deflection.
    #[must_use]
    pub fn value(&self) -> JoystickVector {
        self.value
    }

    /// Knob displacement from center in pixels, for drawing the widget.
    #[must_use]
    pub fn knob_offset(&self) -> Vec2 {
        self.knob_offset
    }

    /// Update the maximum knob travel.
    pub fn set_max_radius(&mut self, max_radius: f32) {
        self.max_radius = max_radius.max(f32::EPSILON);
    }
}
