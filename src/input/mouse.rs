use glam::Vec2;

/// What the current pointer press is steering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCapture {
    /// No button/touch is down.
    #[default]
    Idle,
    /// The press started on the joystick widget.
    Joystick,
    /// The press started on the 3D view: drags orbit the camera.
    Orbit,
}

/// Tracks pointer position and which widget owns the active press.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last known pointer position.
    pub position: Vec2,
    /// Owner of the active press.
    pub capture: PointerCapture,
}

impl PointerState {
    /// Record a press at `position`, owned by `capture`.
    pub fn press(&mut self, position: Vec2, capture: PointerCapture) {
        self.position = position;
        self.capture = capture;
    }

    /// Record a move and return the delta from the previous position.
    pub fn move_to(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.position;
        self.position = position;
        delta
    }

    /// End the press, returning who owned it.
    pub fn release(&mut self) -> PointerCapture {
        std::mem::take(&mut self.capture)
    }
}
