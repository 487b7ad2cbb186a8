use glam::Vec2;

/// Which movement keys are currently held.
///
/// Flags are independent, so diagonals (forward + right) and even
/// contradictory pairs (forward + backward) are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DirectionalIntent {
    /// Walk toward the facing direction.
    pub forward: bool,
    /// Walk away from the facing direction.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
}

impl DirectionalIntent {
    /// Whether any flag is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Continuous joystick deflection, each axis in [-1, 1].
///
/// Screen convention: negative `y` is up on screen, which means forward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JoystickVector {
    /// Horizontal deflection (positive = right).
    pub x: f32,
    /// Vertical deflection (positive = down on screen = backward).
    pub y: f32,
}

impl JoystickVector {
    /// The centered stick.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Joystick vector from a normalized displacement.
    #[must_use]
    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            x: v.x.clamp(-1.0, 1.0),
            y: v.y.clamp(-1.0, 1.0),
        }
    }
}

/// Signed per-axis movement request for one tick, each in [-1, 1].
///
/// This is what the movement integrator consumes; it is derived from
/// either the key flags or the joystick depending on the input mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisIntent {
    /// Positive walks forward, negative backward.
    pub forward: f32,
    /// Positive strafes right, negative left.
    pub strafe: f32,
}

impl AxisIntent {
    /// No movement.
    pub const NONE: Self = Self {
        forward: 0.0,
        strafe: 0.0,
    };

    /// Resolve key flags. Forward wins over backward and right wins over
    /// left when both of a pair are held.
    #[must_use]
    pub fn from_flags(flags: &DirectionalIntent) -> Self {
        let forward = if flags.forward {
            1.0
        } else if flags.backward {
            -1.0
        } else {
            0.0
        };
        let strafe = if flags.right {
            1.0
        } else if flags.left {
            -1.0
        } else {
            0.0
        };
        Self { forward, strafe }
    }

    /// Resolve a joystick deflection. Axes at or inside `deadzone` are
    /// zeroed; the rest keep their magnitude.
    #[must_use]
    pub fn from_joystick(stick: JoystickVector, deadzone: f32) -> Self {
        let gate = |v: f32| if v.abs() > deadzone { v } else { 0.0 };
        Self {
            // Up on screen is forward.
            forward: -gate(stick.y),
            strafe: gate(stick.x),
        }
    }

    /// Whether either axis requests movement.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.forward != 0.0 || self.strafe != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_resolve_with_precedence() {
        let both = DirectionalIntent {
            forward: true,
            backward: true,
            left: true,
            right: true,
        };
        assert_eq!(
            AxisIntent::from_flags(&both),
            AxisIntent {
                forward: 1.0,
                strafe: 1.0
            }
        );

        let back_left = DirectionalIntent {
            backward: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(
            AxisIntent::from_flags(&back_left),
            AxisIntent {
                forward: -1.0,
                strafe: -1.0
            }
        );
        assert!(!AxisIntent::from_flags(&DirectionalIntent::default()).is_active());
    }

    #[test]
    fn joystick_up_is_forward() {
        let stick = JoystickVector { x: 0.0, y: -0.6 };
        let axes = AxisIntent::from_joystick(stick, 0.1);
        assert_eq!(axes.forward, 0.6);
        assert_eq!(axes.strafe, 0.0);
    }

    #[test]
    fn joystick_deadzone_zeroes_small_deflection() {
        let stick = JoystickVector { x: 0.1, y: -0.05 };
        assert_eq!(AxisIntent::from_joystick(stick, 0.1), AxisIntent::NONE);

        let stick = JoystickVector { x: -0.3, y: 0.05 };
        let axes = AxisIntent::from_joystick(stick, 0.1);
        assert_eq!(axes.strafe, -0.3);
        assert_eq!(axes.forward, 0.0);
    }

    #[test]
    fn joystick_vector_is_clamped() {
        let v = JoystickVector::from_vec2(Vec2::new(2.0, -3.0));
        assert_eq!(v, JoystickVector { x: 1.0, y: -1.0 });
    }
}
