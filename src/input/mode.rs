use std::fmt;

/// Which input surface drives free movement.
///
/// Resolved once at start-up and again on every viewport resize; nothing
/// else in the crate branches on device type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keyboard flags drive movement; pointer drags orbit the view.
    #[default]
    Desktop,
    /// The on-screen joystick drives movement.
    Mobile,
}

impl InputMode {
    /// Mobile when the viewport is at or below `breakpoint` wide.
    #[must_use]
    pub fn from_viewport_width(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// On-screen instructions for this mode.
    #[must_use]
    pub fn controls_hint(self) -> &'static str {
        match self {
            Self::Desktop => {
                "W - Move forward\nS - Move backward\nA - Strafe left\n\
                 D - Strafe right\nMouse - Look around"
            }
            Self::Mobile => {
                "Use the joystick in the bottom left corner\n\
                 to move around the museum"
            }
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desktop => f.write_str("desktop"),
            Self::Mobile => f.write_str("mobile"),
        }
    }
}
