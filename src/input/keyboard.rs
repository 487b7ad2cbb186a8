use serde::{Deserialize, Serialize};

/// Walkthrough actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// next_waypoint = "ArrowRight"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk toward the facing direction while held.
    MoveForward,
    /// Walk away from the facing direction while held.
    MoveBackward,
    /// Strafe left while held.
    StrafeLeft,
    /// Strafe right while held.
    StrafeRight,
    /// Fly to the next point of interest.
    NextWaypoint,
    /// Fly to the previous point of interest.
    PreviousWaypoint,
}

impl KeyAction {
    /// Every action, in lookup precedence order.
    pub const ALL: [Self; 6] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::NextWaypoint,
        Self::PreviousWaypoint,
    ];

    /// Whether the action is held (movement) rather than fired once.
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveBackward
                | Self::StrafeLeft
                | Self::StrafeRight
        )
    }
}

/// Normalize a key string to `KeyboardEvent.code` form.
///
/// Single letters from `KeyboardEvent.key` (`"w"`, `"W"`) become `"KeyW"`;
/// everything else passes through unchanged.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            format!("Key{}", c.to_ascii_uppercase())
        }
        _ => key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_normalize_to_codes() {
        assert_eq!(normalize_key("w"), "KeyW");
        assert_eq!(normalize_key("D"), "KeyD");
        assert_eq!(normalize_key("KeyA"), "KeyA");
        assert_eq!(normalize_key("ArrowLeft"), "ArrowLeft");
        assert_eq!(normalize_key("1"), "1");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn only_movement_is_continuous() {
        assert!(KeyAction::MoveForward.is_continuous());
        assert!(KeyAction::StrafeLeft.is_continuous());
        assert!(!KeyAction::NextWaypoint.is_continuous());
        assert!(!KeyAction::PreviousWaypoint.is_continuous());
    }
}
