//! Input handling: event types, per-surface state machines, and the
//! aggregator that folds raw events into movement intent and walkthrough
//! commands.

/// Platform-agnostic input events.
pub mod event;
/// Held-direction flags, joystick vectors, and per-axis intent.
pub mod intent;
/// On-screen virtual joystick.
pub mod joystick;
/// Bindable key actions and key-string normalization.
pub mod keyboard;
/// Desktop vs. mobile input mode.
pub mod mode;
/// Pointer position tracking and press ownership.
pub(crate) mod mouse;
/// Converts raw events into intent and commands.
pub mod processor;

#[cfg(feature = "viewer")]
pub use event::WinitTranslator;
pub use event::InputEvent;
pub use intent::{AxisIntent, DirectionalIntent, JoystickVector};
pub use joystick::{ScreenRect, VirtualJoystick};
pub use keyboard::{normalize_key, KeyAction};
pub use mode::InputMode;
pub use processor::InputAggregator;
