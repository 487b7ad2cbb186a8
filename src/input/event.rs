/// Platform-agnostic input events.
///
/// These are fed into an [`InputAggregator`](super::InputAggregator) which
/// folds them into the current movement intent and, for discrete gestures,
/// produces a [`NavCommand`](crate::walkthrough::NavCommand).
///
/// # Example
///
/// ```ignore
/// let cmd = aggregator.handle_event(&InputEvent::PointerMove { x: 100.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Key code in `KeyboardEvent.code` form (`"KeyW"`); single-letter
        /// `KeyboardEvent.key` values (`"w"`) are accepted too.
        code: String,
        /// `true` for press (including auto-repeat), `false` for release.
        pressed: bool,
    },
    /// Primary pointer (mouse button or touch) went down.
    PointerDown {
        /// Horizontal position in CSS/logical pixels from the left edge.
        x: f32,
        /// Vertical position in CSS/logical pixels from the top edge.
        y: f32,
    },
    /// Pointer moved (pressed or not).
    PointerMove {
        /// Horizontal position in CSS/logical pixels from the left edge.
        x: f32,
        /// Vertical position in CSS/logical pixels from the top edge.
        y: f32,
    },
    /// Primary pointer released or touch ended.
    PointerUp,
    /// Scroll wheel or pinch (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Viewport resized; re-evaluates mobile vs. desktop mode.
    Resize {
        /// New viewport width in CSS/logical pixels.
        width: f32,
        /// New viewport height in CSS/logical pixels.
        height: f32,
    },
    /// The window lost keyboard focus; every held input is released.
    FocusLost,
}

/// Stateful translator from `winit` window events.
///
/// `winit` reports button presses without a position, so the translator
/// remembers the last cursor position to fill in
/// [`InputEvent::PointerDown`].
#[cfg(feature = "viewer")]
#[derive(Debug, Default)]
pub struct WinitTranslator {
    cursor: (f32, f32),
    scale_factor: f64,
}

#[cfg(feature = "viewer")]
impl WinitTranslator {
    /// Translator for a window with the given DPI scale factor.
    #[must_use]
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: (0.0, 0.0),
            scale_factor,
        }
    }

    /// Convert a window event, or `None` if the walkthrough ignores it.
    pub fn translate(
        &mut self,
        event: &winit::event::WindowEvent,
    ) -> Option<InputEvent> {
        use winit::event::{
            ElementState, MouseButton, MouseScrollDelta, WindowEvent,
        };
        use winit::keyboard::PhysicalKey;

        let scale = if self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        };

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(InputEvent::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(scale);
                self.cursor = (logical.x as f32, logical.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerDown {
                    x: self.cursor.0,
                    y: self.cursor.1,
                },
                ElementState::Released => InputEvent::PointerUp,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(InputEvent::Scroll { delta: scroll })
            }
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f64>(scale);
                Some(InputEvent::Resize {
                    width: logical.width as f32,
                    height: logical.height as f32,
                })
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            _ => None,
        }
    }
}
