//! Translation of `winit` window events into [`PointerEvent`]s.

use dragview_core::math::Vec2;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::pointer::{PointerEvent, PointerId};

/// Keeps the cursor position that `MouseInput` events do not carry.
#[derive(Debug, Clone, Default)]
pub struct WinitPointerAdapter {
    cursor: Vec2,
    mouse_down: bool,
}

impl WinitPointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Convert a window event, dividing physical positions by `scale_factor`.
    ///
    /// Only the left mouse button drives the pointer; other buttons are ignored.
    pub fn translate(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(
                    (position.x / scale_factor) as f32,
                    (position.y / scale_factor) as f32,
                );
                Some(PointerEvent::Moved {
                    id: PointerId::Mouse,
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.mouse_down = true;
                    Some(PointerEvent::Down {
                        id: PointerId::Mouse,
                        position: self.cursor,
                    })
                }
                ElementState::Released => {
                    self.mouse_down = false;
                    Some(PointerEvent::Up {
                        id: PointerId::Mouse,
                        position: self.cursor,
                    })
                }
            },
            // Leaving the window mid-press is treated as the platform taking the pointer.
            WindowEvent::CursorLeft { .. } if self.mouse_down => {
                self.mouse_down = false;
                Some(PointerEvent::Cancelled {
                    id: PointerId::Mouse,
                })
            }
            WindowEvent::Touch(touch) => {
                let id = PointerId::Touch(touch.id);
                let position = Vec2::new(
                    (touch.location.x / scale_factor) as f32,
                    (touch.location.y / scale_factor) as f32,
                );
                Some(match touch.phase {
                    TouchPhase::Started => PointerEvent::Down { id, position },
                    TouchPhase::Moved => PointerEvent::Moved { id, position },
                    TouchPhase::Ended => PointerEvent::Up { id, position },
                    TouchPhase::Cancelled => PointerEvent::Cancelled { id },
                })
            }
            _ => None,
        }
    }
}
