//! Single-pointer pan and tap recognition.
//!
//! [`PanRecognizer`] tracks the first pointer that goes down and ignores any
//! other pointer until it is released. A press that never travels further than
//! the touch slop becomes a [`GestureEvent::Tap`]; otherwise it becomes a pan
//! with `Begin`, a stream of `Change`, and a final `End` or `Cancel`.

use dragview_core::math::Vec2;

use crate::pointer::{PointerEvent, PointerId};

/// Distance in logical pixels a pointer must travel before a press becomes a pan.
pub const DEFAULT_TOUCH_SLOP: f32 = 10.0;

/// Gesture phases delivered to a draggable component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Press and release without leaving the touch slop.
    Tap { position: Vec2 },
    /// Pan recognized. Translation is measured from `origin` from here on.
    Begin { origin: Vec2 },
    /// Cumulative translation since `Begin`.
    Change { translation: Vec2 },
    /// Pointer released during a pan.
    End,
    /// Pointer taken away during a pan.
    Cancel,
}

/// Recognizer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerState {
    /// No pointer tracked.
    Possible,
    /// Pointer down, still inside the touch slop.
    Pressed,
    /// Pan in progress.
    Panning,
}

#[derive(Debug, Clone, Copy)]
struct TrackedPointer {
    id: PointerId,
    down_at: Vec2,
    pan_origin: Vec2,
}

/// Turns [`PointerEvent`]s into [`GestureEvent`]s.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    touch_slop: f32,
    state: RecognizerState,
    tracked: Option<TrackedPointer>,
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            state: RecognizerState::Possible,
            tracked: None,
        }
    }

    /// Override the tap/pan threshold. Negative values are treated as zero.
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop.max(0.0);
        self
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn is_panning(&self) -> bool {
        self.state == RecognizerState::Panning
    }

    /// Drop the tracked pointer without emitting anything.
    pub fn reset(&mut self) {
        self.state = RecognizerState::Possible;
        self.tracked = None;
    }

    /// Feed one pointer event; at most one gesture event comes out.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<GestureEvent> {
        match *event {
            PointerEvent::Down { id, position } => {
                if self.tracked.is_some() {
                    tracing::trace!("Ignoring extra pointer {:?}", id);
                    return None;
                }
                self.tracked = Some(TrackedPointer {
                    id,
                    down_at: position,
                    pan_origin: position,
                });
                self.state = RecognizerState::Pressed;
                None
            }
            PointerEvent::Moved { id, position } => {
                let tracked = self.tracked.as_mut().filter(|t| t.id == id)?;
                match self.state {
                    RecognizerState::Pressed => {
                        if position.distance(tracked.down_at) > self.touch_slop {
                            tracked.pan_origin = position;
                            self.state = RecognizerState::Panning;
                            tracing::trace!("Pan recognized at {:?}", position);
                            Some(GestureEvent::Begin { origin: position })
                        } else {
                            None
                        }
                    }
                    RecognizerState::Panning => Some(GestureEvent::Change {
                        translation: position - tracked.pan_origin,
                    }),
                    RecognizerState::Possible => None,
                }
            }
            PointerEvent::Up { id, position } => {
                if self.tracked.is_none_or(|t| t.id != id) {
                    return None;
                }
                let gesture = match self.state {
                    RecognizerState::Pressed => Some(GestureEvent::Tap { position }),
                    RecognizerState::Panning => Some(GestureEvent::End),
                    RecognizerState::Possible => None,
                };
                self.reset();
                gesture
            }
            PointerEvent::Cancelled { id } => {
                if self.tracked.is_none_or(|t| t.id != id) {
                    return None;
                }
                let gesture = (self.state == RecognizerState::Panning).then_some(GestureEvent::Cancel);
                self.reset();
                gesture
            }
        }
    }
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
