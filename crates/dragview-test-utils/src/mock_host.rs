//! Mock implementation of ViewHost for testing.
//!
//! The mock applies every mutation to its model frame immediately and records
//! the call, without animating anything.

use dragview_core::geometry::Rect;
use dragview_ui::{AnimationIntent, ViewHost};
use parking_lot::Mutex;

/// Records a host operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetFrame(Rect<f32>),
    Animate(AnimationIntent),
    CancelAnimations,
}

/// Mock implementation of [`ViewHost`] for testing.
pub struct MockViewHost {
    /// Current model frame
    frame: Mutex<Rect<f32>>,

    /// Recorded calls for verification
    calls: Mutex<Vec<HostCall>>,
}

impl MockViewHost {
    pub fn new(frame: Rect<f32>) -> Self {
        Self {
            frame: Mutex::new(frame),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Intents received, oldest first.
    pub fn animations(&self) -> Vec<AnimationIntent> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::Animate(intent) => Some(*intent),
                _ => None,
            })
            .collect()
    }

    /// Labels of the intents received, oldest first.
    pub fn animation_labels(&self) -> Vec<&'static str> {
        self.animations().iter().map(|intent| intent.label).collect()
    }

    pub fn count_animations(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::Animate(_)))
            .count()
    }

    pub fn count_set_frames(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::SetFrame(_)))
            .count()
    }

    /// Replace the frame without recording a call, e.g. to stage a scenario.
    pub fn place(&self, frame: Rect<f32>) {
        *self.frame.lock() = frame;
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockViewHost {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl ViewHost for MockViewHost {
    fn frame(&self) -> Rect<f32> {
        *self.frame.lock()
    }

    fn set_frame(&self, frame: Rect<f32>) {
        *self.frame.lock() = frame;
        self.calls.lock().push(HostCall::SetFrame(frame));
    }

    fn animate_frame(&self, intent: &AnimationIntent) {
        *self.frame.lock() = intent.target;
        self.calls.lock().push(HostCall::Animate(*intent));
    }

    fn cancel_frame_animations(&self) {
        self.calls.lock().push(HostCall::CancelAnimations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragview_ui::animation::labels;

    #[test]
    fn test_records_calls_in_order() {
        let mock = MockViewHost::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        mock.set_frame(Rect::new(5.0, 0.0, 10.0, 10.0));
        mock.animate_frame(&AnimationIntent::settle(
            labels::LEFT_MOVE,
            Rect::new(0.0, 0.0, 10.0, 10.0),
        ));
        mock.cancel_frame_animations();

        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.count_set_frames(), 1);
        assert_eq!(mock.animation_labels(), vec![labels::LEFT_MOVE]);
        assert_eq!(mock.frame(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_place_is_not_recorded() {
        let mock = MockViewHost::default();
        mock.place(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(mock.call_count(), 0);
        assert_eq!(mock.frame(), Rect::new(1.0, 2.0, 3.0, 4.0));

        mock.set_frame(Rect::ZERO);
        mock.clear_calls();
        assert_eq!(mock.call_count(), 0);
    }
}
