//! The boundary between a draggable region and the view system hosting it.
//!
//! The host owns the frame. The region reads it, writes it directly while the
//! pointer moves, and asks for animated changes when it corrects or settles.
//!
//! # Model vs. presentation
//!
//! `animate_frame` updates the *model* frame immediately; only the on-screen
//! (presented) frame moves over time. A `frame()` call right after
//! `animate_frame` therefore returns the target. The snap resolver depends on
//! this when it chains the horizontal and vertical settle.

use dragview_core::geometry::Rect;
use parking_lot::Mutex;

use crate::animation::{AnimationIntent, FrameAnimations};

/// Frame access the region needs from its host view.
///
/// Methods take `&self` so a host can be shared between the region and the
/// rest of the UI; implementations use interior mutability.
pub trait ViewHost {
    /// Current model frame in parent coordinates.
    fn frame(&self) -> Rect<f32>;

    /// Move the frame immediately, superseding any running animation on it.
    fn set_frame(&self, frame: Rect<f32>);

    /// Set the model frame to `intent.target` and animate the presentation there.
    fn animate_frame(&self, intent: &AnimationIntent);

    /// Stop in-flight frame animations, leaving the model frame where it is.
    fn cancel_frame_animations(&self);
}

#[derive(Debug)]
struct SimulatedState {
    model: Rect<f32>,
    animations: FrameAnimations,
    intents: Vec<AnimationIntent>,
}

/// Headless host that tweens its frame with [`FrameAnimations`].
///
/// Useful for demos, tests and any embedding that has no animation engine.
///
/// ```
/// use dragview_core::geometry::Rect;
/// use dragview_ui::animation::{AnimationIntent, labels};
/// use dragview_ui::{SimulatedHost, ViewHost};
///
/// let host = SimulatedHost::new(Rect::new(300.0, 0.0, 50.0, 50.0));
/// host.animate_frame(&AnimationIntent::settle(labels::RIGHT_MOVE, Rect::new(270.0, 0.0, 50.0, 50.0)));
///
/// assert_eq!(host.frame().x, 270.0);
/// assert_eq!(host.presented_frame().x, 300.0);
///
/// host.advance(0.5);
/// assert_eq!(host.presented_frame().x, 270.0);
/// ```
#[derive(Debug)]
pub struct SimulatedHost {
    state: Mutex<SimulatedState>,
}

impl SimulatedHost {
    pub fn new(frame: Rect<f32>) -> Self {
        Self {
            state: Mutex::new(SimulatedState {
                model: frame,
                animations: FrameAnimations::new(),
                intents: Vec::new(),
            }),
        }
    }

    /// Frame as currently shown, with running tweens applied.
    pub fn presented_frame(&self) -> Rect<f32> {
        let state = self.state.lock();
        state.animations.sample(state.model)
    }

    /// Step running tweens. Returns true while any are still running.
    pub fn advance(&self, delta_time: f32) -> bool {
        self.state.lock().animations.update(delta_time)
    }

    pub fn is_animating(&self) -> bool {
        !self.state.lock().animations.is_empty()
    }

    /// Every intent received so far, oldest first.
    pub fn intents(&self) -> Vec<AnimationIntent> {
        self.state.lock().intents.clone()
    }
}

impl ViewHost for SimulatedHost {
    fn frame(&self) -> Rect<f32> {
        self.state.lock().model
    }

    fn set_frame(&self, frame: Rect<f32>) {
        let mut state = self.state.lock();
        state.animations.cancel();
        state.model = frame;
    }

    fn animate_frame(&self, intent: &AnimationIntent) {
        let mut state = self.state.lock();
        let presented = state.animations.sample(state.model);
        state.animations.start(presented, intent);
        state.model = intent.target;
        state.intents.push(*intent);
    }

    fn cancel_frame_animations(&self) {
        self.state.lock().animations.cancel();
    }
}
