//! Animation intents and frame tweening.
//!
//! A [`DraggableRegion`](crate::DraggableRegion) never runs animations itself. It
//! hands the host an [`AnimationIntent`]: where the frame should end up, how long
//! the transition takes, and which easing curve to use. Hosts that do not have an
//! animation engine of their own can drive [`FrameAnimations`], which tweens the
//! x and y origin independently.
//!
//! # Example
//!
//! ```
//! use dragview_core::geometry::Rect;
//! use dragview_ui::animation::{AnimationIntent, FrameAnimations, FrameProperty, labels};
//!
//! let from = Rect::new(300.0, 0.0, 50.0, 50.0);
//! let intent = AnimationIntent::settle(labels::RIGHT_MOVE, from.with_origin_x(270.0));
//!
//! let mut tweens = FrameAnimations::new();
//! tweens.start(from, &intent);
//! tweens.update(intent.duration);
//! assert!(tweens.is_empty());
//! ```

use dragview_core::alloc::HashMap;
use dragview_core::geometry::Rect;

/// Duration of the settle animation played when a drag ends.
pub const SETTLE_DURATION: f32 = 0.5;

/// Duration of corrections applied while a drag is in progress.
pub const GUARD_DURATION: f32 = 0.2;

/// Names attached to the intents the region emits.
pub mod labels {
    pub const LEFT_MOVE: &str = "leftMove";
    pub const RIGHT_MOVE: &str = "rightMove";
    pub const TOP_MOVE: &str = "topMove";
    pub const BOTTOM_MOVE: &str = "bottomMove";
    pub const ESCAPE_CLAMP: &str = "escapeClamp";
    pub const STATUS_BAR_CLAMP: &str = "statusBarClamp";
    pub const SAFE_AREA_CLAMP: &str = "safeAreaClamp";
    pub const NAV_BAR_CLAMP: &str = "navBarClamp";
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// A requested animated frame change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationIntent {
    /// Identifies which rule produced the intent.
    pub label: &'static str,
    /// Final frame.
    pub target: Rect<f32>,
    /// Duration in seconds.
    pub duration: f32,
    pub easing: EasingFunction,
}

impl AnimationIntent {
    /// Release animation: [`SETTLE_DURATION`] with ease-in-out.
    pub fn settle(label: &'static str, target: Rect<f32>) -> Self {
        Self {
            label,
            target,
            duration: SETTLE_DURATION,
            easing: EasingFunction::EaseInOut,
        }
    }

    /// Mid-drag correction: [`GUARD_DURATION`] with ease-in-out.
    pub fn guard(label: &'static str, target: Rect<f32>) -> Self {
        Self {
            label,
            target,
            duration: GUARD_DURATION,
            easing: EasingFunction::EaseInOut,
        }
    }
}

/// Frame components a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameProperty {
    OriginX,
    OriginY,
}

impl FrameProperty {
    pub fn read(self, rect: &Rect<f32>) -> f32 {
        match self {
            FrameProperty::OriginX => rect.x,
            FrameProperty::OriginY => rect.y,
        }
    }

    pub fn write(self, rect: &mut Rect<f32>, value: f32) {
        match self {
            FrameProperty::OriginX => rect.x = value,
            FrameProperty::OriginY => rect.y = value,
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is completed
    Completed,
}

/// A tween of a single frame property.
#[derive(Debug, Clone)]
pub struct Animation {
    property: FrameProperty,
    from: f32,
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl Animation {
    /// Create a new animation.
    pub fn new(property: FrameProperty) -> Self {
        Self {
            property,
            from: 0.0,
            to: 1.0,
            duration: 1.0,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    /// Set the start value.
    pub fn from(mut self, value: f32) -> Self {
        self.from = value;
        self
    }

    /// Set the end value.
    pub fn to(mut self, value: f32) -> Self {
        self.to = value;
        self
    }

    /// Set the duration in seconds.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn property(&self) -> FrameProperty {
        self.property
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

/// Independent x/y tweens for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameAnimations {
    animations: HashMap<FrameProperty, Animation>,
}

impl FrameAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation, replacing any running tween of the same property.
    pub fn add(&mut self, animation: Animation) {
        self.animations.insert(animation.property(), animation);
    }

    /// Start tweens from `from` towards `intent.target` for every origin
    /// component that actually changes.
    pub fn start(&mut self, from: Rect<f32>, intent: &AnimationIntent) {
        for property in [FrameProperty::OriginX, FrameProperty::OriginY] {
            let start = property.read(&from);
            let end = property.read(&intent.target);
            if start != end {
                self.add(
                    Animation::new(property)
                        .from(start)
                        .to(end)
                        .duration(intent.duration)
                        .easing(intent.easing),
                );
            }
        }
    }

    pub fn get(&self, property: FrameProperty) -> Option<&Animation> {
        self.animations.get(&property)
    }

    pub fn remove(&mut self, property: FrameProperty) {
        self.animations.remove(&property);
    }

    /// Update all animations, dropping finished ones.
    ///
    /// Returns true if any animations are still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        self.animations
            .retain(|_, animation| animation.update(delta_time));
        !self.animations.is_empty()
    }

    /// Overlay the current tween values on `model`.
    pub fn sample(&self, model: Rect<f32>) -> Rect<f32> {
        let mut presented = model;
        for (property, animation) in &self.animations {
            property.write(&mut presented, animation.value());
        }
        presented
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Drop every running tween.
    pub fn cancel(&mut self) {
        self.animations.clear();
    }
}
