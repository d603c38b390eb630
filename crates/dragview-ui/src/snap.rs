//! Settling a region after the pointer is released.
//!
//! Horizontal and vertical are resolved one after the other. Each axis yields
//! at most one [`AnimationIntent`]. The vertical intent starts from the frame
//! the horizontal one leaves behind, so hosts that apply model frames
//! immediately end in the combined position.
//!
//! With `snap_to_edge` the region always travels to the nearer of the free
//! region's left and right edges. A frame whose origin sits exactly on the
//! midpoint goes right. Vertically the region is only clamped.

use dragview_core::geometry::Rect;

use crate::animation::{AnimationIntent, labels};
use crate::guard::clamp_origin;

/// Intents produced by one snap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapPlan {
    pub horizontal: Option<AnimationIntent>,
    pub vertical: Option<AnimationIntent>,
}

impl SnapPlan {
    /// Intents in the order the host should receive them.
    pub fn intents(&self) -> impl Iterator<Item = &AnimationIntent> {
        self.horizontal.iter().chain(self.vertical.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    /// Frame after every intent has been applied.
    pub fn final_frame(&self, frame: Rect<f32>) -> Rect<f32> {
        self.intents().last().map_or(frame, |intent| intent.target)
    }
}

/// Work out where `frame` settles inside `free`.
pub fn resolve(frame: Rect<f32>, free: Rect<f32>, snap_to_edge: bool) -> SnapPlan {
    let horizontal = resolve_horizontal(frame, free, snap_to_edge);
    let after_horizontal = horizontal.map_or(frame, |intent| intent.target);
    let vertical = resolve_vertical(after_horizontal, free);
    SnapPlan {
        horizontal,
        vertical,
    }
}

fn resolve_horizontal(frame: Rect<f32>, free: Rect<f32>, snap_to_edge: bool) -> Option<AnimationIntent> {
    let left = free.x;
    let right = clamp_origin(free.max_x() - frame.width, left, f32::INFINITY);

    let (label, x) = if snap_to_edge {
        let midpoint = free.x + (free.width - frame.width) * 0.5;
        if frame.x < midpoint {
            (labels::LEFT_MOVE, left)
        } else {
            (labels::RIGHT_MOVE, right)
        }
    } else if frame.x < left {
        (labels::LEFT_MOVE, left)
    } else if frame.max_x() > free.max_x() {
        (labels::RIGHT_MOVE, right)
    } else {
        return None;
    };

    (x != frame.x).then(|| AnimationIntent::settle(label, frame.with_origin_x(x)))
}

fn resolve_vertical(frame: Rect<f32>, free: Rect<f32>) -> Option<AnimationIntent> {
    let top = free.y;
    let bottom = clamp_origin(free.max_y() - frame.height, top, f32::INFINITY);

    let (label, y) = if frame.y < top {
        (labels::TOP_MOVE, top)
    } else if frame.max_y() > free.max_y() {
        (labels::BOTTOM_MOVE, bottom)
    } else {
        return None;
    };

    (y != frame.y).then(|| AnimationIntent::settle(label, frame.with_origin_y(y)))
}
