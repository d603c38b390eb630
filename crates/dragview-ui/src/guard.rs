//! Per-update boundary enforcement while a drag is in progress.
//!
//! [`evaluate`] inspects the frame *before* the current update is applied. When
//! a rule fires, the host animates a correction and that update's translation
//! is dropped. Rules are checked in order and the first match wins:
//!
//! 1. the frame pokes out of the free region ([`GuardRule::EscapeFreeRect`]);
//! 2. the frame overlaps the status bar ([`GuardRule::StatusBar`]);
//! 3. the frame sinks into the bottom safe area ([`GuardRule::BottomSafeArea`]);
//! 4. the frame overlaps the navigation bar ([`GuardRule::NavBar`]).
//!
//! Rules 2 to 4 only apply when the parent fills the screen. A correction never
//! moves an axis the drag is locked out of; a rule whose correction is only
//! along a locked axis is skipped.

use dragview_core::geometry::Rect;

use crate::animation::{AnimationIntent, labels};
use crate::config::{ChromeInsets, DragAxis, DragConfig};

/// Which guard rule produced a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardRule {
    EscapeFreeRect,
    StatusBar,
    BottomSafeArea,
    NavBar,
}

impl GuardRule {
    pub fn label(self) -> &'static str {
        match self {
            GuardRule::EscapeFreeRect => labels::ESCAPE_CLAMP,
            GuardRule::StatusBar => labels::STATUS_BAR_CLAMP,
            GuardRule::BottomSafeArea => labels::SAFE_AREA_CLAMP,
            GuardRule::NavBar => labels::NAV_BAR_CLAMP,
        }
    }
}

/// A correction the host should animate instead of applying the update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardCorrection {
    pub rule: GuardRule,
    pub target: Rect<f32>,
}

impl GuardCorrection {
    pub fn intent(&self) -> AnimationIntent {
        AnimationIntent::guard(self.rule.label(), self.target)
    }
}

/// Clamp `value` into `[min, max]`. An inverted or NaN range resolves to `min`.
#[inline]
pub fn clamp_origin(value: f32, min: f32, max: f32) -> f32 {
    if min <= max { value.clamp(min, max) } else { min }
}

/// Move `frame` the least distance that puts it fully inside `free`.
pub fn clamp_into(frame: Rect<f32>, free: Rect<f32>) -> Rect<f32> {
    Rect {
        x: clamp_origin(frame.x, free.x, free.max_x() - frame.width),
        y: clamp_origin(frame.y, free.y, free.max_y() - frame.height),
        ..frame
    }
}

/// Restrict `target` to the axes `axis` lets the drag move.
///
/// Returns `None` when the restriction undoes the whole correction.
fn lock_to_axis(axis: DragAxis, frame: Rect<f32>, target: Rect<f32>) -> Option<Rect<f32>> {
    let locked = Rect {
        x: if axis.allows_x() { target.x } else { frame.x },
        y: if axis.allows_y() { target.y } else { frame.y },
        ..target
    };
    (locked != frame || target == frame).then_some(locked)
}

/// Check `frame` against the free region and device chrome.
pub fn evaluate(
    frame: Rect<f32>,
    free: Rect<f32>,
    config: &DragConfig,
    insets: &ChromeInsets,
) -> Option<GuardCorrection> {
    let correct = |rule: GuardRule, target: Rect<f32>| {
        lock_to_axis(config.axis, frame, target).map(|target| GuardCorrection { rule, target })
    };

    if config.forbid_escape_free_rect
        && !free.contains_rect(&frame)
        && let Some(correction) = correct(GuardRule::EscapeFreeRect, clamp_into(frame, free))
    {
        return Some(correction);
    }

    if !config.parent_is_full_screen {
        return None;
    }

    if config.forbid_status_bar_overlap
        && frame.y < insets.status_bar
        && let Some(correction) =
            correct(GuardRule::StatusBar, frame.with_origin_y(insets.status_bar))
    {
        return Some(correction);
    }

    let bottom_limit = free.height - frame.height - insets.bottom_safe_area;
    if frame.y > bottom_limit
        && let Some(correction) =
            correct(GuardRule::BottomSafeArea, frame.with_origin_y(bottom_limit))
    {
        return Some(correction);
    }

    if config.has_nav_bar && frame.y < insets.nav_bar {
        return correct(GuardRule::NavBar, frame.with_origin_y(insets.nav_bar));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DragConfig;

    const FREE: Rect<f32> = Rect::new(0.0, 0.0, 320.0, 568.0);

    fn full_screen() -> DragConfig {
        DragConfig::new()
            .with_forbid_escape_free_rect(false)
            .with_parent_full_screen(true)
    }

    #[test]
    fn test_inside_frame_untouched() {
        let config = DragConfig::new().with_nav_bar(false);
        for frame in [
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Rect::new(270.0, 518.0, 50.0, 50.0),
            Rect::new(135.0, 200.0, 50.0, 50.0),
        ] {
            assert_eq!(evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC), None);
        }
    }

    #[test]
    fn test_escape_right_edge() {
        let frame = Rect::new(300.0, 100.0, 50.0, 50.0);
        let correction = evaluate(frame, FREE, &DragConfig::new(), &ChromeInsets::CLASSIC)
            .expect("frame straddles the right edge");
        assert_eq!(correction.rule, GuardRule::EscapeFreeRect);
        assert_eq!(correction.target.max_x(), FREE.max_x());
        assert_eq!(correction.target.y, 100.0);
        assert_eq!(correction.intent().duration, crate::animation::GUARD_DURATION);
    }

    #[test]
    fn test_escape_top_left_corner() {
        let free = Rect::new(10.0, 20.0, 300.0, 400.0);
        let frame = Rect::new(-5.0, 0.0, 50.0, 50.0);
        let correction = evaluate(frame, free, &DragConfig::new(), &ChromeInsets::CLASSIC);
        assert_eq!(
            correction.map(|c| c.target),
            Some(Rect::new(10.0, 20.0, 50.0, 50.0))
        );
    }

    #[test]
    fn test_inverted_range_clamps_to_lower_bound() {
        let free = Rect::new(10.0, 10.0, 30.0, 30.0);
        let frame = Rect::new(50.0, 50.0, 50.0, 50.0);
        assert_eq!(clamp_into(frame, free), Rect::new(10.0, 10.0, 50.0, 50.0));
    }

    #[test]
    fn test_nan_range_clamps_to_lower_bound() {
        assert_eq!(clamp_origin(5.0, 0.0, f32::NAN), 0.0);
        let free = Rect::new(0.0, 0.0, 320.0, f32::NAN);
        let frame = Rect::new(300.0, 100.0, 50.0, 50.0);
        assert_eq!(clamp_into(frame, free), Rect::new(270.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_status_bar_rule() {
        let config = full_screen().with_forbid_status_bar_overlap(true);
        let frame = Rect::new(100.0, 5.0, 50.0, 50.0);
        let correction = evaluate(frame, FREE, &config, &ChromeInsets::NOTCHED);
        assert_eq!(
            correction,
            Some(GuardCorrection {
                rule: GuardRule::StatusBar,
                target: frame.with_origin_y(44.0),
            })
        );
    }

    #[test]
    fn test_bottom_safe_area_rule() {
        let frame = Rect::new(100.0, 500.0, 50.0, 50.0);
        let correction = evaluate(frame, FREE, &full_screen(), &ChromeInsets::NOTCHED);
        assert_eq!(
            correction.map(|c| (c.rule, c.target.y)),
            Some((GuardRule::BottomSafeArea, 568.0 - 50.0 - 34.0))
        );
    }

    #[test]
    fn test_bottom_rule_short_circuits_nav_bar() {
        // Short free region: frame is both below the bottom limit and above the nav bar.
        let free = Rect::new(0.0, 0.0, 320.0, 100.0);
        let frame = Rect::new(0.0, 60.0, 50.0, 50.0);
        let correction = evaluate(frame, free, &full_screen(), &ChromeInsets::CLASSIC);
        assert_eq!(correction.map(|c| c.rule), Some(GuardRule::BottomSafeArea));
    }

    #[test]
    fn test_nav_bar_rule() {
        let frame = Rect::new(100.0, 30.0, 50.0, 50.0);
        let correction = evaluate(frame, FREE, &full_screen(), &ChromeInsets::CLASSIC);
        assert_eq!(
            correction.map(|c| (c.rule, c.target.y)),
            Some((GuardRule::NavBar, 64.0))
        );

        let no_nav = full_screen().with_nav_bar(false);
        assert_eq!(evaluate(frame, FREE, &no_nav, &ChromeInsets::CLASSIC), None);
    }

    #[test]
    fn test_chrome_rules_need_full_screen_parent() {
        let config = DragConfig::new()
            .with_forbid_escape_free_rect(false)
            .with_forbid_status_bar_overlap(true);
        let frame = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert_eq!(evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC), None);
    }

    #[test]
    fn test_horizontal_lock_skips_vertical_corrections() {
        let config = full_screen().with_axis(DragAxis::Horizontal);
        let frame = Rect::new(100.0, 30.0, 50.0, 50.0);
        assert_eq!(evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC), None);

        let config = DragConfig::new().with_axis(DragAxis::Horizontal);
        let frame = Rect::new(300.0, 540.0, 50.0, 50.0);
        let correction = evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC);
        assert_eq!(
            correction.map(|c| (c.rule, c.target)),
            Some((GuardRule::EscapeFreeRect, Rect::new(270.0, 540.0, 50.0, 50.0)))
        );
    }

    #[test]
    fn test_vertical_lock_keeps_x() {
        let config = DragConfig::new().with_axis(DragAxis::Vertical);
        let frame = Rect::new(300.0, 100.0, 50.0, 50.0);
        assert_eq!(evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC), None);

        let frame = Rect::new(300.0, -10.0, 50.0, 50.0);
        let correction = evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC);
        assert_eq!(
            correction.map(|c| c.target),
            Some(Rect::new(300.0, 0.0, 50.0, 50.0))
        );

        let config = full_screen().with_axis(DragAxis::Vertical);
        let frame = Rect::new(100.0, 30.0, 50.0, 50.0);
        assert_eq!(
            evaluate(frame, FREE, &config, &ChromeInsets::CLASSIC).map(|c| c.rule),
            Some(GuardRule::NavBar)
        );
    }
}
