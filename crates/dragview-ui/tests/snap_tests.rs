//! Settle behavior when the pointer is released.

use dragview_test_utils::MockViewHost;
use dragview_ui::animation::{EasingFunction, SETTLE_DURATION, labels};
use dragview_ui::{DragConfig, DraggableRegion, GestureEvent, Rect, Vec2, ViewHost};

const SCREEN: Rect<f32> = Rect::new(0.0, 0.0, 320.0, 568.0);

fn release(config: DragConfig, frame: Rect<f32>) -> MockViewHost {
    let host = MockViewHost::new(frame);
    let mut region = DraggableRegion::new(config);
    region.attach(SCREEN);
    region.handle_gesture(GestureEvent::Begin { origin: Vec2::ZERO }, &host);
    region.handle_gesture(GestureEvent::End, &host);
    host
}

fn unguarded() -> DragConfig {
    DragConfig::new().with_forbid_escape_free_rect(false)
}

#[test]
fn test_right_overhang_clamped_without_snap() {
    let host = release(unguarded(), Rect::new(300.0, 0.0, 50.0, 50.0));

    assert_eq!(host.frame().x, 270.0);
    let intents = host.animations();
    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0].label, labels::RIGHT_MOVE);
    assert_eq!(intents[0].duration, SETTLE_DURATION);
    assert_eq!(intents[0].easing, EasingFunction::EaseInOut);
}

#[test]
fn test_left_overhang_clamped_without_snap() {
    let host = release(unguarded(), Rect::new(-12.0, 40.0, 50.0, 50.0));
    assert_eq!(host.frame(), Rect::new(0.0, 40.0, 50.0, 50.0));
    assert_eq!(host.animation_labels(), vec![labels::LEFT_MOVE]);
}

#[test]
fn test_snap_to_nearest_edge() {
    let host = release(
        unguarded().with_snap_to_edge(true),
        Rect::new(10.0, 0.0, 50.0, 50.0),
    );
    assert_eq!(host.frame().x, 0.0);
    assert_eq!(host.animation_labels(), vec![labels::LEFT_MOVE]);

    let host = release(
        unguarded().with_snap_to_edge(true),
        Rect::new(200.0, 0.0, 50.0, 50.0),
    );
    assert_eq!(host.frame().x, 270.0);
    assert_eq!(host.animation_labels(), vec![labels::RIGHT_MOVE]);
}

#[test]
fn test_snap_tie_breaks_right() {
    let host = release(
        unguarded().with_snap_to_edge(true),
        Rect::new(135.0, 300.0, 50.0, 50.0),
    );
    assert_eq!(host.frame().x, 270.0);
}

#[test]
fn test_snap_does_not_apply_vertically() {
    let host = release(
        unguarded().with_snap_to_edge(true),
        Rect::new(0.0, 250.0, 50.0, 50.0),
    );
    assert_eq!(host.frame(), Rect::new(0.0, 250.0, 50.0, 50.0));
    assert_eq!(host.count_animations(), 0);
}

#[test]
fn test_both_axes_settle_with_independent_intents() {
    let host = release(unguarded(), Rect::new(310.0, -20.0, 50.0, 50.0));
    assert_eq!(
        host.animation_labels(),
        vec![labels::RIGHT_MOVE, labels::TOP_MOVE]
    );
    assert_eq!(host.frame(), Rect::new(270.0, 0.0, 50.0, 50.0));

    let host = release(unguarded(), Rect::new(100.0, 560.0, 50.0, 50.0));
    assert_eq!(host.animation_labels(), vec![labels::BOTTOM_MOVE]);
    assert_eq!(host.frame().y, 518.0);
}

#[test]
fn test_settle_is_idempotent() {
    for snap in [false, true] {
        let config = unguarded().with_snap_to_edge(snap);
        let host = release(config.clone(), Rect::new(290.0, 530.0, 50.0, 50.0));
        let settled = host.frame();

        let mut region = DraggableRegion::new(config);
        region.attach(SCREEN);
        host.clear_calls();
        region.settle(&host);

        assert_eq!(host.count_animations(), 0, "snap = {}", snap);
        assert_eq!(host.frame(), settled);
    }
}

#[test]
fn test_cancel_settles_like_end() {
    let host = MockViewHost::new(Rect::new(300.0, 0.0, 50.0, 50.0));
    let mut region = DraggableRegion::new(unguarded());
    region.attach(SCREEN);
    region.handle_gesture(GestureEvent::Begin { origin: Vec2::ZERO }, &host);
    region.handle_gesture(GestureEvent::Cancel, &host);

    assert_eq!(host.frame().x, 270.0);
    assert!(!region.is_dragging());
}

#[test]
fn test_oversized_frame_settles_at_origin_of_free_rect() {
    let free = Rect::new(10.0, 10.0, 40.0, 40.0);
    let host = release(
        unguarded().with_free_rect(free),
        Rect::new(30.0, 30.0, 100.0, 100.0),
    );
    assert_eq!(host.frame(), Rect::new(10.0, 10.0, 100.0, 100.0));
}
