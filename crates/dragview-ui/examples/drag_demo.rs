//! Drag Demo - a floating button in a full-screen controller, driven headlessly
//!
//! This example replays a scripted pointer stream through the pan recognizer
//! into a draggable region hosted by a `SimulatedHost`:
//! - the parent fills a notched screen without a navigation bar
//! - the region may not cover the status bar
//! - on release the region snaps to the nearest side
//!
//! Run with `RUST_LOG=dragview_ui=trace` to see every update.

use dragview_core::logging;
use dragview_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use dragview_input::{PanRecognizer, PointerEvent, PointerId};
use dragview_ui::{
    ChromeInsets, DeviceClass, DragConfig, DragResult, DraggableRegion, Rect, SimulatedHost, Size,
    Vec2, ViewHost,
};

const SCREEN: Rect<f32> = Rect::new(0.0, 0.0, 375.0, 812.0);
const FRAME_TIME: f32 = 1.0 / 60.0;

fn main() -> DragResult<()> {
    logging::init();
    init_profiling(ProfilingBackend::InProcess);

    let host = SimulatedHost::new(Rect::new(300.0, 400.0, 60.0, 60.0));
    let config = DragConfig::new()
        .with_nav_bar(false)
        .with_forbid_status_bar_overlap(true)
        .with_parent_full_screen(true)
        .with_snap_to_edge(true);

    let mut region = DraggableRegion::try_new(config)?
        .with_insets(ChromeInsets::for_device(DeviceClass::Notched))?;
    region.attach(SCREEN);
    region.button_slot().title = Some("Help".to_string());
    region.layout_slots(Size::new(60.0, 60.0));

    region.on_tap(|region| tracing::info!("tap, dragging={}", region.is_dragging()));
    region.on_drag_begin(|_| tracing::info!("drag began"));
    region.on_drag_end(|region| tracing::info!("drag ended, config={:?}", region.config().axis));

    let mut recognizer = PanRecognizer::new();
    let finger = PointerId::Touch(0);

    let mut script = vec![
        PointerEvent::Down { id: finger, position: Vec2::new(330.0, 430.0) },
        PointerEvent::Up { id: finger, position: Vec2::new(331.0, 430.0) },
        PointerEvent::Down { id: finger, position: Vec2::new(330.0, 430.0) },
    ];
    // Drag up and to the left, overshooting the status bar.
    for step in 1..=40 {
        let t = step as f32;
        script.push(PointerEvent::Moved {
            id: finger,
            position: Vec2::new(330.0 - t * 4.0, 430.0 - t * 11.0),
        });
    }
    script.push(PointerEvent::Up { id: finger, position: Vec2::new(170.0, -10.0) });

    for event in &script {
        new_frame();
        if let Some(gesture) = recognizer.handle(event) {
            region.handle_gesture(gesture, &host);
        }
        host.advance(FRAME_TIME);
    }

    while host.advance(FRAME_TIME) {
        tracing::debug!("presented {:?}", host.presented_frame());
    }

    tracing::info!(
        "settled at {:?} after {} animations",
        host.frame(),
        host.intents().len()
    );
    Ok(())
}
