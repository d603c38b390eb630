//! DragView UI - a region that follows the pointer inside its parent
//!
//! [`DraggableRegion`] turns pan gestures into frame changes on a [`ViewHost`]:
//! - axis-locked or free dragging
//! - an escape guard that keeps the frame inside its free region and clear of
//!   device chrome while the pointer moves
//! - clamping or edge snapping once the pointer is released
//! - tap / begin / change / end callbacks
//!
//! ## Quick Start
//!
//! ```rust
//! # use dragview_core::geometry::Rect;
//! # use dragview_input::{PanRecognizer, PointerEvent, PointerId};
//! # use dragview_core::math::Vec2;
//! use dragview_ui::{DragConfig, DraggableRegion, SimulatedHost, ViewHost};
//!
//! let host = SimulatedHost::new(Rect::new(300.0, 0.0, 50.0, 50.0));
//! let mut region = DraggableRegion::new(DragConfig::default());
//! region.attach(Rect::new(0.0, 0.0, 320.0, 568.0));
//! region.on_drag_end(|_| println!("settled"));
//!
//! let mut recognizer = PanRecognizer::new();
//! let id = PointerId::Touch(0);
//! for event in [
//!     PointerEvent::Down { id, position: Vec2::new(320.0, 20.0) },
//!     PointerEvent::Moved { id, position: Vec2::new(320.0, 60.0) },
//!     PointerEvent::Up { id, position: Vec2::new(320.0, 60.0) },
//! ] {
//!     if let Some(gesture) = recognizer.handle(&event) {
//!         region.handle_gesture(gesture, &host);
//!     }
//! }
//!
//! // Released while hanging over the right edge: clamped back inside.
//! assert_eq!(host.frame().x, 270.0);
//! ```

pub mod animation;
pub mod callbacks;
pub mod config;
pub mod error;
pub mod guard;
pub mod host;
pub mod region;
pub mod slots;
pub mod snap;

pub use animation::{AnimationIntent, EasingFunction, FrameAnimations};
pub use callbacks::{DragCallback, DragCallbacks, DragHook};
pub use config::{ChromeInsets, DeviceClass, DragAxis, DragConfig};
pub use error::{DragError, DragResult};
pub use guard::{GuardCorrection, GuardRule};
pub use host::{SimulatedHost, ViewHost};
pub use region::{DragSession, DraggableRegion};
pub use slots::{ButtonSlot, DecorativeSlots, ImageSlot};
pub use snap::SnapPlan;

// Re-export common types from dependencies
pub use dragview_core::geometry::{Rect, Size};
pub use dragview_core::math::Vec2;
pub use dragview_input::{GestureEvent, HandleStatus};
