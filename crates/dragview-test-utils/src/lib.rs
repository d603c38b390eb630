//! Test utilities for DragView.
//!
//! This crate provides a recording [`ViewHost`](dragview_ui::ViewHost) so tests
//! can assert on exactly which frame mutations a region requested.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use dragview_test_utils::{HostCall, MockViewHost};
//! use dragview_ui::{DragConfig, DraggableRegion, GestureEvent, Rect, Vec2};
//!
//! let host = MockViewHost::new(Rect::new(300.0, 0.0, 50.0, 50.0));
//! let mut region = DraggableRegion::new(DragConfig::default());
//! region.attach(Rect::new(0.0, 0.0, 320.0, 568.0));
//!
//! region.handle_gesture(GestureEvent::Begin { origin: Vec2::ZERO }, &host);
//! region.handle_gesture(GestureEvent::End, &host);
//!
//! assert_eq!(host.count_animations(), 1);
//! assert!(matches!(host.calls()[0], HostCall::CancelAnimations));
//! # }
//! ```
//!
//! # Interior Mutability
//!
//! `ViewHost` methods take `&self`, so the mock records through a
//! `parking_lot::Mutex`.

#[cfg(feature = "mock")]
pub mod mock_host;

#[cfg(feature = "mock")]
pub use mock_host::*;
