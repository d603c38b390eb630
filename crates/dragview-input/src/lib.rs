//! DragView input handling.
//!
//! Raw pointer events go in, gesture phases come out:
//!
//! ```
//! use dragview_input::{GestureEvent, PanRecognizer, PointerEvent, PointerId};
//! use dragview_core::math::Vec2;
//!
//! let mut recognizer = PanRecognizer::new();
//! let id = PointerId::Touch(0);
//!
//! assert_eq!(recognizer.handle(&PointerEvent::Down { id, position: Vec2::new(10.0, 10.0) }), None);
//! assert_eq!(
//!     recognizer.handle(&PointerEvent::Moved { id, position: Vec2::new(40.0, 10.0) }),
//!     Some(GestureEvent::Begin { origin: Vec2::new(40.0, 10.0) }),
//! );
//! ```

pub mod gesture;
pub mod pointer;
pub mod status;
#[cfg(feature = "winit")]
pub mod winit_adapter;

pub use gesture::{DEFAULT_TOUCH_SLOP, GestureEvent, PanRecognizer, RecognizerState};
pub use pointer::{PointerEvent, PointerId};
pub use status::HandleStatus;
#[cfg(feature = "winit")]
pub use winit_adapter::WinitPointerAdapter;
