//! Hash collections used across DragView.

pub use ahash::AHashMap as HashMap;
