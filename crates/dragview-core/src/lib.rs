//! DragView Core
//!
//! This crate contains the shared foundations for the DragView crates:
//! geometry, math re-exports, logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
