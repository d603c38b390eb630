/// Vector math using SIMD-accelerated `glam` types.
///
/// Points, translations and deltas throughout DragView are [`Vec2`].
///
/// ```
/// use dragview_core::math::Vec2;
///
/// let origin = Vec2::new(10.0, 20.0);
/// let translation = Vec2::new(4.0, -2.0);
/// assert_eq!(origin + translation, Vec2::new(14.0, 18.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
