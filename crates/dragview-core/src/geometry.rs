use std::fmt;

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// Reasons a rectangle fails validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Width or height is below zero.
    NegativeSize { width: f32, height: f32 },
    /// A component is NaN or infinite.
    NonFinite,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NegativeSize { width, height } => {
                write!(f, "Rectangle has negative size: {}x{}", width, height)
            }
            GeometryError::NonFinite => write!(f, "Rectangle has a non-finite component"),
        }
    }
}

impl std::error::Error for GeometryError {}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    pub const ZERO: Self = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Build a rectangle, rejecting negative or non-finite geometry.
    pub fn try_new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        Rect::new(x, y, width, height).validated()
    }

    /// Check the size invariant on an already constructed rectangle.
    pub fn validated(self) -> Result<Self, GeometryError> {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(GeometryError::NonFinite);
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GeometryError::NegativeSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Size<f32>) -> Self {
        Rect::new(
            center.x - size.width * 0.5,
            center.y - size.height * 0.5,
            size.width,
            size.height,
        )
    }

    /// Rectangle at the origin covering `size`, i.e. a view's bounds.
    pub fn from_size(size: Size<f32>) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn with_origin_x(self, x: f32) -> Self {
        Rect { x, ..self }
    }

    pub fn with_origin_y(self, y: f32) -> Self {
        Rect { y, ..self }
    }

    pub fn translated(self, delta: Vec2) -> Self {
        Rect {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// All four components are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// `other` lies entirely within `self`, edges included.
    pub fn contains_rect(&self, other: &Rect<f32>) -> bool {
        other.x >= self.x
            && other.max_x() <= self.max_x()
            && other.y >= self.y
            && other.max_y() <= self.max_y()
    }
}
