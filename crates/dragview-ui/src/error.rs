//! Error types for region configuration.

use std::fmt;

use dragview_core::geometry::GeometryError;

/// Errors raised when configuring a [`DraggableRegion`](crate::DraggableRegion).
///
/// Gesture handling itself never fails; only configuration is validated.
#[derive(Debug, Clone, PartialEq)]
pub enum DragError {
    /// The free region is not a valid rectangle.
    InvalidFreeRect(GeometryError),

    /// A chrome inset is negative or not finite.
    InvalidInsets {
        /// Which inset was rejected.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::InvalidFreeRect(err) => write!(f, "Invalid free region: {}", err),
            DragError::InvalidInsets { name, value } => {
                write!(f, "Invalid {} inset: {}", name, value)
            }
        }
    }
}

impl std::error::Error for DragError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DragError::InvalidFreeRect(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryError> for DragError {
    fn from(err: GeometryError) -> Self {
        DragError::InvalidFreeRect(err)
    }
}

/// Result type alias for region configuration.
pub type DragResult<T> = Result<T, DragError>;
