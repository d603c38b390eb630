use dragview_core::math::Vec2;

/// Identity of the pointer that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

/// Raw pointer input in logical coordinates of the parent view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed / finger down.
    Down { id: PointerId, position: Vec2 },
    /// Pointer moved while tracked or hovering.
    Moved { id: PointerId, position: Vec2 },
    /// Pointer released / finger lifted.
    Up { id: PointerId, position: Vec2 },
    /// The platform took the pointer away (e.g. system gesture).
    Cancelled { id: PointerId },
}

impl PointerEvent {
    pub fn id(&self) -> PointerId {
        match self {
            PointerEvent::Down { id, .. }
            | PointerEvent::Moved { id, .. }
            | PointerEvent::Up { id, .. }
            | PointerEvent::Cancelled { id } => *id,
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Moved { position, .. }
            | PointerEvent::Up { position, .. } => Some(*position),
            PointerEvent::Cancelled { .. } => None,
        }
    }
}
