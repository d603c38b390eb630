use std::fmt;
use std::rc::Rc;

use crate::region::DraggableRegion;

/// Callback receiving the region that triggered it.
pub type DragCallback = Rc<dyn Fn(&DraggableRegion)>;

/// Lifecycle points a consumer can hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragHook {
    Tap,
    DragBegin,
    DragChange,
    DragEnd,
}

/// Optional consumer callbacks. Unset hooks are skipped.
#[derive(Clone, Default)]
pub struct DragCallbacks {
    pub on_tap: Option<DragCallback>,
    pub on_drag_begin: Option<DragCallback>,
    pub on_drag_change: Option<DragCallback>,
    pub on_drag_end: Option<DragCallback>,
}

impl DragCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hook: DragHook) -> Option<&DragCallback> {
        match hook {
            DragHook::Tap => self.on_tap.as_ref(),
            DragHook::DragBegin => self.on_drag_begin.as_ref(),
            DragHook::DragChange => self.on_drag_change.as_ref(),
            DragHook::DragEnd => self.on_drag_end.as_ref(),
        }
    }

    pub fn set(&mut self, hook: DragHook, callback: Option<DragCallback>) {
        let slot = match hook {
            DragHook::Tap => &mut self.on_tap,
            DragHook::DragBegin => &mut self.on_drag_begin,
            DragHook::DragChange => &mut self.on_drag_change,
            DragHook::DragEnd => &mut self.on_drag_end,
        };
        *slot = callback;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_tap", &self.on_tap.is_some())
            .field("on_drag_begin", &self.on_drag_begin.is_some())
            .field("on_drag_change", &self.on_drag_change.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}
