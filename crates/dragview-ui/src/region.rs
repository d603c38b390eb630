//! The draggable region component.

use std::rc::Rc;

use dragview_core::geometry::{Rect, Size};
use dragview_core::math::Vec2;
use dragview_core::profiling::profile_function;
use dragview_input::{GestureEvent, HandleStatus};

use crate::callbacks::{DragCallbacks, DragHook};
use crate::config::{ChromeInsets, DragAxis, DragConfig};
use crate::error::DragResult;
use crate::guard;
use crate::host::ViewHost;
use crate::slots::{ButtonSlot, DecorativeSlots, ImageSlot};
use crate::snap;

/// State of one pan, from `Begin` to `End`/`Cancel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    origin: Vec2,
    consumed: Vec2,
    ticks: u32,
}

impl DragSession {
    fn new(origin: Vec2) -> Self {
        Self {
            origin,
            consumed: Vec2::ZERO,
            ticks: 0,
        }
    }

    /// Pointer position where the pan was recognized.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Number of `Change` events handled so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Translation not yet applied, then mark all of `translation` as consumed.
    fn take_delta(&mut self, translation: Vec2) -> Vec2 {
        let delta = translation - self.consumed;
        self.consumed = translation;
        self.ticks += 1;
        delta
    }
}

/// A view that follows a single pointer around its parent.
///
/// The region keeps no geometry of its own: the [`ViewHost`] passed to
/// [`handle_gesture`](Self::handle_gesture) owns the frame.
///
/// ```
/// use dragview_core::geometry::Rect;
/// use dragview_core::math::Vec2;
/// use dragview_input::GestureEvent;
/// use dragview_ui::{DragConfig, DraggableRegion, SimulatedHost, ViewHost};
///
/// let host = SimulatedHost::new(Rect::new(10.0, 100.0, 50.0, 50.0));
/// let mut region = DraggableRegion::new(DragConfig::new().with_snap_to_edge(true));
/// region.attach(Rect::new(0.0, 0.0, 320.0, 568.0));
///
/// region.handle_gesture(GestureEvent::Begin { origin: Vec2::new(30.0, 120.0) }, &host);
/// region.handle_gesture(GestureEvent::Change { translation: Vec2::new(40.0, 0.0) }, &host);
/// region.handle_gesture(GestureEvent::End, &host);
///
/// assert_eq!(host.frame(), Rect::new(0.0, 100.0, 50.0, 50.0));
/// ```
#[derive(Debug, Default)]
pub struct DraggableRegion {
    config: DragConfig,
    insets: ChromeInsets,
    callbacks: DragCallbacks,
    slots: DecorativeSlots,
    session: Option<DragSession>,
    parent_bounds: Option<Rect<f32>>,
}

impl DraggableRegion {
    /// Create a region. An invalid free rect in `config` is dropped with a warning.
    pub fn new(mut config: DragConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!("Ignoring free rect {:?}: {}", config.free_rect, err);
            config.free_rect = None;
        }
        Self {
            config,
            ..Default::default()
        }
    }

    /// Like [`new`](Self::new), rejecting an invalid free region.
    pub fn try_new(config: DragConfig) -> DragResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_insets(mut self, insets: ChromeInsets) -> DragResult<Self> {
        self.set_insets(insets)?;
        Ok(self)
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DragConfig) -> DragResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn insets(&self) -> &ChromeInsets {
        &self.insets
    }

    pub fn set_insets(&mut self, insets: ChromeInsets) -> DragResult<()> {
        insets.validate()?;
        self.insets = insets;
        Ok(())
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.config.drag_enabled = enabled;
    }

    pub fn set_axis(&mut self, axis: DragAxis) {
        self.config.axis = axis;
    }

    /// Restrict movement to `rect`. An all-zero rect restores the parent bounds.
    pub fn set_free_rect(&mut self, rect: Rect<f32>) -> DragResult<()> {
        self.config.free_rect = Some(rect.validated()?);
        Ok(())
    }

    pub fn clear_free_rect(&mut self) {
        self.config.free_rect = None;
    }

    pub fn set_snap_to_edge(&mut self, snap: bool) {
        self.config.snap_to_edge = snap;
    }

    pub fn set_forbid_escape_free_rect(&mut self, forbid: bool) {
        self.config.forbid_escape_free_rect = forbid;
    }

    pub fn set_has_nav_bar(&mut self, has_nav_bar: bool) {
        self.config.has_nav_bar = has_nav_bar;
    }

    pub fn set_forbid_status_bar_overlap(&mut self, forbid: bool) {
        self.config.forbid_status_bar_overlap = forbid;
    }

    pub fn set_parent_full_screen(&mut self, full_screen: bool) {
        self.config.parent_is_full_screen = full_screen;
    }

    // Callbacks

    pub fn callbacks(&self) -> &DragCallbacks {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut DragCallbacks {
        &mut self.callbacks
    }

    pub fn on_tap<F>(&mut self, callback: F)
    where
        F: Fn(&DraggableRegion) + 'static,
    {
        self.callbacks.on_tap = Some(Rc::new(callback));
    }

    pub fn on_drag_begin<F>(&mut self, callback: F)
    where
        F: Fn(&DraggableRegion) + 'static,
    {
        self.callbacks.on_drag_begin = Some(Rc::new(callback));
    }

    pub fn on_drag_change<F>(&mut self, callback: F)
    where
        F: Fn(&DraggableRegion) + 'static,
    {
        self.callbacks.on_drag_change = Some(Rc::new(callback));
    }

    pub fn on_drag_end<F>(&mut self, callback: F)
    where
        F: Fn(&DraggableRegion) + 'static,
    {
        self.callbacks.on_drag_end = Some(Rc::new(callback));
    }

    fn fire(&self, hook: DragHook) {
        if let Some(callback) = self.callbacks.get(hook).cloned() {
            tracing::trace!("Invoking {:?} callback", hook);
            callback(self);
        }
    }

    // Slots

    pub fn image_slot(&mut self) -> &mut ImageSlot {
        self.slots.image_mut()
    }

    pub fn button_slot(&mut self) -> &mut ButtonSlot {
        self.slots.button_mut()
    }

    pub fn slots(&self) -> &DecorativeSlots {
        &self.slots
    }

    /// Resize created slots to cover a region of `size`.
    pub fn layout_slots(&mut self, size: Size<f32>) {
        self.slots.layout(size);
    }

    // Parent lifecycle

    /// Called when the region is inserted into a parent with the given bounds.
    pub fn attach(&mut self, parent_bounds: Rect<f32>) {
        tracing::debug!("Attached to parent {:?}", parent_bounds);
        self.parent_bounds = Some(parent_bounds);
    }

    /// Called when the region leaves its parent. Ends any pan silently.
    pub fn detach(&mut self) {
        tracing::debug!("Detached from parent");
        self.parent_bounds = None;
        self.session = None;
    }

    pub fn parent_bounds_changed(&mut self, bounds: Rect<f32>) {
        if self.parent_bounds.is_some() {
            self.parent_bounds = Some(bounds);
        } else {
            tracing::debug!("Parent bounds {:?} changed while detached, ignoring", bounds);
        }
    }

    pub fn parent_bounds(&self) -> Option<Rect<f32>> {
        self.parent_bounds
    }

    /// Region the frame is kept in: the configured free rect, or else the
    /// parent's bounds at the origin. `None` while detached without a free rect.
    pub fn effective_free_rect(&self) -> Option<Rect<f32>> {
        self.config
            .explicit_free_rect()
            .or_else(|| self.parent_bounds.map(|bounds| Rect::from_size(bounds.size())))
            .and_then(|rect| rect.validated().ok())
    }

    // Gestures

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Dispatch one gesture event.
    pub fn handle_gesture<H>(&mut self, event: GestureEvent, host: &H) -> HandleStatus
    where
        H: ViewHost + ?Sized,
    {
        profile_function!();
        match event {
            GestureEvent::Tap { .. } => {
                self.fire(DragHook::Tap);
                HandleStatus::consumed()
            }
            GestureEvent::Begin { origin } => self.begin_drag(origin, host),
            GestureEvent::Change { translation } => self.update_drag(translation, host),
            GestureEvent::End | GestureEvent::Cancel => self.end_drag(host),
        }
    }

    fn begin_drag<H: ViewHost + ?Sized>(&mut self, origin: Vec2, host: &H) -> HandleStatus {
        self.session = None;
        if !self.config.drag_enabled {
            tracing::trace!("Drag disabled, ignoring pan");
            return HandleStatus::ignored();
        }

        host.cancel_frame_animations();
        self.fire(DragHook::DragBegin);
        self.session = Some(DragSession::new(origin));
        tracing::debug!("Drag began at {:?}", origin);
        HandleStatus::consumed()
    }

    fn update_drag<H: ViewHost + ?Sized>(&mut self, translation: Vec2, host: &H) -> HandleStatus {
        if self.session.is_none() || !self.config.drag_enabled {
            return HandleStatus::ignored();
        }

        self.fire(DragHook::DragChange);

        let Some(session) = self.session.as_mut() else {
            return HandleStatus::ignored();
        };
        let delta = self.config.axis.mask(session.take_delta(translation));
        let frame = host.frame();

        if let Some(free) = self.effective_free_rect() {
            if let Some(correction) = guard::evaluate(frame, free, &self.config, &self.insets) {
                tracing::debug!(
                    "Escape guard {:?} fired, moving {:?} -> {:?}",
                    correction.rule,
                    frame,
                    correction.target
                );
                host.animate_frame(&correction.intent());
                return HandleStatus::consumed();
            }
        }

        let moved = Rect::from_center(frame.center() + delta, frame.size());
        tracing::trace!("Drag moved by {:?} to {:?}", delta, moved);
        host.set_frame(moved);
        HandleStatus::consumed()
    }

    fn end_drag<H: ViewHost + ?Sized>(&mut self, host: &H) -> HandleStatus {
        let Some(session) = self.session.take() else {
            return HandleStatus::ignored();
        };
        if !self.config.drag_enabled {
            return HandleStatus::ignored();
        }

        self.settle(host);
        self.fire(DragHook::DragEnd);
        tracing::debug!("Drag ended after {} updates", session.ticks());
        HandleStatus::consumed()
    }

    /// Run the snap resolver against the host's current frame.
    pub fn settle<H: ViewHost + ?Sized>(&self, host: &H) {
        profile_function!();
        let Some(free) = self.effective_free_rect() else {
            tracing::debug!("No free region while detached, skipping snap");
            return;
        };

        let plan = snap::resolve(host.frame(), free, self.config.snap_to_edge);
        for intent in plan.intents() {
            tracing::debug!("Settling with {} to {:?}", intent.label, intent.target);
            host.animate_frame(intent);
        }
    }
}
