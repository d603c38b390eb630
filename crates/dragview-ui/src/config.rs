//! Configuration for draggable regions.

use dragview_core::geometry::Rect;
use dragview_core::math::Vec2;

use crate::error::{DragError, DragResult};

/// Axes along which a drag may move the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragAxis {
    /// Both components of the translation apply.
    #[default]
    Any,
    /// Only x moves; y is forced to zero.
    Horizontal,
    /// Only y moves; x is forced to zero.
    Vertical,
}

impl DragAxis {
    /// Zero out the translation components this axis does not allow.
    pub fn mask(self, delta: Vec2) -> Vec2 {
        match self {
            DragAxis::Any => delta,
            DragAxis::Horizontal => Vec2::new(delta.x, 0.0),
            DragAxis::Vertical => Vec2::new(0.0, delta.y),
        }
    }

    pub fn allows_x(self) -> bool {
        self != DragAxis::Vertical
    }

    pub fn allows_y(self) -> bool {
        self != DragAxis::Horizontal
    }
}

/// Behavior flags of a draggable region.
///
/// Every field is read on each drag update and drag end, so changes take
/// effect on the next gesture event.
#[derive(Debug, Clone, PartialEq)]
pub struct DragConfig {
    /// Whether gestures move the region at all.
    pub drag_enabled: bool,
    /// Allowed movement axis.
    pub axis: DragAxis,
    /// Region the view may move in. `None` or an all-zero rect means the parent's bounds.
    pub free_rect: Option<Rect<f32>>,
    /// Snap horizontally to the nearest edge of the free region on release.
    pub snap_to_edge: bool,
    /// Pull the region back whenever it pokes out of the free region mid-drag.
    pub forbid_escape_free_rect: bool,
    /// The parent shows a navigation bar that the region must stay below.
    pub has_nav_bar: bool,
    /// Keep the region out of the status bar area.
    pub forbid_status_bar_overlap: bool,
    /// The parent covers the whole screen, so device chrome insets apply.
    pub parent_is_full_screen: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        DragConfig {
            drag_enabled: true,
            axis: DragAxis::Any,
            free_rect: None,
            snap_to_edge: false,
            forbid_escape_free_rect: true,
            has_nav_bar: true,
            forbid_status_bar_overlap: false,
            parent_is_full_screen: false,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    pub fn with_axis(mut self, axis: DragAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_free_rect(mut self, free_rect: Rect<f32>) -> Self {
        self.free_rect = Some(free_rect);
        self
    }

    pub fn with_snap_to_edge(mut self, snap: bool) -> Self {
        self.snap_to_edge = snap;
        self
    }

    pub fn with_forbid_escape_free_rect(mut self, forbid: bool) -> Self {
        self.forbid_escape_free_rect = forbid;
        self
    }

    pub fn with_nav_bar(mut self, has_nav_bar: bool) -> Self {
        self.has_nav_bar = has_nav_bar;
        self
    }

    pub fn with_forbid_status_bar_overlap(mut self, forbid: bool) -> Self {
        self.forbid_status_bar_overlap = forbid;
        self
    }

    pub fn with_parent_full_screen(mut self, full_screen: bool) -> Self {
        self.parent_is_full_screen = full_screen;
        self
    }

    /// Check the free region, if one is set.
    pub fn validate(&self) -> DragResult<()> {
        if let Some(rect) = self.free_rect {
            rect.validated()?;
        }
        Ok(())
    }

    /// The configured free region, treating an all-zero or invalid rect as unset.
    pub fn explicit_free_rect(&self) -> Option<Rect<f32>> {
        self.free_rect
            .filter(|rect| !rect.is_zero())
            .and_then(|rect| rect.validated().ok())
    }
}

/// Screen class used to pick chrome inset presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Rectangular screen without a sensor housing.
    #[default]
    Classic,
    /// Screen with a notch or island and a home indicator.
    Notched,
}

/// Heights reserved by device chrome, in logical pixels.
///
/// These are display metrics supplied by the host; the region only compares
/// against them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeInsets {
    pub status_bar: f32,
    pub nav_bar: f32,
    pub bottom_safe_area: f32,
}

impl ChromeInsets {
    pub const CLASSIC: Self = ChromeInsets {
        status_bar: 20.0,
        nav_bar: 64.0,
        bottom_safe_area: 0.0,
    };

    pub const NOTCHED: Self = ChromeInsets {
        status_bar: 44.0,
        nav_bar: 88.0,
        bottom_safe_area: 34.0,
    };

    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Classic => Self::CLASSIC,
            DeviceClass::Notched => Self::NOTCHED,
        }
    }

    pub fn validate(&self) -> DragResult<()> {
        for (name, value) in [
            ("status bar", self.status_bar),
            ("nav bar", self.nav_bar),
            ("bottom safe area", self.bottom_safe_area),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DragError::InvalidInsets { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ChromeInsets {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DragConfig::default();
        assert!(config.drag_enabled);
        assert_eq!(config.axis, DragAxis::Any);
        assert_eq!(config.free_rect, None);
        assert!(!config.snap_to_edge);
        assert!(config.forbid_escape_free_rect);
        assert!(config.has_nav_bar);
        assert!(!config.forbid_status_bar_overlap);
        assert!(!config.parent_is_full_screen);
    }

    #[test]
    fn test_axis_mask() {
        let delta = Vec2::new(3.0, -4.0);
        assert_eq!(DragAxis::Any.mask(delta), delta);
        assert_eq!(DragAxis::Horizontal.mask(delta), Vec2::new(3.0, 0.0));
        assert_eq!(DragAxis::Vertical.mask(delta), Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_zero_free_rect_counts_as_unset() {
        let config = DragConfig::new().with_free_rect(Rect::ZERO);
        assert_eq!(config.explicit_free_rect(), None);

        let rect = Rect::new(0.0, 64.0, 320.0, 400.0);
        let config = DragConfig::new().with_free_rect(rect);
        assert_eq!(config.explicit_free_rect(), Some(rect));
    }

    #[test]
    fn test_invalid_free_rect_is_not_explicit() {
        let config = DragConfig::new().with_free_rect(Rect::new(0.0, 0.0, -50.0, f32::NAN));
        assert_eq!(config.explicit_free_rect(), None);
        assert!(DragAxis::Horizontal.allows_x() && !DragAxis::Horizontal.allows_y());
        assert!(!DragAxis::Vertical.allows_x() && DragAxis::Vertical.allows_y());
    }

    #[test]
    fn test_validate_rejects_negative_free_rect() {
        let config = DragConfig::new().with_free_rect(Rect::new(0.0, 0.0, -10.0, 10.0));
        assert!(matches!(
            config.validate(),
            Err(DragError::InvalidFreeRect(_))
        ));
    }

    #[test]
    fn test_inset_presets() {
        assert_eq!(ChromeInsets::for_device(DeviceClass::Notched).bottom_safe_area, 34.0);
        assert!(ChromeInsets::default().validate().is_ok());
        let bad = ChromeInsets {
            nav_bar: f32::NAN,
            ..ChromeInsets::CLASSIC
        };
        assert!(matches!(
            bad.validate(),
            Err(DragError::InvalidInsets { name: "nav bar", .. })
        ));
    }
}
