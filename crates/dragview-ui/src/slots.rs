//! Decorative children a region can show.
//!
//! Consumers usually put either an image or a button inside the region, rarely
//! both. Slots are created on first access and are resized to fill the region
//! by [`DecorativeSlots::layout`]. They take no part in dragging.

use dragview_core::geometry::{Rect, Size};

/// Image child.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    /// Asset key of the image to draw.
    pub image: Option<String>,
    pub frame: Rect<f32>,
    pub clips_to_bounds: bool,
    pub interactive: bool,
}

impl ImageSlot {
    fn new() -> Self {
        Self {
            image: None,
            frame: Rect::ZERO,
            clips_to_bounds: true,
            interactive: true,
        }
    }
}

/// Button child.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSlot {
    pub title: Option<String>,
    /// Asset key of the button image.
    pub image: Option<String>,
    pub frame: Rect<f32>,
    pub clips_to_bounds: bool,
}

impl ButtonSlot {
    fn new() -> Self {
        Self {
            title: None,
            image: None,
            frame: Rect::ZERO,
            clips_to_bounds: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorativeSlots {
    image: Option<ImageSlot>,
    button: Option<ButtonSlot>,
}

impl DecorativeSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// The image slot, created on first call.
    pub fn image_mut(&mut self) -> &mut ImageSlot {
        self.image.get_or_insert_with(ImageSlot::new)
    }

    /// The button slot, created on first call.
    pub fn button_mut(&mut self) -> &mut ButtonSlot {
        self.button.get_or_insert_with(ButtonSlot::new)
    }

    pub fn image(&self) -> Option<&ImageSlot> {
        self.image.as_ref()
    }

    pub fn button(&self) -> Option<&ButtonSlot> {
        self.button.as_ref()
    }

    /// Size every created slot to fill a region of `size`.
    pub fn layout(&mut self, size: Size<f32>) {
        let bounds = Rect::from_size(size);
        if let Some(image) = &mut self.image {
            image.frame = bounds;
        }
        if let Some(button) = &mut self.button {
            button.frame = bounds;
        }
    }
}
