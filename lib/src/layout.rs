use crate::error::Error;
use image::math::Rect;
use image::{GenericImageView, RgbImage};

/// The `x` offset of each card slot, in slot order.
pub const SLOT_X: [u32; 5] = [147, 219, 290, 362, 434];
/// The `y` offset shared by all card slots.
pub const SLOT_Y: u32 = 589;
/// Width of a card slot.
pub const SLOT_WIDTH: u32 = 56;
/// Height of a card slot.
pub const SLOT_HEIGHT: u32 = 80;

/// The layout of the card table window.
///
/// The table renders at a fixed size, so there is nothing to detect: the five
/// card slots sit at the same pixel offsets in every screenshot.
pub struct Layout {
    /// The bounding rect of each card slot, in slot order
    pub slots: [Rect; 5],
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new()
    }
}

impl Layout {
    pub fn new() -> Layout {
        let slots = SLOT_X.map(|x| Rect {
            x,
            y: SLOT_Y,
            width: SLOT_WIDTH,
            height: SLOT_HEIGHT,
        });
        Layout { slots }
    }
}

/// Crop one card slot out of a screenshot.
///
/// # Errors
/// [Error::SlotOutOfBounds] if the slot does not fit inside the screenshot.
pub(crate) fn crop(screenshot: &RgbImage, slot: Rect) -> Result<RgbImage, Error> {
    let (width, height) = screenshot.dimensions();
    if slot.x + slot.width > width || slot.y + slot.height > height {
        return Err(Error::SlotOutOfBounds(slot));
    }
    Ok(screenshot
        .view(slot.x, slot.y, slot.width, slot.height)
        .to_image())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_share_row_and_size() {
        let layout = Layout::new();
        for (slot, &x) in layout.slots.iter().zip(SLOT_X.iter()) {
            assert_eq!((slot.x, slot.y), (x, SLOT_Y));
            assert_eq!((slot.width, slot.height), (SLOT_WIDTH, SLOT_HEIGHT));
        }
    }

    #[test]
    fn crop_rejects_undersized_screenshots() {
        let img = RgbImage::new(100, 100);
        let layout = Layout::new();
        let err = crop(&img, layout.slots[0]).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfBounds(_)));
    }

    #[test]
    fn crop_copies_the_slot_area() {
        let layout = Layout::new();
        let img = RgbImage::new(600, 700);
        let tile = crop(&img, layout.slots[4]).unwrap();
        assert_eq!(tile.dimensions(), (SLOT_WIDTH, SLOT_HEIGHT));
    }
}
