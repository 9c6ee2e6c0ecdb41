use image::math::Rect;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Sample and template dimensions differ
    #[error("image sizes must be equal: {0}x{1} vs {2}x{3}")]
    SizeMismatch(u32, u32, u32, u32),
    /// Cap against comparing pathologically large images
    #[error("image size {0}x{1} is too large")]
    ImageTooLarge(u32, u32),
    /// The screenshot is smaller than the fixed table layout
    #[error("card slot {0:?} is outside the screenshot bounds")]
    SlotOutOfBounds(Rect),
    /// The card region does not contain the probe pixel
    #[error("probe pixel ({0}, {1}) is outside the card region")]
    ProbeOutOfBounds(u32, u32),
    /// Error reading the template directory
    #[error("Template could not be read")]
    TemplateReadError(#[from] io::Error),
    /// Error decoding a template image
    #[error("Image {path} could not be decoded")]
    ImageError {
        path: String,
        source: image::error::ImageError,
    },
    /// Error decoding a screenshot
    #[error("Screenshot could not be decoded")]
    DecodeError(#[from] image::error::ImageError),
}
