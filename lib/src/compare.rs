use crate::error::Error;
use image::{Rgb, RgbImage};

/// Upper bound on the pixel count of compared images.
pub const MAX_PIXELS: u64 = 1_000_000;

/// Colors closer than this count as the same for probing.
const CLOSE: u32 = 30;

/// Sum of the absolute per-channel differences between a sample color and a
/// template color.
///
/// Dark theme screenshots render the cards at roughly half brightness, so
/// when `sample_is_dark` is set every template channel is halved (truncating
/// integer division) before comparison. The adjustment is one-directional:
/// the sample channels are always taken as captured.
pub fn color_difference(sample: Rgb<u8>, template: Rgb<u8>, sample_is_dark: bool) -> u32 {
    let divisor = if sample_is_dark { 2 } else { 1 };
    sample
        .0
        .iter()
        .zip(template.0.iter())
        .map(|(&s, &t)| (s as i32 - t as i32 / divisor).abs() as u32)
        .sum()
}

/// True if the two colors are close enough to count as the same probe color.
/// Probing always compares at full brightness.
pub(crate) fn color_close(src: Rgb<u8>, dst: Rgb<u8>) -> bool {
    color_difference(src, dst, false) < CLOSE
}

/// Sum [color_difference] over every pixel of `sample` and `template`.
///
/// # Errors
/// * [Error::SizeMismatch] if the images do not have the same dimensions
/// * [Error::ImageTooLarge] if the images hold more than [MAX_PIXELS] pixels
pub fn image_difference(
    sample: &RgbImage,
    template: &RgbImage,
    sample_is_dark: bool,
) -> Result<u64, Error> {
    let (width, height) = sample.dimensions();
    if (width, height) != template.dimensions() {
        let (tw, th) = template.dimensions();
        return Err(Error::SizeMismatch(width, height, tw, th));
    }
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(Error::ImageTooLarge(width, height));
    }
    let mut difference = 0u64;
    for (sample, template) in sample.pixels().zip(template.pixels()) {
        difference += color_difference(*sample, *template, sample_is_dark) as u64;
    }
    Ok(difference)
}
