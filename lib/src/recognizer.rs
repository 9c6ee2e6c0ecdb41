use crate::compare::{color_close, image_difference};
use crate::error::Error;
use crate::layout::{crop, Layout};
use image::{GenericImageView, Rgb, RgbImage};
use log::debug;
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use std::{fs, io};

/// Probe pixel coordinates within a card region.
const PROBE_X: u32 = 50;
const PROBE_Y: u32 = 10;
/// Background color of an empty card slot.
const EMPTY_SLOT: Rgb<u8> = Rgb([0x2a, 0x2a, 0x2a]);
/// Card back color of the dark theme.
const DARK_THEME: Rgb<u8> = Rgb([0x78, 0x78, 0x78]);

/// A library of labeled card template images.
///
/// Templates are keyed by label, and registration order is preserved: when
/// two templates match a region equally well, the one registered first wins.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary(Vec<(String, RgbImage)>);

impl Deref for TemplateLibrary {
    type Target = [(String, RgbImage)];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TemplateLibrary {
    pub fn new() -> TemplateLibrary {
        TemplateLibrary(Vec::new())
    }

    /// Load every image in `dir` as a template, labeled with its file name
    /// minus the extension. Entries are registered in file name order, so the
    /// tie-break between equally good templates is stable across runs.
    ///
    /// # Errors
    /// Fails if the directory can not be read or any file in it can not be
    /// decoded. No partial library is built.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<TemplateLibrary, Error> {
        let mut entries = fs::read_dir(dir)?
            .map(|res| res.map(|e| e.path()))
            .collect::<Result<Vec<_>, io::Error>>()?;
        entries.sort();
        let mut library = TemplateLibrary::new();
        for path in entries {
            if let Some(stem) = path.file_stem() {
                let label = stem.to_string_lossy().into_owned();
                let image = image::open(&path)
                    .map_err(|source| Error::ImageError {
                        path: path.display().to_string(),
                        source,
                    })?
                    .into_rgb8();
                debug!("template {}: {}x{}", label, image.width(), image.height());
                library.register(label, image);
            }
        }
        Ok(library)
    }

    /// Register a template. A label that is already present has its image
    /// replaced, keeping its original position in the tie-break order.
    pub fn register<S: Into<String>>(&mut self, label: S, image: RgbImage) {
        let label = label.into();
        match self.0.iter().position(|(l, _)| *l == label) {
            Some(i) => self.0[i].1 = image,
            None => self.0.push((label, image)),
        }
    }
}

/// Match details for a single card slot.
#[derive(Debug, Clone)]
pub struct SlotMatch {
    /// The slot index (0..5, left to right)
    pub index: usize,
    /// The label of the best matching template
    pub label: String,
    /// The image difference of the best match
    pub difference: u64,
}

/// Holds the result of [Recognizer::recognize_screenshot]: the concatenated
/// card labels plus per-slot match details.
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Card labels in slot order. Empty slots contribute nothing.
    pub description: String,
    /// Match details for the slots that held a card
    pub slots: Vec<SlotMatch>,
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Card table recognizer
pub struct Recognizer {
    pub templates: TemplateLibrary,
    layout: Layout,
}

impl Recognizer {
    pub fn new(templates: TemplateLibrary) -> Recognizer {
        Recognizer {
            templates,
            layout: Layout::new(),
        }
    }

    /// Classify a single card region.
    ///
    /// Returns the label of the closest template, or an empty string if the
    /// slot shows no card. The theme variant is inferred from a probe pixel:
    /// dark theme samples are matched against brightness-halved templates.
    ///
    /// # Errors
    /// * [Error::ProbeOutOfBounds] if `region` does not contain the probe pixel
    /// * Any error from [image_difference], in particular when a template
    ///   does not have the region's dimensions
    pub fn classify(&self, region: &RgbImage) -> Result<String, Error> {
        let matched = self.match_region(region)?;
        Ok(matched.map_or_else(String::new, |(label, _)| label))
    }

    /// Match a region against the template library. Returns `None` for an
    /// empty slot, or when the library is empty.
    fn match_region(&self, region: &RgbImage) -> Result<Option<(String, u64)>, Error> {
        if !region.in_bounds(PROBE_X, PROBE_Y) {
            return Err(Error::ProbeOutOfBounds(PROBE_X, PROBE_Y));
        }
        let probe = *region.get_pixel(PROBE_X, PROBE_Y);
        if color_close(EMPTY_SLOT, probe) {
            return Ok(None);
        }
        let is_dark = color_close(DARK_THEME, probe);
        debug!("probe {:?} dark: {}", probe, is_dark);

        let mut best: Option<(&String, u64)> = None;
        for (label, template) in self.templates.iter() {
            let difference = image_difference(region, template, is_dark)?;
            if best.map_or(true, |(_, min)| difference < min) {
                best = Some((label, difference));
            }
        }
        Ok(best.map(|(label, difference)| (label.clone(), difference)))
    }

    /// Recognize a card table screenshot.
    ///
    /// Crops the five card slots at their fixed offsets and classifies each
    /// one. The description concatenates the labels in slot order, with
    /// nothing inserted for empty slots.
    ///
    /// # Errors
    /// * [Error::SlotOutOfBounds] if the screenshot is smaller than the table
    /// * Any error from [Recognizer::classify]; a failure in one slot fails
    ///   the whole screenshot
    pub fn recognize_screenshot(&self, screenshot: &RgbImage) -> Result<Recognition, Error> {
        let mut description = String::new();
        let mut slots = Vec::new();
        for (index, &slot) in self.layout.slots.iter().enumerate() {
            let region = crop(screenshot, slot)?;
            if let Some((label, difference)) = self.match_region(&region)? {
                description.push_str(&label);
                slots.push(SlotMatch {
                    index,
                    label,
                    difference,
                });
            }
        }
        Ok(Recognition { description, slots })
    }

    pub fn recognize_screenshot_from_file(
        &self,
        screenshot_path: &str,
    ) -> Result<Recognition, Error> {
        let rgb = image::open(&screenshot_path)?.into_rgb8();
        self.recognize_screenshot(&rgb)
    }

    pub fn recognize_screenshot_from_memory(&self, screenshot: &[u8]) -> Result<Recognition, Error> {
        let rgb = image::load_from_memory(screenshot)?.into_rgb8();
        self.recognize_screenshot(&rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(color: Rgb<u8>) -> RgbImage {
        RgbImage::from_pixel(56, 80, color)
    }

    #[test]
    fn empty_slot_skips_the_template_scan() {
        let mut templates = TemplateLibrary::new();
        // even a perfect match does not win against the empty check
        templates.register("AS", region(EMPTY_SLOT));
        let recognizer = Recognizer::new(templates);
        let label = recognizer.classify(&region(EMPTY_SLOT)).unwrap();
        assert_eq!(label, "");
    }

    #[test]
    fn empty_library_yields_empty_label() {
        let recognizer = Recognizer::new(TemplateLibrary::new());
        let label = recognizer.classify(&region(Rgb([255, 255, 255]))).unwrap();
        assert_eq!(label, "");
    }

    #[test]
    fn register_replaces_existing_label_in_place() {
        let mut templates = TemplateLibrary::new();
        templates.register("AS", region(Rgb([1, 1, 1])));
        templates.register("KH", region(Rgb([2, 2, 2])));
        templates.register("AS", region(Rgb([3, 3, 3])));
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].0, "AS");
        assert_eq!(*templates[0].1.get_pixel(0, 0), Rgb([3, 3, 3]));
    }

    #[test]
    fn probe_must_be_inside_the_region() {
        let recognizer = Recognizer::new(TemplateLibrary::new());
        let err = recognizer.classify(&RgbImage::new(10, 10)).unwrap_err();
        assert!(matches!(err, Error::ProbeOutOfBounds(..)));
    }
}
