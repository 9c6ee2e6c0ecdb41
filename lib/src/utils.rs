use crate::error::Error;
use crate::layout::{crop, Layout};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Save the card slots of a screenshot as template images.
///
/// Intended for harvesting templates from a screenshot of known cards: each
/// slot is cropped and saved to `savedir` as `{label}.png`. Slots with an
/// empty label are skipped, as are labels that already have a template file.
pub fn save_templates<P: AsRef<Path>>(
    savedir: P,
    screenshot: &RgbImage,
    labels: &[&str],
) -> Result<(), Error> {
    let layout = Layout::new();
    for (&slot, &label) in layout.slots.iter().zip(labels.iter()) {
        if label.is_empty() {
            continue;
        }
        let mut path = PathBuf::new();
        path.push(savedir.as_ref());
        path.push(format!("{}.png", label));
        if path.exists() {
            continue;
        }
        let tile = crop(screenshot, slot)?;
        tile.save(&path).map_err(|source| Error::ImageError {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::fs;

    #[test]
    fn saves_labeled_slots_and_skips_empty_labels() {
        let dir = tempfile::tempdir().unwrap();
        let screenshot = RgbImage::from_pixel(600, 700, Rgb([100, 100, 100]));
        save_templates(dir.path(), &screenshot, &["AS", "", "KH", "", ""]).unwrap();
        assert!(dir.path().join("AS.png").exists());
        assert!(dir.path().join("KH.png").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn existing_templates_are_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let screenshot = RgbImage::from_pixel(600, 700, Rgb([100, 100, 100]));
        fs::write(dir.path().join("AS.png"), b"keep me").unwrap();
        save_templates(dir.path(), &screenshot, &["AS", "", "", "", ""]).unwrap();
        assert_eq!(fs::read(dir.path().join("AS.png")).unwrap(), b"keep me");
    }
}
