//! An OCR library that reads the cards on an online card table from a screenshot
//!
//! The table renders at a fixed size, with five card slots at known pixel
//! offsets. Each slot is cropped from the screenshot and compared against a
//! library of labeled template images, using the sum of per-pixel color
//! differences as the match score. The template with the smallest difference
//! wins. A probe pixel decides up front whether the slot is empty, and whether
//! the screenshot uses the dark theme, which renders cards at half brightness.
//!
//! # Basic usage
//! ```no_run
//! # use cardtable_ocr::{Recognizer, TemplateLibrary, Error};
//! let templates = TemplateLibrary::load("cards")?;
//! let recognizer = Recognizer::new(templates);
//! let result = recognizer.recognize_screenshot_from_file("screenshots/table.png")?;
//! println!("Cards: {}", result);
//! # Ok::<(), Error>(())
//! ```
//! The description concatenates the card labels in slot order. Empty slots
//! contribute nothing, so a table showing `2H 3D . . QC` reads as `2H3DQC`.

mod compare;
mod error;
mod layout;
mod recognizer;
mod utils;

pub use compare::{color_difference, image_difference, MAX_PIXELS};
pub use error::Error;
pub use layout::{Layout, SLOT_HEIGHT, SLOT_WIDTH, SLOT_X, SLOT_Y};
pub use recognizer::{Recognition, Recognizer, SlotMatch, TemplateLibrary};
pub use utils::save_templates;
