use anyhow::{Context, Result};
use cardtable_ocr::{Recognizer, TemplateLibrary};
use std::time::Instant;
use std::{fs, io};

/// Print the cards shown in every screenshot of a directory, one line per
/// screenshot. A screenshot that fails to decode or recognize is skipped
/// with a note on stderr.
fn run() -> Result<()> {
    env_logger::init();
    let dir = std::env::args()
        .nth(1)
        .context("Usage: recognize SCREENSHOT_DIR")?;
    let templates = TemplateLibrary::load("cards").context("Failed to load templates")?;
    let recognizer = Recognizer::new(templates);

    let mut entries = fs::read_dir(&dir)?
        .map(|res| res.map(|e| e.path()))
        .collect::<Result<Vec<_>, io::Error>>()?;
    entries.sort();
    for path in entries {
        let name = path.file_name().unwrap_or_default().to_string_lossy().into_owned();
        let t0 = Instant::now();
        match recognizer.recognize_screenshot_from_file(&path.to_string_lossy()) {
            Ok(result) => println!("{} - {} ({:?})", name, result, t0.elapsed()),
            Err(err) => eprintln!("{}: {}", name, err),
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
