use anyhow::{Context, Result};
use cardtable_ocr::save_templates;

/// Save the card slots of a screenshot of known cards as template images,
/// e.g. `harvest table.png 2H 3D KS AS QC`. Use an empty label ("") to skip
/// a slot.
fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().context("Usage: harvest SCREENSHOT LABEL...")?;
    let labels: Vec<String> = args.collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

    let rgb = image::open(&path)
        .with_context(|| format!("Failed to open {}", path))?
        .into_rgb8();
    std::fs::create_dir_all("cards")?;
    save_templates("cards", &rgb, &labels)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
