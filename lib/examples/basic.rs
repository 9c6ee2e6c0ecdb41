use anyhow::Result;
use cardtable_ocr::{Recognizer, TemplateLibrary};

fn main() -> Result<()> {
    let templates = TemplateLibrary::load("cards")?;
    let recognizer = Recognizer::new(templates);
    let result = recognizer.recognize_screenshot_from_file("screenshots/table.png")?;
    println!("Cards: {}", result);
    Ok(())
}
