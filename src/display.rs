use crate::constants::{CAPTION, DEFAULT_OUTPUT_STEM};
use crate::error::{GenerationError, Result};
use crate::images::GeneratedIllustration;
use colored::Colorize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Shows the outcome of a generation: the saved image with its caption, or
/// the error message.
pub fn present(outcome: Result<GeneratedIllustration>, output: Option<&Path>) -> Result<PathBuf> {
    let saved = outcome.and_then(|illustration| {
        let path = save_illustration(&illustration, output)?;
        Ok((illustration, path))
    });

    match saved {
        Ok((illustration, path)) => {
            println!("{}", render_caption(&illustration, &path));
            Ok(path)
        }
        Err(e) => {
            report_error(&e);
            Err(e)
        }
    }
}

pub fn save_illustration(
    illustration: &GeneratedIllustration,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = output.map(Path::to_path_buf).unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}.{}",
            DEFAULT_OUTPUT_STEM,
            illustration.format.extension()
        ))
    });
    fs::write(&path, &illustration.image_bytes)?;
    Ok(path)
}

pub fn render_caption(illustration: &GeneratedIllustration, path: &Path) -> String {
    format!(
        "{} {} ({}, {} bytes, {})",
        CAPTION.bold().green(),
        path.display().to_string().cyan(),
        illustration.format.extension(),
        illustration.image_bytes.len(),
        illustration.model
    )
}

pub fn error_message(error: &GenerationError) -> String {
    format!("{}: {}", error.kind(), error)
}

pub fn report_error(error: &GenerationError) {
    eprintln!("{}", error_message(error).red());
}
