//! Lookup into the embedded TTS backend reference.

use crate::adapters::embedded_assets::{BACKENDS_REFERENCE, asset_content};
use crate::domain::AppError;

const SECTION_PREFIX: &str = "## ";

/// Whole reference document.
pub fn reference() -> Result<&'static str, AppError> {
    asset_content(BACKENDS_REFERENCE)
}

/// Backend names, in document order.
pub fn list() -> Result<Vec<String>, AppError> {
    Ok(section_names(reference()?))
}

/// The reference section for one backend, heading included.
pub fn show(name: &str) -> Result<String, AppError> {
    let document = reference()?;
    section(document, name).ok_or_else(|| AppError::BackendNotFound {
        name: name.to_string(),
        available: section_names(document).join(", "),
    })
}

fn section_names(document: &str) -> Vec<String> {
    document
        .lines()
        .filter_map(|line| line.strip_prefix(SECTION_PREFIX))
        .map(|name| name.trim().to_string())
        .collect()
}

fn section(document: &str, name: &str) -> Option<String> {
    let mut lines = document.lines().skip_while(|line| {
        line.strip_prefix(SECTION_PREFIX).is_none_or(|heading| heading.trim() != name)
    });
    let heading = lines.next()?;
    let body: Vec<&str> = lines.take_while(|line| !line.starts_with(SECTION_PREFIX)).collect();

    let mut text = std::iter::once(heading).chain(body).collect::<Vec<_>>().join("\n");
    text.truncate(text.trim_end().len());
    Some(text)
}
