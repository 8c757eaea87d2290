//! Re-indenting whole documents.

use crate::markup::error::MarkupError;
use crate::markup::parser::parse_project;
use crate::markup::writer::write_project;

/// Re-indent a project document with `indent` spaces per level.
///
/// The document is parsed and written back, so it must be valid. Attribute
/// text is kept as written; comments and whitespace between tags are not.
pub fn format_markup(text: &str, indent: usize) -> Result<String, MarkupError> {
    let project = parse_project(text)?;
    Ok(write_project(&project, indent))
}
