//! LaTeX hyperref links
//!
//! With a description the link is `\href{uri}{description}`. Without one the
//! shorter `\url{uri}` macro is used instead of repeating the uri.

use super::LinkFormatter;
use crate::context::ExportContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct LatexFormatter;

impl LinkFormatter for LatexFormatter {
    fn name(&self) -> &str {
        "latex"
    }

    fn render(&self, uri: &str, description: Option<&str>, _ctx: &ExportContext) -> String {
        match description {
            Some(description) => format!("\\href{{{uri}}}{{{description}}}"),
            None => format!("\\url{{{uri}}}"),
        }
    }
}
