//! Markdown links: `[description](uri)`

use super::LinkFormatter;
use crate::context::ExportContext;

/// Renders inline markdown links. A missing description is replaced by the uri.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl LinkFormatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn render(&self, uri: &str, description: Option<&str>, _ctx: &ExportContext) -> String {
        let description = description.unwrap_or(uri);
        format!("[{description}]({uri})")
    }
}
