//! HTML anchors: `<a href="uri">description</a>`

use super::LinkFormatter;
use crate::context::ExportContext;

/// Renders an anchor element. A missing description is replaced by the uri.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl LinkFormatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn render(&self, uri: &str, description: Option<&str>, _ctx: &ExportContext) -> String {
        let description = description.unwrap_or(uri);
        format!("<a href=\"{uri}\">{description}</a>")
    }
}
