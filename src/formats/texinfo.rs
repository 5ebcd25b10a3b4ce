//! Texinfo references: `@uref{uri, description}` or `@uref{uri}`

use super::LinkFormatter;
use crate::context::ExportContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct TexinfoFormatter;

impl LinkFormatter for TexinfoFormatter {
    fn name(&self) -> &str {
        "texinfo"
    }

    fn render(&self, uri: &str, description: Option<&str>, _ctx: &ExportContext) -> String {
        match description {
            Some(description) => format!("@uref{{{uri}, {description}}}"),
            None => format!("@uref{{{uri}}}"),
        }
    }
}
