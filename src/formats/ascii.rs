//! Plain-text links
//!
//! A described link reads `[description] (<uri>)`. When the export collects links
//! as notes (`links_to_notes`), the uri is printed elsewhere and only
//! `[description]` remains. An undescribed link is just `<uri>`.

use super::LinkFormatter;
use crate::context::ExportContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl LinkFormatter for AsciiFormatter {
    fn name(&self) -> &str {
        "ascii"
    }

    fn render(&self, uri: &str, description: Option<&str>, ctx: &ExportContext) -> String {
        match description {
            Some(description) if ctx.links_to_notes => format!("[{description}]"),
            Some(description) => format!("[{description}] (<{uri}>)"),
            None => format!("<{uri}>"),
        }
    }
}
