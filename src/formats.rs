//! Backend-specific link rendering
//!
//! Each recognized [`Backend`] has a `LinkFormatter` that turns a built uri and an
//! optional description into literal text for that output format. The backends
//! differ in how they handle a missing description:
//! - markdown, html and texinfo fill the description slot (or drop it) but keep
//!   the same shape
//! - latex switches to the shorter `\url{}` macro
//! - ascii prints `<uri>` instead of the `[description] (<uri>)` form
//!
//! [`render`] picks the formatter for a backend and falls back to the bare uri for
//! [`Backend::Other`].

pub mod ascii;
pub mod html;
pub mod latex;
pub mod markdown;
pub mod texinfo;

pub use ascii::AsciiFormatter;
pub use html::HtmlFormatter;
pub use latex::LatexFormatter;
pub use markdown::MarkdownFormatter;
pub use texinfo::TexinfoFormatter;

use crate::backend::Backend;
use crate::context::ExportContext;

/// Trait for link formatters
///
/// Implementors are pure: the same inputs always produce the same text.
pub trait LinkFormatter: Send + Sync {
    /// The backend tag this formatter serves (e.g., "markdown", "latex")
    fn name(&self) -> &str;

    /// Render `uri` with an optional human-readable description
    fn render(&self, uri: &str, description: Option<&str>, ctx: &ExportContext) -> String;
}

/// Render `uri` for `backend`.
///
/// Unrecognized backends get the uri back unchanged.
pub fn render(
    uri: &str,
    description: Option<&str>,
    backend: Backend,
    ctx: &ExportContext,
) -> String {
    match backend.formatter() {
        Some(formatter) => formatter.render(uri, description, ctx),
        None => uri.to_string(),
    }
}
