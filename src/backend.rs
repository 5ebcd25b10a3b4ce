//! Export backend identifiers
//!
//! The set of output formats is closed: five recognized backends plus `Other`,
//! which stands for any backend this crate has no formatter for. Parsing a tag is
//! total, so an unfamiliar backend never fails, it just becomes `Other`.

use crate::formats::{
    AsciiFormatter, HtmlFormatter, LatexFormatter, LinkFormatter, MarkdownFormatter,
    TexinfoFormatter,
};
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Output format a link is being exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Backend {
    /// `[description](uri)`
    Markdown,
    /// `<a href="uri">description</a>`
    Html,
    /// `\href{uri}{description}` or `\url{uri}`
    Latex,
    /// Plain text with an optional `(<uri>)` annotation
    Ascii,
    /// `@uref{uri, description}`
    Texinfo,
    /// Any unrecognized backend; exports the bare uri
    Other,
}

impl Backend {
    /// The backends that have a formatter, in a stable order
    pub const RECOGNIZED: [Backend; 5] = [
        Backend::Markdown,
        Backend::Html,
        Backend::Latex,
        Backend::Ascii,
        Backend::Texinfo,
    ];

    /// Map a backend tag to its variant. Unknown tags map to [`Backend::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "markdown" => Backend::Markdown,
            "html" => Backend::Html,
            "latex" => Backend::Latex,
            "ascii" => Backend::Ascii,
            "texinfo" => Backend::Texinfo,
            _ => Backend::Other,
        }
    }

    /// Canonical tag for this backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Markdown => "markdown",
            Backend::Html => "html",
            Backend::Latex => "latex",
            Backend::Ascii => "ascii",
            Backend::Texinfo => "texinfo",
            Backend::Other => "other",
        }
    }

    /// The formatter for this backend, `None` for [`Backend::Other`]
    pub fn formatter(&self) -> Option<&'static dyn LinkFormatter> {
        match self {
            Backend::Markdown => Some(&MarkdownFormatter),
            Backend::Html => Some(&HtmlFormatter),
            Backend::Latex => Some(&LatexFormatter),
            Backend::Ascii => Some(&AsciiFormatter),
            Backend::Texinfo => Some(&TexinfoFormatter),
            Backend::Other => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Backend::Other)
    }
}

impl FromStr for Backend {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Backend::from_tag(s))
    }
}

impl From<&str> for Backend {
    fn from(tag: &str) -> Self {
        Backend::from_tag(tag)
    }
}

impl From<String> for Backend {
    fn from(tag: String) -> Self {
        Backend::from_tag(&tag)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
