//! Link schemes: one base location, exported and opened many times
//!
//! A [`LinkScheme`] holds the base location for one link type. `export` builds the
//! uri for a relative path and renders it for a backend; `open` builds the same uri
//! and hands it to a [`Navigator`]. Nothing is cached and no state is shared
//! between schemes, so every call is independent.
//!
//! [`make_export_fn`] and [`make_open_fn`] return closures over a base location
//! for callers that want plain functions instead of a value.

use crate::backend::Backend;
use crate::context::ExportContext;
use crate::formats;
use crate::navigate::{Navigator, OpenTarget};
use crate::uri::build_uri;

/// A base location that relative link paths are resolved against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkScheme {
    base: String,
}

impl LinkScheme {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The uri `path` resolves to under this scheme
    pub fn uri(&self, path: &str) -> String {
        build_uri(&self.base, path)
    }

    /// Render the link at `path` for `backend`
    pub fn export(
        &self,
        path: &str,
        description: Option<&str>,
        backend: Backend,
        ctx: &ExportContext,
    ) -> String {
        let uri = self.uri(path);
        formats::render(&uri, description, backend, ctx)
    }

    /// Open the link at `path` and return whatever the navigator reports
    pub fn open<N>(&self, path: &str, target: OpenTarget, navigator: &N) -> N::Output
    where
        N: Navigator + ?Sized,
    {
        let uri = self.uri(path);
        navigator.navigate(&uri, target)
    }
}

/// An export function closed over `base`
pub fn make_export_fn(
    base: impl Into<String>,
) -> impl Fn(&str, Option<&str>, Backend, &ExportContext) -> String {
    let scheme = LinkScheme::new(base);
    move |path: &str, description: Option<&str>, backend: Backend, ctx: &ExportContext| {
        scheme.export(path, description, backend, ctx)
    }
}

/// An open function closed over `base` and `navigator`
pub fn make_open_fn<N>(
    base: impl Into<String>,
    navigator: N,
) -> impl Fn(&str, OpenTarget) -> N::Output
where
    N: Navigator,
{
    let scheme = LinkScheme::new(base);
    move |path: &str, target: OpenTarget| scheme.open(path, target, &navigator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_export_markdown_without_description() {
        let scheme = LinkScheme::new("https://example.com");
        let out = scheme.export("a b", None, Backend::Markdown, &ExportContext::new());
        assert_eq!(out, "[https://example.com/a%20b](https://example.com/a%20b)");
    }

    #[test]
    fn test_export_ascii_links_to_notes() {
        let scheme = LinkScheme::new("https://example.com");
        let ctx = ExportContext::new().with_links_to_notes(true);
        let out = scheme.export("a b", Some("Example"), Backend::Ascii, &ctx);
        assert_eq!(out, "[Example]");
    }

    #[test]
    fn test_export_unknown_backend_is_uri() {
        let scheme = LinkScheme::new("https://example.com");
        let out = scheme.export(
            "a b",
            Some("Example"),
            Backend::from_tag("odt"),
            &ExportContext::new(),
        );
        assert_eq!(out, scheme.uri("a b"));
    }

    #[test]
    fn test_open_passes_uri_and_target() {
        let scheme = LinkScheme::new("https://github.com");
        let seen = RefCell::new(None);
        let nav = |uri: &str, target: OpenTarget| {
            *seen.borrow_mut() = Some((uri.to_string(), target));
            "opened"
        };

        let out = scheme.open("rust-lang/rust", OpenTarget::NewWindow, &nav);
        assert_eq!(out, "opened");
        assert_eq!(
            seen.into_inner(),
            Some((
                "https://github.com/rust-lang/rust".to_string(),
                OpenTarget::NewWindow
            ))
        );
    }

    #[test]
    fn test_factories_are_independent() {
        let gh = make_export_fn("https://github.com");
        let gl = make_export_fn("https://gitlab.com");
        let ctx = ExportContext::new();

        assert_eq!(gh("a", None, Backend::Latex, &ctx), r"\url{https://github.com/a}");
        assert_eq!(gl("a", None, Backend::Latex, &ctx), r"\url{https://gitlab.com/a}");
    }

    #[test]
    fn test_make_open_fn() {
        let open = make_open_fn("https://example.com", |uri: &str, _target: OpenTarget| {
            uri.to_string()
        });
        assert_eq!(open("x y", OpenTarget::Current), "https://example.com/x%20y");
    }
}
