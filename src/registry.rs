//! Registry of link schemes keyed by type tag
//!
//! Maps tags such as `gh` to the [`LinkScheme`] whose base location resolves
//! `gh:owner/repo` links. Raw links are routed with
//! [`call_when_type_matches`](crate::path::call_when_type_matches), so a link
//! whose tag is not registered resolves to `None` and nothing is rendered or
//! opened.

use crate::backend::Backend;
use crate::config::LinkConfig;
use crate::context::ExportContext;
use crate::error::LinkError;
use crate::navigate::{Navigator, OpenTarget};
use crate::path::call_when_type_matches;
use crate::scheme::LinkScheme;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

// Lowercase only: configuration keys are lowercased on load, and link prefixes
// are matched case-sensitively.
static TYPE_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9+._-]*$").unwrap());

/// True if `tag` can be used as a link type prefix
pub fn is_valid_type_tag(tag: &str) -> bool {
    TYPE_TAG_REGEX.is_match(tag)
}

/// Registry of link schemes
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<String, LinkScheme>,
}

impl SchemeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SchemeRegistry {
            schemes: HashMap::new(),
        }
    }

    /// Build a registry from the `schemes` table of a configuration
    pub fn from_config(config: &LinkConfig) -> Result<Self, LinkError> {
        let mut registry = Self::new();
        for (tag, scheme) in &config.schemes {
            registry.register(tag, LinkScheme::new(scheme.base.clone()))?;
        }
        Ok(registry)
    }

    /// Register a scheme under `tag`
    ///
    /// If a scheme with the same tag already exists, it will be replaced.
    pub fn register(&mut self, tag: &str, scheme: LinkScheme) -> Result<(), LinkError> {
        if !is_valid_type_tag(tag) {
            return Err(LinkError::InvalidTypeTag(tag.to_string()));
        }
        tracing::debug!(tag, base = scheme.base(), "registering link scheme");
        self.schemes.insert(tag.to_string(), scheme);
        Ok(())
    }

    /// Get a scheme by tag
    pub fn get(&self, tag: &str) -> Option<&LinkScheme> {
        self.schemes.get(tag)
    }

    /// Check if a scheme exists
    pub fn has(&self, tag: &str) -> bool {
        self.schemes.contains_key(tag)
    }

    /// List all registered tags (sorted)
    pub fn list_schemes(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.schemes.keys().map(String::as_str).collect();
        tags.sort();
        tags
    }

    /// Find the scheme a raw link belongs to
    pub fn resolve(&self, link: &str) -> Option<(&str, &LinkScheme)> {
        let (tag, _) = link.split_once(':')?;
        let resolved = self
            .schemes
            .get_key_value(tag)
            .map(|(tag, scheme)| (tag.as_str(), scheme));
        if resolved.is_none() {
            tracing::debug!(link, "no scheme matches link");
        }
        resolved
    }

    /// The uri a raw link resolves to
    pub fn uri_for(&self, link: &str) -> Option<String> {
        let (tag, scheme) = self.resolve(link)?;
        call_when_type_matches(|path| scheme.uri(path), tag, link)
    }

    /// Render a raw link such as `gh:owner/repo` for `backend`
    pub fn export_link(
        &self,
        link: &str,
        description: Option<&str>,
        backend: Backend,
        ctx: &ExportContext,
    ) -> Option<String> {
        let (tag, scheme) = self.resolve(link)?;
        call_when_type_matches(
            |path| scheme.export(path, description, backend, ctx),
            tag,
            link,
        )
    }

    /// Open a raw link through `navigator`
    pub fn open_link<N>(&self, link: &str, target: OpenTarget, navigator: &N) -> Option<N::Output>
    where
        N: Navigator + ?Sized,
    {
        let (tag, scheme) = self.resolve(link)?;
        call_when_type_matches(|path| scheme.open(path, target, navigator), tag, link)
    }
}
