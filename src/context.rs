//! Export context handed to link formatters
//!
//! Only `links_to_notes` is interpreted. Every other option is kept in `options`
//! as-is so callers can carry their own export settings through this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only rendering options for a single export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportContext {
    /// When set, ascii output drops the trailing `(<uri>)` annotation
    #[serde(default)]
    pub links_to_notes: bool,

    /// Options this crate does not interpret
    #[serde(flatten)]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl ExportContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links_to_notes(mut self, links_to_notes: bool) -> Self {
        self.links_to_notes = links_to_notes;
        self
    }

    pub fn with_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Look up an uninterpreted option
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_off() {
        let ctx = ExportContext::new();
        assert!(!ctx.links_to_notes);
        assert!(ctx.options.is_empty());
    }

    #[test]
    fn test_builder() {
        let ctx = ExportContext::new()
            .with_links_to_notes(true)
            .with_option("with-toc", false);
        assert!(ctx.links_to_notes);
        assert_eq!(ctx.option("with-toc"), Some(&serde_json::Value::Bool(false)));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let ctx: ExportContext =
            serde_json::from_str(r#"{"links_to_notes": true, "section-numbers": 3}"#).unwrap();
        assert!(ctx.links_to_notes);
        assert_eq!(ctx.option("section-numbers"), Some(&serde_json::json!(3)));
        assert!(ctx.option("links_to_notes").is_none());
    }

    #[test]
    fn test_missing_flag_defaults_to_false() {
        let ctx: ExportContext = serde_json::from_str("{}").unwrap();
        assert!(!ctx.links_to_notes);
    }
}
