//! Configuration loading for linkscheme
//!
//! `defaults/linkscheme.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user files, environment
//! variables and single-key overrides on top via [`Loader`] before deserializing
//! into [`LinkConfig`].

use crate::backend::Backend;
use crate::context::ExportContext;
use crate::error::LinkError;
use crate::navigate::{OpenTarget, SystemBrowser};
use crate::registry::SchemeRegistry;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Source, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/linkscheme.default.toml");

/// Prefix for environment overrides, e.g. `LINKSCHEME__EXPORT__BACKEND=latex`
pub const ENV_PREFIX: &str = "LINKSCHEME";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    pub export: ExportConfig,
    pub open: OpenConfig,
    #[serde(default)]
    pub schemes: BTreeMap<String, SchemeConfig>,
}

/// Export defaults
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub backend: Backend,
    #[serde(default)]
    pub context: ExportContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenConfig {
    pub new_window: bool,
    /// Application to open links with instead of the system default
    #[serde(default)]
    pub browser: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemeConfig {
    pub base: String,
}

impl LinkConfig {
    /// Registry holding every configured scheme
    pub fn registry(&self) -> Result<SchemeRegistry, LinkError> {
        SchemeRegistry::from_config(self)
    }

    pub fn navigator(&self) -> SystemBrowser {
        match &self.open.browser {
            Some(app) => SystemBrowser::with_app(app.clone()),
            None => SystemBrowser::new(),
        }
    }

    pub fn open_target(&self) -> OpenTarget {
        OpenTarget::from_new_window(self.open.new_window)
    }

    /// The embedded defaults with nothing layered on top
    pub fn defaults() -> Result<Self, LinkError> {
        Loader::new().build()
    }
}

/// Stacks configuration sources over the embedded defaults.
///
/// Sources added later win key by key. Tables merge, so a file that only
/// declares `[schemes.jira]` keeps `gh` and `gitlab` from the defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Sources used by the command line: an optional `--config` file, then
    /// `LINKSCHEME__*` variables on top.
    pub fn for_cli(path: Option<&Path>) -> Self {
        let loader = match path {
            Some(path) => Self::new().with_file(path),
            None => Self::new(),
        };
        loader.with_env()
    }

    /// Add a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_file(path.as_ref(), true)
    }

    /// Add a TOML file that may be absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_file(path.as_ref(), false)
    }

    /// Add `LINKSCHEME__SECTION__KEY` variables, e.g. `LINKSCHEME__EXPORT__BACKEND`.
    /// Values such as `true` are parsed into their typed form.
    pub fn with_env(self) -> Self {
        let env = Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true);
        self.source(env)
    }

    /// Pin `key` (dotted, e.g. `export.backend`) to `value` above every source.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, LinkError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LinkConfig, LinkError> {
        let config: LinkConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(
            backend = %config.export.backend,
            schemes = config.schemes.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    fn toml_file(self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.source(file)
    }

    fn source<S>(mut self, source: S) -> Self
    where
        S: Source + Send + Sync + 'static,
    {
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
