//! Error types for the outer layers (registry, configuration, navigation)
//!
//! Building uris, rendering and path handling are total and never fail; only
//! registering schemes, loading configuration and opening links can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    /// A type tag that cannot prefix a link (empty, uppercase, or containing `:` or spaces)
    #[error("invalid link type tag '{0}'")]
    InvalidTypeTag(String),

    /// A link whose type has no registered scheme
    #[error("no link scheme registered for '{0}'")]
    UnknownScheme(String),

    /// The platform opener failed
    #[error("failed to open '{uri}': {source}")]
    Open {
        uri: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
