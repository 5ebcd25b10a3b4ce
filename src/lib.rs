//! # linkscheme
//!
//! Render base-relative links for whichever output format is being produced.
//!
//! A link scheme pairs a type tag (`gh`) with a base location
//! (`https://github.com`). A raw link `gh:rust-lang/rust` is resolved against the
//! base into a percent-encoded uri, which is then either rendered as literal text
//! for an export backend or handed to a navigator to be opened.
//!
//! Architecture
//!
//!     - uri: joins a base and a path and percent-encodes the result
//!     - backend: the closed set of export backends, `Other` covers the rest
//!     - formats: one `LinkFormatter` per backend, plus the `render` dispatcher
//!     - scheme: `LinkScheme` (export/open for one base location) and closure factories
//!     - path: type prefix checks and path extraction for raw links
//!     - navigate: the `Navigator` seam and the system browser
//!     - registry: tag to scheme lookup for raw links
//!     - config: layered TOML configuration with embedded defaults
//!
//!     Rendering, uri building and path handling are total: empty strings, missing
//!     descriptions and unknown backends all have a defined result. Errors only
//!     come from the outer layers (registry, config, opening).
//!
//! Backends
//!
//!     | backend  | with description              | without                |
//!     |----------|-------------------------------|------------------------|
//!     | markdown | [desc](uri)                   | [uri](uri)             |
//!     | html     | <a href="uri">desc</a>        | <a href="uri">uri</a>  |
//!     | latex    | \href{uri}{desc}              | \url{uri}              |
//!     | texinfo  | @uref{uri, desc}              | @uref{uri}             |
//!     | ascii    | [desc] (<uri>)  or  [desc]    | <uri>                  |
//!     | other    | uri                           | uri                    |
//!
//!     The short ascii form is used when the export context sets `links_to_notes`.

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod formats;
pub mod navigate;
pub mod path;
pub mod registry;
pub mod scheme;
pub mod uri;

pub use backend::Backend;
pub use self::config::{LinkConfig, Loader};
pub use context::ExportContext;
pub use error::LinkError;
pub use formats::{render, LinkFormatter};
pub use navigate::{Navigator, OpenTarget, SystemBrowser};
pub use path::{call_when_type_matches, call_with_path, extract_path, has_type_prefix};
pub use registry::SchemeRegistry;
pub use scheme::{make_export_fn, make_open_fn, LinkScheme};
pub use uri::build_uri;
