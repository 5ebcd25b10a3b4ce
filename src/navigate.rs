//! Navigation primitive used to open links
//!
//! Opening is the one side effect in this crate. It is abstracted behind
//! [`Navigator`] so callers can inject their own primitive; any closure taking
//! `(&str, OpenTarget)` qualifies. [`SystemBrowser`] hands the uri to the
//! platform opener.

use crate::error::LinkError;

/// Where an opened link should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenTarget {
    #[default]
    Current,
    NewWindow,
}

impl OpenTarget {
    pub fn from_new_window(new_window: bool) -> Self {
        if new_window {
            OpenTarget::NewWindow
        } else {
            OpenTarget::Current
        }
    }
}

/// Something that can open a uri
pub trait Navigator {
    /// Whatever the primitive reports back
    type Output;

    fn navigate(&self, uri: &str, target: OpenTarget) -> Self::Output;
}

impl<F, R> Navigator for F
where
    F: Fn(&str, OpenTarget) -> R,
{
    type Output = R;

    fn navigate(&self, uri: &str, target: OpenTarget) -> R {
        self(uri, target)
    }
}

/// Opens uris with the system's default handler, or with a named application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemBrowser {
    app: Option<String>,
}

impl SystemBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open through `app` instead of the default handler
    pub fn with_app(app: impl Into<String>) -> Self {
        Self {
            app: Some(app.into()),
        }
    }

    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }
}

impl Navigator for SystemBrowser {
    type Output = Result<(), LinkError>;

    fn navigate(&self, uri: &str, target: OpenTarget) -> Self::Output {
        if target == OpenTarget::NewWindow {
            // The platform opener has no portable window directive
            tracing::debug!(uri, "new window requested, delegating to opener");
        }

        let result = match &self.app {
            Some(app) => {
                tracing::debug!(uri, app = app.as_str(), "opening link with application");
                open::with(uri, app.as_str())
            }
            None => {
                tracing::debug!(uri, "opening link with default handler");
                open::that(uri)
            }
        };

        opener_result(uri, result)
    }
}

/// Attach the uri to an opener failure
fn opener_result(uri: &str, result: std::io::Result<()>) -> Result<(), LinkError> {
    result.map_err(|source| LinkError::Open {
        uri: uri.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_is_a_navigator() {
        let seen = RefCell::new(Vec::new());
        let nav = |uri: &str, target: OpenTarget| {
            seen.borrow_mut().push((uri.to_string(), target));
            uri.len()
        };

        assert_eq!(nav.navigate("https://x.org", OpenTarget::NewWindow), 13);
        assert_eq!(
            seen.borrow().as_slice(),
            &[("https://x.org".to_string(), OpenTarget::NewWindow)]
        );
    }

    #[test]
    fn test_open_target_from_flag() {
        assert_eq!(OpenTarget::from_new_window(true), OpenTarget::NewWindow);
        assert_eq!(OpenTarget::from_new_window(false), OpenTarget::Current);
        assert_eq!(OpenTarget::default(), OpenTarget::Current);
    }

    #[test]
    fn test_opener_failure_becomes_open_error() {
        let failure = std::io::Error::new(std::io::ErrorKind::NotFound, "no opener");
        let err = opener_result("https://github.com/a%20b", Err(failure)).unwrap_err();

        match err {
            LinkError::Open { uri, source } => {
                assert_eq!(uri, "https://github.com/a%20b");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn test_opener_success_passes_through() {
        assert!(opener_result("https://x.org", Ok(())).is_ok());
    }

    #[test]
    fn test_system_browser_app() {
        assert_eq!(SystemBrowser::new().app(), None);
        assert_eq!(SystemBrowser::with_app("firefox").app(), Some("firefox"));
    }
}
