//! Link string helpers
//!
//! A raw link looks like `type:path`, e.g. `gh:rust-lang/rust`. These helpers test
//! the type prefix and hand the path part to a callback.

/// True if `link` starts with `type_tag` followed by `:`.
///
/// `has_type_prefix("gh:foo", "gh")` holds; `has_type_prefix("ghx:foo", "gh")` does not.
pub fn has_type_prefix(link: &str, type_tag: &str) -> bool {
    link.strip_prefix(type_tag).is_some_and(|rest| rest.starts_with(':'))
}

/// Strip everything up to and including the first `:`.
///
/// A link without a colon is returned unchanged.
pub fn extract_path(link: &str) -> &str {
    match link.split_once(':') {
        Some((_, path)) => path,
        None => link,
    }
}

/// Drop one trailing `/`, extract the path and call `f` with it.
///
/// The slash is stripped before the path is extracted.
pub fn call_with_path<F, R>(f: F, link: &str) -> R
where
    F: FnOnce(&str) -> R,
{
    let link = link.strip_suffix('/').unwrap_or(link);
    f(extract_path(link))
}

/// Run [`call_with_path`] only when `link` carries the `type_tag` prefix.
///
/// Returns `None` without calling `f` for any other link.
pub fn call_when_type_matches<F, R>(f: F, type_tag: &str, link: &str) -> Option<R>
where
    F: FnOnce(&str) -> R,
{
    if has_type_prefix(link, type_tag) {
        Some(call_with_path(f, link))
    } else {
        None
    }
}
