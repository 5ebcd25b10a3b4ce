//! URI construction for link schemes
//!
//! A scheme's base location and a link's relative path are joined with a single
//! `/` and the joined string is percent-encoded as a whole. Existing slashes are
//! never de-duplicated, so a base ending in `/` yields `//` in the result.
//!
//! Only characters that may never appear literally in a URI are encoded: controls,
//! space, the delimiters `"<>\^`{|}` and every non-ASCII byte. Reserved characters
//! (`:/?#[]@!$&'()*+,;=`) pass through; `[` and `]` stay literal because a base may
//! carry an IPv6 host such as `http://[::1]`.
//!
//! A `%` that starts a valid escape (`%` plus two hex digits) is kept so
//! already-encoded input is not double-encoded. Any other `%` becomes `%25`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that are escaped when building a URI
const URI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Join `base` and `path` with `/` and percent-encode the result.
///
/// Total for every input, including empty strings: `build_uri("", "")` is `"/"`.
pub fn build_uri(base: &str, path: &str) -> String {
    let joined = format!("{base}/{path}");
    encode(&joined)
}

/// Percent-encode a string with the URI encode set.
pub fn encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('%') {
        encoded.extend(utf8_percent_encode(&rest[..pos], URI_ENCODE_SET));
        rest = &rest[pos + 1..];
        if starts_with_hex_pair(rest) {
            encoded.push('%');
        } else {
            encoded.push_str("%25");
        }
    }

    encoded.extend(utf8_percent_encode(rest, URI_ENCODE_SET));
    encoded
}

fn starts_with_hex_pair(s: &str) -> bool {
    matches!(s.as_bytes(), [a, b, ..] if a.is_ascii_hexdigit() && b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_single_slash() {
        assert_eq!(
            build_uri("https://github.com", "rust-lang/rust"),
            "https://github.com/rust-lang/rust"
        );
    }

    #[test]
    fn test_encodes_spaces() {
        assert_eq!(
            build_uri("https://example.com", "a b"),
            "https://example.com/a%20b"
        );
    }

    #[test]
    fn test_trailing_base_slash_is_kept() {
        assert_eq!(build_uri("https://example.com/", "x"), "https://example.com//x");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(build_uri("", ""), "/");
        assert_eq!(build_uri("https://example.com", ""), "https://example.com/");
        assert_eq!(build_uri("", "path"), "/path");
    }

    #[test]
    fn test_reserved_characters_pass_through() {
        assert_eq!(
            build_uri("https://example.com", "search?q=a&b=c#top"),
            "https://example.com/search?q=a&b=c#top"
        );
    }

    #[test]
    fn test_existing_escapes_are_not_doubled() {
        assert_eq!(
            build_uri("https://example.com", "a%20b"),
            "https://example.com/a%20b"
        );
    }

    #[test]
    fn test_stray_percent_is_escaped() {
        assert_eq!(build_uri("https://e.com", "%zz"), "https://e.com/%25zz");
        assert_eq!(build_uri("https://e.com", "100%"), "https://e.com/100%25");
        assert_eq!(build_uri("https://e.com", "%4"), "https://e.com/%254");
        assert_eq!(build_uri("https://e.com", "%2f%2F"), "https://e.com/%2f%2F");
    }

    #[test]
    fn test_brackets_and_sub_delims_pass_through() {
        assert_eq!(
            build_uri("https://e.com", "a[b]c(d)#f?g"),
            "https://e.com/a[b]c(d)#f?g"
        );
        assert_eq!(build_uri("http://[::1]:8080", "x"), "http://[::1]:8080/x");
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        assert_eq!(build_uri("https://example.com", "é"), "https://example.com/%C3%A9");
    }

    #[test]
    fn test_delimiters_are_encoded() {
        assert_eq!(encode("<a|b>{c}"), "%3Ca%7Cb%3E%7Bc%7D");
        assert_eq!(encode("\"q\"\\^`"), "%22q%22%5C%5E%60");
    }
}
