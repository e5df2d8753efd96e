//! Generic URI grammar split.
//!
//! One compiled pattern for the whole process; a single left-to-right match
//! with no backtracking across components.

use regex::Regex;
use std::sync::LazyLock;

/// `scheme://authority/path?query#fragment`, every component optional.
/// Scheme presence is enforced by the caller, not the grammar, so the same
/// pattern also splits relative references during resolution.
static URI_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?")
        .expect("URI grammar pattern is valid")
});

/// Borrowed view of the five raw (un-decoded, un-encoded) components.
#[derive(Debug, Clone, Copy)]
pub struct RawParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Splits `input` into raw components. Returns `None` only if the grammar
/// fails to match at all (the pattern accepts almost anything, so this is
/// the defensive branch, not the common one).
pub fn split(input: &str) -> Option<RawParts<'_>> {
    let caps = URI_GRAMMAR.captures(input)?;
    Some(RawParts {
        scheme: caps.get(1).map(|m| m.as_str()),
        authority: caps.get(2).map(|m| m.as_str()),
        path: caps.get(3).map_or("", |m| m.as_str()),
        query: caps.get(4).map(|m| m.as_str()),
        fragment: caps.get(5).map(|m| m.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let p = split("https://example.com:8080/a/b?x=1&y=2#frag").unwrap();
        assert_eq!(p.scheme, Some("https"));
        assert_eq!(p.authority, Some("example.com:8080"));
        assert_eq!(p.path, "/a/b");
        assert_eq!(p.query, Some("x=1&y=2"));
        assert_eq!(p.fragment, Some("frag"));
    }

    #[test]
    fn no_scheme_is_a_relative_reference() {
        let p = split("/just/a/path?q=1").unwrap();
        assert_eq!(p.scheme, None);
        assert_eq!(p.authority, None);
        assert_eq!(p.path, "/just/a/path");
        assert_eq!(p.query, Some("q=1"));
    }

    #[test]
    fn scheme_relative() {
        let p = split("//host.example/x").unwrap();
        assert_eq!(p.scheme, None);
        assert_eq!(p.authority, Some("host.example"));
        assert_eq!(p.path, "/x");
    }

    #[test]
    fn empty_components() {
        let p = split("http://example.com").unwrap();
        assert_eq!(p.scheme, Some("http"));
        assert_eq!(p.authority, Some("example.com"));
        assert_eq!(p.path, "");
        assert_eq!(p.query, None);
        assert_eq!(p.fragment, None);
    }

    #[test]
    fn empty_query_and_fragment_are_present_but_empty() {
        let p = split("http://example.com/p?#").unwrap();
        assert_eq!(p.query, Some(""));
        assert_eq!(p.fragment, Some(""));
    }

    #[test]
    fn query_stops_at_fragment() {
        let p = split("http://e.com/p?a=1#b=2").unwrap();
        assert_eq!(p.query, Some("a=1"));
        assert_eq!(p.fragment, Some("b=2"));
    }
}
