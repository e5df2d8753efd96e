//! Relative reference resolution against a base URL.

use crate::error::{BestEffort, UrlError};
use crate::normalize::remove_dot_segments;
use crate::uri::{self, encode, grammar};

/// Resolves `relative` against `base` per RFC 3986 §5.3.
///
/// A blank relative is returned unchanged; a blank base means `relative` is
/// parsed as already absolute. Best-effort: any failure returns `relative`
/// verbatim.
pub fn resolve(base: &str, relative: &str) -> BestEffort<String> {
    if relative.trim().is_empty() {
        return BestEffort::Applied(relative.to_string());
    }
    if base.trim().is_empty() {
        return match uri::encoded(relative) {
            Ok(absolute) => BestEffort::Applied(absolute),
            Err(_) => BestEffort::Degraded(relative.to_string()),
        };
    }
    match resolve_inner(base, relative) {
        Ok(absolute) => BestEffort::Applied(absolute),
        Err(e) => {
            tracing::debug!(base, relative, error = %e, "resolve degraded to relative");
            BestEffort::Degraded(relative.to_string())
        }
    }
}

fn resolve_inner(base: &str, relative: &str) -> Result<String, UrlError> {
    let b = uri::decompose(base)?;
    let r = grammar::split(relative.trim())
        .ok_or_else(|| UrlError::Malformed(format!("invalid reference: {relative}")))?;

    // Base components are put through the single encoding pass; the
    // reference is taken as given.
    let base_path = if b.path.is_empty() {
        String::new()
    } else {
        encode::encode_path(&b.path)
    };
    let base_query = match b.query.as_deref() {
        Some(q) if !q.is_empty() => Some(encode::encode_query(q)),
        _ => None,
    };

    let scheme;
    let authority;
    let path;
    let query;
    if let Some(ref_scheme) = r.scheme {
        // Absolute reference wins outright.
        scheme = ref_scheme.to_string();
        authority = r.authority.map(str::to_string);
        path = remove_dot_segments(r.path);
        query = r.query.map(str::to_string);
    } else if let Some(ref_authority) = r.authority {
        // Authority-relative: //host/path replaces everything after scheme.
        scheme = b.scheme;
        authority = Some(ref_authority.to_string());
        path = remove_dot_segments(r.path);
        query = r.query.map(str::to_string);
    } else if r.path.is_empty() {
        scheme = b.scheme;
        authority = b.authority;
        path = base_path;
        query = r.query.map(str::to_string).or(base_query);
    } else if r.path.starts_with('/') {
        scheme = b.scheme;
        authority = b.authority;
        path = remove_dot_segments(r.path);
        query = r.query.map(str::to_string);
    } else {
        // Path-relative: merge against the base path's directory.
        let merged = merge_paths(b.authority.is_some(), &base_path, r.path);
        scheme = b.scheme;
        authority = b.authority;
        path = remove_dot_segments(&merged);
        query = r.query.map(str::to_string);
    }

    Ok(uri::assemble(
        &scheme,
        authority.as_deref(),
        &path,
        query.as_deref(),
        r.fragment,
    ))
}

/// RFC 3986 §5.3 path merge: a base with an authority and an empty path
/// contributes `/`; otherwise everything up to the base path's last `/`.
fn merge_paths(base_has_authority: bool, base_path: &str, ref_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        return format!("/{ref_path}");
    }
    match base_path.rfind('/') {
        Some(i) => format!("{}{}", &base_path[..=i], ref_path),
        None => ref_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BestEffort;

    #[test]
    fn dotdot_against_directory_base() {
        assert_eq!(
            resolve("http://a.com/dir/", "../x").into_inner(),
            "http://a.com/x"
        );
    }

    #[test]
    fn sibling_file() {
        assert_eq!(
            resolve("http://a.com/dir/page.html", "other.html").into_inner(),
            "http://a.com/dir/other.html"
        );
    }

    #[test]
    fn absolute_reference_wins() {
        assert_eq!(
            resolve("http://a.com/dir/", "https://b.org/y").into_inner(),
            "https://b.org/y"
        );
    }

    #[test]
    fn authority_relative_inherits_scheme() {
        assert_eq!(
            resolve("https://a.com/dir/?q=1#f", "//b.org/y").into_inner(),
            "https://b.org/y"
        );
    }

    #[test]
    fn root_relative_replaces_path_and_query() {
        assert_eq!(
            resolve("http://a.com/dir/page?q=1", "/y?n=2").into_inner(),
            "http://a.com/y?n=2"
        );
    }

    #[test]
    fn empty_path_reference_keeps_base_path() {
        assert_eq!(
            resolve("http://a.com/dir/page?q=1", "?n=2").into_inner(),
            "http://a.com/dir/page?n=2"
        );
        assert_eq!(
            resolve("http://a.com/dir/page?q=1", "#frag").into_inner(),
            "http://a.com/dir/page?q=1#frag"
        );
    }

    #[test]
    fn merge_against_authority_with_empty_path() {
        assert_eq!(
            resolve("http://a.com", "x/y").into_inner(),
            "http://a.com/x/y"
        );
    }

    #[test]
    fn blank_relative_returned_unchanged() {
        assert_eq!(resolve("http://a.com/x", ""), BestEffort::Applied(String::new()));
    }

    #[test]
    fn blank_base_parses_relative_as_absolute() {
        assert_eq!(
            resolve("", "http://a.com/a b").into_inner(),
            "http://a.com/a%20b"
        );
        assert!(resolve("", "/not/absolute").is_degraded());
    }

    #[test]
    fn unparseable_base_degrades_to_relative() {
        let out = resolve("no base", "x/y");
        assert_eq!(out, BestEffort::Degraded("x/y".to_string()));
    }
}
