//! URL canonicalization: dot-segment resolution and slash collapsing.

use crate::error::{BestEffort, UrlError};
use crate::uri::{self, encode};

/// Canonicalizes a URL: resolves `.`/`..` in the path, collapses runs of
/// `/` in the path (the `scheme://` delimiter is untouched), and applies
/// the single encoding pass to path and query. Best-effort: any failure
/// returns the input unchanged.
pub fn normalize_url(url: &str) -> BestEffort<String> {
    if url.trim().is_empty() {
        return BestEffort::Degraded(url.to_string());
    }
    match normalize_inner(url) {
        Ok(normalized) => BestEffort::Applied(normalized),
        Err(e) => {
            tracing::debug!(url, error = %e, "normalize degraded to input");
            BestEffort::Degraded(url.to_string())
        }
    }
}

fn normalize_inner(url: &str) -> Result<String, UrlError> {
    let c = uri::decompose(url)?;
    let path = if c.path.is_empty() {
        String::new()
    } else {
        collapse_slashes(&remove_dot_segments(&encode::encode_path(&c.path)))
    };
    if c.authority.is_none() && path.starts_with("//") {
        return Err(UrlError::Malformed(format!(
            "path {path:?} is ambiguous without an authority"
        )));
    }
    let query = match c.query.as_deref() {
        Some(q) if !q.is_empty() => Some(encode::encode_query(q)),
        _ => None,
    };
    Ok(uri::assemble(
        &c.scheme,
        c.authority.as_deref(),
        &path,
        query.as_deref(),
        c.fragment.as_deref(),
    ))
}

/// RFC 3986 §5.2.4 remove_dot_segments. A leading `..` past the root is
/// dropped, not an error.
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path.to_string();
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest.to_string();
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest.to_string();
        } else if let Some(rest) = input.strip_prefix("/./") {
            input = format!("/{rest}");
        } else if input == "/." {
            input = "/".to_string();
        } else if let Some(rest) = input.strip_prefix("/../") {
            input = format!("/{rest}");
            truncate_last_segment(&mut output);
        } else if input == "/.." {
            input = "/".to_string();
            truncate_last_segment(&mut output);
        } else if input == "." || input == ".." {
            input.clear();
        } else {
            // Move the first segment (including a leading '/') to the output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..]
                .find('/')
                .map_or(input.len(), |i| i + start);
            output.push_str(&input[..end]);
            input.drain(..end);
        }
    }
    output
}

fn truncate_last_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}

/// Collapses runs of `/` into one. Applied to the path only, never across
/// the `scheme://` delimiter.
fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_was_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if prev_was_slash {
                continue;
            }
            prev_was_slash = true;
        } else {
            prev_was_slash = false;
        }
        out.push(ch);
    }
    out
}
