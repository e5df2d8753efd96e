//! URL decomposition and safe reassembly.
//!
//! `decompose` splits a raw string into components in one grammar pass;
//! `encoded` re-encodes path and query and rebuilds a structurally valid
//! URL. A reference without a scheme is always a parse failure here;
//! relative parsing happens only in the resolver.

pub mod encode;
pub mod grammar;
mod inspect;

pub use inspect::{
    build_url, get_base_url, get_host, get_path, get_port, get_scheme, is_valid_url,
};

use crate::error::UrlError;

/// Decomposed URL. Components are raw, exactly as they appeared in the
/// input; encoding happens at reassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    /// Never empty on a successful decompose.
    pub scheme: String,
    /// `host[:port]`, without the leading `//`.
    pub authority: Option<String>,
    /// Possibly empty; always `/`-separated.
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Splits a raw URL into components.
///
/// Blank input and missing scheme are parse failures: a "schemeless" URL is
/// not a valid state.
pub fn decompose(raw: &str) -> Result<UrlComponents, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Malformed("URL is empty".to_string()));
    }
    let parts = grammar::split(trimmed)
        .ok_or_else(|| UrlError::Malformed(format!("invalid URL: {raw}")))?;
    let scheme = parts
        .scheme
        .ok_or_else(|| UrlError::Malformed(format!("URL missing scheme: {raw}")))?;
    Ok(UrlComponents {
        scheme: scheme.to_string(),
        authority: parts.authority.map(str::to_string),
        path: parts.path.to_string(),
        query: parts.query.map(str::to_string),
        fragment: parts.fragment.map(str::to_string),
    })
}

impl UrlComponents {
    /// Re-encodes path and query (one pass, from their raw form) and
    /// reassembles. Fails if the reassembled form would not decompose back
    /// to the same structure (e.g. an authority-less URL whose path begins
    /// with `//` would grow a phantom authority).
    pub fn to_encoded_string(&self) -> Result<String, UrlError> {
        let path = if self.path.is_empty() {
            String::new()
        } else {
            encode::encode_path(&self.path)
        };
        if self.authority.is_none() && path.starts_with("//") {
            return Err(UrlError::Malformed(format!(
                "path {path:?} is ambiguous without an authority"
            )));
        }
        let query = match self.query.as_deref() {
            Some(q) if !q.is_empty() => Some(encode::encode_query(q)),
            _ => None,
        };
        Ok(assemble(
            &self.scheme,
            self.authority.as_deref(),
            &path,
            query.as_deref(),
            self.fragment.as_deref(),
        ))
    }
}

/// Decompose + encode + reassemble in one step.
pub fn encoded(raw: &str) -> Result<String, UrlError> {
    decompose(raw)?.to_encoded_string()
}

/// Joins already-encoded parts back into a URL string. No further encoding
/// is performed here.
pub(crate) fn assemble(
    scheme: &str,
    authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut out = String::with_capacity(
        scheme.len() + path.len() + authority.map_or(0, str::len) + 16,
    );
    out.push_str(scheme);
    out.push(':');
    if let Some(a) = authority {
        out.push_str("//");
        out.push_str(a);
    }
    out.push_str(path);
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}
