//! Lenient component getters and URL construction.
//!
//! These never error: any internal failure degrades to `None`/`false`.

use super::{assemble, decompose, encode, encoded};
use crate::query::QueryParams;

/// True if the string decomposes and reassembles as a URL.
pub fn is_valid_url(url: &str) -> bool {
    encoded(url).is_ok()
}

pub fn get_scheme(url: &str) -> Option<String> {
    decompose(url).ok().map(|c| c.scheme)
}

/// Host portion of the authority, with userinfo and port stripped.
pub fn get_host(url: &str) -> Option<String> {
    let authority = decompose(url).ok()?.authority?;
    let host = host_of(&authority);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Port of the URL. An explicit `:port` wins; otherwise 80/443 for
/// http/https; `None` for other schemes or an unparseable port.
pub fn get_port(url: &str) -> Option<u16> {
    let c = decompose(url).ok()?;
    let authority = c.authority.as_deref()?;
    let after_userinfo = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    if let Some((_, port)) = after_userinfo.split_once(':') {
        return port.parse().ok();
    }
    if c.scheme.eq_ignore_ascii_case("http") {
        Some(80)
    } else if c.scheme.eq_ignore_ascii_case("https") {
        Some(443)
    } else {
        None
    }
}

/// Path component; empty string when the URL has none, `None` on parse failure.
pub fn get_path(url: &str) -> Option<String> {
    decompose(url).ok().map(|c| c.path)
}

/// `scheme://authority`, without path, query, or fragment.
pub fn get_base_url(url: &str) -> Option<String> {
    let c = decompose(url).ok()?;
    let authority = c.authority?;
    Some(format!("{}://{}", c.scheme, authority))
}

/// Builds a URL from parts. Returns `None` when scheme or host is blank.
/// The path gains a leading `/` if missing and is percent-encoded; query
/// pairs are serialized in insertion order.
pub fn build_url(
    scheme: &str,
    host: &str,
    port: Option<u16>,
    path: Option<&str>,
    query: Option<&QueryParams>,
    fragment: Option<&str>,
) -> Option<String> {
    if scheme.trim().is_empty() || host.trim().is_empty() {
        return None;
    }
    let authority = match port {
        Some(p) => format!("{host}:{p}"),
        None => host.to_string(),
    };
    let encoded_path = match path {
        None | Some("") => String::new(),
        Some(p) if p.starts_with('/') => encode::encode_path(p),
        Some(p) => encode::encode_path(&format!("/{p}")),
    };
    let query_string = query.and_then(QueryParams::to_query_string);
    Some(assemble(
        scheme,
        Some(&authority),
        &encoded_path,
        query_string.as_deref(),
        fragment,
    ))
}

fn host_of(authority: &str) -> &str {
    let after_userinfo = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    after_userinfo
        .split_once(':')
        .map_or(after_userinfo, |(h, _)| h)
}
