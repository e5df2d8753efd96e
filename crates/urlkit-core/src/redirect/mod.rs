//! Redirect chain following.
//!
//! Repeatedly HEADs the current URL with transport-level redirect following
//! disabled, walks 3xx `Location` targets up to a configured bound, and
//! returns the terminal URL with the full hop chain. Exceeding the bound is
//! an absent result (`Ok(None)`), deliberately distinct from an error.

pub mod transport;

pub use transport::{CurlTransport, HeadResponse, RequestOptions, Transport};

use crate::config::UrlkitConfig;
use crate::error::UrlError;
use crate::{resolve, uri};

/// Statuses whose `Location` the loop follows.
pub const REDIRECT_STATUSES: [u32; 5] = [301, 302, 303, 307, 308];

/// One followed redirect. `to` is always absolute, already resolved
/// against `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectHop {
    pub from: String,
    pub to: String,
    pub status: u32,
}

/// Outcome of following a chain to its terminal URL.
#[derive(Debug, Clone)]
pub struct RedirectResult {
    pub original_url: String,
    pub final_url: Option<String>,
    pub redirect_count: u32,
    pub chain: Vec<RedirectHop>,
}

/// Follows redirects from `url` until a non-3xx response or the hop bound.
///
/// Returns `Ok(None)` when the bound is reached while still being
/// redirected; a non-2xx/non-3xx terminal status is a [`UrlError::Status`]
/// failure. Each probe uses its own connection, released before the next
/// iteration on every exit path.
pub fn follow_redirects(
    transport: &dyn Transport,
    url: &str,
    cfg: &UrlkitConfig,
) -> Result<Option<RedirectResult>, UrlError> {
    if url.trim().is_empty() {
        return Err(UrlError::Malformed("URL is empty".to_string()));
    }

    let opts = RequestOptions::probe(cfg);
    let mut result = RedirectResult {
        original_url: url.to_string(),
        final_url: None,
        redirect_count: 0,
        chain: Vec::new(),
    };
    let mut current = url.to_string();

    while result.redirect_count < cfg.max_redirects {
        let probe_url = uri::encoded(&current)?;
        let response = transport.head(&probe_url, &opts)?;

        if REDIRECT_STATUSES.contains(&response.status) {
            let location = response.header("location").map_or("", str::trim);
            if location.is_empty() {
                // Nowhere further to go; the redirect is the terminal state.
                result.final_url = Some(current);
                return Ok(Some(result));
            }
            let next = resolve_location(&current, location)?;
            tracing::debug!(from = %current, to = %next, status = response.status, "redirect hop");
            result.chain.push(RedirectHop {
                from: current.clone(),
                to: next.clone(),
                status: response.status,
            });
            current = next;
            result.redirect_count += 1;
        } else if (200..300).contains(&response.status) {
            result.final_url = Some(current);
            return Ok(Some(result));
        } else {
            return Err(UrlError::Status(response.status));
        }
    }

    tracing::warn!(url, limit = cfg.max_redirects, "redirect chain exceeded hop limit");
    Ok(None)
}

/// Final URL after redirects, or `None` for blank input and for chains
/// that exceed the hop bound.
pub fn get_final_url(url: &str, cfg: &UrlkitConfig) -> Result<Option<String>, UrlError> {
    if url.trim().is_empty() {
        return Ok(None);
    }
    let result = follow_redirects(&CurlTransport::new(), url, cfg)?;
    Ok(result.and_then(|r| r.final_url))
}

/// Like [`get_final_url`] but returns the full hop chain. Blank input is an
/// error here, matching the stricter contract of the detailed variant.
pub fn get_final_url_with_details(
    url: &str,
    cfg: &UrlkitConfig,
) -> Result<Option<RedirectResult>, UrlError> {
    follow_redirects(&CurlTransport::new(), url, cfg)
}

/// Resolves a `Location` header against the URL that produced it.
fn resolve_location(current: &str, location: &str) -> Result<String, UrlError> {
    // Scheme-relative inherits the current scheme only; its own authority
    // takes over. Checked before the plain leading-slash case.
    if let Some(rest) = location.strip_prefix("//") {
        let scheme = uri::decompose(current)?.scheme;
        return Ok(format!("{scheme}://{rest}"));
    }
    if location.starts_with('/') {
        let c = uri::decompose(current)?;
        let authority = c.authority.ok_or_else(|| {
            UrlError::Malformed(format!("no authority to resolve {location} against"))
        })?;
        return Ok(format!("{}://{}{}", c.scheme, authority, location));
    }
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(location.to_string());
    }
    Ok(resolve::resolve(current, location).into_inner())
}
