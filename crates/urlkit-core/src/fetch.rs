//! Direct content retrieval: GET a URL, require exactly 200.

use crate::config::UrlkitConfig;
use crate::error::UrlError;
use crate::redirect::{CurlTransport, RequestOptions, Transport};
use crate::uri;
use std::io::Cursor;

/// Downloads a URL's body. The URL is encoded first; the terminal status
/// must be exactly 200 or the call fails with [`UrlError::Status`].
pub fn download_url(url: &str, cfg: &UrlkitConfig) -> Result<Vec<u8>, UrlError> {
    download_url_with(&CurlTransport::new(), url, cfg)
}

/// [`download_url`] against an explicit transport.
pub fn download_url_with(
    transport: &dyn Transport,
    url: &str,
    cfg: &UrlkitConfig,
) -> Result<Vec<u8>, UrlError> {
    let encoded = uri::encoded(url)?;
    let opts = RequestOptions::fetch(cfg);
    let (status, body) = transport.get(&encoded, &opts)?;
    if status != 200 {
        return Err(UrlError::Status(status));
    }
    tracing::debug!(url, bytes = body.len(), "download complete");
    Ok(body)
}

/// Opens a URL as a readable byte stream. The body is fetched eagerly
/// (curl delivers bytes through callbacks); the stream reads from the
/// buffered body.
pub fn open_url(url: &str, cfg: &UrlkitConfig) -> Result<Cursor<Vec<u8>>, UrlError> {
    open_url_with(&CurlTransport::new(), url, cfg)
}

/// [`open_url`] against an explicit transport.
pub fn open_url_with(
    transport: &dyn Transport,
    url: &str,
    cfg: &UrlkitConfig,
) -> Result<Cursor<Vec<u8>>, UrlError> {
    download_url_with(transport, url, cfg).map(Cursor::new)
}
