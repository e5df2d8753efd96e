//! HTTP transport capability consumed by the redirect and fetch engines.
//!
//! One trait, two verbs: a HEAD probe that never follows redirects itself
//! (the redirect loop owns that), and a GET that collects the body. The
//! production implementation drives `curl::easy::Easy`; tests substitute a
//! scripted fake.

use crate::config::UrlkitConfig;
use crate::error::UrlError;
use std::str;
use std::time::Duration;

/// Per-request knobs, derived from [`UrlkitConfig`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub connect_timeout: Duration,
    /// Overall transfer timeout; `None` means no limit (downloads).
    pub read_timeout: Option<Duration>,
    pub user_agent: String,
}

impl RequestOptions {
    /// Options for redirect HEAD probes: short, finite timeouts.
    pub fn probe(cfg: &UrlkitConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            read_timeout: Some(Duration::from_secs(cfg.read_timeout_secs)),
            user_agent: cfg.user_agent.clone(),
        }
    }

    /// Options for GET downloads: generous connect, unbounded read unless
    /// configured otherwise.
    pub fn fetch(cfg: &UrlkitConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.fetch_connect_timeout_secs),
            read_timeout: (cfg.fetch_timeout_secs > 0)
                .then(|| Duration::from_secs(cfg.fetch_timeout_secs)),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Status and headers of a HEAD response.
#[derive(Debug, Clone)]
pub struct HeadResponse {
    pub status: u32,
    headers: Vec<(String, String)>,
}

impl HeadResponse {
    pub fn new(status: u32, headers: Vec<(String, String)>) -> Self {
        Self { status, headers }
    }

    /// Case-insensitive header lookup; first occurrence wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The engine's only view of the network.
pub trait Transport {
    /// HEAD with redirect-following disabled at the transport level.
    fn head(&self, url: &str, opts: &RequestOptions) -> Result<HeadResponse, UrlError>;
    /// GET, returning final status and the whole body. The transport may
    /// follow redirects here (bounded); the caller checks the status.
    fn get(&self, url: &str, opts: &RequestOptions) -> Result<(u32, Vec<u8>), UrlError>;
}

/// libcurl-backed transport. Each request uses a fresh Easy handle, so the
/// connection is released when the call returns, on every exit path.
#[derive(Debug, Default)]
pub struct CurlTransport;

impl CurlTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for CurlTransport {
    fn head(&self, url: &str, opts: &RequestOptions) -> Result<HeadResponse, UrlError> {
        let mut header_lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(false)?;
        easy.useragent(&opts.user_agent)?;
        easy.connect_timeout(opts.connect_timeout)?;
        if let Some(t) = opts.read_timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HeadResponse::new(status, parse_header_lines(&header_lines)))
    }

    fn get(&self, url: &str, opts: &RequestOptions) -> Result<(u32, Vec<u8>), UrlError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&opts.user_agent)?;
        easy.connect_timeout(opts.connect_timeout)?;
        if let Some(t) = opts.read_timeout {
            easy.timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok((status, body))
    }
}

/// Splits raw response header lines into name/value pairs. The status line
/// and blanks are skipped.
pub(crate) fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("HTTP/") {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
