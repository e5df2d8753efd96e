//! Percent-encoding of path and query components.
//!
//! Space encodes to `%20`, never `+`. Encoding is a single pass from decoded
//! form: running it over already-encoded text double-encodes `%`.

use crate::error::UrlError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside ASCII alphanumerics and `. - * _` is encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');

/// Percent-encodes one path segment or one query key/value.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Encodes a path segment by segment; `/` is never encoded and empty
/// segments are preserved.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Encodes a raw query string: split on `&`, split each pair on the first
/// `=`, encode key and value independently. A key with no value serializes
/// as `key=`.
pub fn encode_query(query: &str) -> String {
    query
        .split('&')
        .map(|param| {
            if param.is_empty() {
                return String::new();
            }
            match param.split_once('=') {
                Some((k, v)) => format!("{}={}", encode_component(k), encode_component(v)),
                None => format!("{}=", encode_component(param)),
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-decodes a component. Fails if the decoded bytes are not UTF-8.
pub fn decode_component(s: &str) -> Result<String, UrlError> {
    percent_decode_str(s)
        .decode_utf8()
        .map(|c| c.into_owned())
        .map_err(|e| UrlError::Encoding(e.to_string()))
}
