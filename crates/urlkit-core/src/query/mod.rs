//! Ordered query parameter store and URL-level parameter operations.
//!
//! Parameters hold decoded names and values in insertion order, so
//! serialization is deterministic. Duplicate keys in a source query collapse
//! to the first occurrence; an explicit insert is last-write and keeps the
//! key's original position.

use crate::error::{BestEffort, UrlError};
use crate::uri::{self, encode};

/// Insertion-ordered map of decoded parameter name to decoded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw (encoded) query string. First occurrence of a repeated
    /// key wins; entries that fail to decode are skipped silently.
    pub fn parse(raw_query: &str) -> Self {
        let mut params = Self::new();
        for part in raw_query.split('&') {
            if part.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = match part.split_once('=') {
                Some((k, v)) => (k, v),
                None => (part, ""),
            };
            let key = match encode::decode_component(raw_key) {
                Ok(k) => k,
                Err(_) => continue,
            };
            let value = match encode::decode_component(raw_value) {
                Ok(v) => v,
                Err(_) => continue,
            };
            if params.get(&key).is_none() {
                params.entries.push((key, value));
            }
        }
        params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Upsert: an existing key keeps its position and takes the new value;
    /// a new key appends at the end.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Removes a key; absent keys are a no-op. Returns whether a key was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != name);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes to an encoded query string in insertion order, or `None`
    /// when empty (an empty map produces a query-less URL).
    pub fn to_query_string(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    encode::encode_component(k),
                    encode::encode_component(v)
                )
            })
            .collect();
        Some(parts.join("&"))
    }
}

/// Parses a URL's query into an ordered map. Parse failures and missing
/// queries both yield an empty map.
pub fn get_query_params(url: &str) -> QueryParams {
    match uri::decompose(url) {
        Ok(c) => c.query.as_deref().map(QueryParams::parse).unwrap_or_default(),
        Err(_) => QueryParams::new(),
    }
}

/// First value of the named parameter, decoded. `None` when absent or the
/// URL does not parse.
pub fn get_query_param(url: &str, name: &str) -> Option<String> {
    get_query_params(url).get(name).map(str::to_string)
}

/// Adds or replaces one parameter and reassembles the URL. `None` value is
/// treated as empty string. Degrades to the original URL on any failure.
pub fn add_or_replace_query_param(
    url: &str,
    name: &str,
    value: Option<&str>,
) -> BestEffort<String> {
    if url.trim().is_empty() || name.trim().is_empty() {
        return BestEffort::Degraded(url.to_string());
    }
    match rewrite_query(url, |params| {
        params.insert(name, value.unwrap_or(""));
    }) {
        Ok(rewritten) => BestEffort::Applied(rewritten),
        Err(_) => BestEffort::Degraded(url.to_string()),
    }
}

/// Removes one parameter and reassembles the URL. Removing an absent key
/// produces an equivalent URL. Degrades to the original URL on any failure.
pub fn remove_query_param(url: &str, name: &str) -> BestEffort<String> {
    if url.trim().is_empty() || name.trim().is_empty() {
        return BestEffort::Degraded(url.to_string());
    }
    match rewrite_query(url, |params| {
        params.remove(name);
    }) {
        Ok(rewritten) => BestEffort::Applied(rewritten),
        Err(_) => BestEffort::Degraded(url.to_string()),
    }
}

/// Shared parse → mutate → reassemble path for the two rewrite operations.
/// Scheme, authority, path, and fragment pass through; only the query is
/// rebuilt.
fn rewrite_query(url: &str, mutate: impl FnOnce(&mut QueryParams)) -> Result<String, UrlError> {
    let c = uri::decompose(url)?;
    let mut params = c.query.as_deref().map(QueryParams::parse).unwrap_or_default();
    mutate(&mut params);
    let path = if c.path.is_empty() {
        String::new()
    } else {
        encode::encode_path(&c.path)
    };
    let query = params.to_query_string();
    Ok(uri::assemble(
        &c.scheme,
        c.authority.as_deref(),
        &path,
        query.as_deref(),
        c.fragment.as_deref(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_first_occurrence_wins() {
        let p = QueryParams::parse("a=1&b=2&a=3");
        assert_eq!(p.get("a"), Some("1"));
        assert_eq!(p.get("b"), Some("2"));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn parse_decodes_and_skips_malformed() {
        let p = QueryParams::parse("name=two%20words&bad=%FF%FE&flag");
        assert_eq!(p.get("name"), Some("two words"));
        assert_eq!(p.get("bad"), None);
        assert_eq!(p.get("flag"), Some(""));
    }

    #[test]
    fn parse_skips_empty_entries() {
        let p = QueryParams::parse("&a=1&&b=2&");
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn serialize_preserves_insertion_order() {
        let mut p = QueryParams::new();
        p.insert("z", "1");
        p.insert("a", "2");
        p.insert("m", "3");
        assert_eq!(p.to_query_string().as_deref(), Some("z=1&a=2&m=3"));
    }

    #[test]
    fn serialize_roundtrip_keeps_keys_and_values() {
        let mut p = QueryParams::new();
        p.insert("k y", "v 1");
        p.insert("plain", "x");
        let q = p.to_query_string().unwrap();
        let back = QueryParams::parse(&q);
        assert_eq!(back.get("k y"), Some("v 1"));
        assert_eq!(back.get("plain"), Some("x"));
        assert_eq!(back.len(), p.len());
    }

    #[test]
    fn upsert_keeps_position_append_at_end() {
        let mut p = QueryParams::parse("a=1&b=2&c=3");
        p.insert("b", "9");
        p.insert("d", "4");
        assert_eq!(p.to_query_string().as_deref(), Some("a=1&b=9&c=3&d=4"));
    }

    #[test]
    fn empty_map_serializes_to_none() {
        assert_eq!(QueryParams::new().to_query_string(), None);
    }

    #[test]
    fn url_level_get() {
        assert_eq!(
            get_query_param("http://a.com/p?x=1&y=two%20words", "y").as_deref(),
            Some("two words")
        );
        assert_eq!(get_query_param("http://a.com/p?x=1", "z"), None);
        assert_eq!(get_query_param("not a url", "x"), None);
        assert!(get_query_params("http://a.com/p").is_empty());
    }

    #[test]
    fn add_then_get_returns_set_value() {
        let url = add_or_replace_query_param("http://a.com/p?x=1", "y", Some("2")).into_inner();
        assert_eq!(get_query_param(&url, "y").as_deref(), Some("2"));
        assert_eq!(get_query_param(&url, "x").as_deref(), Some("1"));
    }

    #[test]
    fn add_replaces_in_place() {
        let url = add_or_replace_query_param("http://a.com/p?a=1&b=2", "a", Some("9"));
        assert_eq!(url, BestEffort::Applied("http://a.com/p?a=9&b=2".to_string()));
    }

    #[test]
    fn add_null_value_becomes_empty() {
        let url = add_or_replace_query_param("http://a.com/p", "flag", None).into_inner();
        assert_eq!(url, "http://a.com/p?flag=");
        assert_eq!(get_query_param(&url, "flag").as_deref(), Some(""));
    }

    #[test]
    fn add_preserves_other_components() {
        let url =
            add_or_replace_query_param("http://a.com:81/p/q?x=1#frag", "y", Some("2")).into_inner();
        assert_eq!(url, "http://a.com:81/p/q?x=1&y=2#frag");
    }

    #[test]
    fn remove_then_get_is_absent() {
        let url = remove_query_param("http://a.com/p?x=1&y=2", "x").into_inner();
        assert_eq!(url, "http://a.com/p?y=2");
        assert_eq!(get_query_param(&url, "x"), None);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let url = remove_query_param("http://a.com/p?x=1", "zzz");
        assert_eq!(url, BestEffort::Applied("http://a.com/p?x=1".to_string()));
    }

    #[test]
    fn remove_last_param_drops_question_mark() {
        let url = remove_query_param("http://a.com/p?x=1", "x").into_inner();
        assert_eq!(url, "http://a.com/p");
    }

    #[test]
    fn rewrite_degrades_on_unparseable_url() {
        let out = add_or_replace_query_param("not a url", "x", Some("1"));
        assert_eq!(out, BestEffort::Degraded("not a url".to_string()));
        let out = remove_query_param("::", "x");
        assert!(out.is_degraded());
    }

    #[test]
    fn rewrite_degrades_on_blank_name() {
        let out = add_or_replace_query_param("http://a.com/p", " ", Some("1"));
        assert_eq!(out, BestEffort::Degraded("http://a.com/p".to_string()));
    }
}
