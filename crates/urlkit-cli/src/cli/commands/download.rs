//! `urlkit download <url>` – GET a URL and write the body to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::{download_url, get_path};

pub fn run_download(cfg: &UrlkitConfig, url: &str, output: Option<&Path>) -> Result<()> {
    let body = download_url(url, cfg).with_context(|| format!("download of {url} failed"))?;

    let target: PathBuf = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(default_filename(url)),
    };
    fs::write(&target, &body)
        .with_context(|| format!("cannot write {}", target.display()))?;
    println!("{}  {} bytes", target.display(), body.len());
    Ok(())
}

/// Last path segment of the URL, or a generic fallback.
fn default_filename(url: &str) -> String {
    get_path(url)
        .as_deref()
        .and_then(|p| p.split('/').filter(|s| !s.is_empty()).last())
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .map_or_else(|| "download.bin".to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_from_last_segment() {
        assert_eq!(default_filename("https://a.com/x/archive.zip"), "archive.zip");
        assert_eq!(default_filename("https://a.com/file?x=1"), "file");
    }

    #[test]
    fn filename_fallback() {
        assert_eq!(default_filename("https://a.com/"), "download.bin");
        assert_eq!(default_filename("https://a.com"), "download.bin");
        assert_eq!(default_filename("https://a.com/.."), "download.bin");
    }
}
