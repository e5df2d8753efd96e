//! `urlkit normalize <url>` – canonicalize a URL.

use anyhow::Result;
use urlkit_core::normalize_url;

pub fn run_normalize(url: &str) -> Result<()> {
    let out = normalize_url(url);
    if out.is_degraded() {
        tracing::warn!(url, "normalization degraded; printing input unchanged");
    }
    println!("{}", out.value());
    Ok(())
}
