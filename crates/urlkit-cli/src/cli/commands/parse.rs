//! `urlkit parse <url>` – decompose a URL and print its components.

use anyhow::{Context, Result};
use urlkit_core::{get_host, get_port, uri};

pub fn run_parse(url: &str) -> Result<()> {
    let c = uri::decompose(url).with_context(|| format!("cannot parse {url}"))?;

    println!("scheme:    {}", c.scheme);
    println!("authority: {}", c.authority.as_deref().unwrap_or("-"));
    if let Some(host) = get_host(url) {
        println!("host:      {host}");
    }
    if let Some(port) = get_port(url) {
        println!("port:      {port}");
    }
    let path = if c.path.is_empty() { "-" } else { c.path.as_str() };
    println!("path:      {path}");
    println!("query:     {}", c.query.as_deref().unwrap_or("-"));
    println!("fragment:  {}", c.fragment.as_deref().unwrap_or("-"));
    println!("encoded:   {}", c.to_encoded_string()?);
    Ok(())
}
