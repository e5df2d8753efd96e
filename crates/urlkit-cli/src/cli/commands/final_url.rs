//! `urlkit final-url <url>` – follow redirects to the terminal URL.

use anyhow::{bail, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::get_final_url_with_details;

pub fn run_final_url(cfg: &UrlkitConfig, url: &str, details: bool) -> Result<()> {
    let result = get_final_url_with_details(url, cfg)?;

    let result = match result {
        Some(r) => r,
        // Hop-limit exhaustion is an absent result, not a transport error.
        None => bail!(
            "redirect chain did not terminate within {} hops",
            cfg.max_redirects
        ),
    };

    if details {
        for hop in &result.chain {
            println!("{} -> {} [{}]", hop.from, hop.to, hop.status);
        }
        println!("redirects: {}", result.redirect_count);
    }
    match result.final_url {
        Some(final_url) => println!("{final_url}"),
        None => println!("{}", result.original_url),
    }
    Ok(())
}
